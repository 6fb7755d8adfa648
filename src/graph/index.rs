//! 节点索引
//!
//! 任意正整数 ID 与内部稠密下标之间的双向映射

use super::node::NodeId;
use indexmap::IndexSet;

/// 节点索引（arena + 下标）
///
/// 下标按首次出现的顺序分配，与 ID 大小和连续性无关。
#[derive(Debug, Clone, Default)]
pub struct NodeIndex {
    ids: IndexSet<NodeId>,
}

impl NodeIndex {
    /// 创建空索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入节点，返回其下标（已存在则返回原下标）
    pub fn insert(&mut self, id: NodeId) -> usize {
        self.ids.insert_full(id).0
    }

    /// 查找节点下标
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.ids.get_index_of(&id)
    }

    /// 下标对应的节点 ID
    pub fn id_at(&self, index: usize) -> Option<NodeId> {
        self.ids.get_index(index).copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// 按下标顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }
}
