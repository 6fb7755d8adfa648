//! 边声明
//!
//! 输入中的一行：一个节点及其相邻节点列表

use super::node::NodeId;

/// 边声明（节点 + 有序邻居列表）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDeclaration {
    /// 声明的节点
    node: NodeId,
    /// 邻居（保持输入顺序，可含重复）
    neighbours: Vec<NodeId>,
    /// 来源行号（1 起），手工构造时为 0
    line: usize,
}

impl EdgeDeclaration {
    pub fn new(node: NodeId, neighbours: Vec<NodeId>) -> Self {
        Self {
            node,
            neighbours,
            line: 0,
        }
    }

    /// 附带来源行号
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn neighbours(&self) -> &[NodeId] {
        &self.neighbours
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// 由原始整数构造，测试和示例使用；含 0 时返回 None
    pub fn from_raw(node: u64, neighbours: &[u64]) -> Option<Self> {
        let node = NodeId::new(node)?;
        let neighbours = neighbours
            .iter()
            .map(|&n| NodeId::new(n))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(node, neighbours))
    }
}
