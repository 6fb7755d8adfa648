//! 干涉图
//!
//! 由边声明一次性构建，之后只读

use super::edge::EdgeDeclaration;
use super::index::NodeIndex;
use super::node::NodeId;
use crate::error::{Error, Result};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// 无向干涉图
///
/// 邻接关系对称且无自环：只要任一方向声明过边，两端都互为邻居。
#[derive(Debug, Clone, Default)]
pub struct InterferenceGraph {
    /// ID ↔ 下标
    index: NodeIndex,
    /// 下标 -> 邻居下标（升序）
    adjacency: Vec<Vec<usize>>,
    /// 按 ID 升序排列的下标
    by_id: Vec<usize>,
    /// 无向边数
    edge_count: usize,
}

impl InterferenceGraph {
    /// 从边声明构建图
    ///
    /// 同一节点声明两次返回 `DuplicateNode`，节点与自身相邻返回 `SelfLoop`。
    pub fn from_declarations<I>(declarations: I) -> Result<Self>
    where
        I: IntoIterator<Item = EdgeDeclaration>,
    {
        let mut index = NodeIndex::new();
        let mut sets: Vec<BTreeSet<usize>> = Vec::new();
        let mut declared: HashSet<NodeId> = HashSet::new();

        for decl in declarations {
            let node = decl.node();
            if !declared.insert(node) {
                return Err(Error::DuplicateNode {
                    line: decl.line(),
                    node,
                });
            }

            let a = Self::slot(&mut index, &mut sets, node);
            for &neighbour in decl.neighbours() {
                if neighbour == node {
                    return Err(Error::SelfLoop {
                        line: decl.line(),
                        node,
                    });
                }
                let b = Self::slot(&mut index, &mut sets, neighbour);
                // 双向插入保证对称
                sets[a].insert(b);
                sets[b].insert(a);
            }
        }

        let adjacency: Vec<Vec<usize>> = sets
            .into_iter()
            .map(|set| set.into_iter().collect())
            .collect();
        let edge_count = adjacency.iter().map(Vec::len).sum::<usize>() / 2;

        let mut by_id: Vec<usize> = (0..index.len()).collect();
        by_id.sort_by_key(|&i| index.id_at(i));

        debug!(
            nodes = index.len(),
            edges = edge_count,
            "interference graph built"
        );

        Ok(Self {
            index,
            adjacency,
            by_id,
            edge_count,
        })
    }

    fn slot(index: &mut NodeIndex, sets: &mut Vec<BTreeSet<usize>>, id: NodeId) -> usize {
        let i = index.insert(id);
        if i == sets.len() {
            sets.push(BTreeSet::new());
        }
        i
    }

    /// 节点数
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// 边数（无向）
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains(node)
    }

    /// 节点的度（不同邻居的个数），节点不存在时返回 None
    pub fn degree(&self, node: NodeId) -> Option<usize> {
        self.index.index_of(node).map(|i| self.adjacency[i].len())
    }

    /// 最大度
    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// 节点的邻居，按 ID 升序
    pub fn neighbours(&self, node: NodeId) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self
            .index
            .index_of(node)
            .map(|i| {
                self.adjacency[i]
                    .iter()
                    .filter_map(|&j| self.index.id_at(j))
                    .collect()
            })
            .unwrap_or_default();
        ids.sort();
        ids
    }

    /// 两节点是否相邻
    pub fn are_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        match (self.index.index_of(a), self.index.index_of(b)) {
            (Some(i), Some(j)) => self.adjacency[i].binary_search(&j).is_ok(),
            _ => false,
        }
    }

    /// 所有节点，按 ID 升序
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.by_id.iter().filter_map(move |&i| self.index.id_at(i))
    }

    /// 所有无向边 (u, v)，u < v，按 ID 升序
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for u in self.nodes() {
            for v in self.neighbours(u) {
                if u < v {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    pub(crate) fn node_index(&self) -> &NodeIndex {
        &self.index
    }

    /// 下标形式的邻接表
    pub(crate) fn adjacency_of(&self, index: usize) -> &[usize] {
        &self.adjacency[index]
    }
}
