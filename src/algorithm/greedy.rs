//! 贪心着色算法
//!
//! 按度降序（同度按 ID 升序）依次处理节点，
//! 每个节点取邻居尚未使用的最小颜色。

use crate::graph::{InterferenceGraph, NodeId};
use crate::types::Colour;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{debug, info};

/// 着色结果（节点 -> 颜色）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColourAssignment {
    colours: BTreeMap<NodeId, Colour>,
}

impl ColourAssignment {
    /// 节点的颜色
    pub fn get(&self, node: NodeId) -> Option<Colour> {
        self.colours.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// 使用的不同颜色数
    pub fn colour_count(&self) -> usize {
        self.colours
            .values()
            .map(|c| c.ordinal() + 1)
            .max()
            .unwrap_or(0)
    }

    /// 按节点 ID 升序遍历
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Colour)> + '_ {
        self.colours.iter().map(|(&n, &c)| (n, c))
    }

    /// 检查是否为合法着色：覆盖图中每个节点，且相邻节点颜色不同
    pub fn is_proper(&self, graph: &InterferenceGraph) -> bool {
        if self.colours.len() != graph.node_count() {
            return false;
        }
        graph.edges().into_iter().all(|(u, v)| match (self.get(u), self.get(v)) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        })
    }
}

/// 着色统计
#[derive(Debug, Default, Clone)]
pub struct ColouringStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub max_degree: usize,
    pub colour_count: usize,
    /// 处理顺序
    pub order: Vec<NodeId>,
    pub duration_us: u64,
}

/// 度优先贪心着色器
pub struct GreedyColourer<'g> {
    graph: &'g InterferenceGraph,
}

impl<'g> GreedyColourer<'g> {
    /// 创建着色器
    pub fn new(graph: &'g InterferenceGraph) -> Self {
        Self { graph }
    }

    /// 处理顺序（下标形式）
    fn ranked_indices(&self) -> Vec<usize> {
        let index = self.graph.node_index();
        let mut order: Vec<usize> = (0..index.len()).collect();
        // 显式以 ID 作为第二关键字，结果与排序算法是否稳定无关
        order.sort_by_key(|&i| (Reverse(self.graph.adjacency_of(i).len()), index.id_at(i)));
        order
    }

    /// 节点处理顺序：度降序，同度按 ID 升序
    pub fn ordering(&self) -> Vec<NodeId> {
        let index = self.graph.node_index();
        self.ranked_indices()
            .into_iter()
            .filter_map(|i| index.id_at(i))
            .collect()
    }

    /// 执行着色
    pub fn colour(&self) -> ColourAssignment {
        self.colour_with_stats().0
    }

    /// 执行着色并返回统计
    pub fn colour_with_stats(&self) -> (ColourAssignment, ColouringStats) {
        let start = Instant::now();
        let index = self.graph.node_index();
        let order = self.ranked_indices();

        let mut assigned: Vec<Option<usize>> = vec![None; index.len()];
        // taken[c]: 当前节点的某个已着色邻居使用了颜色 c
        let mut taken = vec![false; self.graph.max_degree() + 1];

        for &node in &order {
            let neighbours = self.graph.adjacency_of(node);

            // 颜色序号超过度数的邻居不影响结果
            for &n in neighbours {
                if let Some(c) = assigned[n] {
                    if c <= neighbours.len() {
                        taken[c] = true;
                    }
                }
            }

            let colour = taken
                .iter()
                .take(neighbours.len() + 1)
                .position(|&t| !t)
                .unwrap_or(neighbours.len());
            assigned[node] = Some(colour);

            for &n in neighbours {
                if let Some(c) = assigned[n] {
                    if c <= neighbours.len() {
                        taken[c] = false;
                    }
                }
            }

            debug!(
                node = ?index.id_at(node),
                degree = neighbours.len(),
                colour = colour,
                "node coloured"
            );
        }

        let colours: BTreeMap<NodeId, Colour> = assigned
            .iter()
            .enumerate()
            .filter_map(|(i, c)| Some((index.id_at(i)?, Colour::new((*c)?))))
            .collect();
        let assignment = ColourAssignment { colours };

        let stats = ColouringStats {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
            max_degree: self.graph.max_degree(),
            colour_count: assignment.colour_count(),
            order: order.into_iter().filter_map(|i| index.id_at(i)).collect(),
            duration_us: start.elapsed().as_micros() as u64,
        };

        info!(
            nodes = stats.node_count,
            edges = stats.edge_count,
            colours = stats.colour_count,
            "greedy colouring finished"
        );

        (assignment, stats)
    }
}
