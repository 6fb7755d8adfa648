//! 图核心模块
//!
//! 定义节点、边声明和干涉图

mod edge;
mod graph;
mod index;
mod node;

pub use edge::EdgeDeclaration;
pub use graph::InterferenceGraph;
pub use index::NodeIndex;
pub use node::{NodeId, ParseNodeIdError};
