//! GraphColor - 干涉图贪心着色
//!
//! 类似寄存器分配的简化图着色：
//! - 从逗号分隔的边列表构建对称的干涉图
//! - 按度降序（同度按 ID 升序）贪心分配最小可用颜色
//! - 颜色以字母输出（A, B, …, Z, AA, AB, …）

pub mod algorithm;
pub mod error;
pub mod export;
pub mod graph;
pub mod import;
pub mod pipeline;
pub mod types;

// 重导出常用类型
pub use algorithm::{ColourAssignment, ColouringStats, GreedyColourer};
pub use error::{Error, Result};
pub use graph::{EdgeDeclaration, InterferenceGraph, NodeId};
pub use import::{EdgeListImporter, ImportConfig};
pub use pipeline::colour_file;
pub use types::Colour;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
