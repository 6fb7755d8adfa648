//! 图算法模块
//!
//! 干涉图着色

mod greedy;

pub use greedy::{ColourAssignment, ColouringStats, GreedyColourer};
