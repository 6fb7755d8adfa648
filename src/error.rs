//! 错误类型定义

use crate::graph::NodeId;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("第 {line} 行格式错误: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("第 {line} 行重复定义节点 {node}")]
    DuplicateNode { line: usize, node: NodeId },

    #[error("第 {line} 行节点 {node} 不能与自身相邻")]
    SelfLoop { line: usize, node: NodeId },

    #[error("第 {line} 行节点 {node} 超出范围, 允许 1 到 {max}")]
    NodeOutOfRange { line: usize, node: NodeId, max: u64 },

    #[error("输入为空: 没有任何节点定义")]
    EmptyInput,

    #[error("无法访问 {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    /// 出错的输入行号（1 起）
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::MalformedInput { line, .. }
            | Error::DuplicateNode { line, .. }
            | Error::SelfLoop { line, .. }
            | Error::NodeOutOfRange { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub(crate) fn io_at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
