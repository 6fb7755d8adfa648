//! 节点定义

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// 节点 ID（正整数）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(NonZeroU64);

impl NodeId {
    /// 创建节点 ID，0 不是合法 ID
    pub fn new(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    pub fn as_u64(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 节点 ID 解析失败的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNodeIdError {
    /// 空字段
    Empty,
    /// 不是整数
    NotAnInteger(String),
    /// 0 或负数
    NotPositive(String),
}

impl fmt::Display for ParseNodeIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseNodeIdError::Empty => write!(f, "节点 ID 为空"),
            ParseNodeIdError::NotAnInteger(s) => write!(f, "'{}' 不是整数", s),
            ParseNodeIdError::NotPositive(s) => write!(f, "'{}' 不是正整数", s),
        }
    }
}

impl std::error::Error for ParseNodeIdError {}

impl FromStr for NodeId {
    type Err = ParseNodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseNodeIdError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            // "-3" 是整数但不是正数
            let negative = s
                .strip_prefix('-')
                .map(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
                .unwrap_or(false);
            return Err(if negative {
                ParseNodeIdError::NotPositive(s.to_string())
            } else {
                ParseNodeIdError::NotAnInteger(s.to_string())
            });
        }
        let value: u64 = s
            .parse()
            .map_err(|_| ParseNodeIdError::NotAnInteger(s.to_string()))?;
        NodeId::new(value).ok_or_else(|| ParseNodeIdError::NotPositive(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_id() {
        assert_eq!("7".parse::<NodeId>().unwrap().as_u64(), 7);
        assert_eq!(" 42 ".parse::<NodeId>().unwrap().as_u64(), 42);
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        assert_eq!("".parse::<NodeId>(), Err(ParseNodeIdError::Empty));
        assert_eq!(
            "x".parse::<NodeId>(),
            Err(ParseNodeIdError::NotAnInteger("x".to_string()))
        );
        assert_eq!(
            "1.5".parse::<NodeId>(),
            Err(ParseNodeIdError::NotAnInteger("1.5".to_string()))
        );
        assert_eq!(
            "0".parse::<NodeId>(),
            Err(ParseNodeIdError::NotPositive("0".to_string()))
        );
        assert_eq!(
            "-3".parse::<NodeId>(),
            Err(ParseNodeIdError::NotPositive("-3".to_string()))
        );
        assert!(matches!(
            "99999999999999999999999".parse::<NodeId>(),
            Err(ParseNodeIdError::NotAnInteger(_))
        ));
    }

    #[test]
    fn test_zero_is_not_a_node() {
        assert!(NodeId::new(0).is_none());
        assert!(NodeId::new(1).is_some());
    }
}
