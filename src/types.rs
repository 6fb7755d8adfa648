//! 通用类型定义

use std::fmt;

/// 颜色序号（0 起），对外显示为字母
///
/// 编码方式与电子表格列名相同（双射 26 进制）：
/// 0 → A, 25 → Z, 26 → AA, 27 → AB, 701 → ZZ, 702 → AAA
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Colour(usize);

impl Colour {
    pub const FIRST: Colour = Colour(0);

    pub fn new(ordinal: usize) -> Self {
        Self(ordinal)
    }

    pub fn ordinal(&self) -> usize {
        self.0
    }

    /// 字母形式
    pub fn to_letters(&self) -> String {
        // u128 容纳 usize::MAX + 1
        let mut n = self.0 as u128 + 1;
        let mut letters = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        letters.reverse();
        // 只含 A..=Z
        letters.into_iter().map(char::from).collect()
    }

    /// 从字母形式解析，非法输入返回 None
    #[cfg(test)]
    fn from_letters(s: &str) -> Option<Self> {
        if s.is_empty() {
            return None;
        }
        let mut n: u128 = 0;
        for c in s.chars() {
            if !c.is_ascii_uppercase() {
                return None;
            }
            let digit = (c as u8 - b'A') as u128 + 1;
            n = n.checked_mul(26)?.checked_add(digit)?;
        }
        usize::try_from(n - 1).ok().map(Self)
    }
}

impl From<usize> for Colour {
    fn from(ordinal: usize) -> Self {
        Self(ordinal)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_letters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_letters() {
        assert_eq!(Colour::new(0).to_string(), "A");
        assert_eq!(Colour::new(1).to_string(), "B");
        assert_eq!(Colour::new(25).to_string(), "Z");
    }

    #[test]
    fn test_beyond_26_colours() {
        assert_eq!(Colour::new(26).to_string(), "AA");
        assert_eq!(Colour::new(27).to_string(), "AB");
        assert_eq!(Colour::new(51).to_string(), "AZ");
        assert_eq!(Colour::new(52).to_string(), "BA");
        assert_eq!(Colour::new(701).to_string(), "ZZ");
        assert_eq!(Colour::new(702).to_string(), "AAA");
    }

    #[test]
    fn test_parse_letters() {
        assert_eq!(Colour::from_letters("A"), Some(Colour::new(0)));
        assert_eq!(Colour::from_letters("AB"), Some(Colour::new(27)));
        assert_eq!(Colour::from_letters("AAA"), Some(Colour::new(702)));
        assert_eq!(Colour::from_letters(""), None);
        assert_eq!(Colour::from_letters("a"), None);
        assert_eq!(Colour::from_letters("A1"), None);
    }

    #[test]
    fn test_largest_ordinal_does_not_overflow() {
        let letters = Colour::new(usize::MAX).to_letters();
        assert!(letters.bytes().all(|b| b.is_ascii_uppercase()));
        assert_eq!(Colour::from_letters(&letters), Some(Colour::new(usize::MAX)));
    }

    #[test]
    fn test_letters_are_unique_and_ordered() {
        let letters: Vec<String> = (0..1000).map(|i| Colour::new(i).to_letters()).collect();
        for (i, s) in letters.iter().enumerate() {
            assert_eq!(Colour::from_letters(s), Some(Colour::new(i)));
        }
    }
}
