use crate::error::{Result, TileError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Address of a tile in the quad-tree pyramid.
///
/// Each digit picks one of the four children of the previous tile:
/// `0` north-west, `1` north-east, `2` south-west, `3` south-east. The key's
/// length is its zoom level, so a valid key is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QuadKey(String);

impl QuadKey {
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(TileError::invalid_key(key, "key is empty"));
        }
        if let Some((pos, c)) = key
            .chars()
            .enumerate()
            .find(|(_, c)| !matches!(c, '0'..='3'))
        {
            return Err(TileError::invalid_key(
                key,
                format!("digit {:?} at position {} is not one of 0-3", c, pos),
            ));
        }
        Ok(QuadKey(key.to_string()))
    }

    pub fn zoom(&self) -> u8 {
        self.0.len().min(u8::MAX as usize) as u8
    }

    /// Quadrant digits, most significant (level 1) first.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The enclosing tile one level up, or `None` for a level-1 key.
    pub fn parent(&self) -> Option<QuadKey> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(QuadKey(self.0[..self.0.len() - 1].to_string()))
    }

    /// The four tiles one level down, in digit order 0..=3.
    pub fn children(&self) -> [QuadKey; 4] {
        ['0', '1', '2', '3'].map(|d| {
            let mut key = self.0.clone();
            key.push(d);
            QuadKey(key)
        })
    }
}

impl FromStr for QuadKey {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self> {
        QuadKey::new(s)
    }
}

impl AsRef<str> for QuadKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_key() {
        let key: QuadKey = "0123".parse().unwrap();
        assert_eq!(key.zoom(), 4);
        assert_eq!(key.digits().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(key.to_string(), "0123");
    }

    #[test]
    fn test_invalid_digit_is_rejected() {
        let err = QuadKey::new("0129").unwrap_err();
        match err {
            TileError::InvalidQuadKey { key, reason } => {
                assert_eq!(key, "0129");
                assert!(reason.contains("'9'"));
                assert!(reason.contains("position 3"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(matches!(
            QuadKey::new(""),
            Err(TileError::InvalidQuadKey { .. })
        ));
    }

    #[test]
    fn test_surrounding_garbage_is_rejected() {
        for key in [" 012", "012 ", "a012", "012.png", "-1", "٣"] {
            assert!(QuadKey::new(key).is_err(), "{:?} should be invalid", key);
        }
    }

    #[test]
    fn test_parent_and_children() {
        let key = QuadKey::new("21").unwrap();
        assert_eq!(key.parent(), Some(QuadKey::new("2").unwrap()));
        assert_eq!(QuadKey::new("2").unwrap().parent(), None);

        let children = key.children();
        let names: Vec<&str> = children.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, vec!["210", "211", "212", "213"]);
        for child in &children {
            assert_eq!(child.zoom(), 3);
            assert_eq!(child.parent().as_ref(), Some(&key));
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let key = QuadKey::new("031").unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"031\"");
    }
}
