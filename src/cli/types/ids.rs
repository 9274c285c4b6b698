//! ID types for player pools.

use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for salary-feed player IDs.
///
/// The optimizer treats the value as opaque: it is only compared, hashed
/// and printed. Multi-position players keep the same ID across every
/// position they are eligible for.
///
/// # Examples
///
/// ```rust
/// use dfs_lineup::PlayerId;
///
/// let id = PlayerId::new(28_466_134);
/// assert_eq!(id.as_u64(), 28_466_134);
/// assert_eq!(id.to_string(), "28466134");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_from_str() {
        assert_eq!(PlayerId::from_str("12345").unwrap(), PlayerId::new(12345));
        assert_eq!(PlayerId::from_str(" 77 ").unwrap(), PlayerId::new(77));
        assert!(PlayerId::from_str("-1").is_err());
        assert!(PlayerId::from_str("abc").is_err());
    }

    #[test]
    fn test_player_id_serde() {
        let id = PlayerId::new(123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "123");

        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }
}
