//! Roster position codes and eligibility parsing.

use crate::error::{LineupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A roster position code such as `QB`, `OF` or `1B`.
///
/// Codes are free-form so one type serves every sport profile, but they are
/// normalized on construction: trimmed, upper-cased, and with defense
/// aliases (`D/ST`, `DEF`) folded into `DST`. Only ASCII letters and digits
/// survive normalization.
///
/// # Examples
///
/// ```rust
/// use dfs_lineup::Position;
///
/// let dst: Position = "D/ST".parse().unwrap();
/// assert_eq!(dst.as_str(), "DST");
///
/// let eligible = Position::parse_eligibility("2B/SS").unwrap();
/// assert_eq!(eligible.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position(pub(crate) String);

impl Position {
    /// Parse and normalize a single position code.
    pub fn new(code: &str) -> Result<Self> {
        let upper = code.trim().to_uppercase();
        let normalized = match upper.as_str() {
            "D/ST" | "DEF" | "D" => "DST".to_string(),
            _ => upper,
        };

        if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(LineupError::InvalidPosition {
                position: code.to_string(),
            });
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split a slash-separated eligibility string (`"1B/3B"`) into positions.
    ///
    /// Repeated codes are collapsed; first-seen order is kept.
    pub fn parse_eligibility(joined: &str) -> Result<Vec<Position>> {
        let folded = joined.to_uppercase().replace("D/ST", "DST");
        let mut positions: Vec<Position> = Vec::new();
        for code in folded.split('/') {
            let position = Position::new(code)?;
            if !positions.contains(&position) {
                positions.push(position);
            }
        }
        Ok(positions)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        Position::new(s)
    }
}

impl TryFrom<String> for Position {
    type Error = LineupError;

    fn try_from(value: String) -> Result<Self> {
        Position::new(&value)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.0
    }
}
