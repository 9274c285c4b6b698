//! Names of the built-in sport profiles.

use crate::error::{LineupError, Result};
use std::fmt;
use std::str::FromStr;

/// Built-in contest profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ProfileName {
    /// DraftKings NFL classic: QB, 2 RB, 3 WR, TE, DST and one RB/WR/TE flex
    DkNfl,
    /// DraftKings MLB classic: 2 P, C, 1B, 2B, 3B, SS and 3 OF
    DkMlb,
}

impl ProfileName {
    pub const ALL: [ProfileName; 2] = [ProfileName::DkNfl, ProfileName::DkMlb];
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProfileName::DkNfl => "dk-nfl",
            ProfileName::DkMlb => "dk-mlb",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for ProfileName {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dk-nfl" | "nfl" | "football" => Ok(ProfileName::DkNfl),
            "dk-mlb" | "mlb" | "baseball" => Ok(ProfileName::DkMlb),
            _ => Err(LineupError::UnknownProfile {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_name_round_trip() {
        for name in ProfileName::ALL {
            assert_eq!(ProfileName::from_str(&name.to_string()).unwrap(), name);
        }
    }

    #[test]
    fn test_profile_name_aliases() {
        assert_eq!(ProfileName::from_str("NFL").unwrap(), ProfileName::DkNfl);
        assert_eq!(ProfileName::from_str("baseball").unwrap(), ProfileName::DkMlb);
        assert!(ProfileName::from_str("nba").is_err());
    }
}
