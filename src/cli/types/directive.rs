//! User overrides for individual players.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the caller wants a player forced into or out of the lineup.
///
/// Replaces interactive "lock this player?" prompting with a value the
/// caller decides up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum InclusionDirective {
    /// The player must be in the lineup
    #[serde(alias = "lock")]
    Include,
    /// The player must not be in the lineup
    #[serde(alias = "fade")]
    Exclude,
    /// The optimizer decides
    #[default]
    NoPreference,
}

impl InclusionDirective {
    pub fn is_forced(&self) -> bool {
        !matches!(self, InclusionDirective::NoPreference)
    }

    /// Combine two directives for the same player.
    ///
    /// Returns `None` when one forces the player in and the other forces
    /// them out.
    pub fn merge(self, other: InclusionDirective) -> Option<InclusionDirective> {
        match (self, other) {
            (InclusionDirective::NoPreference, d) | (d, InclusionDirective::NoPreference) => Some(d),
            (a, b) if a == b => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for InclusionDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InclusionDirective::Include => "include",
            InclusionDirective::Exclude => "exclude",
            InclusionDirective::NoPreference => "no-preference",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge() {
        use InclusionDirective::*;

        assert_eq!(NoPreference.merge(NoPreference), Some(NoPreference));
        assert_eq!(NoPreference.merge(Include), Some(Include));
        assert_eq!(Exclude.merge(NoPreference), Some(Exclude));
        assert_eq!(Include.merge(Include), Some(Include));
        assert_eq!(Include.merge(Exclude), None);
        assert_eq!(Exclude.merge(Include), None);
    }

    #[test]
    fn test_directive_serde() {
        let directive: InclusionDirective = serde_json::from_str("\"include\"").unwrap();
        assert_eq!(directive, InclusionDirective::Include);

        let directive: InclusionDirective = serde_json::from_str("\"fade\"").unwrap();
        assert_eq!(directive, InclusionDirective::Exclude);

        let json = serde_json::to_string(&InclusionDirective::NoPreference).unwrap();
        assert_eq!(json, "\"no-preference\"");
        assert_eq!(InclusionDirective::default(), InclusionDirective::NoPreference);
    }

    #[test]
    fn test_display() {
        assert_eq!(InclusionDirective::Include.to_string(), "include");
        assert!(InclusionDirective::Exclude.is_forced());
        assert!(!InclusionDirective::NoPreference.is_forced());
    }
}
