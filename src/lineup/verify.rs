//! Independent re-check of a decoded lineup against its profile.

use std::collections::HashSet;
use std::fmt;

use crate::cli::types::{InclusionDirective, PlayerId, Position};

use super::{
    model::{LineupResult, LineupStatus, SportProfile},
    solver::Directives,
};

/// A rule an optimal lineup broke.
#[derive(Debug, Clone, PartialEq)]
pub enum LineupViolation {
    NotOptimal(LineupStatus),
    DuplicatePlayer(PlayerId),
    SalaryCap { used: i64, cap: i64 },
    RosterSize { expected: u32, actual: usize },
    UnknownPosition(Position),
    IneligiblePosition { player_id: PlayerId, position: Position },
    PositionCount { position: Position, expected: u32, actual: usize },
    FlexSlots { expected: u32, actual: usize },
    ForcedInMissing(PlayerId),
    ForcedOutPresent(PlayerId),
}

impl fmt::Display for LineupViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineupViolation::NotOptimal(status) => write!(f, "lineup status is {}", status),
            LineupViolation::DuplicatePlayer(id) => write!(f, "player {} selected twice", id),
            LineupViolation::SalaryCap { used, cap } => {
                write!(f, "salary {} exceeds cap {}", used, cap)
            }
            LineupViolation::RosterSize { expected, actual } => {
                write!(f, "{} players selected, {} required", actual, expected)
            }
            LineupViolation::UnknownPosition(position) => {
                write!(f, "position {} is not part of the profile", position)
            }
            LineupViolation::IneligiblePosition {
                player_id,
                position,
            } => write!(f, "player {} is not eligible at {}", player_id, position),
            LineupViolation::PositionCount {
                position,
                expected,
                actual,
            } => write!(f, "{} {} selected, {} required", actual, position, expected),
            LineupViolation::FlexSlots { expected, actual } => {
                write!(f, "{} flex selections, {} slots", actual, expected)
            }
            LineupViolation::ForcedInMissing(id) => {
                write!(f, "forced-in player {} is missing", id)
            }
            LineupViolation::ForcedOutPresent(id) => {
                write!(f, "forced-out player {} was selected", id)
            }
        }
    }
}

/// Check every lineup rule: salary, quotas, flex slots, roster size,
/// uniqueness, eligibility and directives.
///
/// `directives` should be the merged map from
/// [`merge_directives`](super::solver::merge_directives) so forced-in players
/// that were left out can be reported. Returns an empty vector for a valid
/// lineup.
pub fn verify_lineup(
    result: &LineupResult,
    profile: &SportProfile,
    directives: &Directives,
) -> Vec<LineupViolation> {
    let mut violations = Vec::new();

    if result.status != LineupStatus::Optimal {
        violations.push(LineupViolation::NotOptimal(result.status));
        return violations;
    }

    let mut seen = HashSet::new();
    for pick in &result.players {
        if !seen.insert(pick.player.id) {
            violations.push(LineupViolation::DuplicatePlayer(pick.player.id));
        }
        if !pick.player.positions.contains(&pick.position) {
            violations.push(LineupViolation::IneligiblePosition {
                player_id: pick.player.id,
                position: pick.position.clone(),
            });
        }
        if profile.quota_for(&pick.position).is_none() {
            violations.push(LineupViolation::UnknownPosition(pick.position.clone()));
        }
    }

    let used = result
        .players
        .iter()
        .fold(0i64, |total, p| total.saturating_add(p.player.salary));
    if used > profile.salary_cap {
        violations.push(LineupViolation::SalaryCap {
            used,
            cap: profile.salary_cap,
        });
    }

    if result.players.len() != profile.roster_size as usize {
        violations.push(LineupViolation::RosterSize {
            expected: profile.roster_size,
            actual: result.players.len(),
        });
    }

    let mut extra_total = 0;
    for quota in &profile.quotas {
        let actual = result.count_at(&quota.position);
        let base = quota.count as usize;
        if profile.is_flex_position(&quota.position) {
            if actual < base {
                violations.push(LineupViolation::PositionCount {
                    position: quota.position.clone(),
                    expected: quota.count,
                    actual,
                });
            } else {
                extra_total += actual - base;
            }
        } else if actual != base {
            violations.push(LineupViolation::PositionCount {
                position: quota.position.clone(),
                expected: quota.count,
                actual,
            });
        }
    }

    let flagged = result.players.iter().filter(|p| p.flex).count();
    let slots = profile.flex_slots();
    if extra_total != slots as usize || flagged != slots as usize {
        violations.push(LineupViolation::FlexSlots {
            expected: slots,
            actual: extra_total.max(flagged),
        });
    }

    for (&player_id, directive) in directives {
        match directive {
            InclusionDirective::Include if !result.contains(player_id) => {
                violations.push(LineupViolation::ForcedInMissing(player_id))
            }
            InclusionDirective::Exclude if result.contains(player_id) => {
                violations.push(LineupViolation::ForcedOutPresent(player_id))
            }
            _ => {}
        }
    }

    violations
}
