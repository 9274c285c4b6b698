//! Eligibility expansion: one candidate per (player, eligible position).
//!
//! Salary feeds list a dual-eligible player once with a joined position
//! string (`"1B/3B"`), and sometimes list the same player on several rows.
//! [`canonicalize`] collapses those rows to one record per player ID and
//! [`expand`] turns each record into one [`Candidate`] per position. All
//! candidates of a player share one record handle, which is what the solver
//! keys its uniqueness constraint on.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{LineupError, Result};

use super::model::{Candidate, PlayerRecord};


/// Projections closer than this are treated as the same value.
const POINTS_TOLERANCE: f64 = 1e-9;

/// Largest accepted salary. Salaries stay exact as `f64` in the solver and
/// lineup totals cannot overflow `i64`.
pub const MAX_SALARY: i64 = 1 << 40;

/// Reject records the optimizer cannot reason about.
pub fn validate_record(record: &PlayerRecord) -> Result<()> {
    if record.positions.is_empty() {
        return Err(LineupError::EmptyPositions {
            player_id: record.id,
        });
    }
    if record.salary < 0 {
        return Err(LineupError::NegativeSalary {
            player_id: record.id,
            salary: record.salary,
        });
    }
    if record.salary > MAX_SALARY {
        return Err(LineupError::SalaryTooLarge {
            player_id: record.id,
            salary: record.salary,
            limit: MAX_SALARY,
        });
    }
    if !record.projected_points.is_finite() || record.projected_points < 0.0 {
        return Err(LineupError::InvalidProjection {
            player_id: record.id,
            points: record.projected_points,
        });
    }
    Ok(())
}

/// Collapse rows sharing a player ID into one canonical record.
///
/// The first row wins for display fields. Eligible positions are merged in
/// first-seen order. Rows that disagree on salary or projection are an
/// error, as are rows forcing the same player both in and out.
pub fn canonicalize(players: &[PlayerRecord]) -> Result<Vec<PlayerRecord>> {
    let mut canonical: Vec<PlayerRecord> = Vec::with_capacity(players.len());
    let mut index_by_id: HashMap<_, usize> = HashMap::with_capacity(players.len());

    for record in players {
        validate_record(record)?;

        let Some(&idx) = index_by_id.get(&record.id) else {
            let mut first = record.clone();
            first.positions.clear();
            for position in &record.positions {
                if !first.positions.contains(position) {
                    first.positions.push(position.clone());
                }
            }
            index_by_id.insert(record.id, canonical.len());
            canonical.push(first);
            continue;
        };

        let existing = &mut canonical[idx];
        if existing.salary != record.salary {
            return Err(LineupError::ConflictingDuplicate {
                player_id: record.id,
                field: "salary",
            });
        }
        if (existing.projected_points - record.projected_points).abs() > POINTS_TOLERANCE {
            return Err(LineupError::ConflictingDuplicate {
                player_id: record.id,
                field: "projected points",
            });
        }
        existing.directive = existing.directive.merge(record.directive).ok_or(
            LineupError::ContradictoryDirective {
                player_id: record.id,
            },
        )?;
        for position in &record.positions {
            if !existing.positions.contains(position) {
                existing.positions.push(position.clone());
            }
        }
        debug!(player_id = %record.id, "collapsed duplicate player row");
    }

    Ok(canonical)
}

/// Expand a player pool into solver candidates.
///
/// Output order is deterministic: canonical player order, then each
/// player's eligibility order.
///
/// # Errors
///
/// Any validation error from [`validate_record`] or [`canonicalize`].
pub fn expand(players: &[PlayerRecord]) -> Result<Vec<Candidate>> {
    let canonical = canonicalize(players)?;

    let mut candidates = Vec::with_capacity(canonical.iter().map(|p| p.positions.len()).sum());
    for record in canonical {
        let shared = Arc::new(record);
        for position in &shared.positions {
            candidates.push(Candidate::new(Arc::clone(&shared), position.clone()));
        }
    }

    debug!(
        players = players.len(),
        candidates = candidates.len(),
        "expanded player pool"
    );
    Ok(candidates)
}
