//! Lineup program construction, solving and decoding.
//!
//! Each [`optimize`] call is an independent build → solve → decode cycle:
//!
//! 1. **Build**: validate the candidates, merge directives, and lay out one
//!    binary column per (player, position) candidate the profile can use.
//! 2. **Solve**: hand the binary program to `good_lp`'s `microlp` backend,
//!    bounded by [`SolverSettings::time_limit`].
//! 3. **Decode**: read the selected columns back into a [`LineupResult`].
//!
//! The program maximizes total projected points subject to:
//!
//! - total salary ≤ salary cap
//! - selected columns == roster size
//! - per position: selections == base quota, plus one auxiliary binary per
//!   flex slot for positions in the flex group
//! - per flex slot: exactly one auxiliary binary set
//! - per player: at most one column (exactly one if forced in, none if
//!   forced out)
//!
//! Infeasibility and solver failure are statuses on the result, not errors.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use good_lp::{
    constraint, microlp, variable, Expression, ProblemVariables, ResolutionError, Solution,
    SolutionStatus, SolverModel, Variable, WithTimeLimit,
};
use tracing::{debug, info, warn};

use crate::{
    cli::types::{InclusionDirective, PlayerId, Position},
    error::{LineupError, Result},
};

use super::{
    expand::{expand, validate_record},
    model::{Candidate, LineupResult, LineupStatus, PlayerRecord, SelectedPlayer, SportProfile},
};


/// Caller overrides keyed by player.
pub type Directives = BTreeMap<PlayerId, InclusionDirective>;

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Projections closer than this are treated as the same value.
const POINTS_TOLERANCE: f64 = 1e-9;

/// Solver configuration shared by every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverSettings {
    /// Wall-clock bound passed to the solver; `None` lets it run to completion.
    pub time_limit: Option<Duration>,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            time_limit: Some(DEFAULT_TIME_LIMIT),
        }
    }
}

impl SolverSettings {
    pub fn with_time_limit(limit: Duration) -> Self {
        Self {
            time_limit: Some(limit),
        }
    }

    pub fn unlimited() -> Self {
        Self { time_limit: None }
    }
}

/// Merge each record's own directive with caller-supplied overrides.
///
/// Only forcing directives are kept in the returned map.
///
/// # Errors
///
/// - [`LineupError::ContradictoryDirective`] when a player ends up forced
///   both in and out
/// - [`LineupError::UnknownPlayer`] when an override names a player that is
///   not in `players`
pub fn merge_directives<'a>(
    players: impl IntoIterator<Item = &'a PlayerRecord>,
    overrides: &Directives,
) -> Result<Directives> {
    let mut merged = Directives::new();
    for record in players {
        let entry = merged.entry(record.id).or_default();
        *entry = entry
            .merge(record.directive)
            .ok_or(LineupError::ContradictoryDirective {
                player_id: record.id,
            })?;
    }

    for (&player_id, &directive) in overrides {
        let entry = merged
            .get_mut(&player_id)
            .ok_or(LineupError::UnknownPlayer { player_id })?;
        *entry = entry
            .merge(directive)
            .ok_or(LineupError::ContradictoryDirective { player_id })?;
    }

    merged.retain(|_, directive| directive.is_forced());
    Ok(merged)
}

/// One binary decision column.
#[derive(Debug, Clone)]
struct Column {
    player: usize,
    row: usize,
    salary: f64,
    points: f64,
}

/// One position quota of the profile.
#[derive(Debug, Clone)]
struct Row {
    position: Position,
    base: u32,
}

/// Solver-independent layout of one lineup program.
#[derive(Debug, Clone)]
pub(crate) struct LineupModel {
    players: Vec<Arc<PlayerRecord>>,
    directives: Vec<InclusionDirective>,
    columns: Vec<Column>,
    player_columns: Vec<Vec<usize>>,
    rows: Vec<Row>,
    row_columns: Vec<Vec<usize>>,
    /// Rows sharing the flex slots, in flex-group order.
    flex_rows: Vec<usize>,
    flex_slots: usize,
    salary_cap: f64,
    roster_size: usize,
    /// Candidates at positions the profile never starts.
    dropped: usize,
}

impl LineupModel {
    pub(crate) fn build(
        candidates: &[Candidate],
        profile: &SportProfile,
        directives: &Directives,
    ) -> Result<Self> {
        let mut players: Vec<Arc<PlayerRecord>> = Vec::new();
        // Separate handles for an already-seen id; only their directives matter.
        let mut aliases: Vec<Arc<PlayerRecord>> = Vec::new();
        let mut player_index: HashMap<PlayerId, usize> = HashMap::new();
        for candidate in candidates {
            match player_index.get(&candidate.player_id()) {
                Some(&idx) => {
                    let known = &players[idx];
                    if Arc::ptr_eq(known, &candidate.player) {
                        continue;
                    }
                    if known.salary != candidate.salary() {
                        return Err(LineupError::ConflictingDuplicate {
                            player_id: known.id,
                            field: "salary",
                        });
                    }
                    if (known.projected_points - candidate.projected_points()).abs()
                        > POINTS_TOLERANCE
                    {
                        return Err(LineupError::ConflictingDuplicate {
                            player_id: known.id,
                            field: "projected points",
                        });
                    }
                    if !aliases.iter().any(|a| Arc::ptr_eq(a, &candidate.player)) {
                        aliases.push(Arc::clone(&candidate.player));
                    }
                }
                None => {
                    validate_record(&candidate.player)?;
                    player_index.insert(candidate.player_id(), players.len());
                    players.push(Arc::clone(&candidate.player));
                }
            }
        }

        let merged = merge_directives(
            players.iter().chain(&aliases).map(|p| &**p),
            directives,
        )?;
        let player_directives = players
            .iter()
            .map(|p| merged.get(&p.id).copied().unwrap_or_default())
            .collect();

        let rows: Vec<Row> = profile
            .quotas
            .iter()
            .map(|q| Row {
                position: q.position.clone(),
                base: q.count,
            })
            .collect();
        let flex_rows: Vec<usize> = profile
            .flex
            .as_ref()
            .map(|group| {
                group
                    .positions
                    .iter()
                    .filter_map(|p| rows.iter().position(|r| &r.position == p))
                    .collect()
            })
            .unwrap_or_default();

        let row_index: HashMap<&Position, usize> = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| (&row.position, idx))
            .collect();

        let mut columns = Vec::with_capacity(candidates.len());
        let mut player_columns = vec![Vec::new(); players.len()];
        let mut row_columns = vec![Vec::new(); rows.len()];
        let mut seen = HashSet::new();
        let mut dropped = 0;
        for candidate in candidates {
            let Some(&row) = row_index.get(&candidate.position) else {
                dropped += 1;
                continue;
            };
            let player = player_index[&candidate.player_id()];
            if !seen.insert((player, row)) {
                continue;
            }

            let column = columns.len();
            columns.push(Column {
                player,
                row,
                salary: candidate.salary() as f64,
                points: candidate.projected_points(),
            });
            player_columns[player].push(column);
            row_columns[row].push(column);
        }
        drop(row_index);

        Ok(Self {
            players,
            directives: player_directives,
            columns,
            player_columns,
            rows,
            row_columns,
            flex_rows,
            flex_slots: profile.flex_slots() as usize,
            salary_cap: profile.salary_cap as f64,
            roster_size: profile.roster_size as usize,
            dropped,
        })
    }

    /// Reason the program cannot have a solution, when that is evident
    /// without solving it.
    pub(crate) fn infeasibility(&self) -> Option<String> {
        for (player, directive) in self.directives.iter().enumerate() {
            if *directive == InclusionDirective::Include && self.player_columns[player].is_empty()
            {
                return Some(format!(
                    "player {} is forced in but has no position in this profile",
                    self.players[player].id
                ));
            }
        }

        for (idx, row) in self.rows.iter().enumerate() {
            let available = self.row_columns[idx].len();
            if available < row.base as usize {
                return Some(format!(
                    "{} {} required but only {} eligible",
                    row.base, row.position, available
                ));
            }
        }

        let usable = self
            .player_columns
            .iter()
            .filter(|cols| !cols.is_empty())
            .count();
        if usable < self.roster_size {
            return Some(format!(
                "roster needs {} players but only {} are eligible",
                self.roster_size, usable
            ));
        }

        None
    }
}

/// Values read back from a solved program.
#[derive(Debug, Clone)]
struct Assignment {
    picks: Vec<bool>,
    /// Row receiving each flex slot.
    flex_rows: Vec<usize>,
}

enum SolveOutcome {
    Solved(Assignment),
    Infeasible,
    Failed(String),
}

fn solve_model(
    model: &LineupModel,
    time_limit: Option<Duration>,
) -> std::result::Result<Assignment, ResolutionError> {
    let mut vars = ProblemVariables::new();
    let picks: Vec<Variable> = model
        .columns
        .iter()
        .map(|_| vars.add(variable().binary()))
        .collect();
    // extra[slot][k] == 1 when flex slot `slot` goes to flex_rows[k]
    let extra: Vec<Vec<Variable>> = (0..model.flex_slots)
        .map(|_| {
            model
                .flex_rows
                .iter()
                .map(|_| vars.add(variable().binary()))
                .collect()
        })
        .collect();

    let objective: Expression = model
        .columns
        .iter()
        .zip(&picks)
        .map(|(column, &pick)| column.points * pick)
        .sum();
    let salary: Expression = model
        .columns
        .iter()
        .zip(&picks)
        .map(|(column, &pick)| column.salary * pick)
        .sum();
    let selected: Expression = picks.iter().copied().sum();
    let cap = model.salary_cap;
    let roster = model.roster_size as f64;

    let mut problem = vars.maximise(objective).using(microlp);
    if let Some(limit) = time_limit {
        problem = problem.with_time_limit(limit.as_secs_f64());
    }
    problem = problem
        .with(constraint!(salary <= cap))
        .with(constraint!(selected == roster));

    for (idx, row) in model.rows.iter().enumerate() {
        let count: Expression = model.row_columns[idx].iter().map(|&c| picks[c]).sum();
        let base = row.base as f64;
        match model.flex_rows.iter().position(|&r| r == idx) {
            Some(k) => {
                let bonus: Expression = extra.iter().map(|slot| slot[k]).sum();
                problem = problem.with(constraint!(count == bonus + base));
            }
            // base is zero here; anything else was reported as infeasible
            None if model.row_columns[idx].is_empty() => {}
            None => problem = problem.with(constraint!(count == base)),
        }
    }

    for slot in &extra {
        let taken: Expression = slot.iter().copied().sum();
        problem = problem.with(constraint!(taken == 1.0));
    }

    for (player, cols) in model.player_columns.iter().enumerate() {
        if cols.is_empty() {
            continue;
        }
        let chosen: Expression = cols.iter().map(|&c| picks[c]).sum();
        match model.directives[player] {
            InclusionDirective::Include => problem = problem.with(constraint!(chosen == 1.0)),
            InclusionDirective::Exclude => problem = problem.with(constraint!(chosen == 0.0)),
            InclusionDirective::NoPreference if cols.len() > 1 => {
                problem = problem.with(constraint!(chosen <= 1.0))
            }
            InclusionDirective::NoPreference => {}
        }
    }

    let solution = problem.solve()?;
    match solution.status() {
        SolutionStatus::Optimal => {}
        SolutionStatus::TimeLimit => {
            return Err(ResolutionError::Other(
                "time limit reached before the lineup was proven optimal",
            ))
        }
        SolutionStatus::GapLimit => {
            return Err(ResolutionError::Other(
                "stopped at the gap limit before the lineup was proven optimal",
            ))
        }
    }

    let flex_rows = extra
        .iter()
        .map(|slot| {
            slot.iter()
                .position(|&v| solution.value(v) > 0.5)
                .map(|k| model.flex_rows[k])
                .ok_or(ResolutionError::Other("flex slot left unassigned"))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Assignment {
        picks: picks.iter().map(|&p| solution.value(p) > 0.5).collect(),
        flex_rows,
    })
}

/// Solve within the configured time limit and classify the outcome.
///
/// The limit is enforced by the solver itself; a run that stops early,
/// with or without an incumbent, is a failure.
fn run_solver(model: &LineupModel, settings: &SolverSettings) -> SolveOutcome {
    match solve_model(model, settings.time_limit) {
        Ok(assignment) => SolveOutcome::Solved(assignment),
        Err(ResolutionError::Infeasible) => SolveOutcome::Infeasible,
        Err(e) => SolveOutcome::Failed(e.to_string()),
    }
}

fn decode(model: &LineupModel, assignment: &Assignment) -> LineupResult {
    let chosen: Vec<&Column> = model
        .columns
        .iter()
        .zip(&assignment.picks)
        .filter(|(_, &picked)| picked)
        .map(|(column, _)| column)
        .collect();

    let mut times_chosen = vec![0usize; model.players.len()];
    for column in &chosen {
        times_chosen[column.player] += 1;
    }
    let repeated: Vec<PlayerId> = times_chosen
        .iter()
        .enumerate()
        .filter(|(_, &n)| n > 1)
        .map(|(idx, _)| model.players[idx].id)
        .collect();

    // Either of these means the program itself is wrong, not the input.
    debug_assert!(
        repeated.is_empty(),
        "players selected more than once: {:?}",
        repeated
    );
    debug_assert_eq!(chosen.len(), model.roster_size, "roster size mismatch");
    if !repeated.is_empty() || chosen.len() != model.roster_size {
        return LineupResult::solver_error(format!(
            "inconsistent solution: {} selections, repeated players {:?}",
            chosen.len(),
            repeated
        ));
    }

    let mut selected: Vec<(usize, SelectedPlayer)> = chosen
        .iter()
        .map(|column| {
            (
                column.row,
                SelectedPlayer {
                    player: (*model.players[column.player]).clone(),
                    position: model.rows[column.row].position.clone(),
                    flex: false,
                },
            )
        })
        .collect();
    selected.sort_by(|(row_a, a), (row_b, b)| {
        row_a
            .cmp(row_b)
            .then(b.player.projected_points.total_cmp(&a.player.projected_points))
            .then(a.player.id.cmp(&b.player.id))
    });

    // The weakest pick at a position that won a flex slot is shown as the flex.
    for &row in &assignment.flex_rows {
        if let Some((_, pick)) = selected
            .iter_mut()
            .rev()
            .find(|(r, pick)| *r == row && !pick.flex)
        {
            pick.flex = true;
        }
    }
    selected.sort_by_key(|(row, pick)| (pick.flex, *row));

    let players: Vec<SelectedPlayer> = selected.into_iter().map(|(_, pick)| pick).collect();
    LineupResult {
        status: LineupStatus::Optimal,
        total_salary: players.iter().map(|p| p.player.salary).sum(),
        total_points: players.iter().map(|p| p.player.projected_points).sum(),
        flex_positions: assignment
            .flex_rows
            .iter()
            .map(|&row| model.rows[row].position.clone())
            .collect(),
        players,
        message: None,
    }
}

/// Choose the highest-projected lineup the profile allows.
///
/// # Errors
///
/// Validation errors only: conflicting duplicate candidates, invalid
/// records, contradictory directives, or directives for unknown players.
/// An impossible lineup is returned as [`LineupStatus::Infeasible`] and a
/// solver failure or timeout as [`LineupStatus::SolverError`].
pub fn optimize(
    candidates: &[Candidate],
    profile: &SportProfile,
    directives: &Directives,
    settings: &SolverSettings,
) -> Result<LineupResult> {
    let model = LineupModel::build(candidates, profile, directives)?;
    if model.dropped > 0 {
        debug!(
            dropped = model.dropped,
            profile = %profile.name,
            "ignored candidates at positions outside the profile"
        );
    }

    if let Some(reason) = model.infeasibility() {
        info!(%reason, "lineup infeasible before solving");
        return Ok(LineupResult::infeasible());
    }

    debug!(
        players = model.players.len(),
        columns = model.columns.len(),
        flex_slots = model.flex_slots,
        "built lineup model"
    );

    let result = match run_solver(&model, settings) {
        SolveOutcome::Solved(assignment) => decode(&model, &assignment),
        SolveOutcome::Infeasible => LineupResult::infeasible(),
        SolveOutcome::Failed(message) => {
            warn!(%message, "lineup solver failed");
            LineupResult::solver_error(message)
        }
    };

    info!(
        status = %result.status,
        points = result.total_points,
        salary = result.total_salary,
        "lineup optimization finished"
    );
    Ok(result)
}

/// Expand a raw player pool and optimize it in one step.
pub fn optimize_pool(
    players: &[PlayerRecord],
    profile: &SportProfile,
    directives: &Directives,
    settings: &SolverSettings,
) -> Result<LineupResult> {
    let candidates = expand(players)?;
    optimize(&candidates, profile, directives, settings)
}
