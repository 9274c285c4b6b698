//! The `optimize` command: load a pool, solve, print the lineup.
//!
//! The main entry point is [`handle_optimize`], configured through an
//! [`OptimizeParams`] struct.

use std::path::PathBuf;
use std::time::Duration;

use crate::{
    cli::types::{InclusionDirective, PlayerId, ProfileName},
    error::{LineupError, Result},
    lineup::{
        expand, merge_directives, optimize, verify_lineup, Directives, LineupResult,
        SolverSettings,
    },
};

use super::{
    common::{load_directives, load_player_pool, render_lineup},
    resolve_profile,
};

/// Configuration parameters for one optimize run.
///
/// # Examples
///
/// ```rust
/// use dfs_lineup::{commands::optimize::OptimizeParams, ProfileName};
///
/// let params = OptimizeParams {
///     pool: "pool.json".into(),
///     profile: Some(ProfileName::DkNfl),
///     ..Default::default()
/// };
/// assert!(params.include.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct OptimizeParams {
    pub pool: PathBuf,
    pub profile: Option<ProfileName>,
    pub profile_file: Option<PathBuf>,
    pub salary_cap: Option<i64>,
    pub directives_file: Option<PathBuf>,
    pub include: Vec<PlayerId>,
    pub exclude: Vec<PlayerId>,
    pub time_limit_secs: Option<u64>,
    pub as_json: bool,
    pub verify: bool,
    pub verbose: bool,
}

/// Fold `--include`/`--exclude` flags into the directive map.
pub fn apply_cli_directives(
    directives: &mut Directives,
    include: &[PlayerId],
    exclude: &[PlayerId],
) -> Result<()> {
    let flagged = include
        .iter()
        .map(|id| (*id, InclusionDirective::Include))
        .chain(exclude.iter().map(|id| (*id, InclusionDirective::Exclude)));

    for (player_id, directive) in flagged {
        let entry = directives.entry(player_id).or_default();
        *entry = entry
            .merge(directive)
            .ok_or(LineupError::ContradictoryDirective { player_id })?;
    }
    Ok(())
}

/// Load a player pool, optimize it, and print the lineup.
///
/// Returns the lineup so callers can branch on its status. Infeasible and
/// failed solves are printed and returned, not raised.
///
/// # Errors
///
/// Returns an error if:
/// - no profile can be resolved, or the profile file is invalid
/// - the pool or directives file cannot be read or parsed
/// - the pool fails validation (see [`crate::lineup::expand`])
/// - directives contradict each other or name unknown players
pub fn handle_optimize(params: OptimizeParams) -> Result<LineupResult> {
    let mut profile = resolve_profile(params.profile, params.profile_file.as_deref())?;
    if let Some(cap) = params.salary_cap {
        profile = profile.with_salary_cap(cap)?;
    }

    if params.verbose {
        println!("Loading player pool from {}...", params.pool.display());
    }
    let players = load_player_pool(&params.pool)?;

    let mut overrides = match &params.directives_file {
        Some(path) => load_directives(path)?,
        None => Directives::new(),
    };
    apply_cli_directives(&mut overrides, &params.include, &params.exclude)?;

    let candidates = expand(&players)?;
    if params.verbose {
        println!(
            "✓ {} players expanded to {} candidates",
            players.len(),
            candidates.len()
        );
        println!(
            "Solving for {} ({} starters, cap {})...",
            profile.name, profile.roster_size, profile.salary_cap
        );
    }

    let settings = params
        .time_limit_secs
        .map(|secs| SolverSettings::with_time_limit(Duration::from_secs(secs)))
        .unwrap_or_default();
    let result = optimize(&candidates, &profile, &overrides, &settings)?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_lineup(&result, &profile));
    }

    if params.verify && result.is_optimal() {
        let merged = merge_directives(&players, &overrides)?;
        let violations = verify_lineup(&result, &profile, &merged);
        if violations.is_empty() {
            eprintln!("✓ Lineup satisfies every profile rule");
        } else {
            for violation in &violations {
                eprintln!("⚠ {}", violation);
            }
        }
    }

    Ok(result)
}
