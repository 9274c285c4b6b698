//! Independent optimizations run side by side.

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;

use super::{
    model::{Candidate, LineupResult, SportProfile},
    solver::{optimize, Directives, SolverSettings},
};

/// Everything one contest needs to be optimized on its own.
#[derive(Debug, Clone)]
pub struct ContestRun {
    pub label: String,
    pub candidates: Vec<Candidate>,
    pub profile: SportProfile,
    pub directives: Directives,
}

/// Optimize several contests in parallel.
///
/// Every run builds and solves its own program; nothing is shared between
/// runs except the read-only settings. Results are returned in input order.
pub fn optimize_many(runs: &[ContestRun], settings: &SolverSettings) -> Vec<Result<LineupResult>> {
    debug!(runs = runs.len(), "optimizing contests in parallel");
    runs.par_iter()
        .map(|run| {
            debug!(contest = %run.label, "starting contest");
            optimize(&run.candidates, &run.profile, &run.directives, settings)
        })
        .collect()
}
