//! Lineup construction core: eligibility expansion and the optimizer.

pub mod batch;
pub mod expand;
pub mod model;
pub mod profile;
pub mod solver;
pub mod verify;

pub use batch::{optimize_many, ContestRun};
pub use expand::{canonicalize, expand, MAX_SALARY};
pub use model::{
    Candidate, FlexGroup, LineupResult, LineupStatus, PlayerRecord, PositionQuota,
    SelectedPlayer, SportProfile,
};
pub use solver::{merge_directives, optimize, optimize_pool, Directives, SolverSettings};
pub use verify::{verify_lineup, LineupViolation};
