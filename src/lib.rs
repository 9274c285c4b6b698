//! Daily Fantasy Sports Lineup Optimizer
//!
//! Picks the highest-projected lineup from a player pool as a binary integer
//! program: one 0/1 variable per (player, eligible position) pair, a salary
//! cap, per-position quotas, flex slots, and per-player uniqueness.
//!
//! ## Features
//!
//! - **Multi-position Eligibility**: `"2B/SS"` players become one candidate
//!   per position but can only be picked once
//! - **Flex Slots**: extra roster slots shared by a group of positions
//! - **Directives**: force players into or out of the lineup
//! - **Sport Profiles**: DraftKings NFL and MLB classic built in, custom
//!   profiles from JSON
//! - **Bounded Solves**: a time limit turns a runaway solve into a
//!   `solver-error` result instead of a hang
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dfs_lineup::{lineup::*, PlayerId, Position};
//!
//! # fn example() -> dfs_lineup::Result<()> {
//! let pool = vec![PlayerRecord::new(
//!     PlayerId::new(1),
//!     "Josh Allen BUF",
//!     vec![Position::new("QB")?],
//!     8200,
//!     24.1,
//! )];
//!
//! let candidates = expand(&pool)?;
//! let result = optimize(
//!     &candidates,
//!     &SportProfile::draftkings_nfl(),
//!     &Directives::new(),
//!     &SolverSettings::default(),
//! )?;
//! println!("{}: {:.2} pts", result.status, result.total_points);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set a default sport profile to avoid passing it in every command:
//! ```bash
//! export DFS_LINEUP_PROFILE=dk-nfl
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod lineup;

// Re-export commonly used types
pub use cli::types::{InclusionDirective, PlayerId, Position, ProfileName};
pub use error::{LineupError, Result};
pub use lineup::{LineupResult, LineupStatus, PlayerRecord, SportProfile};

pub const PROFILE_ENV_VAR: &str = "DFS_LINEUP_PROFILE";
