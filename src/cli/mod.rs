//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{PlayerId, ProfileName};

/// Profile selection shared between commands
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Built-in sport profile (or set `DFS_LINEUP_PROFILE` env var).
    #[clap(long, short)]
    pub profile: Option<ProfileName>,

    /// Load the sport profile from a JSON file instead of a built-in one.
    #[clap(long, conflicts_with = "profile")]
    pub profile_file: Option<PathBuf>,

    /// Override the profile's salary cap.
    #[clap(long)]
    pub cap: Option<i64>,
}

#[derive(Debug, Parser)]
#[clap(name = "dfs-lineup", about = "Daily fantasy sports lineup optimizer")]
pub struct DfsLineup {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Pick the highest-projected lineup from a player pool.
    ///
    /// Reads a JSON array of players (id, name, positions, salary,
    /// projectedPoints) and solves for the best lineup under the profile's
    /// salary cap and position quotas.
    Optimize {
        /// Player pool JSON file.
        #[clap(long, short = 'i')]
        pool: PathBuf,

        #[clap(flatten)]
        profile: ProfileArgs,

        /// JSON object mapping player IDs to include | exclude | no-preference.
        #[clap(long)]
        directives: Option<PathBuf>,

        /// Force a player into the lineup (repeatable): `--include 123 --include 456`.
        #[clap(long)]
        include: Vec<PlayerId>,

        /// Keep a player out of the lineup (repeatable).
        #[clap(long)]
        exclude: Vec<PlayerId>,

        /// Give up after this many seconds (default 30).
        #[clap(long)]
        time_limit: Option<u64>,

        /// Output the lineup as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Re-check the lineup against every profile rule after solving.
        #[clap(long)]
        verify: bool,

        /// Show progress while loading and solving.
        #[clap(long)]
        verbose: bool,
    },

    /// List the built-in sport profiles.
    Profiles {
        /// Output profiles as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
