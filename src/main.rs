//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use dfs_lineup::{
    cli::{Commands, DfsLineup},
    commands::{
        optimize::{handle_optimize, OptimizeParams},
        profiles::handle_profiles,
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let app = DfsLineup::parse();

    match app.command {
        Commands::Optimize {
            pool,
            profile,
            directives,
            include,
            exclude,
            time_limit,
            json,
            verify,
            verbose,
        } => {
            let result = handle_optimize(OptimizeParams {
                pool,
                profile: profile.profile,
                profile_file: profile.profile_file,
                salary_cap: profile.cap,
                directives_file: directives,
                include,
                exclude,
                time_limit_secs: time_limit,
                as_json: json,
                verify,
                verbose,
            })?;

            // Infeasible and failed solves are reported, but scripts can branch on them.
            if !result.is_optimal() {
                std::process::exit(2);
            }
        }

        Commands::Profiles { json } => handle_profiles(json)?,
    }

    Ok(())
}
