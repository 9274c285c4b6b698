//! File loading and text rendering shared across commands.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::{
    cli::types::{InclusionDirective, PlayerId},
    lineup::{Directives, LineupResult, LineupStatus, PlayerRecord, SportProfile},
};

/// Path: ~/.config/dfs-lineup/profiles/{name}.json
pub fn custom_profile_path(name: &str) -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("dfs-lineup")
        .join("profiles")
        .join(format!("{}.json", name))
}

/// Read a JSON array of player records.
pub fn load_player_pool(path: &Path) -> Result<Vec<PlayerRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read player pool {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse player pool {}", path.display()))
}

/// Read a JSON object mapping player IDs to directives.
///
/// Keys are strings (`{"28466134": "include"}`) because JSON object keys
/// always are.
pub fn load_directives(path: &Path) -> Result<Directives> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read directives {}", path.display()))?;
    let entries: BTreeMap<String, InclusionDirective> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse directives {}", path.display()))?;

    entries
        .into_iter()
        .map(|(key, directive)| {
            let id = PlayerId::from_str(&key).with_context(|| {
                format!("invalid player id {:?} in {}", key, path.display())
            })?;
            Ok((id, directive))
        })
        .collect()
}

/// Read and validate a sport profile definition.
pub fn load_profile_file(path: &Path) -> Result<SportProfile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid profile {}", path.display()))
}

/// Render a lineup as a fixed-width table.
pub fn render_lineup(result: &LineupResult, profile: &SportProfile) -> String {
    let mut out = format!("Status: {}\n", result.status);

    match result.status {
        LineupStatus::Optimal => {}
        LineupStatus::Infeasible => {
            out.push_str("No lineup satisfies the salary cap, position quotas and directives.\n");
            return out;
        }
        LineupStatus::SolverError => {
            out.push_str(&format!(
                "Solver failed: {}\n",
                result.message.as_deref().unwrap_or("unknown error")
            ));
            return out;
        }
    }

    let flex_label = profile.flex.as_ref().map_or("FLEX", |g| g.label.as_str());
    out.push_str(&format!(
        "{:<6} {:<28} {:<5} {:>7} {:>8}\n",
        "SLOT", "PLAYER", "TEAM", "SALARY", "POINTS"
    ));
    for pick in &result.players {
        let slot = if pick.flex {
            flex_label.to_string()
        } else {
            pick.position.to_string()
        };
        out.push_str(&format!(
            "{:<6} {:<28} {:<5} {:>7} {:>8.2}\n",
            slot,
            pick.player.name,
            pick.player.team.as_deref().unwrap_or("-"),
            pick.player.salary,
            pick.player.projected_points
        ));
    }
    out.push_str(&format!(
        "{:<6} {:<28} {:<5} {:>7} {:>8.2}\n",
        "TOTAL",
        "",
        "",
        result.total_salary,
        result.total_points
    ));
    out
}
