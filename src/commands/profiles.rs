//! The `profiles` command: list built-in sport profiles.

use crate::{cli::types::ProfileName, lineup::SportProfile, Result};

/// One-line summary, e.g. `dk-mlb: P 2, C 1, ... | roster 10 | cap 50000`.
pub fn describe_profile(profile: &SportProfile) -> String {
    let quotas = profile
        .quotas
        .iter()
        .map(|q| format!("{} {}", q.position, q.count))
        .collect::<Vec<_>>()
        .join(", ");

    let flex = match &profile.flex {
        Some(group) => format!(
            " + {} {} ({})",
            group.slots,
            group.label,
            group
                .positions
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join("/")
        ),
        None => String::new(),
    };

    format!(
        "{}: {}{} | roster {} | cap {}",
        profile.name, quotas, flex, profile.roster_size, profile.salary_cap
    )
}

/// Print every built-in profile.
pub fn handle_profiles(as_json: bool) -> Result<()> {
    let profiles: Vec<SportProfile> = ProfileName::ALL
        .iter()
        .map(|name| SportProfile::builtin(*name))
        .collect();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
    } else {
        for profile in &profiles {
            println!("{}", describe_profile(profile));
        }
    }
    Ok(())
}
