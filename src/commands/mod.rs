//! Command implementations for the lineup optimizer CLI

pub mod common;
pub mod optimize;
pub mod profiles;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::str::FromStr;

use crate::{
    cli::types::ProfileName,
    error::{LineupError, Result},
    lineup::SportProfile,
    PROFILE_ENV_VAR,
};

use common::{custom_profile_path, load_profile_file};

/// Pick the sport profile for a command.
///
/// Resolution order:
/// 1. `file`, when given
/// 2. `name`, when given
/// 3. the `DFS_LINEUP_PROFILE` environment variable, read either as a
///    built-in profile name or as the name of a custom profile stored under
///    the config directory (`<config>/dfs-lineup/profiles/<name>.json`)
pub fn resolve_profile(name: Option<ProfileName>, file: Option<&Path>) -> Result<SportProfile> {
    if let Some(path) = file {
        return Ok(load_profile_file(path)?);
    }

    if let Some(name) = name {
        return Ok(SportProfile::builtin(name));
    }

    let value = std::env::var(PROFILE_ENV_VAR).map_err(|_| LineupError::MissingProfile {
        env_var: PROFILE_ENV_VAR.to_string(),
    })?;

    match ProfileName::from_str(&value) {
        Ok(name) => Ok(SportProfile::builtin(name)),
        Err(_) => {
            let path = custom_profile_path(&value);
            if path.is_file() {
                Ok(load_profile_file(&path)?)
            } else {
                Err(LineupError::UnknownProfile { name: value })
            }
        }
    }
}
