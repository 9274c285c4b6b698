//! Unit tests for command helpers

use super::optimize::{apply_cli_directives, handle_optimize, OptimizeParams};
use super::*;
use crate::{
    cli::types::{InclusionDirective, PlayerId},
    lineup::{Directives, LineupStatus},
};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// Serializes tests that touch `DFS_LINEUP_PROFILE`.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const SMALL_PROFILE: &str = r#"{
    "name": "mini",
    "quotas": [{"position": "A", "count": 2}, {"position": "B", "count": 1}],
    "salaryCap": 50
}"#;

const SMALL_POOL: &str = r#"[
    {"id": 1, "name": "Alpha", "positions": "A", "salary": 20, "projectedPoints": 10},
    {"id": 2, "name": "Bravo", "positions": "A", "salary": 15, "projectedPoints": 8},
    {"id": 3, "name": "Charlie", "positions": "A", "salary": 10, "projectedPoints": 7},
    {"id": 4, "name": "Delta", "positions": "A/B", "salary": 12, "projectedPoints": 9},
    {"id": 5, "name": "Echo", "positions": "B", "salary": 5, "projectedPoints": 3}
]"#;

#[cfg(test)]
mod resolve_profile_tests {
    use super::*;

    #[test]
    fn test_resolve_profile_from_name() {
        let profile = resolve_profile(Some(ProfileName::DkMlb), None).unwrap();
        assert_eq!(profile.name, "dk-mlb");
        assert_eq!(profile.roster_size, 10);
    }

    #[test]
    fn test_resolve_profile_file_wins() {
        let file = write_temp(SMALL_PROFILE);
        let profile = resolve_profile(Some(ProfileName::DkNfl), Some(file.path())).unwrap();
        assert_eq!(profile.name, "mini");
    }

    #[test]
    fn test_resolve_profile_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(PROFILE_ENV_VAR, "nfl");

        let profile = resolve_profile(None, None).unwrap();
        assert_eq!(profile.name, "dk-nfl");

        std::env::remove_var(PROFILE_ENV_VAR);
    }

    #[test]
    fn test_resolve_profile_name_overrides_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(PROFILE_ENV_VAR, "dk-nfl");

        let profile = resolve_profile(Some(ProfileName::DkMlb), None).unwrap();
        assert_eq!(profile.name, "dk-mlb");

        std::env::remove_var(PROFILE_ENV_VAR);
    }

    #[test]
    fn test_resolve_profile_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(PROFILE_ENV_VAR);

        match resolve_profile(None, None).unwrap_err() {
            LineupError::MissingProfile { env_var } => assert_eq!(env_var, PROFILE_ENV_VAR),
            other => panic!("Expected MissingProfile error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_profile_unknown_env_value() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(PROFILE_ENV_VAR, "no-such-profile-anywhere");

        match resolve_profile(None, None).unwrap_err() {
            LineupError::UnknownProfile { name } => assert_eq!(name, "no-such-profile-anywhere"),
            other => panic!("Expected UnknownProfile error, got {other:?}"),
        }

        std::env::remove_var(PROFILE_ENV_VAR);
    }
}

#[cfg(test)]
mod optimize_command_tests {
    use super::*;

    #[test]
    fn test_apply_cli_directives() {
        let mut directives = Directives::new();
        directives.insert(PlayerId::new(1), InclusionDirective::NoPreference);

        apply_cli_directives(&mut directives, &[PlayerId::new(1)], &[PlayerId::new(2)]).unwrap();
        assert_eq!(directives[&PlayerId::new(1)], InclusionDirective::Include);
        assert_eq!(directives[&PlayerId::new(2)], InclusionDirective::Exclude);
    }

    #[test]
    fn test_apply_cli_directives_conflict() {
        let mut directives = Directives::new();
        let err = apply_cli_directives(&mut directives, &[PlayerId::new(3)], &[PlayerId::new(3)])
            .unwrap_err();
        assert!(matches!(
            err,
            LineupError::ContradictoryDirective { player_id } if player_id == PlayerId::new(3)
        ));
    }

    #[test]
    fn test_handle_optimize_end_to_end() {
        let pool = write_temp(SMALL_POOL);
        let profile = write_temp(SMALL_PROFILE);

        let result = handle_optimize(OptimizeParams {
            pool: pool.path().to_path_buf(),
            profile_file: Some(profile.path().to_path_buf()),
            verify: true,
            ..Default::default()
        })
        .unwrap();

        // Alpha + Bravo at A, with dual-eligible Delta filling B.
        assert_eq!(result.status, LineupStatus::Optimal);
        assert_eq!(result.total_salary, 47);
        assert!((result.total_points - 27.0).abs() < 1e-6);
    }

    #[test]
    fn test_handle_optimize_with_exclude_and_cap() {
        let pool = write_temp(SMALL_POOL);
        let profile = write_temp(SMALL_PROFILE);

        let result = handle_optimize(OptimizeParams {
            pool: pool.path().to_path_buf(),
            profile_file: Some(profile.path().to_path_buf()),
            exclude: vec![PlayerId::new(1)],
            as_json: true,
            ..Default::default()
        })
        .unwrap();

        // Without Alpha: Bravo + Charlie at A, Delta at B.
        assert_eq!(result.status, LineupStatus::Optimal);
        assert!(!result.contains(PlayerId::new(1)));
        assert!((result.total_points - 24.0).abs() < 1e-6);

        let result = handle_optimize(OptimizeParams {
            pool: pool.path().to_path_buf(),
            profile_file: Some(profile.path().to_path_buf()),
            salary_cap: Some(10),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(result.status, LineupStatus::Infeasible);
    }

    #[test]
    fn test_handle_optimize_unknown_directive_player() {
        let pool = write_temp(SMALL_POOL);
        let profile = write_temp(SMALL_PROFILE);

        let err = handle_optimize(OptimizeParams {
            pool: pool.path().to_path_buf(),
            profile_file: Some(profile.path().to_path_buf()),
            include: vec![PlayerId::new(999)],
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, LineupError::UnknownPlayer { .. }));
    }
}
