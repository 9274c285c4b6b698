//! Integration tests for parallel contest optimization

use dfs_lineup::{
    lineup::*, InclusionDirective, LineupError, LineupStatus, PlayerId, PlayerRecord, Position,
};

fn player(id: u64, positions: &str, salary: i64, points: f64) -> PlayerRecord {
    PlayerRecord::new(
        PlayerId::new(id),
        format!("Player {}", id),
        Position::parse_eligibility(positions).unwrap(),
        salary,
        points,
    )
}

fn small_profile(cap: i64) -> SportProfile {
    SportProfile::new(
        "small",
        vec![
            PositionQuota::new(Position::new("A").unwrap(), 2),
            PositionQuota::new(Position::new("B").unwrap(), 1),
        ],
        None,
        cap,
    )
    .unwrap()
}

fn small_pool() -> Vec<PlayerRecord> {
    vec![
        player(1, "A", 20, 15.0),
        player(2, "A", 15, 11.0),
        player(3, "A/B", 10, 9.0),
        player(4, "B", 12, 8.0),
        player(5, "B", 5, 3.0),
    ]
}

fn run(label: &str, cap: i64, directives: Directives) -> ContestRun {
    ContestRun {
        label: label.to_string(),
        candidates: expand(&small_pool()).unwrap(),
        profile: small_profile(cap),
        directives,
    }
}

#[test]
fn test_results_follow_input_order() {
    let mut unknown_player = Directives::new();
    unknown_player.insert(PlayerId::new(99), InclusionDirective::Include);

    let runs = vec![
        run("main", 50, Directives::new()),
        run("tight", 10, Directives::new()),
        run("broken", 50, unknown_player),
    ];
    let results = optimize_many(&runs, &SolverSettings::default());

    assert_eq!(results.len(), 3);
    let main = results[0].as_ref().unwrap();
    assert_eq!(main.status, LineupStatus::Optimal);
    assert_eq!(results[1].as_ref().unwrap().status, LineupStatus::Infeasible);
    assert!(matches!(
        results[2],
        Err(LineupError::UnknownPlayer { .. })
    ));
}

#[test]
fn test_parallel_runs_match_sequential_runs() {
    let mut fade_top = Directives::new();
    fade_top.insert(PlayerId::new(1), InclusionDirective::Exclude);
    let mut lock_cheap = Directives::new();
    lock_cheap.insert(PlayerId::new(5), InclusionDirective::Include);

    let runs = vec![
        run("base", 50, Directives::new()),
        run("fade", 50, fade_top),
        run("lock", 50, lock_cheap),
        run("rich", 100, Directives::new()),
    ];

    let settings = SolverSettings::default();
    let parallel = optimize_many(&runs, &settings);
    for (contest, result) in runs.iter().zip(parallel) {
        let result = result.unwrap();
        let sequential = optimize(
            &contest.candidates,
            &contest.profile,
            &contest.directives,
            &settings,
        )
        .unwrap();
        assert_eq!(result.status, sequential.status, "{}", contest.label);
        assert!(
            (result.total_points - sequential.total_points).abs() < 1e-9,
            "{}",
            contest.label
        );
    }
}

#[test]
fn test_runs_do_not_share_directives() {
    let mut fade_top = Directives::new();
    fade_top.insert(PlayerId::new(1), InclusionDirective::Exclude);

    let runs = vec![
        run("fade", 100, fade_top),
        run("open", 100, Directives::new()),
    ];
    let results = optimize_many(&runs, &SolverSettings::default());

    assert!(!results[0].as_ref().unwrap().contains(PlayerId::new(1)));
    assert!(results[1].as_ref().unwrap().contains(PlayerId::new(1)));
}

#[test]
fn test_no_runs() {
    assert!(optimize_many(&[], &SolverSettings::default()).is_empty());
}
