//! Data carried into and out of a lineup optimization run.

use crate::cli::types::{InclusionDirective, PlayerId, Position};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::Arc;

/// Accept either `["2B", "SS"]` or the salary feed's `"2B/SS"` form.
fn de_eligibility<'de, D>(deserializer: D) -> Result<Vec<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Eligibility {
        Joined(String),
        List(Vec<Position>),
    }

    match Eligibility::deserialize(deserializer)? {
        Eligibility::Joined(joined) => {
            Position::parse_eligibility(&joined).map_err(de::Error::custom)
        }
        Eligibility::List(positions) => Ok(positions),
    }
}

/// One scorable player in the pool.
///
/// `projected_points` must already be resolved to a number before the
/// record reaches the optimizer; a missing value in a pool file loads as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    #[serde(alias = "position", deserialize_with = "de_eligibility")]
    pub positions: Vec<Position>,
    pub salary: i64,
    #[serde(rename = "projectedPoints", alias = "projected_points", default)]
    pub projected_points: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(
        rename = "gameInfo",
        alias = "game_info",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub game_info: Option<String>,
    #[serde(rename = "directive", alias = "inclusionDirective", default)]
    pub directive: InclusionDirective,
}

impl PlayerRecord {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        positions: Vec<Position>,
        salary: i64,
        projected_points: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            positions,
            salary,
            projected_points,
            team: None,
            game_info: None,
            directive: InclusionDirective::NoPreference,
        }
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_directive(mut self, directive: InclusionDirective) -> Self {
        self.directive = directive;
        self
    }
}

/// One (player, eligible position) pairing; the unit the solver selects.
///
/// Every candidate of a multi-position player shares the same
/// [`PlayerRecord`] handle, so uniqueness is tracked by player identity
/// rather than by candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub player: Arc<PlayerRecord>,
    pub position: Position,
}

impl Candidate {
    pub fn new(player: Arc<PlayerRecord>, position: Position) -> Self {
        Self { player, position }
    }

    pub fn player_id(&self) -> PlayerId {
        self.player.id
    }

    pub fn salary(&self) -> i64 {
        self.player.salary
    }

    pub fn projected_points(&self) -> f64 {
        self.player.projected_points
    }
}

/// Required starters at one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionQuota {
    pub position: Position,
    pub count: u32,
}

impl PositionQuota {
    pub fn new(position: Position, count: u32) -> Self {
        Self { position, count }
    }
}

fn default_flex_slots() -> u32 {
    1
}

fn default_flex_label() -> String {
    "FLEX".to_string()
}

/// Extra roster slot(s) any member position may fill on top of its quota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlexGroup {
    pub positions: Vec<Position>,
    #[serde(default = "default_flex_slots")]
    pub slots: u32,
    #[serde(default = "default_flex_label")]
    pub label: String,
}

impl FlexGroup {
    pub fn new(positions: Vec<Position>) -> Self {
        Self {
            positions,
            slots: default_flex_slots(),
            label: default_flex_label(),
        }
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.positions.contains(position)
    }
}

/// Lineup rules for one sport/contest type.
///
/// Construct through [`SportProfile::new`] (or deserialize, which goes
/// through the same checks) so that `roster_size` always equals the quota
/// total plus the flex slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileDefinition")]
pub struct SportProfile {
    pub name: String,
    pub quotas: Vec<PositionQuota>,
    pub flex: Option<FlexGroup>,
    #[serde(rename = "rosterSize")]
    pub roster_size: u32,
    #[serde(rename = "salaryCap")]
    pub salary_cap: i64,
}

/// Serialized shape of a profile before validation.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProfileDefinition {
    pub name: String,
    pub quotas: Vec<PositionQuota>,
    #[serde(default)]
    pub flex: Option<FlexGroup>,
    #[serde(rename = "salaryCap", alias = "salary_cap")]
    pub salary_cap: i64,
    #[serde(rename = "rosterSize", alias = "roster_size", default)]
    pub roster_size: Option<u32>,
}

/// Outcome of one optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineupStatus {
    Optimal,
    Infeasible,
    SolverError,
}

impl fmt::Display for LineupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LineupStatus::Optimal => "optimal",
            LineupStatus::Infeasible => "infeasible",
            LineupStatus::SolverError => "solver-error",
        };
        write!(f, "{}", s)
    }
}

/// A chosen player and the slot they fill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedPlayer {
    pub player: PlayerRecord,
    /// Position the player was selected at.
    pub position: Position,
    /// True when the player occupies a flex slot rather than a base quota slot.
    pub flex: bool,
}

/// The decoded optimum, or an empty result describing why there is none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineupResult {
    pub status: LineupStatus,
    pub players: Vec<SelectedPlayer>,
    #[serde(rename = "totalSalary")]
    pub total_salary: i64,
    #[serde(rename = "totalPoints")]
    pub total_points: f64,
    /// Positions that received the extra flex slot(s).
    #[serde(rename = "flexPositions")]
    pub flex_positions: Vec<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LineupResult {
    pub fn infeasible() -> Self {
        Self::empty(LineupStatus::Infeasible, None)
    }

    pub fn solver_error(message: impl Into<String>) -> Self {
        Self::empty(LineupStatus::SolverError, Some(message.into()))
    }

    fn empty(status: LineupStatus, message: Option<String>) -> Self {
        Self {
            status,
            players: Vec::new(),
            total_salary: 0,
            total_points: 0.0,
            flex_positions: Vec::new(),
            message,
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == LineupStatus::Optimal
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|s| s.player.id).collect()
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|s| s.player.id == player_id)
    }

    /// Number of selected players filling `position`, flex picks included.
    pub fn count_at(&self, position: &Position) -> usize {
        self.players
            .iter()
            .filter(|s| &s.position == position)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_record_deserialization_joined_positions() {
        let value = json!({
            "id": 28466134,
            "name": "Mookie Betts LAD",
            "positions": "2B/OF",
            "salary": 5800,
            "projectedPoints": 9.4,
            "team": "LAD",
            "gameInfo": "LAD@SF 07:05PM ET"
        });

        let record: PlayerRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.id, PlayerId::new(28466134));
        assert_eq!(record.positions.len(), 2);
        assert_eq!(record.positions[1].as_str(), "OF");
        assert_eq!(record.salary, 5800);
        assert_eq!(record.directive, InclusionDirective::NoPreference);
        assert_eq!(record.game_info.as_deref(), Some("LAD@SF 07:05PM ET"));
    }

    #[test]
    fn test_player_record_missing_projection_defaults_to_zero() {
        let value = json!({
            "id": 1,
            "name": "Backup QB",
            "positions": ["QB"],
            "salary": 4000,
            "directive": "exclude"
        });

        let record: PlayerRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.projected_points, 0.0);
        assert_eq!(record.directive, InclusionDirective::Exclude);
    }

    #[test]
    fn test_player_record_rejects_bad_position() {
        let value = json!({
            "id": 1,
            "name": "Nobody",
            "positions": "QB/",
            "salary": 4000
        });

        assert!(serde_json::from_value::<PlayerRecord>(value).is_err());
    }

    #[test]
    fn test_candidate_accessors() {
        let record = Arc::new(PlayerRecord::new(
            PlayerId::new(9),
            "Flex Guy",
            vec![Position::new("RB").unwrap(), Position::new("WR").unwrap()],
            6100,
            14.5,
        ));
        let candidate = Candidate::new(Arc::clone(&record), Position::new("WR").unwrap());

        assert_eq!(candidate.player_id(), PlayerId::new(9));
        assert_eq!(candidate.salary(), 6100);
        assert_eq!(candidate.projected_points(), 14.5);
    }

    #[test]
    fn test_empty_results() {
        let infeasible = LineupResult::infeasible();
        assert_eq!(infeasible.status, LineupStatus::Infeasible);
        assert!(infeasible.players.is_empty());
        assert!(infeasible.message.is_none());

        let failed = LineupResult::solver_error("time limit reached");
        assert_eq!(failed.status, LineupStatus::SolverError);
        assert!(!failed.is_optimal());
        assert_eq!(failed.message.as_deref(), Some("time limit reached"));

        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "solver-error");
    }
}
