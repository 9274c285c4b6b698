//! Error types for the lineup optimizer

use thiserror::Error;

use crate::cli::types::PlayerId;


pub type Result<T> = std::result::Result<T, LineupError>;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Load(#[from] anyhow::Error),

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position:?}")]
    InvalidPosition { position: String },

    #[error("Player {player_id} has no eligible positions")]
    EmptyPositions { player_id: PlayerId },

    #[error("Player {player_id} has negative salary {salary}")]
    NegativeSalary { player_id: PlayerId, salary: i64 },

    #[error("Player {player_id} has salary {salary}, above the limit of {limit}")]
    SalaryTooLarge {
        player_id: PlayerId,
        salary: i64,
        limit: i64,
    },

    #[error("Player {player_id} has invalid projected points {points}")]
    InvalidProjection { player_id: PlayerId, points: f64 },

    #[error("Player {player_id} appears more than once with a different {field}")]
    ConflictingDuplicate {
        player_id: PlayerId,
        field: &'static str,
    },

    #[error("Player {player_id} is both forced into and out of the lineup")]
    ContradictoryDirective { player_id: PlayerId },

    #[error("Directive given for player {player_id}, who is not in the pool")]
    UnknownPlayer { player_id: PlayerId },

    #[error("Invalid sport profile: {reason}")]
    InvalidProfile { reason: String },

    #[error("Sport profile not provided and {env_var} environment variable not set")]
    MissingProfile { env_var: String },

    #[error("Unknown sport profile: {name}")]
    UnknownProfile { name: String },
}

impl LineupError {
    /// True for data-integrity problems found before a model is built.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LineupError::InvalidPosition { .. }
                | LineupError::EmptyPositions { .. }
                | LineupError::NegativeSalary { .. }
                | LineupError::SalaryTooLarge { .. }
                | LineupError::InvalidProjection { .. }
                | LineupError::ConflictingDuplicate { .. }
                | LineupError::ContradictoryDirective { .. }
                | LineupError::UnknownPlayer { .. }
                | LineupError::InvalidProfile { .. }
        )
    }
}
