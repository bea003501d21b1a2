use thiserror::Error;

use crate::engine::match_state::MatchPhase;

/// Errors building or advancing a match simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("home team is required")]
    MissingHomeTeam,
    #[error("away team is required")]
    MissingAwayTeam,
    #[error("team {0} has {1} players, a full eleven is required")]
    ShortTeam(String, usize),
    #[error("overs must be at least 1, got {0}")]
    InvalidOvers(u32),
    #[error("both sides reference the same team id {0}")]
    DuplicateTeam(String),
}

/// Errors applying an external request to a match in a given phase.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("request not valid in phase {phase:?}")]
    WrongPhase { phase: MatchPhase },
    #[error("player {0} is not on the relevant side")]
    UnknownPlayer(String),
    #[error("player {0} cannot open at both ends")]
    DuplicateOpeners(String),
    #[error("player {0} has already batted")]
    AlreadyBatted(String),
    #[error("player {0} cannot bowl the coming over")]
    IneligibleBowler(String),
    #[error("bowling changes are only allowed between overs")]
    MidOver,
    #[error("match is already complete")]
    MatchComplete,
}
