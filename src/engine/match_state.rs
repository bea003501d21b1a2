use crate::core::{Team, TeamId};

use super::innings::InningsState;

/// Surface character, shifting boundary and wicket weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PitchType {
    Batting,
    Bowling,
    #[default]
    Balanced,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchFormat {
    #[default]
    T20,
    OneDay,
}

impl MatchFormat {
    pub fn default_overs(&self) -> u32 {
        match self {
            MatchFormat::T20 => 20,
            MatchFormat::OneDay => 50,
        }
    }
}

/// Match configuration, fixed at setup.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    pub overs: u32,
    pub format: MatchFormat,
    pub pitch: PitchType,
    pub stadium: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            overs: 20,
            format: MatchFormat::T20,
            pitch: PitchType::Balanced,
            stadium: "Generic Stadium".to_string(),
        }
    }
}

/// The call made before the coin lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TossCall {
    Heads,
    Tails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Toss {
    pub winner: TeamId,
    pub decision: TossDecision,
}

/// Where the match sits in its lifecycle. Simulation steps are only valid
/// in `InPlay`; every other state names the decision the engine is
/// suspended on. AI-only matches never leave `InPlay` until completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchPhase {
    /// The human must call heads or tails.
    AwaitingToss,
    /// The human won the toss and must choose to bat or bowl.
    AwaitingTossDecision,
    /// The human batting side must name two distinct openers.
    AwaitingOpeners,
    InPlay,
    /// A wicket fell on a human batting side; a replacement is needed
    /// before the next delivery.
    AwaitingBatsman,
    Completed,
}

/// Which innings is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InningsNumber {
    First,
    Second,
}

/// The complete state of one match. Self contained and cheap enough to
/// clone, so callers can snapshot, branch, or replay from any point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub id: String,
    pub config: MatchConfig,
    pub home_team: Team,
    pub away_team: Team,
    /// The human-controlled side, if any.
    pub user_team: Option<TeamId>,
    pub toss: Option<Toss>,
    pub innings1: Option<InningsState>,
    pub innings2: Option<InningsState>,
    pub current_innings: InningsNumber,
    /// Running transcript of generated commentary.
    pub commentary: Vec<String>,
    pub phase: MatchPhase,
    pub winner: Option<TeamId>,
    /// Human readable result, e.g. "4 wickets" or "Match Tied".
    pub victory_margin: Option<String>,
}

impl MatchState {
    pub fn team(&self, id: &TeamId) -> &Team {
        if &self.home_team.id == id {
            &self.home_team
        } else {
            &self.away_team
        }
    }

    pub fn team_mut(&mut self, id: &TeamId) -> &mut Team {
        if &self.home_team.id == id {
            &mut self.home_team
        } else {
            &mut self.away_team
        }
    }

    pub fn is_human(&self, id: &TeamId) -> bool {
        self.user_team.as_ref() == Some(id)
    }

    /// The innings currently being played. Only meaningful once innings
    /// one exists.
    pub fn innings(&self) -> &InningsState {
        match self.current_innings {
            InningsNumber::First => self.innings1.as_ref().unwrap(),
            InningsNumber::Second => self.innings2.as_ref().unwrap(),
        }
    }

    pub fn innings_mut(&mut self) -> &mut InningsState {
        match self.current_innings {
            InningsNumber::First => self.innings1.as_mut().unwrap(),
            InningsNumber::Second => self.innings2.as_mut().unwrap(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.phase == MatchPhase::Completed
    }
}
