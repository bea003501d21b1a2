use crate::core::PlayerId;

use super::outcome::Outcome;
use super::strategy::Strategy;

/// How a batter was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DismissalType {
    Bowled,
    Caught,
    Lbw,
    Stumped,
    HitWicket,
    RunOut,
}

/// Structured dismissal details plus the scorecard string, created at the
/// moment a wicket outcome is sampled. Immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WicketDetails {
    pub dismissal: DismissalType,
    pub batter: PlayerId,
    pub bowler: PlayerId,
    /// Credited fielder for catches and stumpings.
    pub fielder: Option<PlayerId>,
    /// Standard scorecard notation, e.g. `"Kohli c Smith b Starc"`.
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtraType {
    Wide,
    NoBall,
}

/// An immutable record of one delivery, appended to the innings event log.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallEvent {
    /// Zero-based over index.
    pub over: u32,
    /// One-based ball within the over.
    pub ball: u8,
    pub outcome: Outcome,
    pub runs: u32,
    pub wicket: bool,
    pub wicket_details: Option<WicketDetails>,
    pub extra: Option<ExtraType>,
    pub striker: PlayerId,
    pub non_striker: PlayerId,
    pub bowler: PlayerId,
    /// The strategies in effect when the ball was bowled.
    pub batting_strategy: Strategy,
    pub bowling_strategy: Strategy,
    /// Generated commentary line.
    pub text: String,
}

/// A scorecard entry for a fallen wicket: the innings situation at the
/// moment of dismissal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FallOfWicket {
    pub runs: u32,
    pub wickets: u8,
    pub ball: u32,
    pub batter: PlayerId,
    pub bowler: PlayerId,
    pub dismissal: DismissalType,
}

/// Runs and balls accumulated by an unordered pair of batters at the
/// crease. A new entry starts after every wicket.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partnership {
    pub batter_one: PlayerId,
    pub batter_two: PlayerId,
    pub runs: u32,
    pub balls: u32,
}

impl Partnership {
    pub fn involves(&self, a: &PlayerId, b: &PlayerId) -> bool {
        (&self.batter_one == a && &self.batter_two == b)
            || (&self.batter_one == b && &self.batter_two == a)
    }
}
