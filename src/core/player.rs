use super::{PlayerId, PlayerStats};

/// Primary role in the side. Batting order and bowler eligibility both key
/// off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Batter,
    Bowler,
    AllRounder,
    WicketKeeper,
}

/// How a player bowls. Rotation heuristics prefer pace at the death and in
/// the powerplay, spin through the middle overs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BowlingStyle {
    Pace,
    Spin,
}

/// A single cricketer. Identity and ratings are fixed for the duration of a
/// match; only [`PlayerStats`] accumulates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: Role,
    pub bowling_style: BowlingStyle,
    /// 0-100
    pub batting_rating: u8,
    /// 0-100
    pub bowling_rating: u8,
    /// 0-100
    pub fielding_rating: u8,
    /// 0-100. Experienced batters resist pressure roughly twice as well.
    pub experience: u8,
    /// 0-100
    pub fitness: u8,
    pub career: PlayerStats,
}

impl Player {
    /// Surname used in commentary and scorecard strings.
    pub fn short_name(&self) -> &str {
        self.name.rsplit(' ').next().unwrap_or(&self.name)
    }

    pub fn is_wicket_keeper(&self) -> bool {
        self.role == Role::WicketKeeper
    }
}
