/// Cumulative career counters for a single player. These are the only part
/// of a player's record that a match simulation is allowed to mutate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    pub matches: u32,
    pub runs: u32,
    /// Balls faced while batting. Wides do not count as a ball faced.
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub outs: u32,
    pub fifties: u32,
    pub hundreds: u32,
    pub wickets: u32,
    /// Legal deliveries bowled. Wides and no-balls are excluded.
    pub balls_bowled: u32,
    pub runs_conceded: u32,
    pub five_wicket_hauls: u32,
    pub catches: u32,
    pub stumpings: u32,
}

impl PlayerStats {
    pub fn batting_average(&self) -> f64 {
        if self.outs == 0 {
            self.runs as f64
        } else {
            self.runs as f64 / self.outs as f64
        }
    }

    pub fn strike_rate(&self) -> f64 {
        if self.balls == 0 {
            0.0
        } else {
            self.runs as f64 / self.balls as f64 * 100.0
        }
    }

    pub fn economy(&self) -> f64 {
        if self.balls_bowled == 0 {
            0.0
        } else {
            self.runs_conceded as f64 / (self.balls_bowled as f64 / 6.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_strike_rate() {
        let stats = PlayerStats {
            runs: 50,
            balls: 40,
            ..Default::default()
        };
        assert_relative_eq!(125.0, stats.strike_rate());
    }

    #[test]
    fn test_economy() {
        let stats = PlayerStats {
            runs_conceded: 30,
            balls_bowled: 24,
            ..Default::default()
        };
        assert_relative_eq!(7.5, stats.economy());
    }

    #[test]
    fn test_not_out_average_is_runs() {
        let stats = PlayerStats {
            runs: 72,
            ..Default::default()
        };
        assert_relative_eq!(72.0, stats.batting_average());
    }
}
