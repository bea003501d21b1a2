use std::collections::HashMap;

use crate::core::{PlayerId, TeamId};

use super::event::{BallEvent, FallOfWicket, Partnership};
use super::outcome::Outcome;
use super::strategy::Strategy;

/// Phase of an innings by over number. Risk and reward tuning keys off
/// this: powerplay rewards boundaries, death overs reward sixes and
/// wickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverPhase {
    Powerplay,
    Middle,
    Death,
}

/// Phase for the ball about to be bowled: powerplay covers the first six
/// overs, death the final four.
pub fn phase_for_ball(balls: u32, total_overs: u32) -> OverPhase {
    let over = balls / 6;
    if over < 6 {
        OverPhase::Powerplay
    } else if over + 4 >= total_overs {
        OverPhase::Death
    } else {
        OverPhase::Middle
    }
}

/// How acclimatized a batter is. Fresh batters are far more likely to get
/// out; well set ones score faster.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settling {
    pub balls: u32,
    /// 0-100
    pub settled: f64,
}

/// The mutable record of one team's batting effort.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InningsState {
    pub batting_team: TeamId,
    pub bowling_team: TeamId,
    pub runs: u32,
    pub wickets: u8,
    /// Legal deliveries bowled.
    pub balls: u32,
    pub run_rate: f64,
    /// Ordered, append-only log of every delivery.
    pub events: Vec<BallEvent>,
    /// Outcomes grouped per over for over-history displays.
    pub over_outcomes: Vec<Vec<Outcome>>,
    pub striker: PlayerId,
    pub non_striker: PlayerId,
    pub current_bowler: PlayerId,
    /// Position in the batting order of the next batter in.
    pub next_batter_index: usize,
    /// Fixed at innings start; roster order.
    pub batting_order: Vec<PlayerId>,
    pub fall_of_wickets: Vec<FallOfWicket>,
    pub partnerships: Vec<Partnership>,
    pub completed: bool,
    pub batting_strategy: Strategy,
    pub bowling_strategy: Strategy,
    /// Per-batter intent. Swapped along with the batters when strike
    /// rotates so a strategy follows the player, not the crease end.
    pub striker_strategy: Strategy,
    pub non_striker_strategy: Strategy,
    /// -100 to +100; positive favors the batting side.
    pub momentum: f64,
    /// 0-100
    pub pressure: f64,
    pub intent_phase: OverPhase,
    pub settling: HashMap<PlayerId, Settling>,
    pub bowler_over_counts: HashMap<PlayerId, u32>,
    /// Second innings only: first innings total plus one.
    pub target: Option<u32>,
}

impl InningsState {
    /// A fresh innings with openers from the top of the batting order.
    pub fn new(
        batting_team: TeamId,
        bowling_team: TeamId,
        batting_order: Vec<PlayerId>,
        opening_bowler: PlayerId,
    ) -> Self {
        let striker = batting_order[0].clone();
        let non_striker = batting_order[1].clone();
        InningsState {
            batting_team,
            bowling_team,
            runs: 0,
            wickets: 0,
            balls: 0,
            run_rate: 0.0,
            events: vec![],
            over_outcomes: vec![],
            striker,
            non_striker,
            current_bowler: opening_bowler,
            next_batter_index: 2,
            batting_order,
            fall_of_wickets: vec![],
            partnerships: vec![],
            completed: false,
            batting_strategy: Strategy::Normal,
            bowling_strategy: Strategy::Normal,
            striker_strategy: Strategy::Normal,
            non_striker_strategy: Strategy::Normal,
            momentum: 0.0,
            pressure: 0.0,
            intent_phase: OverPhase::Powerplay,
            settling: HashMap::new(),
            bowler_over_counts: HashMap::new(),
            target: None,
        }
    }

    /// Runs per over so far, rounded to two decimals. Zero before the
    /// first legal delivery.
    pub fn current_run_rate(&self) -> f64 {
        if self.balls == 0 {
            return 0.0;
        }
        let overs = self.balls as f64 / 6.0;
        (self.runs as f64 / overs * 100.0).round() / 100.0
    }

    /// Runs per over still required, for a chasing innings.
    pub fn required_run_rate(&self, total_overs: u32) -> Option<f64> {
        let target = self.target?;
        let balls_left = (total_overs * 6).saturating_sub(self.balls);
        let overs_left = balls_left as f64 / 6.0;
        let runs_left = target.saturating_sub(self.runs) as f64;
        if overs_left > 0.0 {
            Some((runs_left / overs_left * 100.0).round() / 100.0)
        } else {
            Some(runs_left)
        }
    }

    /// Completed overs and balls into the current over, e.g. (14, 3) for
    /// "14.3 overs".
    pub fn overs_display(&self) -> (u32, u32) {
        (self.balls / 6, self.balls % 6)
    }

    pub fn current_over(&self) -> u32 {
        self.balls / 6
    }

    /// Swap the batters at the crease, carrying each batter's strategy
    /// with them.
    pub fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker, &mut self.non_striker);
        std::mem::swap(&mut self.striker_strategy, &mut self.non_striker_strategy);
    }

    pub fn settling_mut(&mut self, id: &PlayerId) -> &mut Settling {
        self.settling.entry(id.clone()).or_default()
    }

    pub fn settled_level(&self, id: &PlayerId) -> f64 {
        self.settling.get(id).map(|s| s.settled).unwrap_or(0.0)
    }

    pub fn overs_bowled_by(&self, id: &PlayerId) -> u32 {
        self.bowler_over_counts.get(id).copied().unwrap_or(0)
    }

    /// The partnership currently at the crease, creating it if this pair
    /// is new.
    pub fn active_partnership_mut(&mut self) -> &mut Partnership {
        let idx = self
            .partnerships
            .iter()
            .position(|p| p.involves(&self.striker, &self.non_striker));
        match idx {
            Some(i) => &mut self.partnerships[i],
            None => {
                self.partnerships.push(Partnership {
                    batter_one: self.striker.clone(),
                    batter_two: self.non_striker.clone(),
                    runs: 0,
                    balls: 0,
                });
                self.partnerships.last_mut().unwrap()
            }
        }
    }

    /// Batters yet to come in: not dismissed and not at the crease.
    pub fn remaining_batters(&self) -> Vec<PlayerId> {
        self.batting_order
            .iter()
            .filter(|id| {
                !self.fall_of_wickets.iter().any(|f| &f.batter == *id)
                    && **id != self.striker
                    && **id != self.non_striker
            })
            .cloned()
            .collect()
    }

    pub fn all_out(&self) -> bool {
        self.wickets >= 10
    }
}
