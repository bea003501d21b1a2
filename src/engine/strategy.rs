//! AI intent selection. Strategies are recomputed every ball for
//! AI-controlled sides so they react to the evolving chase and pressure
//! situation, not just at over boundaries.

use super::innings::{InningsState, OverPhase};
use super::match_state::MatchConfig;

/// Batting or bowling intent for the next delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Defensive,
    #[default]
    Normal,
    Aggressive,
}

/// Pick the batting intent for the current situation.
pub fn ai_batting_strategy(inn: &InningsState, config: &MatchConfig) -> Strategy {
    let total_balls = config.overs * 6;
    let balls_left = total_balls.saturating_sub(inn.balls);
    let overs_left = balls_left as f64 / 6.0;
    let wickets_left = 10 - inn.wickets;

    let Some(target) = inn.target else {
        // Setting a first-innings total.
        if inn.intent_phase == OverPhase::Powerplay && wickets_left > 8 {
            return Strategy::Aggressive;
        }
        if inn.intent_phase == OverPhase::Death && wickets_left > 3 {
            return Strategy::Aggressive;
        }
        if wickets_left < 3 && balls_left > 18 {
            return Strategy::Defensive;
        }
        return Strategy::Normal;
    };

    let runs_needed = target.saturating_sub(inn.runs) as f64;
    let rrr = if overs_left > 0.0 {
        runs_needed / overs_left
    } else {
        runs_needed
    };
    let current_rr = if inn.balls > 0 {
        inn.runs as f64 / (inn.balls as f64 / 6.0)
    } else {
        0.0
    };

    // Desperation: the asking rate has run away.
    if rrr > 10.0 {
        return Strategy::Aggressive;
    }

    // Comfortable chase. Cruise unless wickets are running out.
    if rrr < 6.0 {
        if wickets_left < 4 {
            return Strategy::Defensive;
        }
        return Strategy::Normal;
    }

    // Falling behind the rate.
    if rrr > current_rr + 2.0 {
        return Strategy::Aggressive;
    }

    // Last pair with a stiff ask: swing.
    if wickets_left < 2 && rrr > 8.0 {
        return Strategy::Aggressive;
    }

    // Consolidate after losing wickets with a manageable rate.
    if wickets_left < 4 && rrr < 8.0 {
        return Strategy::Defensive;
    }

    Strategy::Normal
}

/// Pick the bowling intent for the current situation.
pub fn ai_bowling_strategy(inn: &InningsState, config: &MatchConfig) -> Strategy {
    let wickets_left = 10 - inn.wickets;
    let momentum = inn.momentum;
    let total_balls = config.overs * 6;
    let balls_left = total_balls.saturating_sub(inn.balls);

    let Some(target) = inn.target else {
        // First innings: restrict at the death, hunt early wickets in
        // the powerplay. Strongly negative momentum means the batting
        // side is pinned down, so keep attacking.
        if inn.intent_phase == OverPhase::Death {
            return Strategy::Defensive;
        }
        if inn.intent_phase == OverPhase::Powerplay {
            return Strategy::Aggressive;
        }
        if wickets_left > 7 || momentum < -30.0 {
            return Strategy::Aggressive;
        }
        return Strategy::Normal;
    };

    // Defending a target.
    let overs_left = balls_left as f64 / 6.0;
    let runs_needed = target.saturating_sub(inn.runs) as f64;
    let rrr = if overs_left > 0.0 {
        runs_needed / overs_left
    } else {
        runs_needed
    };

    if balls_left <= 30 {
        // Final five overs. A high asking rate means tight bowling wins
        // the game; a comfortable chase means wickets are the only way.
        if rrr > 8.0 {
            return Strategy::Defensive;
        }
        return Strategy::Aggressive;
    }

    if rrr < 6.0 {
        return Strategy::Aggressive;
    }
    if rrr > 10.0 {
        return Strategy::Defensive;
    }

    Strategy::Normal
}
