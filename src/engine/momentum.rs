//! Momentum and pressure tracking after every delivery.
//!
//! Momentum lives on a -100..=100 scale from the batting side's point of
//! view; pressure is 0..=100 and is recomputed from scratch each ball
//! rather than accumulated.

use crate::engine::event::BallEvent;
use crate::engine::innings::InningsState;
use crate::engine::match_state::MatchConfig;
use crate::engine::outcome::Outcome;

const MOMENTUM_MAX: f64 = 100.0;
const MOMENTUM_MIN: f64 = -100.0;

/// Apply the momentum swing for `event`, then rebuild pressure from the
/// innings context. Call after the event has been pushed onto
/// `inn.events`.
pub fn update_pressure_and_momentum(
    event: &BallEvent,
    inn: &mut InningsState,
    config: &MatchConfig,
) {
    match event.outcome {
        Outcome::Four => inn.momentum = (inn.momentum + 12.0).min(MOMENTUM_MAX),
        Outcome::Six => inn.momentum = (inn.momentum + 18.0).min(MOMENTUM_MAX),
        Outcome::Dot => inn.momentum = (inn.momentum - 3.0).max(MOMENTUM_MIN),
        _ if event.wicket => inn.momentum = (inn.momentum - 45.0).max(MOMENTUM_MIN),
        _ => {}
    }

    // A big over (16+ off the last six deliveries) shifts the game.
    let over_runs: u32 = inn
        .events
        .iter()
        .rev()
        .take(6)
        .map(|e| e.runs)
        .sum();
    if over_runs > 15 {
        inn.momentum = (inn.momentum + 25.0).min(MOMENTUM_MAX);
    }

    if let Some(partnership) = inn.partnerships.last()
        && partnership.runs > 50
        && partnership.runs % 50 == 0
    {
        inn.momentum = (inn.momentum + 20.0).min(MOMENTUM_MAX);
    }

    let mut p = 0.0_f64;
    let total_balls = config.overs * 6;
    let balls_left = total_balls.saturating_sub(inn.balls);
    let overs_left = balls_left as f64 / 6.0;

    if let Some(target) = inn.target {
        let runs_left = target.saturating_sub(inn.runs);
        let rrr = if overs_left > 0.0 {
            ((runs_left as f64 / overs_left) * 100.0).round() / 100.0
        } else {
            runs_left as f64
        };
        p += ((rrr - 7.0) * 10.0).max(0.0);

        // End of a tight chase: needing more than a run a ball inside
        // the last three overs.
        if balls_left < 18 && runs_left > balls_left {
            p += 60.0;
        }
    }

    p += inn.wickets as f64 * 15.0;
    let recent_wickets = inn.events.iter().rev().take(12).filter(|e| e.wicket).count();
    p += recent_wickets as f64 * 25.0;

    inn.momentum *= 0.94;
    inn.pressure = p.floor().min(100.0);
}

/// Credit the active partnership with this delivery, creating a new one
/// if the pair at the crease changed. Returns a milestone commentary line
/// when the stand crosses 50 or 100.
pub fn update_partnership(inn: &mut InningsState, runs: u32, legal_ball: bool) -> Option<String> {
    let current = inn.active_partnership_mut();
    let prev_runs = current.runs;
    current.runs += runs;
    if legal_ball {
        current.balls += 1;
    }

    if current.runs >= 50 && prev_runs < 50 {
        Some("MILESTONE: A valuable 50-run partnership is established!".to_string())
    } else if current.runs >= 100 && prev_runs < 100 {
        Some(
            "INCREDIBLE: A massive 100-run partnership! The bowling side is under serious pressure now."
                .to_string(),
        )
    } else {
        None
    }
}
