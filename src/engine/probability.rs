//! The outcome probability model. Converts full ball context into a
//! weighted distribution over the nine outcomes and samples one.
//!
//! `compute_weights` is a pure function over validated numeric context. It
//! never fails: after every adjustment pass the weights are floored at a
//! small positive epsilon so sampling always has a positive total.

use rand::Rng;

use crate::core::Player;

use super::innings::OverPhase;
use super::match_state::PitchType;
use super::outcome::{Outcome, Weights};
use super::strategy::Strategy;

/// Everything the model needs to know about one delivery.
#[derive(Debug, Clone, Copy)]
pub struct BallContext<'a> {
    pub striker: &'a Player,
    pub bowler: &'a Player,
    pub phase: OverPhase,
    pub batting_strategy: Strategy,
    pub bowling_strategy: Strategy,
    pub pitch: PitchType,
    /// 0-100
    pub pressure: f64,
    /// -100 to +100
    pub momentum: f64,
    /// 0-100
    pub settled_level: f64,
    pub human_batting: bool,
    pub human_bowling: bool,
}

/// Weights are floored here after all adjustments.
const MIN_WEIGHT: f64 = 0.05;

/// Tuned base distribution. Dot balls and singles dominate; wickets and
/// no-balls are rare.
fn base_weights() -> Weights {
    Weights::new([35.0, 25.0, 8.0, 1.0, 10.0, 4.0, 3.0, 1.5, 0.5])
}

fn apply_strategy(w: &mut Weights, ctx: &BallContext) {
    match ctx.batting_strategy {
        Strategy::Defensive => {
            w.scale(Outcome::Four, 0.60);
            w.scale(Outcome::Six, 0.50);
            w.scale(Outcome::Wicket, 0.65);
            w.scale(Outcome::Dot, 1.20);
        }
        Strategy::Aggressive => {
            w.scale(Outcome::Four, 1.45);
            w.scale(Outcome::Six, 1.60);
            w.scale(Outcome::Wicket, 1.35);
            w.scale(Outcome::Dot, 0.75);
        }
        Strategy::Normal => {}
    }

    match ctx.bowling_strategy {
        Strategy::Defensive => {
            w.scale(Outcome::Four, 0.75);
            w.scale(Outcome::Six, 0.75);
            w.scale(Outcome::Wicket, 0.80);
        }
        Strategy::Aggressive => {
            w.scale(Outcome::Wicket, 1.25);
            w.scale(Outcome::Four, 1.10);
            w.scale(Outcome::Six, 1.15);
        }
        Strategy::Normal => {}
    }
}

fn apply_phase(w: &mut Weights, phase: OverPhase) {
    match phase {
        OverPhase::Powerplay => {
            w.scale(Outcome::Four, 1.30);
            w.scale(Outcome::Six, 1.25);
            w.scale(Outcome::Wicket, 1.10);
        }
        OverPhase::Death => {
            w.scale(Outcome::Six, 1.75);
            w.scale(Outcome::Wicket, 1.40);
            w.scale(Outcome::Dot, 0.65);
        }
        OverPhase::Middle => {}
    }
}

fn apply_settling(w: &mut Weights, settled_level: f64) {
    let s = settled_level / 100.0;

    if s < 0.15 {
        // A fresh batter faces roughly double the wicket risk first ball.
        w.scale(Outcome::Wicket, 2.0 - s);
        w.scale(Outcome::Four, 0.5);
        w.scale(Outcome::Six, 0.3);
    } else if s > 0.7 {
        w.scale(Outcome::Wicket, 0.7);
        w.scale(Outcome::Four, 1.4 + s * 0.3);
        w.scale(Outcome::Six, 1.5 + s * 0.5);
    }
}

fn apply_pressure_and_momentum(w: &mut Weights, ctx: &BallContext) {
    // Experienced batters resist pressure roughly twice as well.
    let exp_factor = ctx.striker.experience as f64 / 100.0;
    let pressure_effect = (ctx.pressure / 100.0) * (2.0 - exp_factor * 1.5);

    w.scale(Outcome::Wicket, 1.0 + pressure_effect.max(0.0));
    w.scale(Outcome::Four, 1.0 - (pressure_effect * 0.5).max(0.0));
    w.scale(Outcome::Six, 1.0 - (pressure_effect * 0.7).max(0.0));

    let m = ctx.momentum / 100.0;
    if m > 0.0 {
        // Batting side has momentum: more boundaries, fewer wickets,
        // better strike rotation.
        w.scale(Outcome::Four, 1.0 + m * 0.6);
        w.scale(Outcome::Six, 1.0 + m * 0.8);
        w.scale(Outcome::Wicket, 1.0 - m * 0.4);
        w.scale(Outcome::Single, 1.0 + m * 0.2);
    } else if m < 0.0 {
        let am = m.abs();
        w.scale(Outcome::Wicket, 1.0 + am * 0.8);
        w.scale(Outcome::Dot, 1.0 + am * 0.3);
        w.scale(Outcome::Four, 1.0 - am * 0.5);
    }
}

fn apply_skills(w: &mut Weights, ctx: &BallContext) {
    let mut effective_bat = ctx.striker.batting_rating as f64;
    let mut effective_bowl = ctx.bowler.bowling_rating as f64;

    // Keep a human-vs-AI match balanced by shaving the AI side's
    // effective skill. AI-vs-AI matches are left untouched.
    if ctx.human_bowling && !ctx.human_batting {
        effective_bat *= 0.96;
    }
    if ctx.human_batting && !ctx.human_bowling {
        effective_bowl *= 0.96;
    }

    let diff = (effective_bat - effective_bowl) / 10.0;

    w.scale(Outcome::Four, 1.0 + diff * 0.25);
    w.scale(Outcome::Six, 1.0 + diff * 0.3);
    w.scale(Outcome::Wicket, 1.0 - diff * 0.25);

    // Elite batters convert dots into singles.
    if effective_bat >= 90.0 {
        w.scale(Outcome::Dot, 0.90);
        w.scale(Outcome::Single, 1.10);
    }
}

fn apply_pitch(w: &mut Weights, pitch: PitchType) {
    match pitch {
        PitchType::Batting => {
            w.scale(Outcome::Four, 1.20);
            w.scale(Outcome::Wicket, 0.80);
        }
        PitchType::Bowling => {
            w.scale(Outcome::Wicket, 1.30);
            w.scale(Outcome::Four, 0.80);
        }
        PitchType::Balanced => {}
    }
}

/// Build the outcome distribution for one delivery. Adjustment passes are
/// independent and multiplicative, applied in a fixed order.
pub fn compute_weights(ctx: &BallContext) -> Weights {
    let mut w = base_weights();

    apply_strategy(&mut w, ctx);
    apply_phase(&mut w, ctx.phase);
    apply_settling(&mut w, ctx.settled_level);
    apply_pressure_and_momentum(&mut w, ctx);
    apply_skills(&mut w, ctx);
    apply_pitch(&mut w, ctx.pitch);

    w.clamp_floor(MIN_WEIGHT);
    w
}

/// Standard weighted discrete sampling over the stable [`Outcome::ALL`]
/// order.
pub fn choose_outcome<R: Rng>(weights: &Weights, rng: &mut R) -> Outcome {
    let total = weights.total();
    let r = rng.random_range(0.0..total);
    let mut acc = 0.0;
    for out in Outcome::ALL {
        acc += weights[out];
        if r <= acc {
            return out;
        }
    }
    Outcome::Dot
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::core::{BowlingStyle, Player, PlayerId, PlayerStats, Role};

    use super::*;

    fn player(batting: u8, bowling: u8, experience: u8) -> Player {
        Player {
            id: PlayerId::new("p"),
            name: "Test Player".to_string(),
            role: Role::AllRounder,
            bowling_style: BowlingStyle::Pace,
            batting_rating: batting,
            bowling_rating: bowling,
            fielding_rating: 70,
            experience,
            fitness: 90,
            career: PlayerStats::default(),
        }
    }

    fn context<'a>(striker: &'a Player, bowler: &'a Player) -> BallContext<'a> {
        BallContext {
            striker,
            bowler,
            phase: OverPhase::Middle,
            batting_strategy: Strategy::Normal,
            bowling_strategy: Strategy::Normal,
            pitch: PitchType::Balanced,
            pressure: 0.0,
            momentum: 0.0,
            settled_level: 50.0,
            human_batting: false,
            human_bowling: false,
        }
    }

    #[test]
    fn test_weights_always_positive() {
        let striker = player(10, 10, 0);
        let bowler = player(10, 99, 100);

        // Stack every dampening factor at once. Weights must still be
        // strictly positive with a positive total.
        let ctx = BallContext {
            phase: OverPhase::Death,
            batting_strategy: Strategy::Defensive,
            bowling_strategy: Strategy::Defensive,
            pitch: PitchType::Bowling,
            pressure: 100.0,
            momentum: -100.0,
            settled_level: 0.0,
            ..context(&striker, &bowler)
        };
        let w = compute_weights(&ctx);
        for out in Outcome::ALL {
            assert!(w[out] > 0.0, "{:?} weight must be positive", out);
        }
        assert!(w.total() > 0.0);
    }

    #[test]
    fn test_degenerate_distribution() {
        let mut w = Weights::new([0.0; 9]);
        w[Outcome::Six] = 1.0;

        let mut rng = StdRng::seed_from_u64(420);
        for _ in 0..100 {
            assert_eq!(Outcome::Six, choose_outcome(&w, &mut rng));
        }
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let striker = player(80, 30, 60);
        let bowler = player(20, 85, 70);
        let w = compute_weights(&context(&striker, &bowler));

        let outcomes_one: Vec<Outcome> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..50).map(|_| choose_outcome(&w, &mut rng)).collect()
        };
        let outcomes_two: Vec<Outcome> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..50).map(|_| choose_outcome(&w, &mut rng)).collect()
        };
        assert_eq!(outcomes_one, outcomes_two);
    }

    #[test]
    fn test_aggressive_batting_raises_boundary_weight() {
        let striker = player(80, 30, 60);
        let bowler = player(20, 80, 70);

        let normal = compute_weights(&context(&striker, &bowler));
        let aggressive = compute_weights(&BallContext {
            batting_strategy: Strategy::Aggressive,
            ..context(&striker, &bowler)
        });

        assert!(aggressive[Outcome::Four] > normal[Outcome::Four]);
        assert!(aggressive[Outcome::Six] > normal[Outcome::Six]);
        assert!(aggressive[Outcome::Wicket] > normal[Outcome::Wicket]);
    }

    #[test]
    fn test_fresh_batter_faces_higher_wicket_risk() {
        let striker = player(80, 30, 60);
        let bowler = player(20, 80, 70);

        let fresh = compute_weights(&BallContext {
            settled_level: 0.0,
            ..context(&striker, &bowler)
        });
        let settled = compute_weights(&BallContext {
            settled_level: 90.0,
            ..context(&striker, &bowler)
        });

        assert!(fresh[Outcome::Wicket] > settled[Outcome::Wicket]);
        assert!(settled[Outcome::Six] > fresh[Outcome::Six]);
    }

    #[test]
    fn test_experience_resists_pressure() {
        let veteran = player(80, 30, 95);
        let rookie = player(80, 30, 10);
        let bowler = player(20, 80, 70);

        let veteran_w = compute_weights(&BallContext {
            pressure: 80.0,
            ..context(&veteran, &bowler)
        });
        let rookie_w = compute_weights(&BallContext {
            pressure: 80.0,
            ..context(&rookie, &bowler)
        });

        assert!(rookie_w[Outcome::Wicket] > veteran_w[Outcome::Wicket]);
    }

    #[test]
    fn test_ai_penalty_only_with_one_human_side() {
        let striker = player(80, 30, 60);
        let bowler = player(20, 80, 70);

        // Human bowling against an AI batter shaves the batter's
        // effective rating, so boundary weights drop.
        let balanced = compute_weights(&context(&striker, &bowler));
        let penalized = compute_weights(&BallContext {
            human_bowling: true,
            ..context(&striker, &bowler)
        });
        assert!(penalized[Outcome::Four] < balanced[Outcome::Four]);

        // Both sides human (or both AI) leaves ratings untouched.
        let both_human = compute_weights(&BallContext {
            human_batting: true,
            human_bowling: true,
            ..context(&striker, &bowler)
        });
        assert_eq!(balanced, both_human);
    }
}
