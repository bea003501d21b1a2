//! Dismissal generation once the outcome engine has decided on a wicket.
//!
//! The mode of dismissal is drawn from a candidate list where context adds
//! duplicate entries, so a uniform pick becomes a weighted one.

use rand::Rng;

use crate::core::{BowlingStyle, Player, Team};
use crate::engine::event::{DismissalType, WicketDetails};
use crate::engine::innings::OverPhase;
use crate::engine::strategy::Strategy;

/// Build the details for a wicket ball: the mode, the fielder involved (a
/// random teammate of the bowler for catches and stumpings), and the
/// scorecard line.
pub fn generate_dismissal<R: Rng>(
    rng: &mut R,
    striker: &Player,
    bowler: &Player,
    fielding_team: &Team,
    batting_strategy: Strategy,
    phase: OverPhase,
) -> WicketDetails {
    let mut types = vec![DismissalType::Caught, DismissalType::Bowled, DismissalType::Lbw];

    if batting_strategy == Strategy::Aggressive {
        types.extend([
            DismissalType::Caught,
            DismissalType::Caught,
            DismissalType::Stumped,
        ]);
    }

    if phase == OverPhase::Death {
        types.extend([
            DismissalType::Caught,
            DismissalType::Caught,
            DismissalType::Bowled,
        ]);
    }

    let is_pace = bowler.bowling_style == BowlingStyle::Pace && bowler.bowling_rating > 75;
    if is_pace && batting_strategy == Strategy::Defensive {
        types.extend([DismissalType::Lbw, DismissalType::Bowled]);
    }

    let dismissal = types[rng.random_range(0..types.len())];

    let fielders: Vec<&Player> = fielding_team
        .players
        .iter()
        .filter(|p| p.id != bowler.id)
        .collect();
    let fielder = fielders[rng.random_range(0..fielders.len())];

    let bat_name = striker.short_name();
    let bowl_name = bowler.short_name();
    let text = match dismissal {
        DismissalType::Caught => {
            format!("{} c {} b {}", bat_name, fielder.short_name(), bowl_name)
        }
        DismissalType::Stumped => {
            format!("{} st {} b {}", bat_name, fielder.short_name(), bowl_name)
        }
        DismissalType::Bowled => format!("{} b {}", bat_name, bowl_name),
        DismissalType::Lbw => format!("{} lbw b {}", bat_name, bowl_name),
        DismissalType::HitWicket => format!("{} hit wicket b {}", bat_name, bowl_name),
        DismissalType::RunOut => format!("{} run out ({})", bat_name, fielder.short_name()),
    };

    let fielder_id = matches!(dismissal, DismissalType::Caught | DismissalType::Stumped)
        .then(|| fielder.id.clone());

    WicketDetails {
        dismissal,
        batter: striker.id.clone(),
        bowler: bowler.id.clone(),
        fielder: fielder_id,
        text,
    }
}
