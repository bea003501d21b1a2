//! Ball-by-ball commentary lines for the match log.

use crate::core::Player;
use crate::engine::event::BallEvent;
use crate::engine::outcome::Outcome;

/// One line of commentary for a delivery, prefixed with its over.ball
/// position.
pub fn line_for(event: &BallEvent, striker: &Player, bowler: &Player) -> String {
    let base = format!("{}.{}: ", event.over, event.ball);
    if event.wicket
        && let Some(details) = &event.wicket_details
    {
        return format!("{base}OUT! {}", details.text);
    }

    let bowler_name = bowler.short_name();
    let bat_name = striker.short_name();
    match event.outcome {
        Outcome::Dot => format!("{base}{bowler_name} to {bat_name}, solid defense, no run."),
        Outcome::Four => {
            format!("{base}FOUR! Magnificently timed through the gap by {bat_name}!")
        }
        Outcome::Six => format!("{base}SIX! Put away into the stands with absolute power!"),
        Outcome::Wide => format!("{base}Wide ball, {bowler_name} missing the mark."),
        Outcome::NoBall => format!("{base}No Ball! Free hit coming up."),
        _ => {
            let plural = if event.runs > 1 { "s" } else { "" };
            format!(
                "{base}{} run{plural}, good rotation of strike by {bat_name}.",
                event.runs
            )
        }
    }
}
