use rand::Rng;

use crate::core::{Team, random_xi};

use super::innings::InningsState;
use super::match_state::MatchState;

/// Two fresh elevens ready for a match.
pub fn random_sides<R: Rng>(rng: &mut R) -> (Team, Team) {
    (
        random_xi(rng, "Mumbai", "MUM"),
        random_xi(rng, "Chennai", "CHE"),
    )
}

pub fn assert_valid_innings(inn: &InningsState, total_overs: u32) {
    assert!(inn.wickets <= 10);
    assert!(inn.balls <= total_overs * 6);

    // The scoreboard must reconcile with the event log.
    let event_runs: u32 = inn.events.iter().map(|e| e.runs).sum();
    assert_eq!(inn.runs, event_runs);
    let legal_balls = inn.events.iter().filter(|e| !e.outcome.is_extra()).count() as u32;
    assert_eq!(inn.balls, legal_balls);
    let wickets = inn.events.iter().filter(|e| e.wicket).count() as u8;
    assert_eq!(inn.wickets, wickets);

    // Partnerships partition the innings total.
    let partnership_runs: u32 = inn.partnerships.iter().map(|p| p.runs).sum();
    assert_eq!(inn.runs, partnership_runs);

    for (wicket_number, fall) in inn.fall_of_wickets.iter().enumerate() {
        assert_eq!(wicket_number as u8 + 1, fall.wickets);
    }
}

pub fn assert_valid_completed_match(state: &MatchState) {
    assert!(state.is_completed());
    let inn1 = state.innings1.as_ref().expect("first innings exists");
    let inn2 = state.innings2.as_ref().expect("second innings exists");
    assert_valid_innings(inn1, state.config.overs);
    assert_valid_innings(inn2, state.config.overs);

    assert_eq!(Some(inn1.runs + 1), inn2.target);
    assert_ne!(inn1.batting_team, inn2.batting_team);

    // A winner implies a margin; a tie has the fixed margin text.
    match &state.winner {
        Some(_) => assert!(state.victory_margin.is_some()),
        None => {
            if inn1.runs == inn2.runs {
                assert_eq!(Some("Match Tied".to_string()), state.victory_margin);
            }
        }
    }
}
