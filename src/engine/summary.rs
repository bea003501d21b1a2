//! Post-match award: the man of the match.

use std::collections::HashMap;

use crate::core::PlayerId;
use crate::engine::match_state::MatchState;

/// The top performer of a completed match.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManOfTheMatch {
    pub player: PlayerId,
    pub name: String,
    pub points: f64,
}

#[derive(Default)]
struct Tally {
    runs: u32,
    wickets: u32,
    team_won: bool,
}

/// Score both innings and pick the best performer. Runs count 1.5 each
/// with bonuses at fifty and a hundred, wickets 25 each with bonuses at
/// three and five, plus a small edge for being on the winning side.
/// Returns `None` until the match is complete.
pub fn man_of_the_match(state: &MatchState) -> Option<ManOfTheMatch> {
    if !state.is_completed() {
        return None;
    }
    let innings = [state.innings1.as_ref()?, state.innings2.as_ref()?];

    let mut tallies: HashMap<PlayerId, Tally> = HashMap::new();
    for inn in innings {
        let batting_won = state.winner.as_ref() == Some(&inn.batting_team);
        let bowling_won = state.winner.as_ref() == Some(&inn.bowling_team);
        for e in &inn.events {
            let bat = tallies.entry(e.striker.clone()).or_default();
            bat.runs += e.runs;
            bat.team_won |= batting_won;

            let bowl = tallies.entry(e.bowler.clone()).or_default();
            bowl.team_won |= bowling_won;
            if e.wicket {
                bowl.wickets += 1;
            }
        }
    }

    let mut best: Option<(PlayerId, f64)> = None;
    for (id, t) in &tallies {
        let mut points = t.runs as f64 * 1.5;
        if t.runs >= 50 {
            points += 20.0;
        }
        if t.runs >= 100 {
            points += 30.0;
        }
        points += t.wickets as f64 * 25.0;
        if t.wickets >= 3 {
            points += 15.0;
        }
        if t.wickets >= 5 {
            points += 25.0;
        }
        if t.team_won {
            points += 10.0;
        }

        if best.as_ref().is_none_or(|(_, p)| points > *p) {
            best = Some((id.clone(), points));
        }
    }

    let (player, points) = best?;
    let name = state
        .home_team
        .player(&player)
        .or_else(|| state.away_team.player(&player))
        .map(|p| p.name.clone())
        .unwrap_or_default();
    Some(ManOfTheMatch {
        player,
        name,
        points,
    })
}
