//! Bowler rotation heuristics.
//!
//! Wicketkeepers never bowl, nobody bowls consecutive overs, and nobody
//! exceeds the quota of `ceil(total_overs / 5)`. Among the eligible, the
//! choice is a suitability score driven by rating, role, and phase.

use std::collections::HashMap;

use crate::core::{BowlingStyle, PlayerId, Role, Team};

/// Maximum overs one bowler may deliver in an innings.
pub fn max_overs_per_bowler(total_overs: u32) -> u32 {
    total_overs.div_ceil(5)
}

/// Pick the bowler for `over`. `previous` is the bowler of the over just
/// finished (none before the first over). Deterministic: ties resolve to
/// roster order.
pub fn select_next_bowler(
    team: &Team,
    total_overs: u32,
    over: u32,
    previous: Option<&PlayerId>,
    over_counts: &HashMap<PlayerId, u32>,
) -> PlayerId {
    // Rotation uses a wider death window than batting intent: the last
    // five overs, so the best closers are held back in time.
    let is_death = over + 5 >= total_overs;
    let is_powerplay = over < 6;
    let max_overs = max_overs_per_bowler(total_overs);

    let mut best: Option<(&PlayerId, i32)> = None;
    for p in &team.players {
        if p.role == Role::WicketKeeper {
            continue;
        }
        if Some(&p.id) == previous {
            continue;
        }
        let bowled = over_counts.get(&p.id).copied().unwrap_or(0);
        if bowled >= max_overs {
            continue;
        }

        let mut score = p.bowling_rating as i32;
        let is_spinner = p.bowling_style == BowlingStyle::Spin;

        match p.role {
            Role::Bowler => score += 10,
            Role::AllRounder => score += 5,
            _ => {}
        }

        if is_death {
            if !is_spinner {
                score += 15;
            }
            if p.bowling_rating > 85 {
                score += 10;
            }
        } else if is_powerplay {
            if !is_spinner {
                score += 5;
            }
            if p.bowling_rating > 80 {
                score += 5;
            }
        } else if is_spinner {
            // Spinners operate through the middle overs.
            score += 15;
        }

        // Save the best pace for the death: a high-rated quick with overs
        // in reserve sits out the middle.
        if !is_death && !is_powerplay && !is_spinner && p.bowling_rating > 85 && bowled + 1 < max_overs
        {
            score -= 15;
        }

        if best.is_none_or(|(_, s)| score > s) {
            best = Some((&p.id, score));
        }
    }

    if let Some((id, _)) = best {
        return id.clone();
    }

    // Unreachable with a standard eleven; fall back to anyone who did
    // not bowl the previous over.
    team.players
        .iter()
        .find(|p| Some(&p.id) != previous)
        .map(|p| p.id.clone())
        .unwrap_or_else(|| team.players[0].id.clone())
}
