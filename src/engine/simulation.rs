//! The match simulation driver.
//!
//! `MatchSimulation` owns a `MatchState` and advances it one delivery, one
//! over, or one whole match at a time. All randomness flows through the
//! caller supplied `Rng`, so a seeded generator replays a match exactly.

use rand::Rng;
use tracing::{Level, event, trace_span};

use crate::core::{PlayerId, TeamId};
use crate::engine::bowler::select_next_bowler;
use crate::engine::commentary;
use crate::engine::dismissal::generate_dismissal;
use crate::engine::event::{BallEvent, ExtraType, FallOfWicket};
use crate::engine::innings::{InningsState, phase_for_ball};
use crate::engine::match_state::{
    InningsNumber, MatchPhase, MatchState, Toss, TossDecision,
};
use crate::engine::momentum::{update_partnership, update_pressure_and_momentum};
use crate::engine::outcome::Outcome;
use crate::engine::probability::{BallContext, choose_outcome, compute_weights};
use crate::engine::strategy::{Strategy, ai_batting_strategy, ai_bowling_strategy};

/// Drives one match from toss to result.
///
/// Build one with [`MatchSimulationBuilder`](crate::engine::MatchSimulationBuilder).
/// AI-only matches go straight to `InPlay`; matches with a human side start
/// in `AwaitingToss` and advance through
/// [`TransitionRequest`](crate::engine::TransitionRequest)s.
#[derive(Debug, Clone)]
pub struct MatchSimulation {
    pub state: MatchState,
}

impl MatchSimulation {
    pub(crate) fn new(state: MatchState) -> Self {
        Self { state }
    }

    /// Simulate a single delivery. Interactive: a wicket with the human
    /// side batting suspends the match in `AwaitingBatsman`.
    pub fn simulate_ball<R: Rng>(&mut self, rng: &mut R) -> BallEvent {
        self.ball(rng, true)
    }

    fn ball<R: Rng>(&mut self, rng: &mut R, interactive: bool) -> BallEvent {
        let config = self.state.config.clone();

        // Per-ball bookkeeping on the innings before the draw: settling
        // trackers, intent phase, and a fresh AI strategy read for any
        // side not under human control.
        let inn = self.state.innings_mut();
        let striker_id = inn.striker.clone();
        let non_striker_id = inn.non_striker.clone();
        let bowler_id = inn.current_bowler.clone();
        let batting_team_id = inn.batting_team.clone();
        let bowling_team_id = inn.bowling_team.clone();
        inn.settling_mut(&striker_id);
        inn.settling_mut(&non_striker_id);
        inn.intent_phase = phase_for_ball(inn.balls, config.overs);

        let user_batting = self.state.is_human(&batting_team_id);
        let user_bowling = self.state.is_human(&bowling_team_id);

        let inn = self.state.innings_mut();
        if !user_batting {
            let fresh = ai_batting_strategy(inn, &config);
            inn.striker_strategy = fresh;
            inn.non_striker_strategy = fresh;
        }
        if !user_bowling {
            inn.bowling_strategy = ai_bowling_strategy(inn, &config);
        }

        let batting_strategy = inn.striker_strategy;
        let bowling_strategy = inn.bowling_strategy;
        let phase = inn.intent_phase;
        let pressure = inn.pressure;
        let momentum = inn.momentum;
        let settled_level = inn.settled_level(&striker_id);
        let over = inn.current_over();
        let ball_in_over = (inn.balls % 6) as u8 + 1;

        let striker = self
            .state
            .team(&batting_team_id)
            .player(&striker_id)
            .cloned()
            .unwrap_or_else(|| panic!("striker {striker_id} not in batting side"));
        let bowler = self
            .state
            .team(&bowling_team_id)
            .player(&bowler_id)
            .cloned()
            .unwrap_or_else(|| panic!("bowler {bowler_id} not in bowling side"));

        let mut weights = compute_weights(&BallContext {
            striker: &striker,
            bowler: &bowler,
            phase,
            batting_strategy,
            bowling_strategy,
            pitch: config.pitch,
            pressure,
            momentum,
            settled_level,
            human_batting: user_batting,
            human_bowling: user_bowling,
        });

        // Two fixed tuning nudges on top of the model: Normal keeps the
        // board ticking, Aggressive avoids instant collapses.
        match batting_strategy {
            Strategy::Normal => {
                weights.scale(Outcome::Single, 1.15);
                weights.scale(Outcome::Dot, 0.9);
            }
            Strategy::Aggressive => weights.scale(Outcome::Wicket, 0.85),
            Strategy::Defensive => {}
        }

        let outcome = choose_outcome(&weights, rng);
        let runs = outcome.runs();
        let is_extra = outcome.is_extra();

        let mut event = BallEvent {
            over,
            ball: ball_in_over,
            outcome,
            runs,
            wicket: outcome.is_wicket(),
            wicket_details: None,
            extra: match outcome {
                Outcome::Wide => Some(ExtraType::Wide),
                Outcome::NoBall => Some(ExtraType::NoBall),
                _ => None,
            },
            striker: striker_id.clone(),
            non_striker: non_striker_id.clone(),
            bowler: bowler_id.clone(),
            batting_strategy,
            bowling_strategy,
            text: String::new(),
        };

        if event.wicket {
            event.wicket_details = Some(generate_dismissal(
                rng,
                &striker,
                &bowler,
                self.state.team(&bowling_team_id),
                batting_strategy,
                phase,
            ));
        }

        event.text = commentary::line_for(&event, &striker, &bowler);

        self.apply_career(&event, &batting_team_id, &bowling_team_id);

        let inn = self.state.innings_mut();
        if !is_extra {
            let settle_speed = match batting_strategy {
                Strategy::Defensive => 8.0,
                Strategy::Normal => 5.0,
                Strategy::Aggressive => 2.0,
            };
            let settling = inn.settling_mut(&striker_id);
            settling.balls += 1;
            settling.settled = (settling.settled + settle_speed).min(100.0);
        }

        inn.events.push(event.clone());
        update_pressure_and_momentum(&event, inn, &config);
        let milestone = update_partnership(inn, runs, !is_extra);

        let over_idx = inn.current_over() as usize;
        while inn.over_outcomes.len() <= over_idx {
            inn.over_outcomes.push(Vec::new());
        }
        inn.over_outcomes[over_idx].push(outcome);
        inn.runs += runs;

        if event.wicket {
            inn.wickets += 1;
            inn.fall_of_wickets.push(FallOfWicket {
                runs: inn.runs,
                wickets: inn.wickets,
                ball: inn.balls,
                batter: striker_id.clone(),
                bowler: bowler_id.clone(),
                dismissal: event
                    .wicket_details
                    .as_ref()
                    .map(|d| d.dismissal)
                    .unwrap_or(crate::engine::event::DismissalType::Bowled),
            });

            if interactive && user_batting && inn.next_batter_index < 11 {
                self.state.phase = MatchPhase::AwaitingBatsman;
            } else if self.state.innings().next_batter_index < 11 {
                self.auto_replace_batter();
            }
        } else if outcome.rotates_strike() {
            inn.swap_strike();
        }

        let inn = self.state.innings_mut();
        if !is_extra {
            inn.balls += 1;
            if inn.balls % 6 == 0 {
                *inn.bowler_over_counts.entry(bowler_id).or_insert(0) += 1;
            }
        }
        inn.run_rate = inn.current_run_rate();

        self.state.commentary.push(event.text.clone());
        if let Some(line) = milestone {
            self.state.commentary.push(line);
        }

        event
    }

    /// Simulate deliveries until the current over ends, the innings ends,
    /// or a human batting side loses a wicket and the match suspends.
    /// Handles the over-boundary strike swap and bowler change, and rolls
    /// an ended innings over to the next one (or to the result).
    pub fn simulate_over<R: Rng>(&mut self, rng: &mut R) -> Vec<Outcome> {
        self.over(rng, true)
    }

    fn over<R: Rng>(&mut self, rng: &mut R, interactive: bool) -> Vec<Outcome> {
        let span = trace_span!("over", innings = ?self.state.current_innings);
        let _enter = span.enter();

        let total_balls = self.state.config.overs * 6;
        let start_over = self.state.innings().current_over();
        let mut outcomes = Vec::new();

        loop {
            let inn = self.state.innings();
            if inn.completed
                || inn.current_over() != start_over
                || self.state.phase == MatchPhase::AwaitingBatsman
            {
                break;
            }

            let event = self.ball(rng, interactive);
            outcomes.push(event.outcome);

            let inn = self.state.innings_mut();
            let chase_done = inn.target.is_some_and(|t| inn.runs >= t);
            if inn.all_out() || chase_done || inn.balls >= total_balls {
                inn.completed = true;
                break;
            }
        }

        let inn = self.state.innings();
        let over_done = inn.balls % 6 == 0;
        if !inn.completed && over_done && self.state.phase != MatchPhase::AwaitingBatsman {
            let bowling_team_id = inn.bowling_team.clone();
            let over = inn.current_over();
            let previous = inn.current_bowler.clone();
            let next = select_next_bowler(
                self.state.team(&bowling_team_id),
                self.state.config.overs,
                over,
                Some(&previous),
                &inn.bowler_over_counts,
            );
            let inn = self.state.innings_mut();
            inn.swap_strike();
            inn.current_bowler = next;
        }

        let innings_done = self.state.innings().completed;
        if innings_done && self.state.phase == MatchPhase::AwaitingBatsman {
            // A wicket on the innings' last ball needs no replacement.
            self.state.phase = MatchPhase::InPlay;
        }
        match self.state.current_innings {
            InningsNumber::First if innings_done && self.state.innings2.is_none() => {
                event!(Level::DEBUG, runs = self.state.innings().runs, "innings break");
                self.start_second_innings();
            }
            InningsNumber::Second if innings_done => self.complete_match(),
            _ => {}
        }

        outcomes
    }

    /// Run the remainder of the match without suspending. Any pending
    /// toss, opener, or replacement decision is resolved automatically.
    pub fn run<R: Rng>(&mut self, rng: &mut R) {
        let span = trace_span!("match", id = %self.state.id);
        let _enter = span.enter();

        while !self.state.is_completed() {
            self.auto_advance(rng);
            if self.state.phase == MatchPhase::InPlay {
                self.over(rng, false);
            }
        }
    }

    /// Resolve any awaiting phase without human input.
    fn auto_advance<R: Rng>(&mut self, rng: &mut R) {
        match self.state.phase {
            MatchPhase::AwaitingToss | MatchPhase::AwaitingTossDecision => {
                self.ai_toss(rng);
            }
            MatchPhase::AwaitingOpeners => {
                let batting = self.pending_batting_team();
                let order = self.state.team(&batting).batting_order();
                self.begin_first_innings(order);
            }
            MatchPhase::AwaitingBatsman => {
                self.auto_replace_batter();
                self.state.phase = MatchPhase::InPlay;
            }
            MatchPhase::InPlay | MatchPhase::Completed => {}
        }
    }

    /// Toss with no human input: random winner if the coin has not been
    /// called yet, random decision either way.
    pub(crate) fn ai_toss<R: Rng>(&mut self, rng: &mut R) {
        let winner = match self.state.toss.as_ref() {
            Some(toss) => toss.winner.clone(),
            None => {
                if rng.random_bool(0.5) {
                    self.state.home_team.id.clone()
                } else {
                    self.state.away_team.id.clone()
                }
            }
        };
        let decision = if rng.random_bool(0.5) {
            TossDecision::Bat
        } else {
            TossDecision::Bowl
        };
        self.settle_toss(winner, decision);
    }

    /// Record the toss and either hand the opener choice to the human
    /// batting side or start the first innings directly.
    pub(crate) fn settle_toss(&mut self, winner: TeamId, decision: TossDecision) {
        self.state.toss = Some(Toss {
            winner: winner.clone(),
            decision,
        });
        event!(Level::DEBUG, winner = %winner, ?decision, "toss settled");

        let batting = self.pending_batting_team();
        if self.state.is_human(&batting) {
            self.state.phase = MatchPhase::AwaitingOpeners;
        } else {
            let order = self.state.team(&batting).batting_order();
            self.begin_first_innings(order);
        }
    }

    /// The side due to bat first, per the recorded toss.
    pub(crate) fn pending_batting_team(&self) -> TeamId {
        let toss = self.state.toss.as_ref().expect("toss not yet settled");
        let loser = if toss.winner == self.state.home_team.id {
            self.state.away_team.id.clone()
        } else {
            self.state.home_team.id.clone()
        };
        match toss.decision {
            TossDecision::Bat => toss.winner.clone(),
            TossDecision::Bowl => loser,
        }
    }

    pub(crate) fn begin_first_innings(&mut self, order: Vec<PlayerId>) {
        let batting = self.pending_batting_team();
        let bowling = if batting == self.state.home_team.id {
            self.state.away_team.id.clone()
        } else {
            self.state.home_team.id.clone()
        };
        let opening_bowler = select_next_bowler(
            self.state.team(&bowling),
            self.state.config.overs,
            0,
            None,
            &Default::default(),
        );
        self.state.innings1 = Some(InningsState::new(batting, bowling, order, opening_bowler));
        self.state.current_innings = InningsNumber::First;
        self.state.phase = MatchPhase::InPlay;
    }

    /// Swap the sides over and set the chase target.
    pub(crate) fn start_second_innings(&mut self) {
        let first = self.state.innings1.as_ref().expect("no first innings");
        let batting = first.bowling_team.clone();
        let bowling = first.batting_team.clone();
        let target = first.runs + 1;

        let order = self.state.team(&batting).batting_order();
        let opening_bowler = select_next_bowler(
            self.state.team(&bowling),
            self.state.config.overs,
            0,
            None,
            &Default::default(),
        );
        let mut innings = InningsState::new(batting, bowling, order, opening_bowler);
        innings.target = Some(target);
        event!(Level::DEBUG, target, "second innings under way");

        self.state.innings2 = Some(innings);
        self.state.current_innings = InningsNumber::Second;
    }

    /// Send in the highest-rated batter still in the shed.
    pub(crate) fn auto_replace_batter(&mut self) {
        let inn = self.state.innings();
        let batting_team = self.state.team(&inn.batting_team);
        let best = inn
            .remaining_batters()
            .into_iter()
            .filter_map(|id| batting_team.player(&id))
            .max_by_key(|p| p.batting_rating)
            .map(|p| p.id.clone());

        if let Some(id) = best {
            let inn = self.state.innings_mut();
            inn.striker = id;
            inn.next_batter_index += 1;
        }
    }

    /// Install a specific replacement batter at the striker's end.
    pub(crate) fn install_batter(&mut self, id: PlayerId) {
        let inn = self.state.innings_mut();
        inn.striker = id;
        inn.next_batter_index += 1;
    }

    fn apply_career(&mut self, event: &BallEvent, batting: &TeamId, bowling: &TeamId) {
        let bat_team = self.state.team_mut(batting);
        if let Some(batter) = bat_team.player_mut(&event.striker) {
            if event.outcome != Outcome::Wide {
                batter.career.balls += 1;
            }
            batter.career.runs += event.runs;
            match event.outcome {
                Outcome::Four => batter.career.fours += 1,
                Outcome::Six => batter.career.sixes += 1,
                Outcome::Wicket => batter.career.outs += 1,
                _ => {}
            }
        }

        let bowl_team = self.state.team_mut(bowling);
        if let Some(bowler) = bowl_team.player_mut(&event.bowler) {
            if event.wicket {
                bowler.career.wickets += 1;
            }
            if !event.outcome.is_extra() {
                bowler.career.balls_bowled += 1;
            }
            bowler.career.runs_conceded += event.runs;
        }

        // Catches and stumpings go on the fielder's card.
        if let Some(details) = &event.wicket_details
            && let Some(fielder_id) = &details.fielder
            && let Some(fielder) = self.state.team_mut(bowling).player_mut(fielder_id)
        {
            use crate::engine::event::DismissalType;
            match details.dismissal {
                DismissalType::Caught => fielder.career.catches += 1,
                DismissalType::Stumped => fielder.career.stumpings += 1,
                _ => {}
            }
        }
    }

    /// Settle the result and roll per-match career aggregates.
    fn complete_match(&mut self) {
        let (winner, margin) = self.determine_winner();
        self.state.winner = winner.clone();
        self.state.victory_margin = margin.clone();
        self.state.phase = MatchPhase::Completed;
        self.finalize_careers();
        event!(
            Level::INFO,
            winner = winner.as_ref().map(|w| w.as_str()),
            margin = margin.as_deref(),
            "match complete"
        );
    }

    /// Chasing side reaching the target wins by wickets in hand; falling
    /// short hands the defenders a runs margin; level scores tie.
    fn determine_winner(&self) -> (Option<TeamId>, Option<String>) {
        let inn1 = self.state.innings1.as_ref().expect("no first innings");
        let inn2 = self.state.innings2.as_ref().expect("no second innings");

        if inn2.target.is_some_and(|t| inn2.runs >= t) {
            let wickets = 10 - inn2.wickets;
            let plural = if wickets == 1 { "" } else { "s" };
            return (
                Some(inn2.batting_team.clone()),
                Some(format!("{wickets} wicket{plural}")),
            );
        }
        if inn1.runs > inn2.runs {
            let runs = inn1.runs - inn2.runs;
            let plural = if runs == 1 { "" } else { "s" };
            return (
                Some(inn1.batting_team.clone()),
                Some(format!("{runs} run{plural}")),
            );
        }
        if inn1.runs == inn2.runs {
            return (None, Some("Match Tied".to_string()));
        }
        (None, None)
    }

    /// Per-match rollups: appearances, fifties and hundreds, five-wicket
    /// hauls. Ball-level counters were already applied as play went.
    fn finalize_careers(&mut self) {
        for number in [InningsNumber::First, InningsNumber::Second] {
            let inn = match number {
                InningsNumber::First => self.state.innings1.clone(),
                InningsNumber::Second => self.state.innings2.clone(),
            };
            let Some(inn) = inn else { continue };

            let mut runs: std::collections::HashMap<PlayerId, u32> = Default::default();
            let mut wickets: std::collections::HashMap<PlayerId, u32> = Default::default();
            for e in &inn.events {
                *runs.entry(e.striker.clone()).or_insert(0) += e.runs;
                if e.wicket {
                    *wickets.entry(e.bowler.clone()).or_insert(0) += 1;
                }
            }

            let bat_team = self.state.team_mut(&inn.batting_team);
            for (id, r) in &runs {
                if let Some(p) = bat_team.player_mut(id) {
                    if *r >= 100 {
                        p.career.hundreds += 1;
                    } else if *r >= 50 {
                        p.career.fifties += 1;
                    }
                }
            }
            let bowl_team = self.state.team_mut(&inn.bowling_team);
            for (id, w) in &wickets {
                if let Some(p) = bowl_team.player_mut(id)
                    && *w >= 5
                {
                    p.career.five_wicket_hauls += 1;
                }
            }
        }

        for team in [&mut self.state.home_team, &mut self.state.away_team] {
            for p in &mut team.players {
                p.career.matches += 1;
            }
        }
    }
}
