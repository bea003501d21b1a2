//! External requests against a suspended match.
//!
//! A match with a human side pauses in the `Awaiting*` phases and resumes
//! when the right [`TransitionRequest`] arrives. Requests that do not fit
//! the current phase are rejected; the state is untouched on error.

use rand::Rng;

use crate::core::PlayerId;
use crate::engine::errors::TransitionError;
use crate::engine::match_state::{MatchPhase, TossCall, TossDecision};
use crate::engine::simulation::MatchSimulation;
use crate::engine::strategy::Strategy;

/// Everything the outside world may ask of a match in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionRequest {
    /// Call the coin. Only valid before the toss.
    PerformToss(TossCall),
    /// Elect to bat or bowl after winning the toss.
    ChooseTossDecision(TossDecision),
    /// Name the two opening batters, striker first.
    SelectOpeners {
        striker: PlayerId,
        non_striker: PlayerId,
    },
    /// Play out the current over.
    RunOver,
    /// Play the match through to its result.
    SimulateMatch,
    /// Send in a specific replacement after a wicket.
    SelectBatsman(PlayerId),
    /// Let the engine pick the replacement.
    AutoSelectBatsman,
    /// Hand the ball to a specific bowler for the coming over.
    SelectBowler(PlayerId),
    /// Override the human side's batting and bowling intent.
    ChangeStrategy {
        batting: Option<Strategy>,
        bowling: Option<Strategy>,
    },
}

impl MatchSimulation {
    /// Apply one request, advancing the phase machine. Phase-invalid
    /// requests return [`TransitionError::WrongPhase`] and leave the
    /// state unchanged.
    pub fn apply<R: Rng>(
        &mut self,
        request: TransitionRequest,
        rng: &mut R,
    ) -> Result<(), TransitionError> {
        if self.state.is_completed() {
            return Err(TransitionError::MatchComplete);
        }

        match request {
            TransitionRequest::PerformToss(call) => self.perform_toss(call, rng),
            TransitionRequest::ChooseTossDecision(decision) => self.choose_toss_decision(decision),
            TransitionRequest::SelectOpeners {
                striker,
                non_striker,
            } => self.select_openers(striker, non_striker),
            TransitionRequest::RunOver => {
                self.require_phase(MatchPhase::InPlay)?;
                self.simulate_over(rng);
                Ok(())
            }
            TransitionRequest::SimulateMatch => {
                self.run(rng);
                Ok(())
            }
            TransitionRequest::SelectBatsman(id) => self.select_batsman(id),
            TransitionRequest::AutoSelectBatsman => {
                self.require_phase(MatchPhase::AwaitingBatsman)?;
                self.auto_replace_batter();
                self.state.phase = MatchPhase::InPlay;
                Ok(())
            }
            TransitionRequest::SelectBowler(id) => self.select_bowler(id),
            TransitionRequest::ChangeStrategy { batting, bowling } => {
                self.change_strategy(batting, bowling)
            }
        }
    }

    fn require_phase(&self, phase: MatchPhase) -> Result<(), TransitionError> {
        if self.state.phase == phase {
            Ok(())
        } else {
            Err(TransitionError::WrongPhase {
                phase: self.state.phase,
            })
        }
    }

    /// Flip the coin against the human side's call. The winner decides;
    /// an AI winner decides on the spot and play moves on.
    fn perform_toss<R: Rng>(&mut self, call: TossCall, rng: &mut R) -> Result<(), TransitionError> {
        self.require_phase(MatchPhase::AwaitingToss)?;
        let user = self
            .state
            .user_team
            .clone()
            .expect("AwaitingToss implies a human side");
        let opponent = if user == self.state.home_team.id {
            self.state.away_team.id.clone()
        } else {
            self.state.home_team.id.clone()
        };

        let flip = if rng.random_bool(0.5) {
            TossCall::Heads
        } else {
            TossCall::Tails
        };
        let winner = if flip == call { user } else { opponent };

        if self.state.is_human(&winner) {
            self.state.toss = Some(crate::engine::match_state::Toss {
                winner,
                decision: TossDecision::Bat,
            });
            self.state.phase = MatchPhase::AwaitingTossDecision;
        } else {
            let decision = if rng.random_bool(0.5) {
                TossDecision::Bat
            } else {
                TossDecision::Bowl
            };
            self.settle_toss(winner, decision);
        }
        Ok(())
    }

    fn choose_toss_decision(&mut self, decision: TossDecision) -> Result<(), TransitionError> {
        self.require_phase(MatchPhase::AwaitingTossDecision)?;
        let winner = self
            .state
            .toss
            .as_ref()
            .expect("AwaitingTossDecision implies a settled coin")
            .winner
            .clone();
        self.settle_toss(winner, decision);
        Ok(())
    }

    fn select_openers(
        &mut self,
        striker: PlayerId,
        non_striker: PlayerId,
    ) -> Result<(), TransitionError> {
        self.require_phase(MatchPhase::AwaitingOpeners)?;
        if striker == non_striker {
            return Err(TransitionError::DuplicateOpeners(striker.to_string()));
        }

        let batting = self.pending_batting_team();
        let team = self.state.team(&batting);
        for id in [&striker, &non_striker] {
            if !team.contains(id) {
                return Err(TransitionError::UnknownPlayer(id.to_string()));
            }
        }

        // Openers first, the rest of the eleven in roster order.
        let mut order = vec![striker.clone(), non_striker.clone()];
        order.extend(
            team.players
                .iter()
                .map(|p| p.id.clone())
                .filter(|id| *id != striker && *id != non_striker),
        );
        self.begin_first_innings(order);
        Ok(())
    }

    fn select_batsman(&mut self, id: PlayerId) -> Result<(), TransitionError> {
        self.require_phase(MatchPhase::AwaitingBatsman)?;
        let inn = self.state.innings();
        let batting = inn.batting_team.clone();
        if !self.state.team(&batting).contains(&id) {
            return Err(TransitionError::UnknownPlayer(id.to_string()));
        }
        if !self.state.innings().remaining_batters().contains(&id) {
            return Err(TransitionError::AlreadyBatted(id.to_string()));
        }

        self.install_batter(id);
        self.state.phase = MatchPhase::InPlay;
        Ok(())
    }

    /// Only legal between overs: the incoming bowler must be a fresh,
    /// non-keeper bowler inside the quota.
    fn select_bowler(&mut self, id: PlayerId) -> Result<(), TransitionError> {
        self.require_phase(MatchPhase::InPlay)?;
        let inn = self.state.innings();
        if inn.balls % 6 != 0 {
            return Err(TransitionError::MidOver);
        }

        let bowling = inn.bowling_team.clone();
        let Some(player) = self.state.team(&bowling).player(&id) else {
            return Err(TransitionError::UnknownPlayer(id.to_string()));
        };
        let inn = self.state.innings();
        let quota =
            crate::engine::bowler::max_overs_per_bowler(self.state.config.overs);
        if player.is_wicket_keeper()
            || (inn.balls > 0 && inn.current_bowler == id)
            || inn.overs_bowled_by(&id) >= quota
        {
            return Err(TransitionError::IneligibleBowler(id.to_string()));
        }

        self.state.innings_mut().current_bowler = id;
        Ok(())
    }

    fn change_strategy(
        &mut self,
        batting: Option<Strategy>,
        bowling: Option<Strategy>,
    ) -> Result<(), TransitionError> {
        self.require_phase(MatchPhase::InPlay)?;
        let inn = self.state.innings_mut();
        if let Some(s) = batting {
            inn.batting_strategy = s;
            inn.striker_strategy = s;
            inn.non_striker_strategy = s;
        }
        if let Some(s) = bowling {
            inn.bowling_strategy = s;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::engine::sim_builder::MatchSimulationBuilder;
    use crate::engine::test_util::random_sides;

    use super::*;

    fn human_match(seed: u64) -> MatchSimulation {
        let mut rng = StdRng::seed_from_u64(seed);
        let (home, away) = random_sides(&mut rng);
        let user = home.id.clone();
        MatchSimulationBuilder::default()
            .home_team(home)
            .away_team(away)
            .user_team(user)
            .build(&mut rng)
            .expect("valid build")
    }

    #[test]
    fn test_human_match_waits_for_toss() {
        let sim = human_match(1);
        assert_eq!(MatchPhase::AwaitingToss, sim.state.phase);
        assert!(sim.state.innings1.is_none());
    }

    #[test]
    fn test_run_over_rejected_before_toss() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut sim = human_match(2);
        let err = sim.apply(TransitionRequest::RunOver, &mut rng).unwrap_err();
        assert_eq!(
            TransitionError::WrongPhase {
                phase: MatchPhase::AwaitingToss
            },
            err
        );
    }

    #[test]
    fn test_toss_flow_reaches_play() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sim = human_match(3);
        sim.apply(TransitionRequest::PerformToss(TossCall::Heads), &mut rng)
            .unwrap();

        if sim.state.phase == MatchPhase::AwaitingTossDecision {
            sim.apply(
                TransitionRequest::ChooseTossDecision(TossDecision::Bat),
                &mut rng,
            )
            .unwrap();
        }
        assert!(matches!(
            sim.state.phase,
            MatchPhase::AwaitingOpeners | MatchPhase::InPlay
        ));
    }

    #[test]
    fn test_duplicate_openers_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut sim = human_match(5);
        // Drive to AwaitingOpeners: keep tossing seeds until the human
        // side bats first.
        sim.apply(TransitionRequest::PerformToss(TossCall::Heads), &mut rng)
            .unwrap();
        if sim.state.phase == MatchPhase::AwaitingTossDecision {
            sim.apply(
                TransitionRequest::ChooseTossDecision(TossDecision::Bat),
                &mut rng,
            )
            .unwrap();
        }
        if sim.state.phase != MatchPhase::AwaitingOpeners {
            return;
        }

        let opener = sim.state.home_team.players[0].id.clone();
        let err = sim
            .apply(
                TransitionRequest::SelectOpeners {
                    striker: opener.clone(),
                    non_striker: opener,
                },
                &mut rng,
            )
            .unwrap_err();
        assert!(matches!(err, TransitionError::DuplicateOpeners(_)));
    }

    #[test]
    fn test_simulate_match_via_request() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut sim = human_match(8);
        sim.apply(TransitionRequest::SimulateMatch, &mut rng).unwrap();
        assert!(sim.state.is_completed());

        let err = sim
            .apply(TransitionRequest::RunOver, &mut rng)
            .unwrap_err();
        assert_eq!(TransitionError::MatchComplete, err);
    }

    #[test]
    fn test_select_bowler_rejects_keeper_and_mid_over() {
        let mut rng = StdRng::seed_from_u64(13);
        let (home, away) = random_sides(&mut rng);
        let keeper = away
            .players
            .iter()
            .find(|p| p.is_wicket_keeper())
            .unwrap()
            .id
            .clone();
        let mut sim = MatchSimulationBuilder::default()
            .home_team(home)
            .away_team(away)
            .build(&mut rng)
            .expect("valid build");

        // Before any ball is bowled the over boundary check passes, so
        // the keeper rejection is what fires.
        let bowling = sim.state.innings().bowling_team.clone();
        if sim.state.team(&bowling).contains(&keeper) {
            let err = sim
                .apply(TransitionRequest::SelectBowler(keeper), &mut rng)
                .unwrap_err();
            assert!(matches!(err, TransitionError::IneligibleBowler(_)));
        }

        sim.simulate_ball(&mut rng);
        if sim.state.innings().balls % 6 != 0 {
            let any = sim.state.team(&bowling).players[0].id.clone();
            let err = sim
                .apply(TransitionRequest::SelectBowler(any), &mut rng)
                .unwrap_err();
            assert_eq!(TransitionError::MidOver, err);
        }
    }

    #[test]
    fn test_change_strategy_sticks_for_human_side() {
        let mut rng = StdRng::seed_from_u64(21);
        let (home, away) = random_sides(&mut rng);
        let user = home.id.clone();
        let mut sim = MatchSimulationBuilder::default()
            .home_team(home)
            .away_team(away)
            .user_team(user.clone())
            .build(&mut rng)
            .expect("valid build");
        sim.apply(TransitionRequest::PerformToss(TossCall::Heads), &mut rng)
            .unwrap();
        if sim.state.phase == MatchPhase::AwaitingTossDecision {
            sim.apply(
                TransitionRequest::ChooseTossDecision(TossDecision::Bat),
                &mut rng,
            )
            .unwrap();
        }
        if sim.state.phase == MatchPhase::AwaitingOpeners {
            let striker = sim.state.team(&user).players[0].id.clone();
            let non_striker = sim.state.team(&user).players[1].id.clone();
            sim.apply(
                TransitionRequest::SelectOpeners {
                    striker,
                    non_striker,
                },
                &mut rng,
            )
            .unwrap();
        }
        if sim.state.phase != MatchPhase::InPlay {
            return;
        }

        sim.apply(
            TransitionRequest::ChangeStrategy {
                batting: Some(Strategy::Aggressive),
                bowling: None,
            },
            &mut rng,
        )
        .unwrap();

        // A human batting side keeps its chosen intent across balls.
        if sim.state.innings().batting_team == user {
            sim.simulate_ball(&mut rng);
            assert_eq!(Strategy::Aggressive, sim.state.innings().batting_strategy);
        }
    }
}
