//! Builder for [`MatchSimulation`].

use rand::Rng;

use crate::core::{Team, TeamId};

use super::errors::SimulationError;
use super::match_state::{InningsNumber, MatchConfig, MatchPhase, MatchState};
use super::simulation::MatchSimulation;

/// # MatchSimulationBuilder
///
/// Builder to configure a match simulation. Two full elevens are required,
/// everything else is optional.
///
/// ## Setters
///
/// Each setter sets the optional value to the passed in value, then
/// returns the mutated builder.
///
/// Set `user_team` to one of the two team ids to make that side human
/// controlled; the match then starts in `AwaitingToss` and advances
/// through [`TransitionRequest`](super::TransitionRequest)s. Without it
/// the toss happens inside `build` and play is ready immediately.
///
/// ## Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use cricket_sim::core::random_xi;
/// use cricket_sim::engine::MatchSimulationBuilder;
///
/// let mut rng = StdRng::seed_from_u64(420);
/// let home = random_xi(&mut rng, "Mumbai", "MUM");
/// let away = random_xi(&mut rng, "Chennai", "CHE");
///
/// let mut sim = MatchSimulationBuilder::default()
///     .home_team(home)
///     .away_team(away)
///     .build(&mut rng)
///     .unwrap();
/// sim.run(&mut rng);
/// assert!(sim.state.is_completed());
/// ```
pub struct MatchSimulationBuilder {
    home: Option<Team>,
    away: Option<Team>,
    config: Option<MatchConfig>,
    user_team: Option<TeamId>,
}

impl MatchSimulationBuilder {
    pub fn home_team(mut self, team: Team) -> Self {
        self.home = Some(team);
        self
    }

    pub fn away_team(mut self, team: Team) -> Self {
        self.away = Some(team);
        self
    }

    /// Set the match configuration. Defaults to a T20 on a balanced
    /// pitch.
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Mark one side as human controlled.
    pub fn user_team(mut self, id: TeamId) -> Self {
        self.user_team = Some(id);
        self
    }

    /// Validate the rosters and create the simulation. AI-only matches
    /// have their toss performed here with the given rng.
    pub fn build<R: Rng>(self, rng: &mut R) -> Result<MatchSimulation, SimulationError> {
        let home = self.home.ok_or(SimulationError::MissingHomeTeam)?;
        let away = self.away.ok_or(SimulationError::MissingAwayTeam)?;
        let config = self.config.unwrap_or_default();

        if home.id == away.id {
            return Err(SimulationError::DuplicateTeam(home.id.to_string()));
        }
        for team in [&home, &away] {
            if team.players.len() != 11 {
                return Err(SimulationError::ShortTeam(
                    team.name.clone(),
                    team.players.len(),
                ));
            }
        }
        if config.overs == 0 {
            return Err(SimulationError::InvalidOvers(config.overs));
        }

        let phase = if self.user_team.is_some() {
            MatchPhase::AwaitingToss
        } else {
            MatchPhase::InPlay
        };

        let state = MatchState {
            id: uuid::Uuid::now_v7().to_string(),
            config,
            home_team: home,
            away_team: away,
            user_team: self.user_team,
            toss: None,
            innings1: None,
            innings2: None,
            current_innings: InningsNumber::First,
            commentary: Vec::new(),
            phase,
            winner: None,
            victory_margin: None,
        };

        let mut sim = MatchSimulation::new(state);
        if sim.state.user_team.is_none() {
            sim.ai_toss(rng);
        }
        Ok(sim)
    }
}

impl Default for MatchSimulationBuilder {
    fn default() -> Self {
        Self {
            home: None,
            away: None,
            config: None,
            user_team: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::core::random_xi;
    use crate::engine::match_state::PitchType;

    use super::*;

    #[test]
    fn test_build_needs_both_teams() {
        let mut rng = StdRng::seed_from_u64(420);
        let home = random_xi(&mut rng, "Mumbai", "MUM");

        let err = MatchSimulationBuilder::default()
            .home_team(home)
            .build(&mut rng)
            .unwrap_err();
        assert_eq!(SimulationError::MissingAwayTeam, err);

        let err = MatchSimulationBuilder::default()
            .build(&mut rng)
            .unwrap_err();
        assert_eq!(SimulationError::MissingHomeTeam, err);
    }

    #[test]
    fn test_build_rejects_short_roster() {
        let mut rng = StdRng::seed_from_u64(420);
        let home = random_xi(&mut rng, "Mumbai", "MUM");
        let mut away = random_xi(&mut rng, "Chennai", "CHE");
        away.players.pop();

        let err = MatchSimulationBuilder::default()
            .home_team(home)
            .away_team(away)
            .build(&mut rng)
            .unwrap_err();
        assert!(matches!(err, SimulationError::ShortTeam(_, 10)));
    }

    #[test]
    fn test_ai_match_is_ready_to_play() {
        let mut rng = StdRng::seed_from_u64(420);
        let home = random_xi(&mut rng, "Mumbai", "MUM");
        let away = random_xi(&mut rng, "Chennai", "CHE");

        let sim = MatchSimulationBuilder::default()
            .home_team(home)
            .away_team(away)
            .config(MatchConfig {
                overs: 10,
                pitch: PitchType::Bowling,
                ..MatchConfig::default()
            })
            .build(&mut rng)
            .unwrap();

        assert_eq!(MatchPhase::InPlay, sim.state.phase);
        assert!(sim.state.toss.is_some());
        let inn = sim.state.innings();
        assert_eq!(0, inn.runs);
        assert_eq!(2, inn.next_batter_index);
        assert_ne!(inn.batting_team, inn.bowling_team);
    }
}
