//! League play: a round-robin of complete matches with a points table.

use std::collections::HashMap;

use rand::Rng;
use tracing::{Level, event, trace_span};

use crate::core::{Team, TeamId};
use crate::engine::errors::SimulationError;
use crate::engine::match_state::{MatchConfig, MatchState};
use crate::engine::sim_builder::MatchSimulationBuilder;

/// One scheduled match in the competition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fixture {
    pub home: TeamId,
    pub away: TeamId,
    pub completed: bool,
    pub winner: Option<TeamId>,
    pub margin: Option<String>,
}

/// A team's row in the points table. Two points for a win, one for a
/// tie. Net run rate uses the full over quota for any side bowled out.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandingsEntry {
    pub played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points: u32,
    pub runs_scored: u32,
    pub overs_faced: f64,
    pub runs_conceded: u32,
    pub overs_bowled: f64,
}

impl StandingsEntry {
    pub fn net_run_rate(&self) -> f64 {
        if self.overs_faced == 0.0 {
            return 0.0;
        }
        let rate_for = self.runs_scored as f64 / self.overs_faced;
        let rate_against = if self.overs_bowled == 0.0 {
            0.0
        } else {
            self.runs_conceded as f64 / self.overs_bowled
        };
        rate_for - rate_against
    }
}

/// Runs every fixture of a single or double round-robin and keeps the
/// table current. Careers accumulate on the competition's rosters across
/// matches.
#[derive(Debug, Clone)]
pub struct RoundRobinCompetition {
    teams: Vec<Team>,
    config: MatchConfig,
    fixtures: Vec<Fixture>,
    table: HashMap<TeamId, StandingsEntry>,
    next_fixture: usize,
}

impl RoundRobinCompetition {
    /// Schedule every pairing once, or home and away when `double_round`
    /// is set.
    pub fn new(
        teams: Vec<Team>,
        config: MatchConfig,
        double_round: bool,
    ) -> Result<Self, SimulationError> {
        for team in &teams {
            if team.players.len() != 11 {
                return Err(SimulationError::ShortTeam(
                    team.name.clone(),
                    team.players.len(),
                ));
            }
        }

        let mut fixtures = Vec::new();
        for i in 0..teams.len() {
            for j in (i + 1)..teams.len() {
                fixtures.push(Fixture {
                    home: teams[i].id.clone(),
                    away: teams[j].id.clone(),
                    completed: false,
                    winner: None,
                    margin: None,
                });
                if double_round {
                    fixtures.push(Fixture {
                        home: teams[j].id.clone(),
                        away: teams[i].id.clone(),
                        completed: false,
                        winner: None,
                        margin: None,
                    });
                }
            }
        }

        let table = teams
            .iter()
            .map(|t| (t.id.clone(), StandingsEntry::default()))
            .collect();

        Ok(Self {
            teams,
            config,
            fixtures,
            table,
            next_fixture: 0,
        })
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| &t.id == id)
    }

    /// Play the next unplayed fixture. Returns the final match state, or
    /// `None` once the schedule is exhausted.
    pub fn play_next<R: Rng>(&mut self, rng: &mut R) -> Result<Option<MatchState>, SimulationError> {
        let idx = self.next_fixture;
        if idx >= self.fixtures.len() {
            return Ok(None);
        }
        let span = trace_span!("fixture", index = idx);
        let _enter = span.enter();

        let home_id = self.fixtures[idx].home.clone();
        let away_id = self.fixtures[idx].away.clone();
        let home = self.team(&home_id).cloned().expect("fixture side exists");
        let away = self.team(&away_id).cloned().expect("fixture side exists");

        let mut sim = MatchSimulationBuilder::default()
            .home_team(home)
            .away_team(away)
            .config(self.config.clone())
            .build(rng)?;
        sim.run(rng);

        // Careers accrued during the match flow back to the league
        // roster copies.
        for updated in [&sim.state.home_team, &sim.state.away_team] {
            if let Some(team) = self.teams.iter_mut().find(|t| t.id == updated.id) {
                *team = updated.clone();
            }
        }

        self.record_result(idx, &sim.state);
        self.next_fixture += 1;
        event!(
            Level::INFO,
            home = %home_id,
            away = %away_id,
            winner = sim.state.winner.as_ref().map(|w| w.as_str()),
            "fixture complete"
        );
        Ok(Some(sim.state))
    }

    /// Play out the whole schedule.
    pub fn run_all<R: Rng>(&mut self, rng: &mut R) -> Result<(), SimulationError> {
        while self.play_next(rng)?.is_some() {}
        Ok(())
    }

    fn record_result(&mut self, idx: usize, state: &MatchState) {
        let fixture = &mut self.fixtures[idx];
        fixture.completed = true;
        fixture.winner = state.winner.clone();
        fixture.margin = state.victory_margin.clone();

        let inn1 = state.innings1.as_ref().expect("completed match");
        let inn2 = state.innings2.as_ref().expect("completed match");
        let quota = state.config.overs as f64;

        // A side bowled out is charged its full quota of overs.
        let effective = |inn: &crate::engine::innings::InningsState| {
            if inn.all_out() {
                quota
            } else {
                inn.balls as f64 / 6.0
            }
        };

        for (batting, bowling) in [(inn1, inn2), (inn2, inn1)] {
            let entry = self
                .table
                .entry(batting.batting_team.clone())
                .or_default();
            entry.played += 1;
            entry.runs_scored += batting.runs;
            entry.overs_faced += effective(batting);
            entry.runs_conceded += bowling.runs;
            entry.overs_bowled += effective(bowling);

            match &state.winner {
                Some(w) if *w == batting.batting_team => {
                    entry.wins += 1;
                    entry.points += 2;
                }
                Some(_) => entry.losses += 1,
                None => {
                    entry.ties += 1;
                    entry.points += 1;
                }
            }
        }
    }

    /// The table sorted by points, net run rate breaking ties.
    pub fn standings(&self) -> Vec<(TeamId, StandingsEntry)> {
        let mut rows: Vec<_> = self
            .table
            .iter()
            .map(|(id, e)| (id.clone(), e.clone()))
            .collect();
        rows.sort_by(|a, b| {
            b.1.points
                .cmp(&a.1.points)
                .then_with(|| b.1.net_run_rate().total_cmp(&a.1.net_run_rate()))
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::core::random_xi;

    use super::*;

    fn league(rng: &mut StdRng, n: usize) -> RoundRobinCompetition {
        let names = ["Mumbai", "Chennai", "Bangalore", "Kolkata", "Delhi", "Punjab"];
        let teams: Vec<Team> = names
            .iter()
            .take(n)
            .map(|name| random_xi(rng, name, &name[..3].to_uppercase()))
            .collect();
        RoundRobinCompetition::new(teams, MatchConfig::default(), false).unwrap()
    }

    #[test]
    fn test_fixture_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(6, league(&mut rng, 4).fixtures().len());

        let teams: Vec<Team> = (0..4)
            .map(|i| random_xi(&mut rng, &format!("Team {i}"), "T"))
            .collect();
        let double = RoundRobinCompetition::new(teams, MatchConfig::default(), true).unwrap();
        assert_eq!(12, double.fixtures().len());
    }

    #[test_log::test]
    fn test_points_conserved() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut comp = league(&mut rng, 4);
        comp.run_all(&mut rng).unwrap();

        let total_points: u32 = comp.standings().iter().map(|(_, e)| e.points).sum();
        assert_eq!(2 * comp.fixtures().len() as u32, total_points);

        for (_, entry) in comp.standings() {
            assert_eq!(entry.played, entry.wins + entry.losses + entry.ties);
            // Every side plays each other side once.
            assert_eq!(3, entry.played);
        }
    }

    #[test_log::test]
    fn test_standings_sorted_by_points() {
        let mut rng = StdRng::seed_from_u64(33);
        let mut comp = league(&mut rng, 4);
        comp.run_all(&mut rng).unwrap();

        let standings = comp.standings();
        for pair in standings.windows(2) {
            assert!(pair[0].1.points >= pair[1].1.points);
        }
    }

    #[test_log::test]
    fn test_careers_accumulate_across_fixtures() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut comp = league(&mut rng, 3);
        comp.run_all(&mut rng).unwrap();

        for team in &comp.teams {
            for p in &team.players {
                assert_eq!(2, p.career.matches);
            }
        }
    }

    #[test]
    fn test_nrr_zero_before_play() {
        let entry = StandingsEntry::default();
        assert_eq!(0.0, entry.net_run_rate());
    }
}
