//! Ball-by-ball match simulation.
//!
//! The engine drives limited-overs matches delivery by delivery. Every
//! sampled outcome flows through a caller supplied [`rand::Rng`], so a
//! seeded generator replays any match exactly.
//!
//! ## Simulating a full match
//!
//! [`MatchSimulationBuilder`] validates the two elevens and, for AI-only
//! matches, performs the toss, leaving the match ready to play:
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use cricket_sim::core::random_xi;
//! use cricket_sim::engine::MatchSimulationBuilder;
//!
//! let mut rng = StdRng::seed_from_u64(420);
//! let home = random_xi(&mut rng, "Mumbai", "MUM");
//! let away = random_xi(&mut rng, "Chennai", "CHE");
//!
//! let mut sim = MatchSimulationBuilder::default()
//!     .home_team(home)
//!     .away_team(away)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! sim.run(&mut rng);
//! assert!(sim.state.is_completed());
//! println!("{:?} won by {:?}", sim.state.winner, sim.state.victory_margin);
//! ```
//!
//! ## Driving a match interactively
//!
//! Marking a side as human controlled suspends the match whenever a
//! decision is due. [`TransitionRequest`]s move it forward, and requests
//! that do not fit the current [`MatchPhase`](match_state::MatchPhase)
//! are rejected without changing any state:
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use cricket_sim::core::random_xi;
//! use cricket_sim::engine::{MatchSimulationBuilder, TransitionRequest};
//! use cricket_sim::engine::match_state::TossCall;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let home = random_xi(&mut rng, "Mumbai", "MUM");
//! let away = random_xi(&mut rng, "Chennai", "CHE");
//! let user = home.id.clone();
//!
//! let mut sim = MatchSimulationBuilder::default()
//!     .home_team(home)
//!     .away_team(away)
//!     .user_team(user)
//!     .build(&mut rng)
//!     .unwrap();
//!
//! // An over cannot be bowled before the toss.
//! assert!(sim.apply(TransitionRequest::RunOver, &mut rng).is_err());
//! sim.apply(TransitionRequest::PerformToss(TossCall::Heads), &mut rng)
//!     .unwrap();
//! ```
//!
//! ## League play
//!
//! [`RoundRobinCompetition`] schedules every pairing, runs the fixtures,
//! and keeps a points table with net run rate:
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use cricket_sim::core::random_xi;
//! use cricket_sim::engine::RoundRobinCompetition;
//! use cricket_sim::engine::match_state::MatchConfig;
//!
//! let mut rng = StdRng::seed_from_u64(11);
//! let teams = vec![
//!     random_xi(&mut rng, "Mumbai", "MUM"),
//!     random_xi(&mut rng, "Chennai", "CHE"),
//!     random_xi(&mut rng, "Kolkata", "KOL"),
//! ];
//! let mut comp = RoundRobinCompetition::new(teams, MatchConfig::default(), false).unwrap();
//! comp.run_all(&mut rng).unwrap();
//!
//! let standings = comp.standings();
//! assert_eq!(3, standings.len());
//! ```

pub mod bowler;
pub mod commentary;
pub mod competition;
pub mod dismissal;
pub mod errors;
pub mod event;
pub mod innings;
pub mod match_state;
pub mod momentum;
pub mod outcome;
pub mod probability;
pub mod sim_builder;
pub mod simulation;
pub mod strategy;
pub mod summary;
pub mod transition;

#[cfg(any(test, feature = "test-util"))]
pub mod test_util;

pub use competition::{Fixture, RoundRobinCompetition, StandingsEntry};
pub use errors::{SimulationError, TransitionError};
pub use event::{BallEvent, DismissalType, FallOfWicket, Partnership, WicketDetails};
pub use innings::{InningsState, OverPhase};
pub use match_state::{MatchConfig, MatchPhase, MatchState, PitchType};
pub use outcome::Outcome;
pub use sim_builder::MatchSimulationBuilder;
pub use simulation::MatchSimulation;
pub use strategy::Strategy;
pub use summary::{ManOfTheMatch, man_of_the_match};
pub use transition::TransitionRequest;
