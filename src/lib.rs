//! `cricket_sim` is a library for simulating limited-overs cricket matches
//! ball by ball.
//!
//! The probability of each delivery outcome is driven by player ratings,
//! batting and bowling strategy, pitch, match phase, batter settling, and the
//! momentum and pressure of the innings. All randomness flows through an
//! injected [`rand::Rng`] so simulations are reproducible from a seed.

/// Players, teams, ids and career statistics. Everything in core is
/// agnostic to how a match is actually simulated.
pub mod core;
/// The simulation engine: outcome model, innings and match state machines,
/// AI strategy, and competition helpers.
pub mod engine;
