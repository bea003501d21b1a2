use std::fmt;
use std::ops::{Index, IndexMut};

/// The nine discrete results a delivery can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Dot,
    Single,
    Two,
    Three,
    Four,
    Six,
    Wicket,
    Wide,
    NoBall,
}

impl Outcome {
    /// Every outcome in a fixed order. Weighted sampling iterates this
    /// array so tie-break behavior is deterministic for a seeded rng.
    pub const ALL: [Outcome; 9] = [
        Outcome::Dot,
        Outcome::Single,
        Outcome::Two,
        Outcome::Three,
        Outcome::Four,
        Outcome::Six,
        Outcome::Wicket,
        Outcome::Wide,
        Outcome::NoBall,
    ];

    /// Runs credited to the batting side for this outcome.
    pub fn runs(&self) -> u32 {
        match self {
            Outcome::Dot | Outcome::Wicket => 0,
            Outcome::Single | Outcome::Wide | Outcome::NoBall => 1,
            Outcome::Two => 2,
            Outcome::Three => 3,
            Outcome::Four => 4,
            Outcome::Six => 6,
        }
    }

    /// Wides and no-balls do not consume a legal delivery.
    pub fn is_extra(&self) -> bool {
        matches!(self, Outcome::Wide | Outcome::NoBall)
    }

    pub fn is_wicket(&self) -> bool {
        matches!(self, Outcome::Wicket)
    }

    /// Whether the batters cross after this delivery. Singles and threes
    /// swap ends, as do the extras (both are worth a single run here).
    pub fn rotates_strike(&self) -> bool {
        matches!(
            self,
            Outcome::Single | Outcome::Three | Outcome::Wide | Outcome::NoBall
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Dot => "0",
            Outcome::Single => "1",
            Outcome::Two => "2",
            Outcome::Three => "3",
            Outcome::Four => "4",
            Outcome::Six => "6",
            Outcome::Wicket => "W",
            Outcome::Wide => "Wd",
            Outcome::NoBall => "Nb",
        };
        write!(f, "{}", s)
    }
}

/// A probability weight for each outcome, indexed by [`Outcome`].
/// Weights are relative, not normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights([f64; 9]);

impl Weights {
    pub fn new(weights: [f64; 9]) -> Self {
        Self(weights)
    }

    pub fn scale(&mut self, outcome: Outcome, factor: f64) {
        self.0[outcome as usize] *= factor;
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Clamp every weight to at least `floor`. Sampling divides by the
    /// total, so weights must never all collapse to zero.
    pub fn clamp_floor(&mut self, floor: f64) {
        for w in self.0.iter_mut() {
            *w = w.max(floor);
        }
    }
}

impl Index<Outcome> for Weights {
    type Output = f64;

    fn index(&self, outcome: Outcome) -> &f64 {
        &self.0[outcome as usize]
    }
}

impl IndexMut<Outcome> for Weights {
    fn index_mut(&mut self, outcome: Outcome) -> &mut f64 {
        &mut self.0[outcome as usize]
    }
}
