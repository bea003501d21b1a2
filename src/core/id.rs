use std::fmt::Display;

use rand::Rng;

/// Identifies a player within a team roster. Ids are plain strings so that
/// callers can bring their own identifiers or use [`random_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(random_id(rng, "player"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a team. Used as a back-reference from innings state so that
/// an innings never owns either side's roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self(random_id(rng, "team"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn random_id<R: Rng>(rng: &mut R, prefix: &str) -> String {
    format!("{}-{}", prefix, random_string(rng, 6))
}

pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    (0..len)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_random_id_has_prefix() {
        let mut rng = StdRng::seed_from_u64(420);
        let id = random_id(&mut rng, "player");
        assert!(id.starts_with("player-"));
        assert_eq!("player-".len() + 6, id.len());
    }

    #[test]
    fn test_ids_replay_from_a_seed() {
        let ids_one: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..10).map(|_| random_id(&mut rng, "player")).collect()
        };
        let ids_two: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..10).map(|_| random_id(&mut rng, "player")).collect()
        };
        assert_eq!(ids_one, ids_two);
    }
}
