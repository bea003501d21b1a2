use super::{Player, PlayerId, TeamId};

/// A playing side. The roster is owned exclusively; match state refers back
/// to a team only by [`TeamId`]. Roster order is the batting order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Short code used in results, e.g. "IND".
    pub short: String,
    pub batting_rating: u8,
    pub bowling_rating: u8,
    pub players: Vec<Player>,
    /// Only meaningful in auction and career contexts.
    pub budget: Option<f64>,
}

impl Team {
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.players.iter().any(|p| &p.id == id)
    }

    /// Roster order doubles as the default batting order.
    pub fn batting_order(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    /// Recompute the aggregate ratings from the current roster.
    pub fn refresh_ratings(&mut self) {
        if self.players.is_empty() {
            return;
        }
        let n = self.players.len() as u32;
        let bat: u32 = self.players.iter().map(|p| p.batting_rating as u32).sum();
        let bowl: u32 = self.players.iter().map(|p| p.bowling_rating as u32).sum();
        self.batting_rating = (bat / n) as u8;
        self.bowling_rating = (bowl / n) as u8;
    }
}
