mod generate;
mod id;
mod player;
mod stats;
mod team;

pub use generate::{random_player, random_xi};
pub use id::{PlayerId, TeamId, random_id, random_string};
pub use player::{BowlingStyle, Player, Role};
pub use stats::PlayerStats;
pub use team::Team;
