//! Random roster generation for quick matches and tests.

use rand::Rng;

use super::{BowlingStyle, Player, PlayerId, PlayerStats, Role, Team, TeamId, random_id};

const FIRST_NAMES: &[&str] = &[
    "Rahul", "Virat", "Rohit", "Jasprit", "Hardik", "Rishabh", "Shubman", "Ishan", "Suryakumar",
    "Ravindra", "Mohammed", "Shreyas", "Axar", "Kuldeep", "Yuzvendra", "Sanju", "Ruturaj",
    "Yashasvi", "Tilak", "Rinku", "Arshdeep", "Umran", "Avesh", "Shardul", "Washington", "Deepak",
    "Prasidh",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Kohli", "Singh", "Bumrah", "Pandya", "Pant", "Gill", "Kishan", "Yadav", "Jadeja",
    "Shami", "Iyer", "Patel", "Samson", "Gaikwad", "Jaiswal", "Varma", "Chahal", "Kumar", "Chahar",
    "Krishna", "Siraj", "Thakur", "Sundar", "Hooda", "Tripathi", "Ahmed", "Khan", "Malik",
];

fn random_name<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    format!("{} {}", first, last)
}

/// Generate a player with role-appropriate rating ranges.
pub fn random_player<R: Rng>(rng: &mut R, role: Role) -> Player {
    let (bat, bowl) = match role {
        Role::Batter => (rng.random_range(75..=90), rng.random_range(20..=50)),
        Role::Bowler => (rng.random_range(10..=40), rng.random_range(75..=90)),
        Role::AllRounder => (rng.random_range(65..=85), rng.random_range(65..=85)),
        Role::WicketKeeper => (rng.random_range(70..=88), rng.random_range(10..=30)),
    };
    let age: u8 = rng.random_range(18..=38);
    let bowling_style = if rng.random_bool(0.35) {
        BowlingStyle::Spin
    } else {
        BowlingStyle::Pace
    };

    Player {
        id: PlayerId::random(rng),
        name: random_name(rng),
        role,
        bowling_style,
        batting_rating: bat,
        bowling_rating: bowl,
        fielding_rating: rng.random_range(60..=95),
        experience: (((age - 18) as u32 * 5) + rng.random_range(0..=20)).min(100) as u8,
        fitness: rng.random_range(70..=100),
        career: PlayerStats::default(),
    }
}

/// Generate an eleven in batting order: four batters, a keeper, two
/// all-rounders and four bowlers. Enough non-keeper bowling options to
/// always satisfy the over quota.
pub fn random_xi<R: Rng>(rng: &mut R, name: &str, short: &str) -> Team {
    let mut players = Vec::with_capacity(11);
    for _ in 0..4 {
        players.push(random_player(rng, Role::Batter));
    }
    players.push(random_player(rng, Role::WicketKeeper));
    for _ in 0..2 {
        players.push(random_player(rng, Role::AllRounder));
    }
    for _ in 0..4 {
        players.push(random_player(rng, Role::Bowler));
    }

    let mut team = Team {
        id: TeamId::new(&random_id(rng, "team")),
        name: name.to_string(),
        short: short.to_uppercase().chars().take(3).collect(),
        batting_rating: 0,
        bowling_rating: 0,
        players,
        budget: None,
    };
    team.refresh_ratings();
    team
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_xi_shape() {
        let mut rng = StdRng::seed_from_u64(420);
        let team = random_xi(&mut rng, "India", "ind");

        assert_eq!(11, team.players.len());
        assert_eq!("IND", team.short);
        assert_eq!(
            1,
            team.players
                .iter()
                .filter(|p| p.role == Role::WicketKeeper)
                .count()
        );
        // Six players who can realistically bowl covers the quota of a
        // twenty over innings with room to spare.
        assert_eq!(
            6,
            team.players
                .iter()
                .filter(|p| matches!(p.role, Role::Bowler | Role::AllRounder))
                .count()
        );
    }

    #[test]
    fn test_same_seed_same_roster() {
        let team_one = random_xi(&mut StdRng::seed_from_u64(5), "India", "IND");
        let team_two = random_xi(&mut StdRng::seed_from_u64(5), "India", "IND");
        // Ids included: every different id would break seeded replays.
        assert_eq!(team_one, team_two);
    }

    #[test]
    fn test_ratings_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let p = random_player(&mut rng, Role::AllRounder);
            assert!((65..=85).contains(&p.batting_rating));
            assert!((65..=85).contains(&p.bowling_rating));
            assert!(p.experience <= 100);
        }
    }
}
