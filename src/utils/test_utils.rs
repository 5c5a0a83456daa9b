use crate::{
    database::db_structs::Player,
    model::{
        config::RatingConfig,
        structures::{position::Position, role::Role}
    }
};
use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;

pub fn generate_player(name: &str, position: &str, stats: &[(&str, Option<f64>)]) -> Player {
    let mut player = Player::new(name, position);
    for (stat, value) in stats {
        player.stats.insert(stat.to_string(), *value);
    }

    player
}

/// A config rating a single position on a single stat.
pub fn single_stat_config(position: Position, role: Role, stat: &str, weight: f64) -> RatingConfig {
    RatingConfig {
        position_roles: IndexMap::from([(position, role)]),
        position_stats: IndexMap::from([(position, vec![stat.to_string()])]),
        weights: IndexMap::from([(position, IndexMap::from([(stat.to_string(), weight)]))])
    }
}

/// A roster of `n` players cycling through every position, with values for
/// each stat of the default profiles. Roughly one value in ten is left undefined.
pub fn generate_roster(n: usize, seed: u64) -> Vec<Player> {
    let config = RatingConfig::default();
    let stats = config.all_stats();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    Position::iter()
        .cycle()
        .take(n)
        .enumerate()
        .map(|(i, position)| {
            let mut player = Player::new(&format!("Player {}", i + 1), &position.to_string());
            for stat in &stats {
                let value = if rng.random_bool(0.1) {
                    None
                } else {
                    Some((rng.random_range(0.0..40.0_f64) * 10.0).round() / 10.0)
                };
                player.stats.insert(stat.to_string(), value);
            }

            player
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_player() {
        let player = generate_player("A", "CB", &[("clearances", Some(12.0)), ("goals", None)]);

        assert_eq!(player.name, "A");
        assert_eq!(player.position, "CB");
        assert_eq!(player.stats.get("clearances"), Some(&Some(12.0)));
        assert_eq!(player.stats.get("goals"), Some(&None));
        assert_eq!(player.raw_score, None);
    }

    #[test]
    fn test_roster_is_reproducible() {
        assert_eq!(generate_roster(12, 42), generate_roster(12, 42));
        assert_ne!(generate_roster(12, 42), generate_roster(12, 43));
    }

    #[test]
    fn test_roster_cycles_positions() {
        let roster = generate_roster(12, 1);

        assert_eq!(roster[0].position, "CF");
        assert_eq!(roster[9].position, "GK");
        assert_eq!(roster[10].position, "CF");
        assert!(roster.iter().all(|p| p.parsed_position().is_some()));
    }

    #[test]
    fn test_single_stat_config_is_valid() {
        let config = single_stat_config(Position::Goalkeeper, Role::Goalkeepers, "saves", 3.0);

        assert!(config.validate().is_ok());
        assert_eq!(config.weight(Position::Goalkeeper, "saves"), 3.0);
    }
}
