use itertools::Itertools;
use std::cmp::Ordering;
use tracing::debug;

use crate::{
    database::db_structs::Player,
    model::{
        config::RatingConfig,
        constants::DEFAULT_STAT_VALUE,
        ranges::RoleStatRanges,
        structures::{position::Position, role::Role}
    }
};

pub mod config;
pub mod constants;
mod default_tables;
pub mod explanation;
pub mod ranges;
pub mod rating_model;
pub mod structures;

/// Returns the player's value for `stat`, or `default` when the stat is
/// missing or undefined. A missing column and a NULL/NaN cell are treated alike.
pub fn stat_value(player: &Player, stat: &str, default: f64) -> f64 {
    match player.stats.get(stat) {
        Some(Some(v)) if !v.is_nan() => *v,
        _ => default
    }
}

/// Sets each player's role from the configured position roles. Players with an
/// unrecognised position end up with no role.
pub fn assign_roles(players: &mut [Player], config: &RatingConfig) {
    for player in players.iter_mut() {
        player.role = player.parsed_position().and_then(|p| config.role_for(p));

        if player.role.is_none() {
            debug!(
                "Player {} has unrecognised position '{}', no role assigned",
                player.name, player.position
            );
        }
    }
}

/// # Stat contribution
///
/// A single stat's addend to a player's raw score:
///
/// `weight(position, stat) * value / max(role, stat)`
///
/// The value is divided by the highest value seen for that stat among players
/// of the same role. When that maximum is zero or undefined the stat
/// contributes nothing.
pub fn stat_contribution(
    stat: &str,
    player: &Player,
    position: Position,
    role: Role,
    config: &RatingConfig,
    ranges: &RoleStatRanges
) -> f64 {
    let weight = config.weight(position, stat);
    let value = stat_value(player, stat, DEFAULT_STAT_VALUE);
    let max_value = ranges.max_value(role, stat);

    let normalised = if max_value > 0.0 { value / max_value } else { 0.0 };

    weight * normalised
}

/// The `n` best rated players, highest first. Unrated players are left out and
/// ties keep dataset order.
pub fn leaderboard(players: &[Player], n: usize) -> Vec<&Player> {
    players
        .iter()
        .filter(|p| p.normalised_rating.is_some())
        .sorted_by(|a, b| {
            b.normalised_rating
                .partial_cmp(&a.normalised_rating)
                .unwrap_or(Ordering::Equal)
        })
        .take(n)
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            assign_roles,
            config::RatingConfig,
            leaderboard,
            ranges::RoleStatRanges,
            stat_contribution, stat_value,
            structures::{position::Position, role::Role}
        },
        utils::test_utils::*
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_stat_value_present() {
        let player = generate_player("A", "CF", &[("goals", Some(5.0)), ("assists", Some(0.0))]);

        assert_eq!(stat_value(&player, "goals", 0.0), 5.0);
        // A real zero is a value, not a missing stat
        assert_eq!(stat_value(&player, "assists", 7.0), 0.0);
    }

    #[test]
    fn test_stat_value_missing_and_undefined_are_alike() {
        let player = generate_player("A", "CF", &[("goals", None), ("assists", Some(f64::NAN))]);

        assert_eq!(stat_value(&player, "goals", 0.0), 0.0);
        assert_eq!(stat_value(&player, "assists", 0.0), 0.0);
        assert_eq!(stat_value(&player, "tackles", 0.0), 0.0);

        assert_eq!(stat_value(&player, "goals", 3.5), 3.5);
        assert_eq!(stat_value(&player, "assists", 3.5), 3.5);
        assert_eq!(stat_value(&player, "tackles", 3.5), 3.5);
    }

    #[test]
    fn test_stat_value_negative() {
        let player = generate_player("A", "GK", &[("rating", Some(-1.25))]);

        assert_eq!(stat_value(&player, "rating", 0.0), -1.25);
    }

    #[test]
    fn test_assign_roles() {
        let config = RatingConfig::default();
        let mut players = vec![
            generate_player("A", "CF", &[]),
            generate_player("B", "CB", &[]),
            generate_player("C", "Sweeper", &[]),
        ];

        assign_roles(&mut players, &config);

        assert_eq!(players[0].role, Some(Role::Attackers));
        assert_eq!(players[1].role, Some(Role::Defenders));
        assert_eq!(players[2].role, None);
    }

    #[test]
    fn test_contribution_example() {
        // CF scoring 5 where the best attacker scored 10, goals weighted 2.0 for CF
        let config = single_stat_config(Position::CentreForward, Role::Attackers, "goals", 2.0);
        let mut players = vec![
            generate_player("P", "CF", &[("goals", Some(5.0))]),
            generate_player("Q", "CF", &[("goals", Some(10.0))]),
        ];
        assign_roles(&mut players, &config);

        let ranges = RoleStatRanges::build(&players, &config);
        let contribution = stat_contribution(
            "goals",
            &players[0],
            Position::CentreForward,
            Role::Attackers,
            &config,
            &ranges
        );

        assert_abs_diff_eq!(contribution, 1.0);
    }

    #[test]
    fn test_contribution_zero_weight() {
        let config = single_stat_config(Position::CentreForward, Role::Attackers, "goals", 0.0);
        let mut players = vec![generate_player("P", "CF", &[("goals", Some(5.0))])];
        assign_roles(&mut players, &config);
        let ranges = RoleStatRanges::build(&players, &config);

        let contribution = stat_contribution(
            "goals",
            &players[0],
            Position::CentreForward,
            Role::Attackers,
            &config,
            &ranges
        );

        assert_eq!(contribution, 0.0);
    }

    #[test]
    fn test_contribution_unweighted_stat() {
        let config = single_stat_config(Position::CentreForward, Role::Attackers, "goals", 2.0);
        let mut players = vec![generate_player("P", "CF", &[("goals", Some(5.0)), ("touches", Some(40.0))])];
        assign_roles(&mut players, &config);
        let ranges = RoleStatRanges::build(&players, &config);

        let contribution = stat_contribution(
            "touches",
            &players[0],
            Position::CentreForward,
            Role::Attackers,
            &config,
            &ranges
        );

        assert_eq!(contribution, 0.0);
    }

    #[test]
    fn test_contribution_zero_value() {
        let config = single_stat_config(Position::CentreForward, Role::Attackers, "goals", 2.0);
        let mut players = vec![
            generate_player("P", "CF", &[("goals", None)]),
            generate_player("Q", "CF", &[("goals", Some(4.0))]),
        ];
        assign_roles(&mut players, &config);
        let ranges = RoleStatRanges::build(&players, &config);

        let contribution = stat_contribution(
            "goals",
            &players[0],
            Position::CentreForward,
            Role::Attackers,
            &config,
            &ranges
        );

        assert_eq!(contribution, 0.0);
    }

    #[test]
    fn test_contribution_zero_max() {
        let config = single_stat_config(Position::CentreForward, Role::Attackers, "goals", 2.0);
        let mut players = vec![
            generate_player("P", "CF", &[("goals", Some(0.0))]),
            generate_player("Q", "CF", &[("goals", Some(0.0))]),
        ];
        assign_roles(&mut players, &config);
        let ranges = RoleStatRanges::build(&players, &config);

        let contribution = stat_contribution(
            "goals",
            &players[0],
            Position::CentreForward,
            Role::Attackers,
            &config,
            &ranges
        );

        assert_eq!(contribution, 0.0);
    }

    #[test]
    fn test_contribution_negative_max() {
        let config = single_stat_config(Position::CentreForward, Role::Attackers, "goals", 2.0);
        let mut players = vec![generate_player("P", "CF", &[("goals", Some(-3.0))])];
        assign_roles(&mut players, &config);
        let ranges = RoleStatRanges::build(&players, &config);

        let contribution = stat_contribution(
            "goals",
            &players[0],
            Position::CentreForward,
            Role::Attackers,
            &config,
            &ranges
        );

        assert_eq!(contribution, 0.0);
    }

    #[test]
    fn test_contribution_undefined_max() {
        let config = single_stat_config(Position::CentreForward, Role::Attackers, "goals", 2.0);
        let mut players = vec![generate_player("P", "CF", &[("goals", None)])];
        assign_roles(&mut players, &config);
        let ranges = RoleStatRanges::build(&players, &config);

        assert_eq!(ranges.max_value(Role::Attackers, "goals"), 0.0);
        let contribution = stat_contribution(
            "goals",
            &players[0],
            Position::CentreForward,
            Role::Attackers,
            &config,
            &ranges
        );

        assert_eq!(contribution, 0.0);
    }

    #[test]
    fn test_contribution_role_without_players() {
        let config = single_stat_config(Position::CentreForward, Role::Attackers, "goals", 2.0);
        let player = generate_player("P", "CF", &[("goals", Some(5.0))]);
        let ranges = RoleStatRanges::build(&[], &config);

        let contribution =
            stat_contribution("goals", &player, Position::CentreForward, Role::Attackers, &config, &ranges);

        assert_eq!(contribution, 0.0);
    }

    #[test]
    fn test_contribution_negative_weight() {
        let config = single_stat_config(Position::CentreBack, Role::Defenders, "ownGoals", -3.5);
        let mut players = vec![
            generate_player("P", "CB", &[("ownGoals", Some(1.0))]),
            generate_player("Q", "CB", &[("ownGoals", Some(2.0))]),
        ];
        assign_roles(&mut players, &config);
        let ranges = RoleStatRanges::build(&players, &config);

        let contribution = stat_contribution(
            "ownGoals",
            &players[0],
            Position::CentreBack,
            Role::Defenders,
            &config,
            &ranges
        );

        assert_abs_diff_eq!(contribution, -1.75);
    }

    #[test]
    fn test_leaderboard_order() {
        let mut players = vec![
            generate_player("Low", "CF", &[]),
            generate_player("Unrated", "ST", &[]),
            generate_player("High", "CF", &[]),
            generate_player("TiedFirst", "CB", &[]),
            generate_player("TiedSecond", "CB", &[]),
        ];
        players[0].normalised_rating = Some(1.0);
        players[2].normalised_rating = Some(10.0);
        players[3].normalised_rating = Some(5.0);
        players[4].normalised_rating = Some(5.0);

        let names = leaderboard(&players, 10).iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["High", "TiedFirst", "TiedSecond", "Low"]);

        let top = leaderboard(&players, 2).iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(top, vec!["High", "TiedFirst"]);
    }
}
