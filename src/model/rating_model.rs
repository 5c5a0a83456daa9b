use tracing::{debug, info, warn};

use crate::{
    database::db_structs::Player,
    model::{
        config::RatingConfig,
        constants::{DEFAULT_MAX_RAW_SCORE, DEFAULT_MIN_RAW_SCORE, DEFAULT_STAT_VALUE, RATING_CEILING, RATING_FLOOR},
        explanation::{Explanation, PlayerExplanation, StatContribution},
        ranges::RoleStatRanges,
        stat_contribution, stat_value,
        structures::{position::Position, role::Role}
    },
    utils::progress_utils::progress_bar
};

/// Lowest and highest defined raw score of a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBounds {
    pub min: f64,
    pub max: f64
}

impl Default for ScoreBounds {
    fn default() -> Self {
        ScoreBounds {
            min: DEFAULT_MIN_RAW_SCORE,
            max: DEFAULT_MAX_RAW_SCORE
        }
    }
}

impl ScoreBounds {
    /// Bounds over the defined scores. Falls back to 0 / 1 when there are none.
    pub fn from_scores<I>(scores: I) -> ScoreBounds
    where
        I: IntoIterator<Item = Option<f64>>
    {
        let defined = scores.into_iter().flatten().filter(|s| !s.is_nan());

        let (min, max) = defined.fold((None, None), |(min, max): (Option<f64>, Option<f64>), s| {
            (
                Some(min.map_or(s, |m| m.min(s))),
                Some(max.map_or(s, |m| m.max(s)))
            )
        });

        ScoreBounds {
            min: min.unwrap_or(DEFAULT_MIN_RAW_SCORE),
            max: max.unwrap_or(DEFAULT_MAX_RAW_SCORE)
        }
    }

    /// Bounds of the raw scores already stored on the players.
    pub fn of_players(players: &[Player]) -> ScoreBounds {
        ScoreBounds::from_scores(players.iter().map(|p| p.raw_score))
    }

    /// Rescales a raw score linearly onto the 1–10 rating scale. A flat
    /// dataset puts everyone at the floor.
    pub fn normalise(&self, raw_score: f64) -> f64 {
        if self.max != self.min {
            RATING_FLOOR + (RATING_CEILING - RATING_FLOOR) * (raw_score - self.min) / (self.max - self.min)
        } else {
            RATING_FLOOR
        }
    }
}

/// Everything needed to rate one player.
struct RatingContext<'c> {
    position: Position,
    role: Role,
    stats: &'c [String]
}

pub struct RatingModel<'a> {
    pub config: &'a RatingConfig,
    pub ranges: RoleStatRanges
}

impl<'a> RatingModel<'a> {
    /// Builds the role stat ranges from `players`, whose roles must already be assigned.
    pub fn new(config: &'a RatingConfig, players: &[Player]) -> RatingModel<'a> {
        RatingModel {
            config,
            ranges: RoleStatRanges::build(players, config)
        }
    }

    /// # Rating
    ///
    /// Rates every player in place and returns the raw score bounds used.
    ///
    /// Steps:
    /// 1. Sum each player's stat contributions into a raw score. Players whose
    ///     position has no stat profile, or whose role has no ranges, keep no
    ///     raw score and no rating but stay in the dataset.
    /// 2. Take the min and max over the defined raw scores.
    /// 3. Rescale each defined raw score onto 1–10.
    ///
    /// Nothing from a previous run is reused, so calling this twice on the same
    /// players gives the same result.
    pub fn process(&self, players: &mut [Player]) -> ScoreBounds {
        let bar = progress_bar(players.len() as u64, "Rating players".to_string());

        for player in players.iter_mut() {
            player.raw_score = self.raw_score(player);

            if let Some(bar) = &bar {
                bar.inc(1);
            }
        }

        let bounds = ScoreBounds::of_players(players);

        for player in players.iter_mut() {
            player.normalised_rating = player.raw_score.map(|raw| bounds.normalise(raw));
        }

        if let Some(bar) = &bar {
            bar.finish_and_clear();
        }

        let rated = players.iter().filter(|p| p.raw_score.is_some()).count();
        info!(
            "Rated {} of {} players (raw score range {:.4} to {:.4})",
            rated,
            players.len(),
            bounds.min,
            bounds.max
        );

        bounds
    }

    /// The player's raw score, or `None` if they cannot be rated.
    pub fn raw_score(&self, player: &Player) -> Option<f64> {
        let context = self.context(player)?;

        Some(self.contributions(player, &context).iter().map(|c| c.contribution).sum())
    }

    /// # Explain
    ///
    /// Recomputes one player's rating stat by stat. The first player with a
    /// matching name is used.
    ///
    /// The raw score is recomputed exactly as [`RatingModel::process`] does, but
    /// the rating is scaled against the raw scores already stored on `players`
    /// rather than recomputed bounds. If the two raw scores disagree a warning is
    /// logged and the recomputed value is reported.
    pub fn explain(&self, name: &str, players: &[Player]) -> Explanation {
        let Some(player) = players.iter().find(|p| p.name == name) else {
            return Explanation::NotFound { name: name.to_string() };
        };

        let Some(context) = self.context(player) else {
            return Explanation::Unrated {
                name: player.name.clone(),
                position: player.position.clone(),
                role: player.role
            };
        };

        let contributions = self.contributions(player, &context);
        let raw_score: f64 = contributions.iter().map(|c| c.contribution).sum();

        if let Some(stored) = player.raw_score {
            if stored != raw_score {
                warn!(
                    "Explained raw score {} for {} differs from the stored raw score {}",
                    raw_score, player.name, stored
                );
            }
        }

        let bounds = ScoreBounds::of_players(players);

        Explanation::Rated(PlayerExplanation {
            name: player.name.clone(),
            position: context.position,
            role: context.role,
            contributions,
            raw_score,
            normalised_rating: bounds.normalise(raw_score),
            bounds
        })
    }

    fn context(&self, player: &Player) -> Option<RatingContext<'a>> {
        let config: &'a RatingConfig = self.config;
        let position = player.parsed_position();
        let stats = position.and_then(|p| config.stats_for(p));
        let role = player.role.filter(|r| self.ranges.contains_role(*r));

        match (position, role, stats) {
            (Some(position), Some(role), Some(stats)) => Some(RatingContext { position, role, stats }),
            _ => {
                debug!(
                    "Player {} ({}) has no stat profile or role ranges, leaving unrated",
                    player.name, player.position
                );
                None
            }
        }
    }

    fn contributions(&self, player: &Player, context: &RatingContext<'_>) -> Vec<StatContribution> {
        context
            .stats
            .iter()
            .map(|stat| StatContribution {
                stat: stat.clone(),
                value: stat_value(player, stat, DEFAULT_STAT_VALUE),
                weight: self.config.weight(context.position, stat),
                contribution: stat_contribution(
                    stat,
                    player,
                    context.position,
                    context.role,
                    self.config,
                    &self.ranges
                )
            })
            .collect()
    }
}
