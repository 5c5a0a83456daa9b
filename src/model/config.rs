use crate::model::{
    default_tables::*,
    structures::{position::Position, role::Role}
};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf}
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read rating config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("Failed to parse rating config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rating config has no position stat profiles")]
    NoProfiles,

    #[error("Rating config has no position roles")]
    NoRoles,

    #[error("Stat '{stat}' is listed more than once in the {position} profile")]
    DuplicateStat { position: Position, stat: String },

    #[error("Weight for '{stat}' in the {position} table is not finite ({weight})")]
    InvalidWeight { position: Position, stat: String, weight: f64 }
}

/// The static lookup tables that drive a rating run.
///
/// Loaded once at startup and only ever handed out by reference, so every
/// function in the pipeline sees the same tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingConfig {
    pub position_roles: IndexMap<Position, Role>,
    /// Stats considered when rating each position, in reporting order
    pub position_stats: IndexMap<Position, Vec<String>>,
    /// Signed weight per stat. Stats without a weight contribute nothing.
    pub weights: IndexMap<Position, IndexMap<String, f64>>
}

impl Default for RatingConfig {
    fn default() -> Self {
        let tables: [(Position, Role, &[&str], &[(&str, f64)]); 10] = [
            (
                Position::CentreForward,
                Role::Attackers,
                CENTRE_FORWARD_STATS,
                CENTRE_FORWARD_WEIGHTS
            ),
            (Position::LeftWing, Role::Attackers, LEFT_WING_STATS, LEFT_WING_WEIGHTS),
            (Position::RightWing, Role::Attackers, RIGHT_WING_STATS, RIGHT_WING_WEIGHTS),
            (
                Position::AttackingMidfield,
                Role::Midfielders,
                ATTACKING_MIDFIELD_STATS,
                ATTACKING_MIDFIELD_WEIGHTS
            ),
            (
                Position::CentralMidfield,
                Role::Midfielders,
                CENTRAL_MIDFIELD_STATS,
                CENTRAL_MIDFIELD_WEIGHTS
            ),
            (
                Position::DefensiveMidfield,
                Role::Midfielders,
                DEFENSIVE_MIDFIELD_STATS,
                DEFENSIVE_MIDFIELD_WEIGHTS
            ),
            (Position::RightBack, Role::Defenders, RIGHT_BACK_STATS, RIGHT_BACK_WEIGHTS),
            (Position::LeftBack, Role::Defenders, LEFT_BACK_STATS, LEFT_BACK_WEIGHTS),
            (Position::CentreBack, Role::Defenders, CENTRE_BACK_STATS, CENTRE_BACK_WEIGHTS),
            (Position::Goalkeeper, Role::Goalkeepers, GOALKEEPER_STATS, GOALKEEPER_WEIGHTS)
        ];

        let mut config = RatingConfig {
            position_roles: IndexMap::new(),
            position_stats: IndexMap::new(),
            weights: IndexMap::new()
        };

        for (position, role, stats, weights) in tables {
            config.position_roles.insert(position, role);
            config
                .position_stats
                .insert(position, stats.iter().map(|s| s.to_string()).collect());
            config.weights.insert(
                position,
                weights.iter().map(|(stat, w)| (stat.to_string(), *w)).collect()
            );
        }

        config
    }
}

impl RatingConfig {
    /// Reads and validates a JSON rating config from disk.
    pub fn load(path: &Path) -> Result<RatingConfig, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source
        })?;

        RatingConfig::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<RatingConfig, ConfigError> {
        let config: RatingConfig = serde_json::from_str(raw)?;
        config.validate()?;

        Ok(config)
    }

    /// Rejects tables that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.position_stats.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        if self.position_roles.is_empty() {
            return Err(ConfigError::NoRoles);
        }

        for (position, stats) in &self.position_stats {
            let mut seen = HashSet::new();
            for stat in stats {
                if !seen.insert(stat.as_str()) {
                    return Err(ConfigError::DuplicateStat {
                        position: *position,
                        stat: stat.clone()
                    });
                }
            }
        }

        for (position, weights) in &self.weights {
            if let Some((stat, weight)) = weights.iter().find(|(_, w)| !w.is_finite()) {
                return Err(ConfigError::InvalidWeight {
                    position: *position,
                    stat: stat.clone(),
                    weight: *weight
                });
            }
        }

        Ok(())
    }

    pub fn role_for(&self, position: Position) -> Option<Role> {
        self.position_roles.get(&position).copied()
    }

    pub fn stats_for(&self, position: Position) -> Option<&[String]> {
        self.position_stats.get(&position).map(|s| s.as_slice())
    }

    /// Weight of `stat` for `position`, 0 when either is missing from the table.
    pub fn weight(&self, position: Position, stat: &str) -> f64 {
        self.weights
            .get(&position)
            .and_then(|w| w.get(stat))
            .copied()
            .unwrap_or(0.0)
    }

    /// Every stat named by any position profile, first occurrence order.
    pub fn all_stats(&self) -> IndexSet<&str> {
        self.position_stats
            .values()
            .flat_map(|stats| stats.iter().map(|s| s.as_str()))
            .collect()
    }
}
