use std::path::Path;
use tracing::{info, warn};

use crate::{
    database::{
        db::DbClient,
        db_structs::{Player, PlayerCalculation}
    },
    error::ProcessorError,
    model::{
        assign_roles,
        config::{ConfigError, RatingConfig},
        explanation::Explanation,
        leaderboard,
        rating_model::{RatingModel, ScoreBounds}
    }
};

/// What a run reads, writes and reports on.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input_table: String,
    pub output_table: String,
    /// Players to explain after rating, by name
    pub explain: Vec<String>,
    /// Leaderboard length
    pub top: usize
}

#[derive(Debug)]
pub struct RunSummary {
    pub players: Vec<Player>,
    pub bounds: ScoreBounds,
    pub explanations: Vec<Explanation>
}

/// The built-in tables, or the ones in `path` if given. Both are validated.
pub fn load_config(path: Option<&Path>) -> Result<RatingConfig, ConfigError> {
    match path {
        Some(path) => {
            info!("Loading rating config from {}", path.display());
            RatingConfig::load(path)
        }
        None => {
            let config = RatingConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

/// # Rating run
///
/// 1. Load every player from the input table.
/// 2. Assign roles and build the per-role stat ranges from this dataset.
/// 3. Rate every player.
/// 4. Replace the output table with name, position, raw score and rating.
/// 5. Log the leaderboard and explain the requested players.
///
/// Store failures abort the run. Players that cannot be rated are written with
/// empty scores.
pub fn run(db: &mut DbClient, config: &RatingConfig, options: &RunOptions) -> Result<RunSummary, ProcessorError> {
    let mut players = db.get_players(&options.input_table)?;
    if players.is_empty() {
        warn!("Table {} has no players, nothing to rate", options.input_table);
    }

    assign_roles(&mut players, config);

    let model = RatingModel::new(config, &players);
    let bounds = model.process(&mut players);

    let calculations: Vec<PlayerCalculation> = players.iter().map(PlayerCalculation::from).collect();
    db.save_calculations(&options.output_table, &calculations)?;
    info!(
        "Raw scores and normalised ratings have been saved to the '{}' table",
        options.output_table
    );

    log_leaderboard(&players, options.top);

    let explanations = options
        .explain
        .iter()
        .map(|name| model.explain(name, &players))
        .collect();

    Ok(RunSummary {
        players,
        bounds,
        explanations
    })
}

fn log_leaderboard(players: &[Player], top: usize) {
    let unrated = players.iter().filter(|p| p.normalised_rating.is_none()).count();
    if unrated > 0 {
        warn!("{} players could not be rated", unrated);
    }

    for (rank, player) in leaderboard(players, top).iter().enumerate() {
        info!(
            "#{:<3} {:<30} {:<3} {:>5.2}",
            rank + 1,
            player.name,
            player.position,
            player.normalised_rating.unwrap_or_default()
        );
    }
}
