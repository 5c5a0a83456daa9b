use crate::model::constants::{DEFAULT_INPUT_TABLE, DEFAULT_OUTPUT_TABLE};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Squad Rater",
    long_about = "Rates every player in a club's stats table on a 1-10 scale and writes the results back"
)]
pub struct Args {
    /// Path to the SQLite database holding the stats table.
    /// The file must already exist.
    #[arg(short, long, env = "DATABASE_PATH", help = "SQLite database path")]
    pub database: PathBuf,

    /// Table with one row per player: Name, Position and one column per stat
    #[arg(long, env = "INPUT_TABLE", default_value = DEFAULT_INPUT_TABLE)]
    pub input_table: String,

    /// Table the ratings are written to. Any existing table with this name is replaced.
    #[arg(long, env = "OUTPUT_TABLE", default_value = DEFAULT_OUTPUT_TABLE)]
    pub output_table: String,

    /// JSON file replacing the built-in position roles, stat profiles and weights
    #[arg(short, long, env = "RATING_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a stat-by-stat breakdown for this player. May be given more than once.
    #[arg(short, long = "explain", value_name = "NAME")]
    pub explain: Vec<String>,

    /// Number of players to show in the leaderboard summary
    #[arg(short, long, default_value_t = 10)]
    pub top: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
