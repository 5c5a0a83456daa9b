// Rating scale
pub const RATING_FLOOR: f64 = 1.0;
pub const RATING_CEILING: f64 = 10.0;
// Bounds used when no player in the dataset has a raw score
pub const DEFAULT_MIN_RAW_SCORE: f64 = 0.0;
pub const DEFAULT_MAX_RAW_SCORE: f64 = 1.0;
// Substituted for missing or undefined stat values
pub const DEFAULT_STAT_VALUE: f64 = 0.0;
// Divisor for a stat that has no range entry for the role
pub const UNRANGED_STAT_MAX: f64 = 1.0;
// Store tables
pub const DEFAULT_INPUT_TABLE: &str = "player_stats";
pub const DEFAULT_OUTPUT_TABLE: &str = "calculations";
