use crate::model::structures::{position::Position, role::Role};
use indexmap::IndexMap;
use std::str::FromStr;

/// A row of the input stats table, enriched in memory with the rating results.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Not guaranteed to be unique across the roster
    pub name: String,
    /// Position label exactly as stored, may be outside the known set
    pub position: String,
    /// Stat columns in table order. `None` means the cell was NULL or unreadable.
    pub stats: IndexMap<String, Option<f64>>,
    /// Assigned from the configured position roles before rating
    pub role: Option<Role>,
    pub raw_score: Option<f64>,
    pub normalised_rating: Option<f64>
}

impl Player {
    pub fn new(name: &str, position: &str) -> Player {
        Player {
            name: name.to_string(),
            position: position.to_string(),
            stats: IndexMap::new(),
            role: None,
            raw_score: None,
            normalised_rating: None
        }
    }

    /// The parsed position, or `None` if the stored label is not recognised.
    /// Labels are matched exactly after trimming surrounding whitespace.
    pub fn parsed_position(&self) -> Option<Position> {
        Position::from_str(self.position.trim()).ok()
    }
}

/// The reduced projection written back to the store after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerCalculation {
    pub name: String,
    pub position: String,
    pub raw_score: Option<f64>,
    pub normalised_rating: Option<f64>
}

impl From<&Player> for PlayerCalculation {
    fn from(player: &Player) -> Self {
        PlayerCalculation {
            name: player.name.clone(),
            position: player.position.clone(),
            raw_score: player.raw_score,
            normalised_rating: player.normalised_rating
        }
    }
}
