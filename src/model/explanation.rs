use std::fmt::{self, Display, Formatter};

use crate::model::{
    rating_model::ScoreBounds,
    structures::{position::Position, role::Role}
};

const RULE: &str = "--------------------------------------------------";

/// One line of a player's breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct StatContribution {
    pub stat: String,
    /// Value used in the calculation, after default substitution
    pub value: f64,
    pub weight: f64,
    pub contribution: f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerExplanation {
    pub name: String,
    pub position: Position,
    pub role: Role,
    pub contributions: Vec<StatContribution>,
    pub raw_score: f64,
    pub normalised_rating: f64,
    /// Dataset bounds the rating was scaled against
    pub bounds: ScoreBounds
}

/// Outcome of explaining a single player's rating.
#[derive(Debug, Clone, PartialEq)]
pub enum Explanation {
    NotFound {
        name: String
    },
    /// The player exists but their position or role cannot be rated
    Unrated {
        name: String,
        position: String,
        role: Option<Role>
    },
    Rated(PlayerExplanation)
}

impl Display for Explanation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Explanation::NotFound { name } => write!(f, "No player found with name: {}", name),
            Explanation::Unrated { name, position, role } => match role {
                Some(role) => write!(
                    f,
                    "Player {} ({}, {}) cannot be rated: no stat profile or stat ranges",
                    name, position, role
                ),
                None => write!(f, "Player {} cannot be rated: position '{}' is not recognised", name, position)
            },
            Explanation::Rated(explanation) => explanation.fmt(f)
        }
    }
}

impl Display for PlayerExplanation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Player: {}, Position: {}, Role: {}",
            self.name, self.position, self.role
        )?;
        writeln!(f, "{}", RULE)?;

        let width = self.contributions.iter().map(|c| c.stat.len()).max().unwrap_or(0);
        for c in &self.contributions {
            writeln!(
                f,
                "{:<width$}  value {:>8.2}  weight {:>5.2}  contribution {:>6.2}",
                c.stat,
                c.value,
                c.weight,
                c.contribution,
                width = width
            )?;
        }

        writeln!(f, "{}", RULE)?;
        writeln!(f, "Raw score: {:.4}", self.raw_score)?;
        writeln!(
            f,
            "Normalised rating: {:.2} (raw score range {:.4} to {:.4})",
            self.normalised_rating, self.bounds.min, self.bounds.max
        )?;
        write!(f, "{}", RULE)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        explanation::{Explanation, PlayerExplanation, StatContribution},
        rating_model::ScoreBounds,
        structures::{position::Position, role::Role}
    };

    #[test]
    fn test_not_found_report() {
        let explanation = Explanation::NotFound {
            name: "Nobody".to_string()
        };

        assert_eq!(explanation.to_string(), "No player found with name: Nobody");
    }

    #[test]
    fn test_unrecognised_position_report() {
        let explanation = Explanation::Unrated {
            name: "A".to_string(),
            position: "ST".to_string(),
            role: None
        };

        assert!(explanation.to_string().contains("'ST' is not recognised"));
    }

    #[test]
    fn test_position_without_profile_report() {
        let explanation = Explanation::Unrated {
            name: "Jamie Cumming".to_string(),
            position: "GK".to_string(),
            role: Some(Role::Goalkeepers)
        };

        assert_eq!(
            explanation.to_string(),
            "Player Jamie Cumming (GK, Goalkeepers) cannot be rated: no stat profile or stat ranges"
        );
    }

    #[test]
    fn test_rated_report_lists_every_stat() {
        let explanation = Explanation::Rated(PlayerExplanation {
            name: "Will Vaulks".to_string(),
            position: Position::CentralMidfield,
            role: Role::Midfielders,
            contributions: vec![
                StatContribution {
                    stat: "goals".to_string(),
                    value: 2.0,
                    weight: 1.5,
                    contribution: 0.75
                },
                StatContribution {
                    stat: "yellowCards".to_string(),
                    value: 4.0,
                    weight: -1.0,
                    contribution: -0.5
                },
            ],
            raw_score: 0.25,
            normalised_rating: 5.5,
            bounds: ScoreBounds { min: -1.0, max: 1.5 }
        });

        let report = explanation.to_string();

        assert!(report.starts_with("Player: Will Vaulks, Position: CM, Role: Midfielders"));
        assert!(report.contains("goals        value     2.00  weight  1.50  contribution   0.75"));
        assert!(report.contains("yellowCards  value     4.00  weight -1.00  contribution  -0.50"));
        assert!(report.contains("Raw score: 0.2500"));
        assert!(report.contains("Normalised rating: 5.50"));
    }
}
