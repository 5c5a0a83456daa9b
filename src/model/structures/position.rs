use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// On-pitch position as labelled in the stats table.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display
)]
pub enum Position {
    #[serde(rename = "CF")]
    #[strum(serialize = "CF")]
    CentreForward,
    #[serde(rename = "LW")]
    #[strum(serialize = "LW")]
    LeftWing,
    #[serde(rename = "RW")]
    #[strum(serialize = "RW")]
    RightWing,
    #[serde(rename = "AM")]
    #[strum(serialize = "AM")]
    AttackingMidfield,
    #[serde(rename = "CM")]
    #[strum(serialize = "CM")]
    CentralMidfield,
    #[serde(rename = "DM")]
    #[strum(serialize = "DM")]
    DefensiveMidfield,
    #[serde(rename = "RB")]
    #[strum(serialize = "RB")]
    RightBack,
    #[serde(rename = "LB")]
    #[strum(serialize = "LB")]
    LeftBack,
    #[serde(rename = "CB")]
    #[strum(serialize = "CB")]
    CentreBack,
    #[serde(rename = "GK")]
    #[strum(serialize = "GK")]
    Goalkeeper
}
