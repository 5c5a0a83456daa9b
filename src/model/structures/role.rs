use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Groups of positions whose players are compared against the same stat ranges.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display)]
pub enum Role {
    Attackers,
    Midfielders,
    Defenders,
    Goalkeepers
}

#[cfg(test)]
mod tests {
    use crate::model::structures::role::Role;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_role() {
        assert_eq!(Role::from_str("Attackers"), Ok(Role::Attackers));
        assert_eq!(Role::from_str("Goalkeepers"), Ok(Role::Goalkeepers));
        assert!(Role::from_str("Wingers").is_err());
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for role in Role::iter() {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
        }
    }

    #[test]
    fn test_enumerate() {
        let roles = Role::iter().collect::<Vec<_>>();
        assert_eq!(
            roles,
            vec![Role::Attackers, Role::Midfielders, Role::Defenders, Role::Goalkeepers]
        );
    }
}
