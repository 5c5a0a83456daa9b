use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::HashMap;

use crate::{
    database::db_structs::Player,
    model::{config::RatingConfig, constants::UNRANGED_STAT_MAX, structures::role::Role}
};

/// Per role, the highest value observed for each stat across the current dataset.
///
/// Every role present in the dataset is ranged over the union of all position
/// profiles, not only the profiles of the positions in that role. A stat that
/// no player of the role has a value for is kept with an undefined maximum.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleStatRanges {
    ranges: HashMap<Role, IndexMap<String, Option<f64>>>
}

impl RoleStatRanges {
    /// Players without a role are ignored. Roles with no players get no entry.
    pub fn build(players: &[Player], config: &RatingConfig) -> RoleStatRanges {
        let stats = config.all_stats();
        let by_role = players
            .iter()
            .filter_map(|p| p.role.map(|r| (r, p)))
            .into_group_map();

        let ranges = by_role
            .into_iter()
            .map(|(role, members)| {
                let maxima = stats
                    .iter()
                    .map(|stat| (stat.to_string(), Self::observed_max(&members, stat)))
                    .collect();

                (role, maxima)
            })
            .collect();

        RoleStatRanges { ranges }
    }

    fn observed_max(players: &[&Player], stat: &str) -> Option<f64> {
        players
            .iter()
            .filter_map(|p| p.stats.get(stat).copied().flatten())
            .filter(|v| !v.is_nan())
            .reduce(f64::max)
    }

    pub fn contains_role(&self, role: Role) -> bool {
        self.ranges.contains_key(&role)
    }

    /// The divisor used to normalise `stat` for players of `role`.
    ///
    /// A stat outside every profile divides by 1. An undefined maximum, or a
    /// role with no players at all, yields 0 so the stat cannot contribute.
    pub fn max_value(&self, role: Role, stat: &str) -> f64 {
        match self.ranges.get(&role) {
            Some(maxima) => match maxima.get(stat) {
                Some(max) => max.unwrap_or(0.0),
                None => UNRANGED_STAT_MAX
            },
            None => 0.0
        }
    }
}
