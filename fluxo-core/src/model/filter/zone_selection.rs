use std::collections::HashSet;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::model::ZoneId;

/// a set of zones to keep. the "all" sentinel expands to the full universe
/// of zones, so an empty explicit set and "all" are different selections.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ZoneSelection {
    All,
    Only(HashSet<ZoneId>),
}

impl ZoneSelection {
    pub fn contains(&self, zone: &ZoneId) -> bool {
        match self {
            ZoneSelection::All => true,
            ZoneSelection::Only(zones) => zones.contains(zone),
        }
    }
}

impl Default for ZoneSelection {
    fn default() -> Self {
        ZoneSelection::All
    }
}

impl FromStr for ZoneSelection {
    type Err = String;

    /// parses "all" or a comma-separated list of zone ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(
                "zone selection cannot be empty; use 'all' or a comma-separated list of zone ids"
                    .to_string(),
            );
        }
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(ZoneSelection::All);
        }
        let zones = trimmed
            .split(',')
            .map(|zone| ZoneId(zone.trim().to_string()))
            .collect();
        Ok(ZoneSelection::Only(zones))
    }
}

impl std::fmt::Display for ZoneSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneSelection::All => write!(f, "all"),
            ZoneSelection::Only(zones) => {
                let listed = zones.iter().map(|zone| zone.0.as_str()).sorted().join(",");
                write!(f, "{listed}")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_all_sentinel_expands_to_every_zone() {
        let selection = "all"
            .parse::<ZoneSelection>()
            .expect("test invariant failed: 'all' must parse");
        assert_eq!(selection, ZoneSelection::All);
        assert!(selection.contains(&ZoneId("São Luís".to_string())));
        assert!(selection.contains(&ZoneId("anything".to_string())));
    }

    #[test]
    fn test_list_parses_and_trims() {
        let selection = "São Luís, Raposa"
            .parse::<ZoneSelection>()
            .expect("test invariant failed: zone list must parse");
        assert!(selection.contains(&ZoneId("São Luís".to_string())));
        assert!(selection.contains(&ZoneId("Raposa".to_string())));
        assert!(!selection.contains(&ZoneId("Alcântara".to_string())));
    }

    #[test]
    fn test_empty_selection_is_an_error() {
        assert!("".parse::<ZoneSelection>().is_err());
        assert!("   ".parse::<ZoneSelection>().is_err());
    }
}
