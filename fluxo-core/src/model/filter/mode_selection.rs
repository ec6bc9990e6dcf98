use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::TripMode;

/// user-facing mode toggle. the combined view sees every record regardless
/// of its mode label.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ModeSelection {
    Collective,
    Individual,
    Combined,
}

impl ModeSelection {
    /// whether a record with this mode label is part of the selection.
    /// records without a label are only visible in the combined view.
    pub fn selects(&self, mode: Option<TripMode>) -> bool {
        match self {
            ModeSelection::Combined => true,
            ModeSelection::Collective => mode == Some(TripMode::Collective),
            ModeSelection::Individual => mode == Some(TripMode::Individual),
        }
    }
}

impl FromStr for ModeSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "collective" => Ok(ModeSelection::Collective),
            "individual" => Ok(ModeSelection::Individual),
            "combined" => Ok(ModeSelection::Combined),
            other => Err(format!(
                "unknown mode selection '{other}', expected one of: collective, individual, combined"
            )),
        }
    }
}

impl std::fmt::Display for ModeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeSelection::Collective => write!(f, "collective"),
            ModeSelection::Individual => write!(f, "individual"),
            ModeSelection::Combined => write!(f, "combined"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_combined_selects_everything() {
        assert!(ModeSelection::Combined.selects(Some(TripMode::Collective)));
        assert!(ModeSelection::Combined.selects(Some(TripMode::Individual)));
        assert!(ModeSelection::Combined.selects(None));
    }

    #[test]
    fn test_specific_mode_excludes_unlabeled_records() {
        assert!(ModeSelection::Collective.selects(Some(TripMode::Collective)));
        assert!(!ModeSelection::Collective.selects(Some(TripMode::Individual)));
        assert!(!ModeSelection::Collective.selects(None));
        assert!(!ModeSelection::Individual.selects(None));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!(
            "Combined".parse::<ModeSelection>(),
            Ok(ModeSelection::Combined)
        );
        assert!("walking".parse::<ModeSelection>().is_err());
    }
}
