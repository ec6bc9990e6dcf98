use serde::{Deserialize, Serialize};

/// travel mode recorded for a survey trip. the RMGSL survey publishes one
/// dataset per mode; other survey forms label individual rows instead.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TripMode {
    Collective,
    Individual,
}

impl TripMode {
    /// matches a survey cell against the known mode labels, ignoring case.
    /// both the portuguese and english spellings are accepted.
    pub fn parse_label(label: &str) -> Option<TripMode> {
        match label.trim().to_lowercase().as_str() {
            "coletivo" | "collective" => Some(TripMode::Collective),
            "individual" => Some(TripMode::Individual),
            _ => None,
        }
    }
}

impl std::fmt::Display for TripMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripMode::Collective => write!(f, "collective"),
            TripMode::Individual => write!(f, "individual"),
        }
    }
}
