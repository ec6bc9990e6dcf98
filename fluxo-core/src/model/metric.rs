use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ZoneMetrics;

/// field selector for the choropleth and the zone labels.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Generation,
    Attraction,
    Total,
}

impl Metric {
    pub fn value_of(&self, metrics: &ZoneMetrics) -> f64 {
        match self {
            Metric::Generation => metrics.generation,
            Metric::Attraction => metrics.attraction,
            Metric::Total => metrics.total(),
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generation" => Ok(Metric::Generation),
            "attraction" => Ok(Metric::Attraction),
            "total" => Ok(Metric::Total),
            other => Err(format!(
                "unknown metric '{other}', expected one of: generation, attraction, total"
            )),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Generation => write!(f, "generation"),
            Metric::Attraction => write!(f, "attraction"),
            Metric::Total => write!(f, "total"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::ZoneId;

    #[test]
    fn test_value_of_selects_field() {
        let metrics = ZoneMetrics {
            zone: ZoneId("A".to_string()),
            generation: 6.0,
            attraction: 2.0,
            point: None,
        };
        assert_eq!(Metric::Generation.value_of(&metrics), 6.0);
        assert_eq!(Metric::Attraction.value_of(&metrics), 2.0);
        assert_eq!(Metric::Total.value_of(&metrics), 8.0);
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for metric in [Metric::Generation, Metric::Attraction, Metric::Total] {
            let parsed = metric
                .to_string()
                .parse::<Metric>()
                .expect("test invariant failed: display form must parse");
            assert_eq!(parsed, metric);
        }
        assert!("viagens".parse::<Metric>().is_err());
    }
}
