use serde::{Deserialize, Serialize};

use super::{VolumeRange, ZoneSelection};
use crate::model::OdFlow;

/// user-selected constraints applied to aggregated flows before rendering.
/// mode is not part of this filter: it is applied to the raw records when
/// the flows are aggregated, since the combined view uses a different group
/// key than the per-mode views.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct FlowFilter {
    pub origins: ZoneSelection,
    pub destinations: ZoneSelection,
    pub volume: VolumeRange,
}

impl FlowFilter {
    pub fn matches(&self, flow: &OdFlow) -> bool {
        self.origins.contains(&flow.origin)
            && self.destinations.contains(&flow.destination)
            && self.volume.contains(flow.volume)
    }

    /// applies the filter to an aggregated flow set. filtering is explicit
    /// and happens here, never inside the geocoded join.
    pub fn apply(&self, flows: &[OdFlow]) -> Vec<OdFlow> {
        flows
            .iter()
            .filter(|flow| self.matches(flow))
            .cloned()
            .collect()
    }
}

impl std::fmt::Display for FlowFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "origins={} destinations={} volume={}",
            self.origins, self.destinations, self.volume
        )
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;
    use crate::model::ZoneId;

    fn flow(origin: &str, destination: &str, volume: f64) -> OdFlow {
        OdFlow::new(
            ZoneId(origin.to_string()),
            ZoneId(destination.to_string()),
            None,
            volume,
        )
    }

    fn only(zones: &[&str]) -> ZoneSelection {
        let set: HashSet<ZoneId> = zones.iter().map(|z| ZoneId(z.to_string())).collect();
        ZoneSelection::Only(set)
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let filter = FlowFilter::default();
        assert!(filter.matches(&flow("A", "B", 0.0)));
        assert!(filter.matches(&flow("B", "A", 1e9)));
    }

    #[test]
    fn test_origin_and_destination_selections_compose() {
        let filter = FlowFilter {
            origins: only(&["A"]),
            destinations: only(&["B", "C"]),
            volume: VolumeRange::default(),
        };
        assert!(filter.matches(&flow("A", "B", 1.0)));
        assert!(filter.matches(&flow("A", "C", 1.0)));
        assert!(!filter.matches(&flow("A", "D", 1.0)));
        assert!(!filter.matches(&flow("B", "B", 1.0)));
    }

    #[test]
    fn test_apply_filters_by_volume_range() {
        let filter = FlowFilter {
            origins: ZoneSelection::All,
            destinations: ZoneSelection::All,
            volume: VolumeRange::new(2.0, 5.0),
        };
        let flows = vec![flow("A", "B", 1.0), flow("A", "C", 2.0), flow("B", "C", 5.0)];
        let kept = filter.apply(&flows);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|f| filter.matches(f)));
    }
}
