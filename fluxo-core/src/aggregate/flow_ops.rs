//! group-by-sum operations turning survey records into od flows.

use std::collections::HashMap;

use itertools::Itertools;

use crate::model::{FlowGrouping, OdFlow, TripMode, TripRecord, ZoneId};

/// aggregates survey records into one flow per distinct group key, summing
/// volume. pairs absent from the records never appear (no zero fill), and
/// groups whose volumes sum to zero are dropped: a zero-weight flow line
/// has no meaning. output order is unspecified; the render adapter sorts.
pub fn aggregate(records: &[TripRecord], grouping: &FlowGrouping) -> Vec<OdFlow> {
    let groups = records
        .iter()
        .map(|record| (grouping.record_key(record), record.volume))
        .into_group_map();
    sum_groups(groups)
}

/// re-aggregates the concatenation of two pre-aggregated flow sets by the
/// same group key, re-summing volume. plain concatenation would leave
/// duplicate od pairs with separate volumes. coordinate fields are cleared;
/// run the geocoded join after combining.
pub fn combine(a: &[OdFlow], b: &[OdFlow], grouping: &FlowGrouping) -> Vec<OdFlow> {
    let groups = a
        .iter()
        .chain(b.iter())
        .map(|flow| (grouping.flow_key(flow), flow.volume))
        .into_group_map();
    sum_groups(groups)
}

/// total volume across a flow set, the figure reported in the textual
/// summary.
pub fn total_volume(flows: &[OdFlow]) -> f64 {
    flows.iter().map(|flow| flow.volume).sum()
}

fn sum_groups(groups: HashMap<(ZoneId, ZoneId, Option<TripMode>), Vec<f64>>) -> Vec<OdFlow> {
    groups
        .into_iter()
        .filter_map(|((origin, destination, mode), volumes)| {
            let volume: f64 = volumes.iter().sum();
            if volume > 0.0 {
                Some(OdFlow::new(origin, destination, mode, volume))
            } else {
                None
            }
        })
        .collect_vec()
}

#[cfg(test)]
mod test {
    use super::*;

    fn record(origin: &str, destination: &str, volume: f64) -> TripRecord {
        TripRecord::new(
            ZoneId(origin.to_string()),
            ZoneId(destination.to_string()),
            None,
            volume,
        )
    }

    fn moded_record(origin: &str, destination: &str, mode: TripMode, volume: f64) -> TripRecord {
        TripRecord::new(
            ZoneId(origin.to_string()),
            ZoneId(destination.to_string()),
            Some(mode),
            volume,
        )
    }

    fn volume_of(flows: &[OdFlow], origin: &str, destination: &str) -> Option<f64> {
        flows
            .iter()
            .find(|f| f.origin.0 == origin && f.destination.0 == destination)
            .map(|f| f.volume)
    }

    #[test]
    fn test_aggregate_sums_by_od_pair() {
        let records = vec![
            record("A", "B", 3.0),
            record("A", "B", 2.0),
            record("A", "C", 1.0),
        ];
        let flows = aggregate(&records, &FlowGrouping::OriginDestination);
        assert_eq!(flows.len(), 2);
        assert_eq!(volume_of(&flows, "A", "B"), Some(5.0));
        assert_eq!(volume_of(&flows, "A", "C"), Some(1.0));
    }

    #[test]
    fn test_aggregate_conserves_volume() {
        let records = vec![
            record("A", "B", 3.0),
            record("B", "A", 2.5),
            record("A", "B", 1.5),
            record("C", "C", 4.0),
        ];
        let record_total: f64 = records.iter().map(|r| r.volume).sum();
        let flows = aggregate(&records, &FlowGrouping::OriginDestination);
        assert_eq!(total_volume(&flows), record_total);
    }

    #[test]
    fn test_aggregate_is_directed() {
        let records = vec![record("A", "B", 1.0), record("B", "A", 2.0)];
        let flows = aggregate(&records, &FlowGrouping::OriginDestination);
        assert_eq!(flows.len(), 2);
        assert_eq!(volume_of(&flows, "A", "B"), Some(1.0));
        assert_eq!(volume_of(&flows, "B", "A"), Some(2.0));
    }

    #[test]
    fn test_aggregate_drops_zero_volume_groups() {
        let records = vec![record("A", "B", 0.0), record("A", "C", 2.0)];
        let flows = aggregate(&records, &FlowGrouping::OriginDestination);
        assert_eq!(flows.len(), 1);
        assert_eq!(volume_of(&flows, "A", "B"), None);
    }

    #[test]
    fn test_aggregate_of_empty_records_is_empty() {
        let flows = aggregate(&[], &FlowGrouping::OriginDestination);
        assert!(flows.is_empty());
    }

    #[test]
    fn test_mode_aware_grouping_splits_pairs() {
        let records = vec![
            moded_record("A", "B", TripMode::Collective, 1.0),
            moded_record("A", "B", TripMode::Individual, 2.0),
        ];
        let by_mode = aggregate(&records, &FlowGrouping::OriginDestinationMode);
        assert_eq!(by_mode.len(), 2);
        let merged = aggregate(&records, &FlowGrouping::OriginDestination);
        assert_eq!(merged.len(), 1);
        assert_eq!(volume_of(&merged, "A", "B"), Some(3.0));
    }

    #[test]
    fn test_reaggregation_reproduces_flows() {
        let records = vec![
            record("A", "B", 3.0),
            record("A", "B", 2.0),
            record("A", "C", 1.0),
        ];
        let flows = aggregate(&records, &FlowGrouping::OriginDestination);
        let again = combine(&flows, &[], &FlowGrouping::OriginDestination);
        assert_eq!(again.len(), flows.len());
        for flow in &flows {
            assert_eq!(
                volume_of(&again, &flow.origin.0, &flow.destination.0),
                Some(flow.volume)
            );
        }
    }

    #[test]
    fn test_combine_merges_duplicate_pairs() {
        let a = vec![OdFlow::new(
            ZoneId("A".to_string()),
            ZoneId("B".to_string()),
            None,
            5.0,
        )];
        let b = vec![
            OdFlow::new(ZoneId("A".to_string()), ZoneId("B".to_string()), None, 2.0),
            OdFlow::new(ZoneId("B".to_string()), ZoneId("C".to_string()), None, 1.0),
        ];
        let combined = combine(&a, &b, &FlowGrouping::OriginDestination);
        assert_eq!(combined.len(), 2);
        assert_eq!(volume_of(&combined, "A", "B"), Some(7.0));
        assert_eq!(volume_of(&combined, "B", "C"), Some(1.0));
    }

    #[test]
    fn test_combine_equals_aggregating_concatenated_records() {
        let collective = vec![
            moded_record("A", "B", TripMode::Collective, 3.0),
            moded_record("B", "A", TripMode::Collective, 1.0),
        ];
        let individual = vec![
            moded_record("A", "B", TripMode::Individual, 2.0),
            moded_record("A", "C", TripMode::Individual, 4.0),
        ];
        let all = [collective.clone(), individual.clone()].concat();

        let combined = combine(
            &aggregate(&collective, &FlowGrouping::OriginDestinationMode),
            &aggregate(&individual, &FlowGrouping::OriginDestinationMode),
            &FlowGrouping::OriginDestination,
        );
        let direct = aggregate(&all, &FlowGrouping::OriginDestination);

        assert_eq!(combined.len(), direct.len());
        for flow in &direct {
            assert_eq!(
                volume_of(&combined, &flow.origin.0, &flow.destination.0),
                Some(flow.volume)
            );
        }
    }
}
