use serde::{Deserialize, Serialize};

use super::{OdFlow, TripMode, TripRecord, ZoneId};

/// group key selection for flow aggregation. mode is part of the key only
/// when the caller requests a mode-aware breakdown.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlowGrouping {
    OriginDestination,
    OriginDestinationMode,
}

impl FlowGrouping {
    pub fn record_key(&self, record: &TripRecord) -> (ZoneId, ZoneId, Option<TripMode>) {
        let mode = match self {
            FlowGrouping::OriginDestination => None,
            FlowGrouping::OriginDestinationMode => record.mode,
        };
        (record.origin.clone(), record.destination.clone(), mode)
    }

    pub fn flow_key(&self, flow: &OdFlow) -> (ZoneId, ZoneId, Option<TripMode>) {
        let mode = match self {
            FlowGrouping::OriginDestination => None,
            FlowGrouping::OriginDestinationMode => flow.mode,
        };
        (flow.origin.clone(), flow.destination.clone(), mode)
    }
}

impl std::fmt::Display for FlowGrouping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowGrouping::OriginDestination => write!(f, "origin_destination"),
            FlowGrouping::OriginDestinationMode => write!(f, "origin_destination_mode"),
        }
    }
}
