use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use fluxo_core::model::filter::ModeSelection;
use fluxo_core::model::GeoPoint;
use fluxo_core::render::{RenderLabel, RenderLine, RenderPolygon};

use crate::app::FluxoError;

/// the in-memory layer objects handed to the external map renderer,
/// serialized as one JSON document per operation.
#[derive(Serialize, Clone, Debug)]
pub struct LayerBundle {
    pub generated_at: DateTime<Utc>,
    pub mode: ModeSelection,
    pub total_trips: f64,
    /// total with pt-BR separators, e.g. "1.234"
    pub total_label: String,
    /// mean of the resolved zone points, a framing hint for the widget
    pub center: Option<GeoPoint>,
    pub zoom: f64,
    pub lines: Vec<RenderLine>,
    pub polygons: Vec<RenderPolygon>,
    pub labels: Vec<RenderLabel>,
}

impl LayerBundle {
    /// writes the bundle as pretty JSON to `output`, or to stdout when no
    /// path was given.
    pub fn write(&self, output: Option<&str>) -> Result<(), FluxoError> {
        let target = PathBuf::from(output.unwrap_or("-"));
        let json = serde_json::to_string_pretty(self).map_err(|e| FluxoError::Write {
            path: target.clone(),
            message: format!("failure serializing layer bundle: {e}"),
        })?;
        match output {
            Some(path) => {
                std::fs::write(path, json).map_err(|e| FluxoError::Write {
                    path: target,
                    message: e.to_string(),
                })?;
                log::info!("wrote layer bundle to '{path}'");
                Ok(())
            }
            None => {
                println!("{json}");
                Ok(())
            }
        }
    }
}
