use std::cmp::Reverse;
use std::path::Path;

use clap::{Parser, Subcommand};
use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use fluxo_core::aggregate::flow_ops;
use fluxo_core::model::filter::{FlowFilter, ModeSelection, VolumeRange, ZoneSelection};
use fluxo_core::model::Metric;
use fluxo_core::render::{layer_ops, ColorRamp};
use fluxo_core::util::format_ops;

use crate::app::FluxoError;
use crate::input::FluxoConfig;
use crate::output::LayerBundle;
use crate::session::Session;

/// command line tool for rendering origin-destination travel survey data as
/// flow-line and choropleth map layers
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FluxoApp {
    #[command(subcommand)]
    pub op: FluxoOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum FluxoOperation {
    /// build the flow line layer for the selected mode and filters
    Flows {
        /// TOML file describing the survey datasets, zone geometry, and
        /// coordinate resolver
        #[arg(short, long)]
        configuration_file: String,

        /// travel mode selection: collective, individual, or combined
        #[arg(short, long, default_value = "combined")]
        mode: ModeSelection,

        /// origin filter: "all" or a comma-separated list of zone ids
        #[arg(long, default_value = "all")]
        origins: ZoneSelection,

        /// destination filter: "all" or a comma-separated list of zone ids
        #[arg(long, default_value = "all")]
        destinations: ZoneSelection,

        /// keep only flows with at least this volume (inclusive)
        #[arg(long)]
        min_volume: Option<f64>,

        /// keep only flows with at most this volume (inclusive)
        #[arg(long)]
        max_volume: Option<f64>,

        /// location on disk to write the layer JSON. if not provided,
        /// print to stdout.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// build the choropleth polygons and zone labels for a metric
    Zones {
        #[arg(short, long)]
        configuration_file: String,

        #[arg(short, long, default_value = "combined")]
        mode: ModeSelection,

        /// choropleth field: generation, attraction, or total
        #[arg(long, default_value = "total")]
        metric: Metric,

        /// named color ramp overriding the configured one
        #[arg(long)]
        color_ramp: Option<String>,

        #[arg(short, long)]
        output: Option<String>,
    },

    /// print the filtered trip total and the largest flows
    Summary {
        #[arg(short, long)]
        configuration_file: String,

        #[arg(short, long, default_value = "combined")]
        mode: ModeSelection,

        #[arg(long, default_value = "all")]
        origins: ZoneSelection,

        #[arg(long, default_value = "all")]
        destinations: ZoneSelection,

        #[arg(long)]
        min_volume: Option<f64>,

        #[arg(long)]
        max_volume: Option<f64>,

        /// number of flows to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

impl FluxoOperation {
    pub fn run(&self) -> Result<(), FluxoError> {
        match self {
            FluxoOperation::Flows {
                configuration_file,
                mode,
                origins,
                destinations,
                min_volume,
                max_volume,
                output,
            } => {
                let mut session = load_session(configuration_file)?;
                let filter = flow_filter(origins, destinations, *min_volume, *max_volume);
                let flows = session.filtered_flows(*mode, &filter);
                let lines = layer_ops::line_layer(&flows, &session.render().width_policy());
                let total = flow_ops::total_volume(&flows);
                let bundle = LayerBundle {
                    generated_at: chrono::Utc::now(),
                    mode: *mode,
                    total_trips: total,
                    total_label: format_ops::format_volume(total),
                    center: session.suggested_center(),
                    zoom: session.render().zoom,
                    lines,
                    polygons: vec![],
                    labels: vec![],
                };
                bundle.write(output.as_deref())
            }
            FluxoOperation::Zones {
                configuration_file,
                mode,
                metric,
                color_ramp,
                output,
            } => {
                let session = load_session(configuration_file)?;
                if session.zones().is_empty() {
                    let msg = format!(
                        "configuration '{configuration_file}' has no [zones] input; the zones operation needs zone geometry"
                    );
                    return Err(FluxoError::InvalidUserInput(msg));
                }
                let ramp: ColorRamp = match color_ramp {
                    Some(name) => name.parse().map_err(FluxoError::InvalidUserInput)?,
                    None => session
                        .render()
                        .color_ramp()
                        .map_err(FluxoError::InvalidUserInput)?,
                };
                let metrics = session.metrics(*mode);
                let polygons = layer_ops::choropleth_layer(session.zones(), &metrics, metric, &ramp);
                let labels = layer_ops::label_layer(&metrics, metric);
                let total: f64 = metrics.values().map(|m| m.generation).sum();
                let bundle = LayerBundle {
                    generated_at: chrono::Utc::now(),
                    mode: *mode,
                    total_trips: total,
                    total_label: format_ops::format_volume(total),
                    center: session.suggested_center(),
                    zoom: session.render().zoom,
                    lines: vec![],
                    polygons,
                    labels,
                };
                bundle.write(output.as_deref())
            }
            FluxoOperation::Summary {
                configuration_file,
                mode,
                origins,
                destinations,
                min_volume,
                max_volume,
                top,
            } => {
                let mut session = load_session(configuration_file)?;
                let filter = flow_filter(origins, destinations, *min_volume, *max_volume);
                let flows = session.filtered_flows(*mode, &filter);
                let total = flow_ops::total_volume(&flows);
                println!("Total de viagens: {}", format_ops::format_volume(total));
                let largest = flows
                    .iter()
                    .sorted_by_key(|flow| Reverse(OrderedFloat(flow.volume)))
                    .take(*top);
                for flow in largest {
                    println!(
                        "  {} → {}: {} viagens",
                        flow.origin,
                        flow.destination,
                        format_ops::format_volume(flow.volume)
                    );
                }
                Ok(())
            }
        }
    }
}

fn load_session(configuration_file: &str) -> Result<Session, FluxoError> {
    let config = FluxoConfig::from_file(Path::new(configuration_file))?;
    let session = Session::open(config)?;
    Ok(session)
}

fn flow_filter(
    origins: &ZoneSelection,
    destinations: &ZoneSelection,
    min_volume: Option<f64>,
    max_volume: Option<f64>,
) -> FlowFilter {
    FlowFilter {
        origins: origins.clone(),
        destinations: destinations.clone(),
        volume: VolumeRange::new(
            min_volume.unwrap_or(0.0),
            max_volume.unwrap_or(f64::INFINITY),
        ),
    }
}
