use std::path::Path;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use fluxo_core::model::TripMode;
use fluxo_core::render::{ColorRamp, WidthPolicy};
use fluxo_core::resolve::ResolverConfig;

use super::InputError;

/// top-level dataset descriptor loaded from a TOML configuration file.
/// relative file paths are resolved against the configuration's directory.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct FluxoConfig {
    /// trip record inputs, concatenated into one record set on load
    pub datasets: Vec<SurveyDatasetConfig>,
    /// zone geometry input; required for the choropleth and the centroid
    /// resolver, optional when a static coordinate table is configured
    pub zones: Option<ZoneInputConfig>,
    pub resolver: ResolverConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// one trip-record CSV. the RMGSL survey publishes one file per travel mode
/// (fixed `mode`); other survey forms label each row through `mode_column`.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct SurveyDatasetConfig {
    pub file: String,
    /// column holding the origin zone of each trip
    #[serde(default = "default_origin_column")]
    pub origin_column: String,
    /// column holding the destination zone of each trip
    #[serde(default = "default_destination_column")]
    pub destination_column: String,
    /// trip count column for pre-aggregated inputs. if not provided, each
    /// row counts as one trip.
    pub volume_column: Option<String>,
    /// travel mode applied to every row of this file. takes precedence over
    /// `mode_column`.
    pub mode: Option<TripMode>,
    /// column holding a per-row mode label
    pub mode_column: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ZoneInputConfig {
    /// a GeoJSON FeatureCollection of zone polygons
    pub file: String,
    /// feature property holding the ZoneId. if not provided, "zone_id"
    /// will be used.
    #[serde(default = "default_zone_id_column")]
    pub zone_id_column: String,
}

/// visual scaling knobs handed to the render adapter.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct RenderConfig {
    #[serde(default = "default_min_width")]
    pub min_width: f64,
    #[serde(default = "default_max_width")]
    pub max_width: f64,
    /// named colorous gradient for the choropleth
    #[serde(default = "default_color_ramp")]
    pub color_ramp: String,
    /// suggested initial zoom for the external map widget
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

fn default_origin_column() -> String {
    "Qual o município de ORIGEM".to_string()
}

fn default_destination_column() -> String {
    "Qual o município de DESTINO".to_string()
}

fn default_zone_id_column() -> String {
    "zone_id".to_string()
}

fn default_min_width() -> f64 {
    1.0
}

fn default_max_width() -> f64 {
    10.0
}

fn default_color_ramp() -> String {
    "viridis".to_string()
}

fn default_zoom() -> f64 {
    8.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            min_width: default_min_width(),
            max_width: default_max_width(),
            color_ramp: default_color_ramp(),
            zoom: default_zoom(),
        }
    }
}

impl RenderConfig {
    pub fn width_policy(&self) -> WidthPolicy {
        WidthPolicy::new(self.min_width, self.max_width)
    }

    pub fn color_ramp(&self) -> Result<ColorRamp, String> {
        self.color_ramp.parse()
    }
}

impl FluxoConfig {
    /// loads a dataset descriptor from a TOML file and resolves its relative
    /// input paths against the file's directory.
    pub fn from_file(path: &Path) -> Result<FluxoConfig, InputError> {
        let settings = Config::builder()
            .add_source(File::from(path))
            .build()
            .map_err(|e| InputError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let datasets = settings
            .get::<Vec<SurveyDatasetConfig>>("datasets")
            .map_err(|e| InputError::Deserialize {
                col: "datasets".to_string(),
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let zones = get_optional::<ZoneInputConfig>(&settings, "zones", path)?;
        let resolver =
            settings
                .get::<ResolverConfig>("resolver")
                .map_err(|e| InputError::Deserialize {
                    col: "resolver".to_string(),
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
        let render = get_optional::<RenderConfig>(&settings, "render", path)?.unwrap_or_default();
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let mut config = FluxoConfig {
            datasets,
            zones,
            resolver,
            render,
        };
        for dataset in config.datasets.iter_mut() {
            resolve_against(&mut dataset.file, base);
        }
        if let Some(zone_config) = config.zones.as_mut() {
            resolve_against(&mut zone_config.file, base);
        }
        Ok(config)
    }
}

/// reads one optional configuration section. the config crate reports an
/// absent key as an error rather than deserializing to `None`, so the
/// not-found case is separated from genuine deserialization failures here.
fn get_optional<T: serde::de::DeserializeOwned>(
    settings: &Config,
    key: &str,
    path: &Path,
) -> Result<Option<T>, InputError> {
    match settings.get::<T>(key) {
        Ok(value) => Ok(Some(value)),
        Err(config::ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(InputError::Deserialize {
            col: key.to_string(),
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

fn resolve_against(file: &mut String, base: &Path) {
    if Path::new(file).is_relative() {
        *file = base.join(file.as_str()).to_string_lossy().into_owned();
    }
}
