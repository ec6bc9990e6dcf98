pub mod trip_reader;
pub mod zone_reader;

mod config;
mod error;

pub use config::{FluxoConfig, RenderConfig, SurveyDatasetConfig, ZoneInputConfig};
pub use error::InputError;
