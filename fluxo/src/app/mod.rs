mod error;
mod fluxo_app;

pub use error::FluxoError;
pub use fluxo_app::{FluxoApp, FluxoOperation};
