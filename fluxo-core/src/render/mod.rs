pub mod layer_ops;

mod color_ramp;
mod label;
mod line;
mod polygon;
mod width_policy;

pub use color_ramp::ColorRamp;
pub use label::RenderLabel;
pub use line::RenderLine;
pub use polygon::RenderPolygon;
pub use width_policy::WidthPolicy;
