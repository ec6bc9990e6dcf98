mod layer_bundle;

pub use layer_bundle::LayerBundle;
