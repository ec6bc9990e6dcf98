pub mod flow_ops;
pub mod metrics_ops;
