//! Fixed dashboard content: tab list, Sankey lookup and model metrics.

pub mod catalog;
pub mod metrics;
mod tabs;

pub use catalog::{SANKEY_PLOTS, StateImageEntry};
pub use metrics::{MODEL_METRICS, MetricColumn, ModelMetricsRow};
pub use tabs::DashboardTab;
