//! Library exports for the election dashboard binary and its tests.
/// Per-user application directories.
pub mod app_dirs;
/// Asset lookup and PNG decoding.
pub mod assets;
/// Optional TOML configuration.
pub mod config;
/// Fixed dashboard content.
pub mod dashboard;
/// egui front end.
pub mod egui_app;
/// Tracing subscriber setup.
pub mod logging;
