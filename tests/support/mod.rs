pub mod dashboard_env;
pub mod png;
