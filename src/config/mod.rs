// src/config/mod.rs

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, parse_config_bytes, ConfigLoader, LoadObserver, TracingObserver};
pub use schema::{Config, GlobalConfig, Metric, MetricType, DEFAULT_TIMEOUT_SECONDS};
