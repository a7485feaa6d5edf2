// src/lib.rs

//! Declarative configuration for scraping metrics out of structured documents.
//!
//! A scrape configuration lists the [`Metric`]s to extract, the headers to send
//! and a [`GlobalConfig`] with the scrape timeout. The scraping engine itself
//! lives elsewhere and only consumes the loaded [`Config`].

pub mod config;
pub mod error;
pub mod logging;

pub use config::{
    load_config, parse_config, parse_config_bytes, Config, ConfigLoader, GlobalConfig, LoadObserver, Metric,
    MetricType, TracingObserver,
};
pub use error::{ConfigError, ErrorKind, Result};
