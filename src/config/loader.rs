// src/config/loader.rs

use crate::config::Config;
use crate::error::{ConfigError, Result};
use std::path::Path;
use tracing::{debug, error, info};

/// Parse a configuration document and complete its defaults.
///
/// An empty document (nothing but whitespace or comments) is a valid, empty
/// configuration.
pub fn parse_config(content: &str) -> Result<Config> {
    parse_config_bytes(content.as_bytes())
}

/// Like [`parse_config`], for raw file contents. Bytes that are not valid
/// UTF-8 are a parse error.
pub fn parse_config_bytes(content: &[u8]) -> Result<Config> {
    let parsed: Option<Config> = serde_yaml::from_slice(content).map_err(ConfigError::parse)?;
    let mut config = parsed.unwrap_or_default();
    config.apply_defaults();
    Ok(config)
}

/// Read the file at `config_path` and parse it with [`parse_config_bytes`].
///
/// This performs no logging; wrap it in a [`ConfigLoader`] to report outcomes.
pub fn load_config(config_path: &Path) -> Result<Config> {
    let content = std::fs::read(config_path).map_err(|e| ConfigError::io(config_path, e))?;

    parse_config_bytes(&content).map_err(|e| e.with_path(config_path))
}

/// Receives the outcome of every load performed by a [`ConfigLoader`].
pub trait LoadObserver {
    fn on_loaded(&self, _path: &Path, _config: &Config) {}

    fn on_error(&self, _path: &Path, _error: &ConfigError) {}
}

/// Reports load outcomes through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn on_loaded(&self, path: &Path, config: &Config) {
        info!(
            config.path = %path.display(),
            config.metrics.count = config.metrics.len(),
            config.headers.count = config.headers.len(),
            global.timeout_seconds = config.global.timeout_seconds,
            "Configuration loaded"
        );
        debug!(
            config.metrics.names = ?config.metrics.iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            "Configured metrics"
        );
    }

    fn on_error(&self, path: &Path, err: &ConfigError) {
        match err {
            ConfigError::Io { source, .. } => {
                error!(config.path = %path.display(), error = %source, "Failed to load config");
            }
            ConfigError::Parse { line, source, .. } => {
                error!(config.path = %path.display(), line = ?line, error = %source, "Failed to parse YAML");
            }
        }
    }
}

/// Loads configuration files and reports each outcome to an observer.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader<O = TracingObserver> {
    observer: O,
}

impl ConfigLoader<TracingObserver> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: LoadObserver> ConfigLoader<O> {
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn load(&self, config_path: &Path) -> Result<Config> {
        match load_config(config_path) {
            Ok(config) => {
                self.observer.on_loaded(config_path, &config);
                Ok(config)
            }
            Err(e) => {
                self.observer.on_error(config_path, &e);
                Err(e)
            }
        }
    }
}
