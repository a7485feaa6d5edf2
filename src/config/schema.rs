// src/config/schema.rs

use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Scrape timeout applied when `global.timeout_seconds` is absent or zero.
pub const DEFAULT_TIMEOUT_SECONDS: f64 = 10.0;

/// How a metric's value is extracted from the scraped document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    /// A single scalar per metric.
    #[default]
    Value,
    /// Several named sub-values, described by `Metric::values`.
    Object,
}

impl MetricType {
    /// Spellings accepted for `type` in a configuration document.
    pub const VARIANTS: &'static [&'static str] = &["value", "object"];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricType::Value => "value",
            MetricType::Object => "object",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// A missing, null or empty `type` is the unset value and resolves to `value`.
// Anything else must name a known variant.
impl<'de> Deserialize<'de> for MetricType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(MetricType::default()),
            Some("value") => Ok(MetricType::Value),
            Some("object") => Ok(MetricType::Object),
            Some(other) => Err(de::Error::unknown_variant(other, Self::VARIANTS)),
        }
    }
}

/// One extraction rule turning part of the scraped document into a time-series.
#[derive(Debug, Deserialize, Clone, PartialEq, Default, Serialize)]
pub struct Metric {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Query expression locating the value(s); evaluated by the scraper.
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    /// Label name to extraction expression.
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: BTreeMap<String, String>,
    #[serde(rename = "type", default)]
    pub metric_type: MetricType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub help: String,
    /// Sub-field name to extraction expression, for `object` metrics.
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: BTreeMap<String, String>,
}

impl Metric {
    /// Names of the labels attached to this metric, in sorted order.
    pub fn label_names(&self) -> Vec<String> {
        self.labels.keys().cloned().collect()
    }

    /// Names of the sub-values of an `object` metric, in sorted order.
    pub fn value_names(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }

    /// True for metrics that extract several named sub-values.
    pub fn is_object(&self) -> bool {
        self.metric_type == MetricType::Object
    }

    /// Fills in `help` from `name` when it was left empty.
    ///
    /// An unset `type` is already resolved to `value` during deserialization.
    pub fn apply_defaults(&mut self) {
        if self.help.is_empty() {
            self.help = self.name.clone();
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default, Serialize)]
pub struct GlobalConfig {
    #[serde(
        default,
        alias = "timeoutseconds",
        deserialize_with = "null_as_default"
    )]
    pub timeout_seconds: f64,
}

impl GlobalConfig {
    /// Zero means "unset" and is replaced with [`DEFAULT_TIMEOUT_SECONDS`].
    pub fn apply_defaults(&mut self) {
        if self.timeout_seconds == 0.0 {
            self.timeout_seconds = DEFAULT_TIMEOUT_SECONDS;
        }
    }

    /// Scrape timeout as a `Duration`.
    ///
    /// Negative or non-finite values, which the loader passes through untouched,
    /// collapse to a zero duration.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_seconds).unwrap_or(Duration::ZERO)
    }
}

/// Root of a scrape configuration document.
#[derive(Debug, Deserialize, Clone, PartialEq, Default, Serialize)]
pub struct Config {
    /// Headers sent with every outbound scrape request.
    #[serde(default, deserialize_with = "null_as_default")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metrics: Vec<Metric>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub global: GlobalConfig,
}

impl Config {
    /// Completes every metric first, then the global section.
    pub fn apply_defaults(&mut self) {
        for metric in &mut self.metrics {
            metric.apply_defaults();
        }
        self.global.apply_defaults();
    }

    /// First metric with the given name. Names are not required to be unique.
    pub fn find_metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|metric| metric.name == name)
    }
}

// `labels:` with nothing after it is YAML null; treat it like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
