//! Analyzer configuration
//!
//! Configuration is plain data with serde defaults, so a partial JSON
//! document such as `{"seed": 42}` is enough.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unit used when printing elapsed times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Ns,
    Us,
    Ms,
}

impl TimeUnit {
    /// Express `elapsed` in this unit
    pub fn convert(self, elapsed: Duration) -> f64 {
        let nanos = elapsed.as_nanos() as f64;
        match self {
            TimeUnit::Ns => nanos,
            TimeUnit::Us => nanos / 1_000.0,
            TimeUnit::Ms => nanos / 1_000_000.0,
        }
    }

    /// Format `elapsed` with this unit's precision and suffix
    pub fn format(self, elapsed: Duration) -> String {
        match self {
            TimeUnit::Ns => format!("{} {}", elapsed.as_nanos(), self),
            TimeUnit::Us | TimeUnit::Ms => format!("{:.3} {}", self.convert(elapsed), self),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Ns => write!(f, "ns"),
            TimeUnit::Us => write!(f, "μs"),
            TimeUnit::Ms => write!(f, "ms"),
        }
    }
}

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Fixed seed for shuffling and sample sizes; entropy when absent
    pub seed: Option<u64>,
    /// Unit for the textual report and chart annotations
    pub time_unit: TimeUnit,
    /// Width in characters of the longest chart bar
    pub chart_width: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            time_unit: TimeUnit::default(),
            chart_width: 40,
        }
    }
}

impl AnalyzerConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_unit(mut self, time_unit: TimeUnit) -> Self {
        self.time_unit = time_unit;
        self
    }

    pub fn with_chart_width(mut self, chart_width: usize) -> Self {
        self.chart_width = chart_width;
        self
    }

    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chart_width == 0 {
            return Err(Error::InvalidConfig("chart_width must be at least 1".into()));
        }
        Ok(())
    }
}
