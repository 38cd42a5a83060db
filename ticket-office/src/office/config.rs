//! Configuration for the ticket office.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{ClockTime, TimeError};

/// Errors loading an [`OfficeConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for this schema
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Inclusive range of times during which lines may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawServiceWindow")]
pub struct ServiceWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl ServiceWindow {
    /// Create a window from its first and last allowed times.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Whether `time` falls inside the window.
    pub fn contains(&self, time: ClockTime) -> bool {
        self.start <= time && time <= self.end
    }
}

#[derive(Deserialize)]
struct RawServiceWindow {
    start: String,
    end: String,
}

impl TryFrom<RawServiceWindow> for ServiceWindow {
    type Error = TimeError;

    fn try_from(raw: RawServiceWindow) -> Result<Self, Self::Error> {
        Ok(Self {
            start: ClockTime::parse(&raw.start)?,
            end: ClockTime::parse(&raw.end)?,
        })
    }
}

/// Tunable parameters of the ticket office.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OfficeConfig {
    /// Largest number of tickets sold together for one route.
    pub max_tickets_per_set: usize,

    /// Minutes added to a route's travel time to get the coverage a ticket
    /// set must reach. With 1, coverage must strictly exceed travel time.
    pub coverage_margin_mins: i64,

    /// If set, every stop time of a new line must fall inside this window.
    pub service_window: Option<ServiceWindow>,

    /// If set, stop times along a new line must strictly increase.
    pub require_ascending_times: bool,
}

impl OfficeConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_tickets_per_set: usize,
        coverage_margin_mins: i64,
        service_window: Option<ServiceWindow>,
        require_ascending_times: bool,
    ) -> Self {
        Self {
            max_tickets_per_set,
            coverage_margin_mins,
            service_window,
            require_ascending_times,
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// The coverage a ticket set needs for a route taking `elapsed_mins`.
    pub fn required_coverage(&self, elapsed_mins: i64) -> i64 {
        elapsed_mins + self.coverage_margin_mins
    }
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            max_tickets_per_set: 3,
            coverage_margin_mins: 1,
            service_window: None,
            require_ascending_times: false,
        }
    }
}
