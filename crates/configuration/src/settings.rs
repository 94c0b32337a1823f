use serde::Deserialize;

use crate::error::ConfigError;

/// Largest number of decimals `f64` output can meaningfully show.
const MAX_PRECISION: usize = 17;

/// Upper bound on `history_limit`; the history log never holds more than this.
const MAX_HISTORY_LIMIT: usize = 100;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub logging: Logging,
}

/// How results are rendered by the front end.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Decimals shown for a single calculation result.
    pub result_precision: usize,
    /// Decimals shown in the statistics table.
    pub statistics_precision: usize,
    /// How many of the most recent history entries `history` lists by default.
    pub history_limit: usize,
}

/// Where and how much the application logs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// An `EnvFilter` directive, e.g. `"warn"` or `"engine=debug"`. `RUST_LOG` wins
    /// when set.
    pub filter: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    pub directory: Option<String>,
}

// --- Default Implementations ---
// This allows a user to omit any section or key from their toml.

impl Default for Display {
    fn default() -> Self {
        Self {
            result_precision: 6,
            statistics_precision: 4,
            history_limit: 20,
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            directory: None,
        }
    }
}

impl Config {
    /// Checks that every value is within its usable range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let display = &self.display;
        if display.result_precision > MAX_PRECISION {
            return Err(ConfigError::ValidationError(format!(
                "display.result_precision must be at most {MAX_PRECISION}"
            )));
        }
        if display.statistics_precision > MAX_PRECISION {
            return Err(ConfigError::ValidationError(format!(
                "display.statistics_precision must be at most {MAX_PRECISION}"
            )));
        }
        if display.history_limit == 0 || display.history_limit > MAX_HISTORY_LIMIT {
            return Err(ConfigError::ValidationError(format!(
                "display.history_limit must be between 1 and {MAX_HISTORY_LIMIT}"
            )));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.filter cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
