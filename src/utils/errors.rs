use chrono::NaiveDate;
use thiserror::Error;

use crate::api::fred::ApiError;
use crate::models::SeriesIdentifier;

/// Why a single yield lookup produced no value
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    /// Network, auth, rate-limit or decoding failure talking to the provider
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(#[from] ApiError),
    /// The provider answered but had nothing on or before the target date
    #[error("No observation for {series_id} between {start} and {end}")]
    NoObservationInWindow {
        series_id: SeriesIdentifier,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required variable: {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name}: '{value}' ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Chart rendering errors
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Failed to draw chart: {0}")]
    Drawing(String),
    #[error("Chart file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by dashboard commands
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Chart(#[from] ChartError),
    #[error("No yield data could be resolved for any maturity")]
    NoData,
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorten a provider error body for logging
///
/// Error pages can be large HTML documents; only the first line, capped at
/// 200 characters, is kept.
pub fn extract_clean_error(error_msg: &str) -> String {
    let first_line = error_msg.lines().next().unwrap_or("").trim();
    if first_line.chars().count() > 200 {
        let cut: String = first_line.chars().take(200).collect();
        format!("{}...", cut)
    } else {
        first_line.to_string()
    }
}
