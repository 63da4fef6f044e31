//! Dashboard configuration loaded from the environment

use chrono::NaiveDate;
use std::path::PathBuf;
use std::str::FromStr;

use crate::api::fred::FredClient;
use crate::services::preset_service;
use crate::utils::{parse_date, ConfigError};

/// Where yield values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YieldSource {
    /// Built-in start/current tables
    Hardcoded,
    /// Live lookups against the FRED API
    Provider,
}

impl FromStr for YieldSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hardcoded" | "static" => Ok(YieldSource::Hardcoded),
            "provider" | "fred" => Ok(YieldSource::Provider),
            _ => Err("expected 'hardcoded' or 'provider'".to_string()),
        }
    }
}

/// What to do when every maturity resolved to the absence marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyCurvePolicy {
    /// Log a warning and draw whatever is there
    Render,
    /// Stop the command with an error
    Halt,
}

impl FromStr for EmptyCurvePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "render" => Ok(EmptyCurvePolicy::Render),
            "halt" | "stop" => Ok(EmptyCurvePolicy::Halt),
            _ => Err("expected 'render' or 'halt'".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub source: YieldSource,
    pub api_key: Option<String>,
    pub base_url: String,
    pub base_date: NaiveDate,
    pub lookback_days: u32,
    pub max_retries: u32,
    pub empty_policy: EmptyCurvePolicy,
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl DashboardConfig {
    pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let source = parse_var(&get, "YIELD_SOURCE", YieldSource::Hardcoded)?;
        let api_key = get("FRED_API_KEY");
        if source == YieldSource::Provider && api_key.is_none() {
            return Err(ConfigError::Missing("FRED_API_KEY"));
        }

        let base_date = match get("YIELD_BASE_DATE") {
            Some(value) => parse_date(&value).ok_or_else(|| ConfigError::Invalid {
                name: "YIELD_BASE_DATE",
                value,
                reason: "expected YYYY-MM-DD".to_string(),
            })?,
            None => preset_service::hardcoded_base_date(),
        };

        let width: u32 = parse_var(&get, "CHART_WIDTH", 1200)?;
        let height: u32 = parse_var(&get, "CHART_HEIGHT", 600)?;
        if width == 0 || height == 0 {
            return Err(ConfigError::Invalid {
                name: "CHART_WIDTH/CHART_HEIGHT",
                value: format!("{}x{}", width, height),
                reason: "dimensions must be positive".to_string(),
            });
        }

        Ok(Self {
            source,
            api_key,
            base_url: get("FRED_BASE_URL").unwrap_or_else(|| FredClient::DEFAULT_BASE_URL.to_string()),
            base_date,
            lookback_days: parse_var(&get, "YIELD_LOOKBACK_DAYS", Self::DEFAULT_LOOKBACK_DAYS)?,
            max_retries: parse_var(&get, "FRED_MAX_RETRIES", 2)?,
            empty_policy: parse_var(&get, "EMPTY_CURVE_POLICY", EmptyCurvePolicy::Render)?,
            output_path: get("CHART_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("treasury_yield_curve.png")),
            width,
            height,
        })
    }
}

fn parse_var<T, G>(get: &G, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(name) {
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                name,
                reason: e.to_string(),
                value,
            })
        }
        None => Ok(default),
    }
}
