pub mod curve;
pub mod table;
pub mod help;

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::api::fred::FredClient;
use crate::api::SeriesProvider;
use crate::config::{DashboardConfig, EmptyCurvePolicy, YieldSource};
use crate::models::{MaturityMap, SeriesIdentifier, YieldCurveSnapshot};
use crate::services::preset_service::{self, StaticProvider};
use crate::services::resolver_service;
use crate::utils::{parse_date, DashboardError};

/// Base and current curves plus the maturities they were built from
pub struct ResolvedCurves {
    pub maturities: MaturityMap,
    pub base: YieldCurveSnapshot,
    pub current: YieldCurveSnapshot,
}

/// Dispatch a command line (without the program name)
pub async fn handle_command(args: &[String]) -> Result<(), DashboardError> {
    let parts: Vec<&str> = args.iter().map(String::as_str).collect();
    let (command, rest) = match parts.split_first() {
        Some((command, rest)) => (*command, rest),
        None => ("curve", &[][..]),
    };

    match command {
        "help" | "-h" | "--help" => {
            help::execute();
            Ok(())
        }
        "curve" | "chart" => {
            let config = DashboardConfig::from_env()?;
            curve::execute(&config, rest).await
        }
        "table" => {
            let config = DashboardConfig::from_env()?;
            table::execute(&config, rest).await
        }
        other => {
            help::execute();
            Err(DashboardError::UnknownCommand(other.to_string()))
        }
    }
}

/// Optional `YYYY-MM-DD` argument overriding the current date
pub fn parse_as_of(args: &[&str]) -> Result<Option<NaiveDate>, DashboardError> {
    match args.first() {
        Some(arg) => parse_date(arg)
            .map(Some)
            .ok_or_else(|| DashboardError::InvalidDate(arg.to_string())),
        None => Ok(None),
    }
}

/// Build both snapshots from the configured source
///
/// Both sources go through the same as-of resolver: the base curve at
/// `config.base_date`, the current curve at `as_of` or today.
pub async fn load_curves(
    config: &DashboardConfig,
    as_of: Option<NaiveDate>,
) -> Result<ResolvedCurves, DashboardError> {
    let today = Local::now().date_naive();
    let (provider, maturities): (Box<dyn SeriesProvider>, MaturityMap) = match config.source {
        YieldSource::Hardcoded => (
            Box::new(StaticProvider::new(today)) as Box<dyn SeriesProvider>,
            preset_service::hardcoded_maturities(),
        ),
        YieldSource::Provider => {
            let api_key = config.api_key.clone().unwrap_or_default();
            let client = FredClient::with_base_url(api_key, config.base_url.clone())
                .with_max_retries(config.max_retries);
            (Box::new(client) as Box<dyn SeriesProvider>, preset_service::provider_maturities())
        }
    };
    let series_map: Vec<(String, SeriesIdentifier)> = maturities.entries().cloned().collect();

    let current_date = as_of.unwrap_or(today);
    info!(
        "Resolving {} {:?} series as of {} and {} (lookback {} days)",
        series_map.len(), config.source, config.base_date, current_date, config.lookback_days
    );

    let base = resolver_service::resolve_all(provider.as_ref(), &series_map, config.base_date, config.lookback_days).await;
    let mut current = resolver_service::resolve_all(provider.as_ref(), &series_map, current_date, config.lookback_days).await;
    if current_date == today {
        current.name = "Current".to_string();
    }

    let curves = ResolvedCurves { maturities, base, current };
    check_empty(&curves, config.empty_policy)?;
    Ok(curves)
}

/// Apply the empty-curve policy
pub fn check_empty(curves: &ResolvedCurves, policy: EmptyCurvePolicy) -> Result<(), DashboardError> {
    for snapshot in [&curves.base, &curves.current] {
        if snapshot.all_absent() {
            warn!("No yields resolved for {}", snapshot.name);
        }
    }

    if curves.base.all_absent() && curves.current.all_absent() {
        return match policy {
            EmptyCurvePolicy::Halt => Err(DashboardError::NoData),
            EmptyCurvePolicy::Render => {
                warn!("Every maturity is unavailable, rendering an empty curve");
                Ok(())
            }
        };
    }

    Ok(())
}
