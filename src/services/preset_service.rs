//! Built-in yield tables and maturity maps

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;

use crate::api::fred::ApiError;
use crate::api::SeriesProvider;
use crate::models::{MaturityMap, Observation, SeriesIdentifier};

/// (label, hardcoded id, FRED constant-maturity series)
///
/// FRED publishes no 2- or 4-month series, so those maturities only exist in
/// the hardcoded tables.
type Maturity = (&'static str, &'static str, Option<&'static str>);

const MONEY_MARKET: [Maturity; 6] = [
    ("1 mo.", "UST1M", Some("DGS1MO")),
    ("2 mo.", "UST2M", None),
    ("3 mo.", "UST3M", Some("DGS3MO")),
    ("4 mo.", "UST4M", None),
    ("6 mo.", "UST6M", Some("DGS6MO")),
    ("1 yr.", "UST1Y", Some("DGS1")),
];

const CAPITAL_MARKET: [Maturity; 7] = [
    ("2 yr.", "UST2Y", Some("DGS2")),
    ("3 yr.", "UST3Y", Some("DGS3")),
    ("5 yr.", "UST5Y", Some("DGS5")),
    ("7 yr.", "UST7Y", Some("DGS7")),
    ("10 yr.", "UST10Y", Some("DGS10")),
    ("20 yr.", "UST20Y", Some("DGS20")),
    ("30 yr.", "UST30Y", Some("DGS30")),
];

/// Yields on 01/01/2025, money market then capital market
const BASE_YIELDS: [f64; 13] = [
    4.40, 4.39, 4.37, 4.32, 4.24, 4.16,
    4.25, 4.27, 4.38, 4.48, 4.58, 4.86, 4.78,
];

/// Most recent yields shipped with the dashboard
const CURRENT_YIELDS: [f64; 13] = [
    4.37, 4.38, 4.34, 4.35, 4.21, 4.04,
    3.96, 3.98, 4.15, 4.32, 4.48, 4.91, 4.85,
];

/// Date the hardcoded base table was taken on
pub fn hardcoded_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

fn build_map<F>(pick: F) -> MaturityMap
where
    F: Fn(&Maturity) -> Option<&'static str>,
{
    let collect = |group: &[Maturity]| -> Vec<(String, SeriesIdentifier)> {
        group
            .iter()
            .filter_map(|entry| {
                let id = SeriesIdentifier::new(pick(entry)?)?;
                Some((entry.0.to_string(), id))
            })
            .collect()
    };

    MaturityMap {
        short: collect(&MONEY_MARKET[..]),
        long: collect(&CAPITAL_MARKET[..]),
    }
}

/// Every maturity of the hardcoded tables
pub fn hardcoded_maturities() -> MaturityMap {
    build_map(|entry| Some(entry.1))
}

/// Maturities available as FRED daily series
pub fn provider_maturities() -> MaturityMap {
    build_map(|entry| entry.2)
}

/// Serves the built-in tables as series observations.
///
/// Every hardcoded series has two observations: the base table on
/// 01/01/2025 and the current table on `current_date`. Lookups then go
/// through the same as-of resolver as live data.
pub struct StaticProvider {
    series: HashMap<String, Vec<Observation>>,
}

impl StaticProvider {
    pub fn new(current_date: NaiveDate) -> Self {
        let base_date = hardcoded_base_date();
        let maturities = MONEY_MARKET.iter().chain(CAPITAL_MARKET.iter());
        let series = maturities
            .zip(BASE_YIELDS.iter().zip(CURRENT_YIELDS.iter()))
            .map(|(&(_, id, _), (&base, &current))| {
                let observations = vec![
                    Observation { date: base_date, value: base },
                    Observation { date: current_date, value: current },
                ];
                (id.to_string(), observations)
            })
            .collect();

        Self { series }
    }
}

#[async_trait]
impl SeriesProvider for StaticProvider {
    async fn get_series(
        &self,
        series_id: &SeriesIdentifier,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>, ApiError> {
        let observations = self
            .series
            .get(series_id.as_str())
            .ok_or_else(|| ApiError::NotFound(format!("No built-in table for {}", series_id)))?;

        let in_window: Vec<Observation> = observations
            .iter()
            .filter(|o| o.date >= start && o.date <= end)
            .cloned()
            .collect();
        debug!("{}: {} built-in observations in {}..{}", series_id, in_window.len(), start, end);
        Ok(in_window)
    }
}


/// Ready-made hardcoded snapshots for tests of the downstream services
#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::models::{YieldCurveSnapshot, YieldPoint};

    fn snapshot(name: &str, on: NaiveDate, yields: &[f64; 13]) -> YieldCurveSnapshot {
        let mut snapshot = YieldCurveSnapshot::new(name);
        for ((label, id), &value) in hardcoded_maturities().entries().zip(yields.iter()) {
            snapshot.insert(label.clone(), YieldPoint::observed(id.clone(), on, on, value));
        }
        snapshot
    }

    pub fn base_snapshot() -> YieldCurveSnapshot {
        snapshot("01/01/2025", hardcoded_base_date(), &BASE_YIELDS)
    }

    pub fn current_snapshot() -> YieldCurveSnapshot {
        snapshot("Current", chrono::Local::now().date_naive(), &CURRENT_YIELDS)
    }
}
