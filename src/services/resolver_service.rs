use chrono::{Days, NaiveDate};
use futures::future::join_all;
use tracing::{debug, warn};

use crate::api::SeriesProvider;
use crate::models::{SeriesIdentifier, YieldCurveSnapshot, YieldPoint};
use crate::utils::{display_date, LookupError};

/// First date of the lookback window ending at `target_date`
pub fn window_start(target_date: NaiveDate, lookback_days: u32) -> NaiveDate {
    target_date
        .checked_sub_days(Days::new(u64::from(lookback_days)))
        .unwrap_or(NaiveDate::MIN)
}

/// As-of lookup of `series_id` at `target_date`, reporting why it failed.
///
/// Only observations inside `[target_date - lookback_days, target_date]` are
/// considered, whatever the provider returns. The latest of those wins.
pub async fn try_resolve(
    provider: &dyn SeriesProvider,
    series_id: &SeriesIdentifier,
    target_date: NaiveDate,
    lookback_days: u32,
) -> Result<YieldPoint, LookupError> {
    let start = window_start(target_date, lookback_days);
    let observations = provider.get_series(series_id, start, target_date).await?;

    let latest = observations
        .iter()
        .filter(|o| o.date >= start && o.date <= target_date)
        .max_by_key(|o| o.date);

    match latest {
        Some(obs) => {
            debug!("{} as of {}: {} (observed {})", series_id, target_date, obs.value, obs.date);
            Ok(YieldPoint::observed(series_id.clone(), target_date, obs.date, obs.value))
        }
        None => Err(LookupError::NoObservationInWindow {
            series_id: series_id.clone(),
            start,
            end: target_date,
        }),
    }
}

/// As-of lookup that never fails: any error becomes the absence marker
pub async fn resolve(
    provider: &dyn SeriesProvider,
    series_id: &SeriesIdentifier,
    target_date: NaiveDate,
    lookback_days: u32,
) -> YieldPoint {
    match try_resolve(provider, series_id, target_date, lookback_days).await {
        Ok(point) => point,
        Err(e) => {
            warn!("{} unavailable as of {}: {}", series_id, target_date, e);
            YieldPoint::absent(series_id.clone(), target_date)
        }
    }
}

/// Resolve every `(label, series)` entry into a snapshot.
///
/// Lookups run concurrently; the snapshot keeps the order of `series_map`.
/// The snapshot is named after `target_date` (`MM/DD/YYYY`).
pub async fn resolve_all(
    provider: &dyn SeriesProvider,
    series_map: &[(String, SeriesIdentifier)],
    target_date: NaiveDate,
    lookback_days: u32,
) -> YieldCurveSnapshot {
    let lookups = series_map
        .iter()
        .map(|(_, series_id)| resolve(provider, series_id, target_date, lookback_days));
    let points = join_all(lookups).await;

    let mut snapshot = YieldCurveSnapshot::new(display_date(target_date));
    for ((label, _), point) in series_map.iter().zip(points) {
        snapshot.insert(label.clone(), point);
    }

    let resolved = snapshot.iter().filter(|(_, p)| !p.is_absent()).count();
    debug!("Resolved {}/{} series as of {}", resolved, snapshot.len(), target_date);

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fred::ApiError;
    use crate::models::Observation;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// In-memory provider returning canned observations, ignoring the window
    #[derive(Default)]
    struct FixtureProvider {
        series: HashMap<String, Vec<Observation>>,
        failures: HashMap<String, ApiError>,
    }

    impl FixtureProvider {
        fn with_series(mut self, id: &str, obs: &[(NaiveDate, f64)]) -> Self {
            let obs = obs.iter().map(|&(date, value)| Observation { date, value }).collect();
            self.series.insert(id.to_string(), obs);
            self
        }

        fn with_failure(mut self, id: &str, err: ApiError) -> Self {
            self.failures.insert(id.to_string(), err);
            self
        }
    }

    #[async_trait]
    impl SeriesProvider for FixtureProvider {
        async fn get_series(
            &self,
            series_id: &SeriesIdentifier,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<Observation>, ApiError> {
            if let Some(err) = self.failures.get(series_id.as_str()) {
                return Err(err.clone());
            }
            Ok(self.series.get(series_id.as_str()).cloned().unwrap_or_default())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn id(s: &str) -> SeriesIdentifier {
        SeriesIdentifier::new(s).unwrap()
    }

    #[test]
    fn test_window_start() {
        assert_eq!(window_start(date(2025, 1, 1), 5), date(2024, 12, 27));
        assert_eq!(window_start(date(2025, 1, 1), 0), date(2025, 1, 1));
    }

    #[tokio::test]
    async fn test_resolve_picks_latest_not_after_target() {
        let provider = FixtureProvider::default()
            .with_series("DGS2", &[(date(2024, 12, 30), 4.25), (date(2024, 12, 27), 4.20)]);

        let point = resolve(&provider, &id("DGS2"), date(2025, 1, 1), 5).await;
        assert_eq!(point.value, Some(4.25));
        assert_eq!(point.resolved_date, date(2024, 12, 30));
        assert_eq!(point.requested_date, date(2025, 1, 1));
    }

    #[tokio::test]
    async fn test_resolve_never_looks_ahead() {
        let provider = FixtureProvider::default()
            .with_series("DGS2", &[(date(2025, 1, 2), 4.30)]);

        let point = resolve(&provider, &id("DGS2"), date(2025, 1, 1), 5).await;
        assert!(point.is_absent());
        assert_eq!(point.resolved_date, date(2025, 1, 1));
    }

    #[tokio::test]
    async fn test_resolve_ignores_later_observation_when_earlier_exists() {
        let provider = FixtureProvider::default()
            .with_series("DGS10", &[(date(2025, 1, 2), 4.60), (date(2024, 12, 31), 4.58)]);

        let point = resolve(&provider, &id("DGS10"), date(2025, 1, 1), 5).await;
        assert_eq!(point.value, Some(4.58));
    }

    #[tokio::test]
    async fn test_resolve_ignores_observations_before_window() {
        let provider = FixtureProvider::default()
            .with_series("DGS10", &[(date(2024, 12, 20), 4.50)]);

        let err = try_resolve(&provider, &id("DGS10"), date(2025, 1, 1), 5).await.unwrap_err();
        match err {
            LookupError::NoObservationInWindow { series_id, start, end } => {
                assert_eq!(series_id.as_str(), "DGS10");
                assert_eq!(start, date(2024, 12, 27));
                assert_eq!(end, date(2025, 1, 1));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_empty_window_is_absent_not_zero() {
        let provider = FixtureProvider::default();

        let point = resolve(&provider, &id("DGS1MO"), date(2025, 1, 1), 5).await;
        assert_eq!(point.value, None);
    }

    #[tokio::test]
    async fn test_resolve_keeps_real_zero() {
        let provider = FixtureProvider::default()
            .with_series("DGS1MO", &[(date(2021, 3, 31), 0.001)]);

        let point = resolve(&provider, &id("DGS1MO"), date(2021, 4, 1), 5).await;
        assert_eq!(point.value, Some(0.0));
    }

    #[tokio::test]
    async fn test_resolve_rounds_to_two_decimals() {
        let provider = FixtureProvider::default()
            .with_series("DGS5", &[(date(2024, 12, 31), 4.3849)]);

        let point = resolve(&provider, &id("DGS5"), date(2025, 1, 1), 5).await;
        assert_eq!(point.value, Some(4.38));
    }

    #[tokio::test]
    async fn test_provider_failure_is_explicit_then_swallowed() {
        let provider = FixtureProvider::default()
            .with_failure("DGS30", ApiError::Unauthorized("bad api key".to_string()));

        let err = try_resolve(&provider, &id("DGS30"), date(2025, 1, 1), 5).await.unwrap_err();
        assert!(matches!(err, LookupError::ProviderUnavailable(ApiError::Unauthorized(_))));

        let point = resolve(&provider, &id("DGS30"), date(2025, 1, 1), 5).await;
        assert!(point.is_absent());
    }

    #[tokio::test]
    async fn test_resolve_all_preserves_input_order() {
        let provider = FixtureProvider::default()
            .with_series("DGS1MO", &[(date(2024, 12, 31), 4.40)])
            .with_series("DGS2", &[(date(2024, 12, 31), 4.25)])
            .with_series("DGS30", &[(date(2024, 12, 31), 4.78)]);

        let orders = [
            ["1 mo.", "2 yr.", "30 yr."],
            ["30 yr.", "1 mo.", "2 yr."],
            ["2 yr.", "30 yr.", "1 mo."],
        ];
        let series_for = |label: &str| match label {
            "1 mo." => id("DGS1MO"),
            "2 yr." => id("DGS2"),
            _ => id("DGS30"),
        };

        for order in orders {
            let map: Vec<(String, SeriesIdentifier)> = order
                .iter()
                .map(|l| (l.to_string(), series_for(*l)))
                .collect();
            let snapshot = resolve_all(&provider, &map, date(2025, 1, 1), 5).await;
            let labels: Vec<&str> = snapshot.labels().collect();
            assert_eq!(labels, order.to_vec());
        }
    }

    #[tokio::test]
    async fn test_resolve_all_partial_data() {
        let provider = FixtureProvider::default()
            .with_series("DGS1MO", &[(date(2024, 12, 31), 4.40)])
            .with_failure("DGS2", ApiError::ServerError(503, "down".to_string()));

        let map = vec![
            ("1 mo.".to_string(), id("DGS1MO")),
            ("2 yr.".to_string(), id("DGS2")),
            ("30 yr.".to_string(), id("DGS30")),
        ];
        let snapshot = resolve_all(&provider, &map, date(2025, 1, 1), 5).await;

        assert_eq!(snapshot.name, "01/01/2025");
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.value("1 mo."), Some(4.40));
        assert!(snapshot.get("2 yr.").unwrap().is_absent());
        assert!(snapshot.get("30 yr.").unwrap().is_absent());
        assert!(!snapshot.all_absent());
    }
}
