//! Resolved yield values

use chrono::NaiveDate;
use super::series::SeriesIdentifier;

/// A yield resolved for one series as of a requested date.
///
/// `value` is `None` when nothing could be resolved. That absence is kept
/// all the way to rendering and is never turned into `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct YieldPoint {
    pub series_id: SeriesIdentifier,
    pub requested_date: NaiveDate,
    /// Observation date when a value was found, otherwise the requested date
    pub resolved_date: NaiveDate,
    pub value: Option<f64>,
}

impl YieldPoint {
    /// A point holding a value observed on `observed_on`, rounded to 2 decimals
    pub fn observed(
        series_id: SeriesIdentifier,
        requested_date: NaiveDate,
        observed_on: NaiveDate,
        value: f64,
    ) -> Self {
        Self {
            series_id,
            requested_date,
            resolved_date: observed_on,
            value: Some(round_yield(value)),
        }
    }

    /// The absence marker for `series_id` at `requested_date`
    pub fn absent(series_id: SeriesIdentifier, requested_date: NaiveDate) -> Self {
        Self {
            series_id,
            requested_date,
            resolved_date: requested_date,
            value: None,
        }
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }
}

/// Round a yield to 2 decimal places
pub fn round_yield(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_round_yield() {
        assert_eq!(round_yield(4.256), 4.26);
        assert_eq!(round_yield(4.254), 4.25);
        assert_eq!(round_yield(0.0), 0.0);
    }

    #[test]
    fn test_observed_point_keeps_observation_date() {
        let id = SeriesIdentifier::new("DGS2").unwrap();
        let point = YieldPoint::observed(id, date(2025, 1, 1), date(2024, 12, 31), 4.2449);
        assert_eq!(point.value, Some(4.24));
        assert_eq!(point.resolved_date, date(2024, 12, 31));
        assert_eq!(point.requested_date, date(2025, 1, 1));
    }

    #[test]
    fn test_absent_point_is_not_zero() {
        let id = SeriesIdentifier::new("DGS2").unwrap();
        let point = YieldPoint::absent(id, date(2025, 1, 1));
        assert!(point.is_absent());
        assert_ne!(point.value, Some(0.0));
        assert_eq!(point.resolved_date, date(2025, 1, 1));
    }
}
