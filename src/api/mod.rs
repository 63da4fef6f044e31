//! External data providers

pub mod fred;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Observation, SeriesIdentifier};
use fred::ApiError;

/// A source of dated observations for named series
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Observations of `series_id` between `start` and `end`, both inclusive.
    /// Order is not guaranteed.
    async fn get_series(
        &self,
        series_id: &SeriesIdentifier,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>, ApiError>;
}
