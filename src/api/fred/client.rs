use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client as HttpClient;
use reqwest::header::RETRY_AFTER;
use std::time::Duration;
use tracing::{debug, warn};

use super::models::{ApiError, ErrorResponse, ObservationsResponse};
use crate::api::SeriesProvider;
use crate::models::{Observation, SeriesIdentifier};
use crate::utils::{extract_clean_error, rate_limit_fred_api};

/// FRED API client for fetching economic time series observations
pub struct FredClient {
    http_client: HttpClient,
    api_key: String,
    base_url: String,
    max_retries: u32,
}

impl FredClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.stlouisfed.org/fred";
    const DEFAULT_RETRY_AFTER_MS: u64 = 1000;
    const MAX_RETRY_AFTER_MS: u64 = 60_000;
    const BACKOFF_STEP_MS: u64 = 500;

    /// Create a new FRED API client against `base_url`
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries: 2,
        }
    }

    /// Number of extra attempts made on transient failures
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Map a non-success HTTP status and body into an [`ApiError`]
    fn classify_error(status_code: u16, retry_after: Option<&str>, body_text: String) -> ApiError {
        match status_code {
            400 => {
                // FRED reports the reason as JSON `error_message`
                match serde_json::from_str::<ErrorResponse>(&body_text) {
                    Ok(ErrorResponse { error_message: Some(message), .. }) => {
                        ApiError::BadRequest(message)
                    }
                    _ => ApiError::BadRequest(extract_clean_error(&body_text)),
                }
            }
            401 => ApiError::Unauthorized(extract_clean_error(&body_text)),
            403 => ApiError::Forbidden(extract_clean_error(&body_text)),
            404 => ApiError::NotFound(extract_clean_error(&body_text)),
            429 => {
                let retry_after = retry_after
                    .and_then(|s| s.trim().parse::<u64>().ok())
                    .map(|secs| secs.saturating_mul(1000).min(Self::MAX_RETRY_AFTER_MS))
                    .unwrap_or(Self::DEFAULT_RETRY_AFTER_MS);
                warn!("Rate limited by FRED, retry after {} ms", retry_after);
                ApiError::RateLimited { retry_after }
            }
            500..=599 => {
                let body = extract_clean_error(&body_text);
                warn!("FRED server error {}: {}", status_code, body);
                ApiError::ServerError(status_code, body)
            }
            _ => ApiError::HttpError(status_code, extract_clean_error(&body_text)),
        }
    }

    /// Convert a decoded response into observations, skipping missing values
    fn parse_observations(series_id: &SeriesIdentifier, response: ObservationsResponse) -> Vec<Observation> {
        response
            .observations
            .into_iter()
            .filter_map(|raw| {
                let date = match NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d") {
                    Ok(d) => d,
                    Err(_) => {
                        debug!("{}: skipping observation with bad date '{}'", series_id, raw.date);
                        return None;
                    }
                };
                match raw.value.trim().parse::<f64>() {
                    Ok(value) if value.is_finite() => Some(Observation { date, value }),
                    _ => {
                        debug!("{}: no value on {} ('{}')", series_id, date, raw.value);
                        None
                    }
                }
            })
            .collect()
    }

    /// GET /series/observations
    ///
    /// Single attempt, no retry.
    async fn fetch_observations(
        &self,
        series_id: &SeriesIdentifier,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>, ApiError> {
        let url = format!("{}/series/observations", self.base_url);
        let start_str = start.format("%Y-%m-%d").to_string();
        let end_str = end.format("%Y-%m-%d").to_string();

        rate_limit_fred_api().await;
        debug!("GET {} series_id={} {}..{}", url, series_id, start_str, end_str);

        let response = self.http_client
            .get(&url)
            .query(&[
                ("series_id", series_id.as_str()),
                ("api_key", self.api_key.as_str()),
                ("file_type", "json"),
                ("observation_start", start_str.as_str()),
                ("observation_end", end_str.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e.without_url())))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body_text = response.text().await.unwrap_or_default();
            return Err(Self::classify_error(status, retry_after.as_deref(), body_text));
        }

        let body = response
            .json::<ObservationsResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))?;

        debug!("{}: {} observations returned", series_id, body.count.unwrap_or(0));
        Ok(Self::parse_observations(series_id, body))
    }

    fn retry_delay(error: &ApiError, attempt: u32) -> Duration {
        match error {
            ApiError::RateLimited { retry_after } => Duration::from_millis(*retry_after),
            _ => Duration::from_millis(Self::BACKOFF_STEP_MS * u64::from(attempt)),
        }
    }
}

#[async_trait]
impl SeriesProvider for FredClient {
    async fn get_series(
        &self,
        series_id: &SeriesIdentifier,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Observation>, ApiError> {
        let mut attempt = 0;
        loop {
            match self.fetch_observations(series_id, start, end).await {
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = Self::retry_delay(&e, attempt);
                    warn!(
                        "{}: {} (retry {}/{} in {}ms)",
                        series_id, e, attempt, self.max_retries, delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }
}
