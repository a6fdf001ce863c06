//! Schedule endpoint access.
//!
//! The outbound boundary is the [`ScheduleSource`] trait so the aggregation
//! and presentation layers can be exercised with canned payloads; the
//! production implementation issues one GET per query against the public
//! stats API.

use crate::config::Config;
use crate::constants::{HTTP_POOL_MAX_IDLE_PER_HOST, SCHEDULE_ENDPOINT};
use crate::data_fetcher::models::{ScheduleDate, ScheduleResponse};
use crate::error::AppError;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Creates a properly configured HTTP client with connection pooling and
/// timeout handling.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Builds the schedule URL for an inclusive date range. The range is not
/// validated locally; an inverted range is the API's to reject or answer
/// with an empty `dates` array.
pub fn build_schedule_url(api_domain: &str, start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}{}?startDate={}&endDate={}",
        api_domain.trim_end_matches('/'),
        SCHEDULE_ENDPOINT,
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d"),
    )
}

/// Port for fetching per-date game groups.
#[allow(async_fn_in_trait)]
pub trait ScheduleSource {
    /// Fetches the per-date game groups for the inclusive date range,
    /// in the date-ascending order the provider guarantees.
    async fn schedule(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ScheduleDate>, AppError>;
}

/// Production schedule source backed by the NHL stats API.
#[derive(Debug, Clone)]
pub struct NhlScheduleApi {
    client: Client,
    api_domain: String,
}

impl NhlScheduleApi {
    /// Builds a source from the loaded configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Self::with_domain(&config.api_domain, config.http_timeout_seconds)
    }

    /// Builds a source against an explicit domain, mainly for tests that
    /// point at a local mock server.
    pub fn with_domain(api_domain: &str, timeout_seconds: u64) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(timeout_seconds).map_err(AppError::ApiFetch)?;
        Ok(Self {
            client,
            api_domain: api_domain.to_string(),
        })
    }
}

impl ScheduleSource for NhlScheduleApi {
    async fn schedule(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ScheduleDate>, AppError> {
        let url = build_schedule_url(&self.api_domain, start, end);
        let response: ScheduleResponse = fetch(&self.client, &url).await?;
        info!(
            "Fetched {} date group(s), {} game(s) total",
            response.dates.len(),
            response.total_games
        );
        Ok(response.dates)
    }
}

/// Issues one GET and deserializes the body, mapping failures onto the
/// error taxonomy. Transport and parse failures are fatal to the current
/// request; there are no retries and no partial results.
#[instrument(skip(client))]
async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);

            if response_text.trim().is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}
