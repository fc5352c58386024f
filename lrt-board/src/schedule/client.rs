//! Next Train HTTP client.
//!
//! Issues one `getSchedule` request per call and decodes the response
//! into a typed snapshot. Stateless per call; refresh cadence and
//! stale-result suppression belong to the board layer.

use crate::domain::{Snapshot, StationId};

use super::ScheduleSource;
use super::convert::convert_schedule;
use super::error::ScheduleError;
use super::types::ScheduleResponse;

/// Default base URL for the Next Train API.
const DEFAULT_BASE_URL: &str = "https://rt.data.gov.hk/v1/transport/mtr/lrt";

/// Default request timeout in seconds.
///
/// The upstream transport default is effectively unbounded; a board
/// that refreshes every 20 seconds must never wait longer than that
/// on a single request.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the schedule client.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Base URL for the API (defaults to the public endpoint)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ScheduleConfig {
    /// Create a config with the default endpoint and timeout.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Next Train API client.
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScheduleClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ScheduleConfig) -> Result<Self, ScheduleError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the schedule for a station.
    ///
    /// Unknown station ids are sent as-is; the upstream answers those
    /// with a non-success `status`, which comes back as
    /// `ScheduleError::Unavailable`.
    pub async fn get_schedule(&self, station: StationId) -> Result<Snapshot, ScheduleError> {
        let url = format!("{}/getSchedule", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("station_id", station.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScheduleError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let raw: ScheduleResponse =
            serde_json::from_str(&body).map_err(|e| ScheduleError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let snapshot = convert_schedule(raw);

        if !snapshot.is_usable() {
            return Err(ScheduleError::Unavailable(snapshot.status));
        }

        Ok(snapshot)
    }
}

impl ScheduleSource for ScheduleClient {
    fn fetch(
        &self,
        station: StationId,
    ) -> impl Future<Output = Result<Snapshot, ScheduleError>> + Send {
        self.get_schedule(station)
    }
}
