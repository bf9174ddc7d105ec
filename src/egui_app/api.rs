//! Check-in API Client
//!
//! Async calls against the two backend endpoints. Both authenticate with a
//! bearer token the caller obtained for this one request.

use reqwest::Client;
use serde_json::Value;

use crate::egui_app::config::Config;
use crate::shared::error::ApiError;
use crate::shared::status::{checkin_outcome, error_field, CheckinStatus};

/// Check-in API client
#[derive(Debug, Clone)]
pub struct CheckinApi {
    config: Config,
    client: Client,
}

impl CheckinApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Mark today as confirmed via `POST /checkin`.
    ///
    /// Fails on a non-2xx status or a body carrying `"ok": false`.
    pub async fn checkin(&self, token: &str) -> Result<(), ApiError> {
        let url = self.config.checkin_url();

        let response = self.client.post(&url).bearer_auth(token).send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("[CHECKIN] POST {} -> {}", url, status);

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| error_field(&body));
            return Err(ApiError::rejected(status.as_u16(), message));
        }

        let body: Value = serde_json::from_str(&text)?;
        checkin_outcome(&body).map_err(|message| ApiError::rejected(status.as_u16(), message))
    }

    /// Fetch today's status via `GET /status`.
    ///
    /// The HTTP status is not inspected: any JSON body is interpreted, and one
    /// without a boolean `checked` reads as unknown.
    pub async fn status(&self, token: &str) -> Result<CheckinStatus, ApiError> {
        let url = self.config.status_url();

        let response = self.client.get(&url).bearer_auth(token).send().await?;
        tracing::debug!("[STATUS] GET {} -> {}", url, response.status());

        let body: Value = serde_json::from_str(&response.text().await?)?;
        Ok(CheckinStatus::from_status_body(&body))
    }
}
