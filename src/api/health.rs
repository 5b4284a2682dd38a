//! Health Probe

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::AbortSignal;

use super::{ensure_success, ApiClient, ApiError};
use crate::models::HealthStatus;

impl ApiClient {
    /// `GET /health`; the payload's `status` field is kept as received
    pub async fn check_health(&self, signal: Option<&AbortSignal>) -> Result<HealthStatus, ApiError> {
        let response = Request::get(&self.url("/health"))
            .abort_signal(signal)
            .send()
            .await?;
        let body = ensure_success(response)?.text().await?;
        // A non-JSON body has no status field
        let payload = serde_json::from_str::<Value>(&body).unwrap_or(Value::Null);
        Ok(HealthStatus::from_payload(&payload))
    }
}
