//! Backend REST Client
//!
//! HTTP bindings to the backend endpoints, organized by domain.

mod health;
mod item;

use gloo_net::http::Response;
use thiserror::Error;

use crate::config::ApiConfig;

/// Any failed backend call. The view reacts to every variant the same way.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
}

/// Client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

/// Reject non-2xx responses
fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            url: response.url(),
            status: response.status(),
        })
    }
}
