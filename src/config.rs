//! View Configuration
//!
//! Explicit settings handed to the item manager at construction.

use crate::models::Draft;

/// Backend address used when the build does not provide `API_BASE_URL`
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Where the backend REST API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + host + port, or empty for same-origin (proxied) requests
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve from the `API_BASE_URL` build variable, falling back to the local default
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("API_BASE_URL"))
    }

    fn resolve(override_url: Option<&str>) -> Self {
        match override_url {
            Some(url) => Self::new(url.trim()),
            None => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    /// Full URL for an API path, e.g. `endpoint("/items")`
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

/// Parameters of one item manager instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewConfig {
    pub api: ApiConfig,
    /// Initial draft, also restored after every successful create
    pub seed: Draft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ApiConfig::resolve(None);
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.endpoint("/health"), "http://localhost:8000/health");
    }

    #[test]
    fn test_override_base_url() {
        let config = ApiConfig::resolve(Some("http://api.example:9000/"));
        assert_eq!(config.endpoint("/items"), "http://api.example:9000/items");
        assert_eq!(config.endpoint("items"), "http://api.example:9000/items");
    }

    #[test]
    fn test_empty_override_means_same_origin() {
        let config = ApiConfig::resolve(Some(""));
        assert_eq!(config.endpoint("/items"), "/items");
        assert_eq!(config.endpoint("/health"), "/health");
    }
}
