//! Server Settings
//!
//! Read from the process environment (after loading `.env`), with local defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// SQLite file, or `:memory:`
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
    /// Browser origins allowed by CORS
    pub allowed_origins: Vec<String>,
    /// Requests allowed per client within `rate_limit_window`
    pub rate_limit_max: usize,
    pub rate_limit_window: Duration,
    pub log_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("data/demo.db"),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            allowed_origins: vec![
                "http://localhost:3001".to_string(),
                "http://localhost:3000".to_string(),
            ],
            rate_limit_max: 100,
            rate_limit_window: Duration::from_secs(60),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(path) = lookup("DATABASE_PATH") {
            settings.database_path = PathBuf::from(path);
        }
        if let Some(addr) = lookup("BIND_ADDR") {
            settings.bind_addr = parse("BIND_ADDR", &addr)?;
        }
        if let Some(origins) = lookup("ALLOWED_ORIGINS") {
            settings.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(max) = lookup("RATE_LIMIT_MAX") {
            settings.rate_limit_max = parse("RATE_LIMIT_MAX", &max)?;
        }
        if let Some(secs) = lookup("RATE_LIMIT_WINDOW_SECS") {
            let secs: u64 = parse("RATE_LIMIT_WINDOW_SECS", &secs)?;
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    key: "RATE_LIMIT_WINDOW_SECS",
                    value: secs.to_string(),
                });
            }
            settings.rate_limit_window = Duration::from_secs(secs);
        }
        if let Some(dir) = lookup("LOG_DIR") {
            settings.log_dir = PathBuf::from(dir);
        }

        Ok(settings)
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bind_addr.port(), 8000);
        assert_eq!(settings.rate_limit_max, 100);
        assert_eq!(settings.rate_limit_window, Duration::from_secs(60));
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("DATABASE_PATH", ":memory:"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("ALLOWED_ORIGINS", "http://a.test, http://b.test,"),
            ("RATE_LIMIT_MAX", "5"),
            ("RATE_LIMIT_WINDOW_SECS", "10"),
        ])
        .unwrap();

        assert_eq!(settings.database_path, PathBuf::from(":memory:"));
        assert_eq!(settings.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(settings.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(settings.rate_limit_max, 5);
        assert_eq!(settings.rate_limit_window, Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            settings_from(&[("RATE_LIMIT_MAX", "lots")]).unwrap_err(),
            ConfigError::Invalid { key: "RATE_LIMIT_MAX", value: "lots".to_string() }
        );
        assert!(settings_from(&[("BIND_ADDR", "localhost")]).is_err());
        assert!(settings_from(&[("RATE_LIMIT_WINDOW_SECS", "0")]).is_err());
    }
}
