// SPDX-License-Identifier: MIT

//! Process-wide configuration
//!
//! The base URL of the evaluation service is chosen once at startup (flag,
//! then `PLOGIC_BASE_URL`, then the deployed default) and never changes for
//! the rest of the process.

use crate::error::ClientError;
use once_cell::sync::OnceCell;
use std::env;
use url::Url;

/// Deployed evaluation service
pub const DEFAULT_BASE_URL: &str = "https://plogic.onrender.com";
/// Port the local UI server listens on when nothing else is configured
pub const DEFAULT_PORT: u16 = 8000;

pub const BASE_URL_VAR: &str = "PLOGIC_BASE_URL";
pub const PORT_VAR: &str = "PLOGIC_PORT";

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub port: u16,
}

impl Config {
    /// Resolve configuration from explicit overrides and the environment.
    ///
    /// Call `dotenv().ok()` beforehand if `.env` files should be honoured.
    pub fn resolve(base_url: Option<String>, port: Option<u16>) -> Result<Self, ClientError> {
        let base_url = base_url
            .or_else(|| env::var(BASE_URL_VAR).ok().filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let port = match port {
            Some(port) => port,
            None => match env::var(PORT_VAR) {
                Ok(raw) => raw.trim().parse().map_err(|_| {
                    ClientError::config(format!("{} must be a port number, got '{}'", PORT_VAR, raw))
                })?,
                Err(_) => DEFAULT_PORT,
            },
        };

        Self::new(base_url, port)
    }

    /// Build a config, validating the base URL
    pub fn new(base_url: impl Into<String>, port: u16) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        Url::parse(base_url.trim()).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;
        Ok(Self { base_url, port })
    }

    /// Install this config as the process-wide one. Only the first call wins.
    pub fn install(self) -> Result<&'static Config, ClientError> {
        CONFIG
            .set(self)
            .map_err(|_| ClientError::config("configuration already installed"))?;
        Ok(global())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// The installed config, or the defaults when nothing was installed
pub fn global() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_win() {
        let config = Config::resolve(Some("http://127.0.0.1:9000".to_string()), Some(9001)).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.port, 9001);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = Config::new("plogic.onrender.com", DEFAULT_PORT).unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_default_points_at_deployed_service() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    // Environment is process-wide, so every env-driven case lives in this one test
    #[test]
    fn test_resolve_from_environment() {
        env::set_var(BASE_URL_VAR, "http://127.0.0.1:9100");
        env::remove_var(PORT_VAR);
        let config = Config::resolve(None, None).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9100");
        assert_eq!(config.port, DEFAULT_PORT);

        let config = Config::resolve(Some("http://127.0.0.1:9200".to_string()), None).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9200");

        env::set_var(BASE_URL_VAR, "   ");
        env::set_var(PORT_VAR, "9300");
        let config = Config::resolve(None, None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.port, 9300);

        env::set_var(PORT_VAR, "abc");
        let err = Config::resolve(None, None).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
        assert!(Config::resolve(None, Some(9400)).is_ok());

        env::remove_var(BASE_URL_VAR);
        env::remove_var(PORT_VAR);
    }

    #[test]
    fn test_global_without_install_uses_defaults() {
        assert_eq!(global(), &Config::default());
    }
}
