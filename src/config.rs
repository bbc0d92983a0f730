//! Client configuration: API host, access credential, verbose flag and
//! transport tuning. Every knob has an env-overridable default.

use crate::{Error, ErrorContext, Result};
use keyring::Entry;
use std::env;
use std::time::Duration;
use url::Url;

/// Host the `api` domain is served from.
pub const DEFAULT_API_HOST: &str = "api.dropboxapi.com";

/// API version prefix of every route URL.
pub const API_VERSION: &str = "2";

/// Keyring service name used for credential lookup.
pub const KEYRING_SERVICE: &str = "team-api";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_host: String,
    pub access_token: Option<String>,
    pub verbose: bool,
    pub timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub pool_idle_timeout: Duration,
    pub proxy_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            access_token: None,
            verbose: false,
            timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 32,
            pool_idle_timeout: Duration::from_secs(90),
            proxy_url: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from the environment.
    ///
    /// - `TEAM_API_HOST` (default `api.dropboxapi.com`)
    /// - `TEAM_API_TOKEN` (consulted at resolve time, after the keyring)
    /// - `TEAM_API_VERBOSE` (`1` or `true`)
    /// - `TEAM_API_TIMEOUT_SECS` (default 30)
    /// - `TEAM_API_POOL_MAX_IDLE_PER_HOST` (default 32)
    /// - `TEAM_API_POOL_IDLE_TIMEOUT_SECS` (default 90)
    /// - `TEAM_API_PROXY_URL`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_host: env::var("TEAM_API_HOST")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.api_host),
            // Read last by `resolve_access_token`, after the keyring.
            access_token: None,
            verbose: env::var("TEAM_API_VERBOSE")
                .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "yes"))
                .unwrap_or(false),
            timeout: env::var("TEAM_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            pool_max_idle_per_host: env::var("TEAM_API_POOL_MAX_IDLE_PER_HOST")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(defaults.pool_max_idle_per_host),
            pool_idle_timeout: env::var("TEAM_API_POOL_IDLE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.pool_idle_timeout),
            proxy_url: env::var("TEAM_API_PROXY_URL").ok().filter(|s| !s.is_empty()),
        }
    }

    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Log encoded arguments and raw response bodies at debug level.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxy_url(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// Resolve the access credential: explicit token, then keyring, then env.
    pub fn resolve_access_token(&self) -> Option<String> {
        if let Some(token) = &self.access_token {
            return Some(token.clone());
        }

        if let Ok(entry) = Entry::new(KEYRING_SERVICE, &self.api_host) {
            if let Ok(token) = entry.get_password() {
                return Some(token);
            }
        }

        env::var("TEAM_API_TOKEN").ok().filter(|s| !s.is_empty())
    }

    /// Base URL every route path is appended to: `https://<host>/2/`.
    pub fn base_url(&self) -> Result<Url> {
        let host = self.api_host.trim();
        if host.is_empty() {
            return Err(Error::configuration_with_context(
                "api host must not be empty",
                ErrorContext::new()
                    .with_field_path("config.api_host")
                    .with_source("client_config"),
            ));
        }
        parse_base_url(&format!("https://{}/{}/", host, API_VERSION))
    }
}

/// Parse a base URL, normalizing it to end with a slash so route paths join under it.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized).map_err(|e| {
        Error::configuration_with_context(
            "invalid base url",
            ErrorContext::new()
                .with_details(format!("{}: {}", raw, e))
                .with_source("client_config"),
        )
    })
}
