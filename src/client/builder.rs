use crate::client::core::TeamClient;
use crate::config::{parse_base_url, ClientConfig};
use crate::transport::{HttpTransport, Transport};
use crate::Result;
use std::sync::Arc;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable.
pub struct TeamClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
}

impl TeamClientBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            transport: None,
            base_url_override: None,
        }
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.config.access_token = Some(token.into());
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Inject a transport. Default is an [`HttpTransport`] built from the config.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Override the versioned base URL derived from the configured host.
    ///
    /// Route paths are joined under it, so `http://127.0.0.1:1234/2` yields
    /// `http://127.0.0.1:1234/2/team/members/list`.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<TeamClient> {
        let base_url = match self.base_url_override.as_deref() {
            Some(raw) => parse_base_url(raw)?,
            None => self.config.base_url()?,
        };

        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(&self.config)?),
        };

        Ok(TeamClient {
            transport,
            base_url,
            verbose: self.config.verbose,
        })
    }
}

impl Default for TeamClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
