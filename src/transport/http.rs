use super::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::ClientConfig;
use crate::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Proxy;
use std::time::Duration;
use tracing::warn;

/// Header carrying the client-side correlation id.
pub const REQUEST_ID_HEADER: &str = "x-team-api-request-id";

/// reqwest-backed transport.
pub struct HttpTransport {
    client: reqwest::Client,
    access_token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(config.pool_idle_timeout))
            .http2_adaptive_window(true)
            .http2_keep_alive_interval(Some(Duration::from_secs(30)))
            .http2_keep_alive_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy_url {
            match Proxy::all(proxy_url) {
                Ok(proxy) => builder = builder.proxy(proxy),
                Err(e) => warn!(proxy_url = proxy_url.as_str(), error = %e, "ignoring invalid proxy url"),
            }
        }

        let client = builder.build().map_err(TransportError::from)?;

        Ok(Self {
            client,
            access_token: config.resolve_access_token(),
        })
    }

    /// Wrap an existing reqwest client, e.g. one shared with the rest of an application.
    pub fn with_client(client: reqwest::Client, access_token: Option<String>) -> Self {
        Self {
            client,
            access_token,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        let mut req = self
            .client
            .post(request.url)
            .header(REQUEST_ID_HEADER, request.request_id);

        if let Some(token) = &self.access_token {
            req = req.bearer_auth(token);
        }

        if let Some(body) = request.body {
            if let Some(content_type) = request.content_type {
                req = req.header(CONTENT_TYPE, content_type);
            }
            req = req.body(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
