//! Transport boundary.
//!
//! The dispatch core only ever issues single POST exchanges through the
//! [`Transport`] trait. Connection pooling, TLS, timeouts and cancellation are
//! the transport's business; the core passes its errors through unchanged.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::HeaderMap;
use url::Url;

/// One outgoing POST.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    /// Set exactly when `body` is present.
    pub content_type: Option<&'static str>,
    pub body: Option<Bytes>,
    /// Client-side correlation id, sent as `x-team-api-request-id`.
    pub request_id: String,
}

/// A fully read response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// First non-empty value among the given header names.
    pub fn header_first(&self, names: &[&str]) -> Option<String> {
        for name in names {
            if let Some(v) = self.headers.get(*name) {
                if let Ok(s) = v.to_str() {
                    let s = s.trim();
                    if !s.is_empty() {
                        return Some(s.to_string());
                    }
                }
            }
        }
        None
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid route URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Transport error: {0}")]
    Other(String),
}
