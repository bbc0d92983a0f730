use crate::codec;
use crate::error::CallError;
use crate::route::Route;
use crate::status::StatusClass;
use crate::team::TeamApi;
use crate::transport::{HttpRequest, Transport, TransportError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;
use uuid::Uuid;

/// Outcome of one route call.
pub type CallResult<T, E> = std::result::Result<T, CallError<E>>;

/// Route dispatcher: encodes, posts, classifies the status and decodes.
///
/// Holds no per-call state; one client can serve any number of concurrent calls.
#[derive(Clone)]
pub struct TeamClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) base_url: Url,
    pub(crate) verbose: bool,
}

impl TeamClient {
    /// Create a client from environment configuration.
    pub fn from_env() -> crate::Result<Self> {
        crate::client::builder::TeamClientBuilder::new()
            .config(crate::config::ClientConfig::from_env())
            .build()
    }

    pub fn builder() -> crate::client::builder::TeamClientBuilder {
        crate::client::builder::TeamClientBuilder::new()
    }

    /// Typed methods for the `team` namespace.
    pub fn team(&self) -> TeamApi<'_> {
        TeamApi::new(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Execute one route call.
    ///
    /// Status handling is fixed for every route: `200` decodes the result,
    /// `409` decodes the route's error envelope, `400` returns the raw body as
    /// text, anything else decodes the generic envelope.
    pub async fn call<A, T, E>(&self, route: &Route<A, T, E>, arg: &A) -> CallResult<T, E>
    where
        A: Serialize,
        T: DeserializeOwned,
        E: DeserializeOwned,
    {
        let name = route.name();
        let body = if route.has_body() {
            let bytes = codec::encode_argument(name, arg)?;
            if self.verbose {
                debug!(route = name, arg = %String::from_utf8_lossy(&bytes), "encoded argument");
            }
            Some(bytes)
        } else {
            None
        };

        let url = self
            .base_url
            .join(&route.info().relative_url())
            .map_err(TransportError::from)?;
        let request_id = Uuid::new_v4().to_string();
        let request = HttpRequest {
            url,
            content_type: body.as_ref().map(|_| codec::JSON_CONTENT_TYPE),
            body,
            request_id,
        };
        let client_request_id = request.request_id.clone();

        debug!(
            route = name,
            client_request_id = client_request_id.as_str(),
            url = request.url.as_str(),
            "team-api request"
        );

        let start = std::time::Instant::now();
        let resp = self.transport.post(request).await?;
        let class = StatusClass::from_http_status(resp.status);

        debug!(
            route = name,
            http_status = resp.status,
            status_class = class.name(),
            client_request_id = client_request_id.as_str(),
            duration_ms = start.elapsed().as_millis() as u64,
            "team-api response"
        );
        if self.verbose {
            debug!(route = name, body = %String::from_utf8_lossy(&resp.body), "response body");
        }

        match class {
            StatusClass::Success => {
                if route.has_result() {
                    Ok(codec::decode_success(name, &resp.body)?)
                } else {
                    Ok(codec::decode_unit(name)?)
                }
            }
            StatusClass::RouteError => {
                let api = codec::decode_route_error(name, &resp.body)?;
                info!(
                    route = name,
                    http_status = resp.status,
                    error_summary = api.error_summary.as_str(),
                    client_request_id = client_request_id.as_str(),
                    "team-api route error"
                );
                Err(CallError::Route(api))
            }
            StatusClass::BadRequest => {
                let text = codec::bad_request_text(&resp.body);
                info!(
                    route = name,
                    http_status = resp.status,
                    client_request_id = client_request_id.as_str(),
                    "team-api bad request"
                );
                Err(CallError::BadRequest(text))
            }
            StatusClass::Other(status) => {
                let err = codec::decode_status_error(name, status, &resp.body)?;
                let upstream_request_id = resp.header_first(&["x-dropbox-request-id", "x-request-id"]);
                info!(
                    route = name,
                    http_status = status,
                    error_summary = err.error_summary.as_str(),
                    upstream_request_id = upstream_request_id.as_deref().unwrap_or(""),
                    client_request_id = client_request_id.as_str(),
                    "team-api request failed"
                );
                Err(CallError::Status(err))
            }
        }
    }
}

impl std::fmt::Debug for TeamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamClient")
            .field("base_url", &self.base_url.as_str())
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}
