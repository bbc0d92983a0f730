use crate::transport::TransportError;
use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Structured error context for configuration and setup failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Configuration key or field that caused the error (e.g., "config.api_host")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected value)
    pub details: Option<String>,
    /// Source of the error (e.g., "client_builder", "http_transport")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Crate-level error for everything that happens outside a single route call:
/// building the client, loading configuration, constructing the transport.
///
/// Failures of an individual call are reported as [`CallError`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            Error::Transport(_) => None,
        }
    }
}

/// A message the server intends to be shown to an end user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub text: String,
    pub locale: String,
}

/// The `409` envelope: a well-formed request rejected by the route's own logic.
///
/// `error` is `None` when the server omitted the field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiError<E> {
    #[serde(default)]
    pub error_summary: String,
    pub user_message: Option<LocalizedText>,
    pub error: Option<E>,
}

/// Generic error envelope returned for statuses other than 200, 400 and 409.
/// Never carries a route-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    pub status: u16,
    pub error_summary: String,
    pub user_message: Option<LocalizedText>,
}

/// Error payload for routes that declare no structured error.
///
/// Accepts any JSON value (including an empty object) and keeps nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoRouteError;

impl<'de> Deserialize<'de> for NoRouteError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(NoRouteError)
    }
}

/// Which step of the envelope codec rejected a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecPhase {
    EncodeArgument,
    DecodeSuccess,
    DecodeRouteError,
    DecodeStatusError,
    Pagination,
}

impl fmt::Display for CodecPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CodecPhase::EncodeArgument => "encoding the argument",
            CodecPhase::DecodeSuccess => "decoding the success body",
            CodecPhase::DecodeRouteError => "decoding the route error envelope",
            CodecPhase::DecodeStatusError => "decoding the error envelope",
            CodecPhase::Pagination => "continuing the listing",
        };
        f.write_str(s)
    }
}

/// A payload did not match the schema expected for its route and status code.
#[derive(Debug, Error)]
#[error("protocol error on route '{route}'{} while {phase}: {source}", format_status(.status))]
pub struct ProtocolError {
    pub route: &'static str,
    pub status: Option<u16>,
    pub phase: CodecPhase,
    #[source]
    pub source: serde_json::Error,
}

fn format_status(status: &Option<u16>) -> String {
    status
        .map(|s| format!(" (HTTP {})", s))
        .unwrap_or_default()
}

impl ProtocolError {
    pub fn new(
        route: &'static str,
        status: Option<u16>,
        phase: CodecPhase,
        source: serde_json::Error,
    ) -> Self {
        Self {
            route,
            status,
            phase,
            source,
        }
    }
}

/// Failure of a single route call. Exactly one kind is reported per call.
#[derive(Debug)]
pub enum CallError<E> {
    /// `409`: the route's own failure taxonomy.
    Route(ApiError<E>),
    /// `400`: the raw response body, never parsed.
    BadRequest(String),
    /// Any other non-200 status.
    Status(StatusError),
    Transport(TransportError),
    Protocol(ProtocolError),
}

impl<E> fmt::Display for CallError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallError::Route(api) => write!(f, "route error: {}", api.error_summary),
            CallError::BadRequest(body) => write!(f, "bad request: {}", body),
            CallError::Status(err) => write!(f, "HTTP {}: {}", err.status, err.error_summary),
            CallError::Transport(err) => write!(f, "Network transport error: {}", err),
            CallError::Protocol(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl<E: fmt::Debug> std::error::Error for CallError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CallError::Transport(err) => Some(err),
            CallError::Protocol(err) => Some(err),
            _ => None,
        }
    }
}

impl<E> From<TransportError> for CallError<E> {
    fn from(err: TransportError) -> Self {
        CallError::Transport(err)
    }
}

impl<E> From<ProtocolError> for CallError<E> {
    fn from(err: ProtocolError) -> Self {
        CallError::Protocol(err)
    }
}

impl<E> CallError<E> {
    /// The decoded route-specific error, if this is a `409` carrying one.
    pub fn route_error(&self) -> Option<&E> {
        match self {
            CallError::Route(api) => api.error.as_ref(),
            _ => None,
        }
    }

    /// The server-provided summary for `Route` and `Status` errors.
    pub fn error_summary(&self) -> Option<&str> {
        match self {
            CallError::Route(api) => Some(api.error_summary.as_str()),
            CallError::Status(err) => Some(err.error_summary.as_str()),
            _ => None,
        }
    }

    /// The user-facing message attached by the server, if any.
    pub fn user_message(&self) -> Option<&LocalizedText> {
        match self {
            CallError::Route(api) => api.user_message.as_ref(),
            CallError::Status(err) => err.user_message.as_ref(),
            _ => None,
        }
    }

    /// HTTP status associated with the failure. Transport failures have none.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            CallError::Route(_) => Some(409),
            CallError::BadRequest(_) => Some(400),
            CallError::Status(err) => Some(err.status),
            CallError::Transport(_) => None,
            CallError::Protocol(err) => err.status,
        }
    }
}
