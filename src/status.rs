//! HTTP status classification for route responses.
//!
//! Every route shares the same fixed server contract for interpreting a
//! response status. The contract is not negotiable per route:
//!
//! | Status | Class | Body handling |
//! |--------|-------|---------------|
//! | 200 | [`StatusClass::Success`] | decoded as the route's result type |
//! | 409 | [`StatusClass::RouteError`] | decoded as the `409` envelope with the route's error union |
//! | 400 | [`StatusClass::BadRequest`] | kept as raw text, never parsed |
//! | other | [`StatusClass::Other`] | decoded as the generic envelope |
//!
//! ## Example
//!
//! ```rust
//! use team_api_client::status::StatusClass;
//!
//! assert_eq!(StatusClass::from_http_status(409), StatusClass::RouteError);
//! assert_eq!(StatusClass::from_http_status(503), StatusClass::Other(503));
//! assert_eq!(StatusClass::from_http_status(503).name(), "other");
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// 200
    Success,
    /// 409
    RouteError,
    /// 400
    BadRequest,
    /// Anything else, including other 2xx codes.
    Other(u16),
}

impl StatusClass {
    /// Maps an HTTP status code onto the dispatch branch that handles it.
    ///
    /// Only exactly `200` counts as success; `201`/`204` fall into `Other`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            200 => Self::Success,
            409 => Self::RouteError,
            400 => Self::BadRequest,
            other => Self::Other(other),
        }
    }

    /// Returns the status code this class was derived from.
    #[inline]
    pub fn code(&self) -> u16 {
        match self {
            Self::Success => 200,
            Self::RouteError => 409,
            Self::BadRequest => 400,
            Self::Other(code) => *code,
        }
    }

    /// Returns a stable name, used in structured log fields.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::RouteError => "route_error",
            Self::BadRequest => "bad_request",
            Self::Other(_) => "other",
        }
    }

    /// Whether the response body is expected to be JSON.
    #[inline]
    pub fn expects_json(&self) -> bool {
        !matches!(self, Self::BadRequest)
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}
