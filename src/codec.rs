//! Envelope codec: JSON bytes in and out of the dispatch core.
//!
//! Every failure here is a [`ProtocolError`] tagged with the route name, the
//! HTTP status (when one exists) and the [`CodecPhase`] that rejected it.

use crate::error::{ApiError, CodecPhase, LocalizedText, ProtocolError, StatusError};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Content type sent whenever a request carries a body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Discriminant field used by every tagged union on the wire.
pub const TAG_FIELD: &str = ".tag";

pub fn encode_argument<A: Serialize>(route: &'static str, arg: &A) -> Result<Bytes, ProtocolError> {
    serde_json::to_vec(arg)
        .map(Bytes::from)
        .map_err(|e| ProtocolError::new(route, None, CodecPhase::EncodeArgument, e))
}

pub fn decode_success<T: DeserializeOwned>(
    route: &'static str,
    body: &[u8],
) -> Result<T, ProtocolError> {
    serde_json::from_slice(body)
        .map_err(|e| ProtocolError::new(route, Some(200), CodecPhase::DecodeSuccess, e))
}

/// Produces the value of a route that returns nothing, whatever the body holds.
pub fn decode_unit<T: DeserializeOwned>(route: &'static str) -> Result<T, ProtocolError> {
    serde_json::from_value(Value::Null)
        .map_err(|e| ProtocolError::new(route, Some(200), CodecPhase::DecodeSuccess, e))
}

pub fn decode_route_error<E: DeserializeOwned>(
    route: &'static str,
    body: &[u8],
) -> Result<ApiError<E>, ProtocolError> {
    serde_json::from_slice(body)
        .map_err(|e| ProtocolError::new(route, Some(409), CodecPhase::DecodeRouteError, e))
}

#[derive(Deserialize)]
struct GenericEnvelope {
    #[serde(default)]
    error_summary: String,
    #[serde(default)]
    user_message: Option<LocalizedText>,
}

/// Decodes the generic envelope. A route-specific `error` field, if present, is ignored.
pub fn decode_status_error(
    route: &'static str,
    status: u16,
    body: &[u8],
) -> Result<StatusError, ProtocolError> {
    let envelope: GenericEnvelope = serde_json::from_slice(body)
        .map_err(|e| ProtocolError::new(route, Some(status), CodecPhase::DecodeStatusError, e))?;
    Ok(StatusError {
        status,
        error_summary: envelope.error_summary,
        user_message: envelope.user_message,
    })
}

/// A `400` body is surfaced verbatim. Invalid UTF-8 is replaced, never rejected.
pub fn bad_request_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// Splits a tagged object into its `.tag` value and the remaining fields.
pub(crate) fn split_tag(value: Value) -> Result<(String, Map<String, Value>), String> {
    let mut map = match value {
        Value::Object(map) => map,
        other => return Err(format!("expected a tagged object, found {}", kind_of(&other))),
    };
    match map.remove(TAG_FIELD) {
        Some(Value::String(tag)) => Ok((tag, map)),
        Some(other) => Err(format!("'{}' must be a string, found {}", TAG_FIELD, kind_of(&other))),
        None => Err(format!("missing '{}' field", TAG_FIELD)),
    }
}

/// Extracts the payload of a tagged variant.
///
/// Payloads that are not objects travel under a key named after the tag
/// (`{".tag":"complete","complete":[...]}`); object payloads are inlined next
/// to the tag; void variants carry nothing and map to `null`.
pub(crate) fn variant_payload(tag: &str, mut rest: Map<String, Value>) -> Value {
    if let Some(inner) = rest.remove(tag) {
        return inner;
    }
    if rest.is_empty() {
        Value::Null
    } else {
        Value::Object(rest)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
