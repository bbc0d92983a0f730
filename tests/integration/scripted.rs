//! In-memory transport that replays a fixed script of responses.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use team_api_client::transport::{HttpRequest, HttpResponse};
use team_api_client::{TeamClient, Transport, TransportError};

/// Each call pops the next scripted response. A call whose path does not
/// match the script, or a call past the end of it, fails at the transport.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<(String, HttpResponse)>>,
    seen: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, route_path: &str, status: u16, body: Value) -> &Self {
        self.push_raw(route_path, status, body.to_string())
    }

    pub fn push_raw(&self, route_path: &str, status: u16, body: impl Into<String>) -> &Self {
        self.script.lock().unwrap().push_back((
            format!("/2/team/{}", route_path),
            HttpResponse::new(status, body.into()),
        ));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }

    /// JSON bodies of every request sent so far, `Value::Null` for bodiless ones.
    pub fn bodies(&self) -> Vec<Value> {
        self.requests()
            .iter()
            .map(|r| match &r.body {
                Some(b) => serde_json::from_slice(b).unwrap(),
                None => Value::Null,
            })
            .collect()
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }

    pub fn client(self: &Arc<Self>) -> TeamClient {
        TeamClient::builder()
            .transport(self.clone())
            .base_url_override("https://api.test.invalid/2")
            .build()
            .unwrap()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let path = request.url.path().to_string();
        self.seen.lock().unwrap().push(request);
        match self.script.lock().unwrap().pop_front() {
            Some((expected, response)) if expected == path => Ok(response),
            Some((expected, _)) => Err(TransportError::Other(format!(
                "expected a call to {}, got {}",
                expected, path
            ))),
            None => Err(TransportError::Other(format!("unscripted call to {}", path))),
        }
    }
}
