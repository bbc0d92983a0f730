//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use team_api_client::TeamClient;
use tokio::sync::Mutex;

pub const TEST_TOKEN: &str = "test-token";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Create a client whose routes resolve under `<mock>/2/`, going through
    /// the real reqwest transport.
    pub fn create_test_client(&self) -> team_api_client::Result<TeamClient> {
        TeamClient::builder()
            .access_token(TEST_TOKEN)
            .verbose(true)
            .base_url_override(format!("{}/2", self.base_url))
            .build()
    }

    /// Create a mock for a JSON response to one route.
    pub async fn mock_json_response(&self, route_path: &str, status: u16, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", format!("/2/team/{}", route_path).as_str())
            .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock answering with a plain-text body.
    pub async fn mock_text_response(&self, route_path: &str, status: u16, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", format!("/2/team/{}", route_path).as_str())
            .with_status(status as usize)
            .with_header("content-type", "text/plain; charset=utf-8")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock that only matches when the request carries exactly this JSON body.
    pub async fn mock_expecting_json(
        &self,
        route_path: &str,
        expected: serde_json::Value,
        body: &str,
    ) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", format!("/2/team/{}", route_path).as_str())
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(expected))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Create a mock that only matches a request with no body and no content type.
    pub async fn mock_expecting_no_body(&self, route_path: &str, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", format!("/2/team/{}", route_path).as_str())
            .match_header("content-type", Matcher::Missing)
            .match_body(Matcher::Exact(String::new()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}
