//! Mock Crisp API server.
//!
//! Provides an axum-based HTTP server that simulates the Crisp plugin API.

use std::sync::Arc;

use axum::{
    routing::{get, head},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// A mock Crisp API server for testing.
///
/// The server runs in the background and can be used to test the Crisp
/// client against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    ///
    /// Use this URL when creating a `CrispClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        let scenario = Fixtures::default_scenario();
        Self::state_from_scenario(scenario)
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new().with_session_valid(scenario.session_valid);

        for plugin in scenario.plugins {
            state = state.with_plugin(plugin);
        }

        for (plugin_id, stars) in scenario.stars {
            state = state.with_stars(&plugin_id, stars);
        }

        for (plugin_id, rank) in scenario.ranks {
            state = state.with_rank(&plugin_id, rank);
        }

        state.connected_websites = scenario.connected_websites;

        state
    }

    /// Create the axum router with all routes.
    fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Connect routes
            .route("/plugin/connect/session", head(handlers::check_session))
            .route("/plugin/connect/websites", get(handlers::list_websites))
            // Plugin routes
            .route("/plugin/:plugin_id", get(handlers::get_plugin))
            .route("/plugin/:plugin_id/stars", get(handlers::get_stars))
            .route(
                "/plugin/:plugin_id/stars/self",
                get(handlers::get_rank)
                    .patch(handlers::rank_plugin)
                    .delete(handlers::delete_rank),
            )
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::fixtures::DEFAULT_PLUGIN_ID;
    use crate::{CrispClient, Get, PluginInformation};

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        // Server should be accessible
        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_plugin_with_crisp_client() {
        let server = MockServer::start().await;
        let client = CrispClient::new("test-id", "test-key", server.url()).unwrap();

        let plugin = PluginInformation::get(&client, DEFAULT_PLUGIN_ID.to_string())
            .await
            .expect("Failed to get plugin");

        assert_eq!(plugin.data.unwrap().name.as_deref(), Some("Test Plugin"));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = CrispClient::new("test-id", "test-key", server.url()).unwrap();

        let result = PluginInformation::get(&client, "nonexistent".to_string()).await;

        assert!(result.is_err());

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_custom_state() {
        let state = MockState::new().with_plugin(Fixtures::minimal_plugin("p1", "My Custom Plugin"));

        let server = MockServer::with_state(state).await;
        let client = CrispClient::new("test-id", "test-key", server.url()).unwrap();

        let plugin = PluginInformation::get(&client, "p1".to_string())
            .await
            .expect("Failed to get plugin");

        assert_eq!(plugin.data.unwrap().name.as_deref(), Some("My Custom Plugin"));

        server.shutdown().await;
    }
}
