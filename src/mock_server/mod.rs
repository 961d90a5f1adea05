//! Mock Crisp API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Crisp
//! plugin API for integration and end-to-end testing. Unlike wiremock which
//! mocks at the HTTP level per-test, this server maintains state across
//! requests, so a rank set by one call is visible to the next.
//!
//! # Example
//!
//! ```ignore
//! use crispapi::mock_server::{MockServer, DEFAULT_PLUGIN_ID};
//! use crispapi::{CrispClient, Get, PluginInformation};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = CrispClient::new("test-id", "test-key", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let plugin = PluginInformation::get(&client, DEFAULT_PLUGIN_ID.to_string())
//!         .await
//!         .unwrap();
//!     assert_eq!(plugin.data.unwrap().name.as_deref(), Some("Test Plugin"));
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{Fixtures, DEFAULT_PLUGIN_ID, UNRATED_PLUGIN_ID};
pub use server::MockServer;
pub use state::{MockState, MAX_RANK, MIN_RANK};
