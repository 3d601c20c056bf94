//! Mock GitHub API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the GitHub
//! custom property values endpoints for integration and end-to-end testing.
//! Unlike wiremock which mocks at the HTTP level per-test, this server
//! maintains state across requests, enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use ghprops::mock_server::{Fixtures, MockServer};
//! use ghprops::GitHubClient;
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = GitHubClient::new("test-token", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let (values, _) = client
//!         .repositories()
//!         .get_all_custom_property_values(&Fixtures::configured_repo())
//!         .await
//!         .unwrap();
//!     assert_eq!(values.len(), 2);
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::{router, MockServer};
pub use state::MockState;
