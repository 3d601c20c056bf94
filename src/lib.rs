//! GitHub repository custom property values client library.
//!
//! A Rust library for reading and writing the custom property values that
//! organizations attach to their repositories, without hand-building HTTP
//! requests, JSON payloads, or error handling.
//!
//! # Quick Start
//!
//! ```no_run
//! use ghprops::{CustomPropertyValue, GitHubClient, RepoRef};
//!
//! #[tokio::main]
//! async fn main() -> ghprops::Result<()> {
//!     // Create client from environment variables
//!     let client = GitHubClient::from_env()?;
//!     let repo: RepoRef = "octo-org/hello-world".parse()?;
//!
//!     // Read every value set on the repository
//!     let (values, _meta) = client
//!         .repositories()
//!         .get_all_custom_property_values(&repo)
//!         .await?;
//!     println!("Found {} values", values.len());
//!
//!     // Set one value and clear another
//!     client
//!         .repositories()
//!         .create_or_update_custom_property_values(
//!             &repo,
//!             &[
//!                 CustomPropertyValue::set("environment", "production"),
//!                 CustomPropertyValue::unset("deprecated_flag"),
//!             ],
//!         )
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Transport`] - builds and executes requests; [`GitHubClient`] is the
//!   reqwest-backed implementation
//! - [`RepositoriesService`] - typed accessor that maps each operation to a
//!   path, an optional body, and a decoded result
//! - [`ResponseMeta`] - status, rate limit and pagination data returned with
//!   every success and carried by errors that got a response
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `GITHUB_TOKEN` (required) - A token with access to the repository
//! - `GITHUB_API_URL` (optional) - Base URL (defaults to `https://api.github.com`)

pub mod cli;
mod client;
mod error;
#[cfg(feature = "test-server")]
pub mod mock_server;
mod models;
pub mod output;
mod pagination;
mod response;
mod services;
mod transport;

// Re-export core types
pub use client::GitHubClient;
pub use error::{GitHubError, Result};
pub use pagination::PageLinks;
pub use response::{Rate, ResponseMeta};
pub use transport::{ApiRequest, ApiResponse, Transport};

// Re-export accessors
pub use services::RepositoriesService;

// Re-export models
pub use models::{CustomPropertyValue, RepoRef};
