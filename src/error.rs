//! Error types for GitHub API operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::response::ResponseMeta;

/// Errors that can occur during GitHub API operations.
///
/// Variants fall into two phases. Construction errors (`ConfigMissing`,
/// `InvalidRepository`, `UrlError`, `SerializeError`) mean no request was
/// sent. Every other variant comes from executing a request; those that got
/// an HTTP response carry its [`ResponseMeta`].
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Configuration is missing or incomplete.
    #[error("GitHub configuration required: {0}")]
    ConfigMissing(String),

    /// Repository reference cannot be turned into a request path.
    #[error("Invalid repository '{0}': expected format 'owner/repo'")]
    InvalidRepository(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API request failed with a non-success status.
    #[error("GitHub API error ({status_code}): {message}")]
    ApiError {
        status_code: u16,
        message: String,
        documentation_url: Option<String>,
        response: Box<ResponseMeta>,
    },

    /// Rate limited.
    #[error("Rate limited, resets at {reset:?}")]
    RateLimited {
        reset: Option<DateTime<Utc>>,
        response: Box<ResponseMeta>,
    },

    /// Success body did not match the expected shape.
    #[error("Failed to parse response: {source}")]
    DecodeError {
        #[source]
        source: serde_json::Error,
        response: Box<ResponseMeta>,
    },
}

impl GitHubError {
    /// Response metadata, if the request got as far as an HTTP response.
    pub fn response(&self) -> Option<&ResponseMeta> {
        match self {
            Self::ApiError { response, .. }
            | Self::RateLimited { response, .. }
            | Self::DecodeError { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Returns true if the error happened before anything was sent.
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            Self::ConfigMissing(_)
                | Self::InvalidRepository(_)
                | Self::UrlError(_)
                | Self::SerializeError(_)
        )
    }

    /// HTTP status of the failed response, if any.
    pub fn status_code(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }
}

/// Result type alias for GitHub operations.
pub type Result<T> = core::result::Result<T, GitHubError>;
