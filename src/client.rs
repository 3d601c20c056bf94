//! GitHub API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Resource-specific operations live on accessors such as
//! [`RepositoriesService`], which borrow this client as their transport.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use url::Url;

use crate::error::{GitHubError, Result};
use crate::response::{header_str, ResponseMeta};
use crate::services::RepositoriesService;
use crate::transport::{ApiRequest, ApiResponse, Transport};

const DEFAULT_API_URL: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
const MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("ghprops/", env!("CARGO_PKG_VERSION"));

/// Low-level GitHub API client.
///
/// Handles authentication and HTTP requests. It implements [`Transport`], so
/// any number of resource accessors can share one client and its connection
/// pool.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use ghprops::GitHubClient;
///
/// # fn example() -> ghprops::Result<()> {
/// // Create from environment variables
/// let client = GitHubClient::from_env()?;
///
/// // Or configure manually
/// let client = GitHubClient::new("ghp_yourtoken", "https://api.github.com")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a client from environment variables.
    ///
    /// Uses `GITHUB_TOKEN` for authentication and optionally `GITHUB_API_URL`
    /// for the base URL (defaults to `https://api.github.com`).
    ///
    /// # Errors
    ///
    /// Returns an error if `GITHUB_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("GITHUB_TOKEN").map_err(|_| {
            GitHubError::ConfigMissing("GITHUB_TOKEN environment variable not set".to_string())
        })?;

        let base_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&token, &base_url)
    }

    /// Create a new client with the provided token and base URL.
    ///
    /// # Arguments
    ///
    /// * `token` - GitHub token (personal access token or app installation token)
    /// * `base_url` - Base URL for the API (e.g., `https://api.github.com`, or
    ///   `https://ghe.example.com/api/v3` for GitHub Enterprise Server)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(GitHubError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
        })
    }

    /// Repository endpoints backed by this client.
    pub fn repositories(&self) -> RepositoriesService<'_, Self> {
        RepositoriesService::new(self)
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<ApiResponse> {
        let status = response.status();
        let meta = ResponseMeta::from_headers(status, response.headers());

        if status.is_success() {
            let body = response.bytes().await.map_err(GitHubError::HttpError)?;
            return Ok(ApiResponse { meta, body });
        }

        // Primary and secondary rate limits both arrive as 403 or 429
        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = header_str(response.headers(), "retry-after");
            let exhausted = meta.rate.as_ref().is_some_and(|r| r.is_exhausted());

            if exhausted || retry_after.is_some() {
                let reset = retry_after
                    .and_then(|v| retry_after_reset(v, Utc::now()))
                    .or_else(|| meta.rate.as_ref().map(|r| r.reset));
                tracing::warn!(status = status.as_u16(), ?reset, "GitHub rate limit hit");
                return Err(GitHubError::RateLimited {
                    reset,
                    response: Box::new(meta),
                });
            }
        }

        let (message, documentation_url) = Self::extract_error_message(response, status).await;
        Err(GitHubError::ApiError {
            status_code: status.as_u16(),
            message,
            documentation_url,
            response: Box::new(meta),
        })
    }

    /// Extract error message and documentation link from a failed response.
    async fn extract_error_message(
        response: Response,
        status: StatusCode,
    ) -> (String, Option<String>) {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return (format!("HTTP {status}"), None),
        };

        // GitHub error bodies look like {"message": ..., "documentation_url": ...}
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            let docs = json
                .get("documentation_url")
                .and_then(|d| d.as_str())
                .map(str::to_string);
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return (msg.to_string(), docs);
            }
        }

        if body.trim().is_empty() {
            (format!("HTTP {status}"), None)
        } else {
            (body, None)
        }
    }
}

/// Resolve a `retry-after` value (delay seconds or HTTP-date) to an instant.
///
/// Returns `None` for values that are malformed, negative, or out of range.
fn retry_after_reset(value: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(secs) = value.parse::<u64>() {
        let delta = TimeDelta::try_seconds(i64::try_from(secs).ok()?)?;
        return now.checked_add_signed(delta);
    }
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

#[async_trait]
impl Transport for GitHubClient {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[tracing::instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .bearer_auth(&self.token);

        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder.send().await.map_err(GitHubError::HttpError)?;
        tracing::debug!(status = response.status().as_u16(), "received response");

        Self::check_response(response).await
    }
}
