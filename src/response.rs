//! Response metadata extracted from GitHub API headers.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::pagination::PageLinks;

/// Metadata about a completed HTTP exchange.
///
/// Returned alongside decoded results on success and carried inside
/// [`GitHubError`](crate::GitHubError) for failures that got a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// HTTP status code.
    pub status: u16,
    /// Value of `x-github-request-id`, useful when reporting issues to GitHub.
    pub request_id: Option<String>,
    /// Rate limit snapshot, if the response carried the headers.
    pub rate: Option<Rate>,
    /// Pagination links from the `Link` header.
    pub links: PageLinks,
}

/// Rate limit state reported by GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    /// Requests allowed per window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
    /// Requests used in the current window.
    pub used: Option<u32>,
    /// When the window resets.
    pub reset: DateTime<Utc>,
    /// Rate limit bucket (e.g. "core").
    pub resource: Option<String>,
}

impl ResponseMeta {
    /// Metadata with only a status code.
    #[must_use]
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            request_id: None,
            rate: None,
            links: PageLinks::default(),
        }
    }

    /// Build metadata from a response status and headers.
    ///
    /// Missing or malformed headers leave the matching field empty.
    #[must_use]
    pub fn from_headers(status: StatusCode, headers: &HeaderMap) -> Self {
        Self {
            status: status.as_u16(),
            request_id: header_str(headers, "x-github-request-id").map(str::to_string),
            rate: Rate::from_headers(headers),
            links: header_str(headers, "link")
                .map(PageLinks::parse)
                .unwrap_or_default(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl Rate {
    /// Parse rate limit headers. Requires at least limit, remaining, and reset.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let limit = header_parse(headers, "x-ratelimit-limit")?;
        let remaining = header_parse(headers, "x-ratelimit-remaining")?;
        let reset_secs: i64 = header_parse(headers, "x-ratelimit-reset")?;

        Some(Self {
            limit,
            remaining,
            used: header_parse(headers, "x-ratelimit-used"),
            reset: DateTime::<Utc>::from_timestamp(reset_secs, 0)?,
            resource: header_str(headers, "x-ratelimit-resource").map(str::to_string),
        })
    }

    /// Returns true if no requests are left in the current window.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

pub(crate) fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn header_parse<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    header_str(headers, name).and_then(|v| v.trim().parse().ok())
}
