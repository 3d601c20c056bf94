//! Transport seam between resource accessors and the network.
//!
//! Accessors only ever talk to a [`Transport`]: they build a request from a
//! method, a relative path and an optional body, execute it, and decode what
//! comes back. [`GitHubClient`](crate::GitHubClient) is the production
//! implementation; tests substitute in-memory doubles.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{GitHubError, Result};
use crate::response::ResponseMeta;

/// A fully-formed request, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: Url,
    /// Serialized JSON body, if any.
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// The URL path, without query or host.
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// Parse the body back into JSON. Returns `None` for body-less requests.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }
}

/// A successful response: metadata plus the raw body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Status, rate limit and pagination metadata.
    pub meta: ResponseMeta,
    /// Raw response body.
    pub body: Bytes,
}

impl ApiResponse {
    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::DecodeError`] carrying the response metadata if
    /// the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<(T, ResponseMeta)> {
        match serde_json::from_slice(&self.body) {
            Ok(value) => Ok((value, self.meta)),
            Err(source) => Err(GitHubError::DecodeError {
                source,
                response: Box::new(self.meta),
            }),
        }
    }

    /// Drop the body and keep the metadata.
    pub fn into_meta(self) -> ResponseMeta {
        self.meta
    }
}

/// Builds and executes requests against a REST API.
///
/// Implementors are shared: accessors borrow a transport for the duration of
/// a call and never own it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Base URL that relative request paths are resolved against.
    ///
    /// Must end with `/` so that joining keeps any path prefix.
    fn base_url(&self) -> &Url;

    /// Build a request for `path` relative to [`base_url`](Self::base_url).
    ///
    /// # Errors
    ///
    /// Returns a construction error if the URL cannot be resolved or the
    /// body cannot be serialized. Nothing is sent in either case.
    fn build_request<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<ApiRequest>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url().join(path)?;
        let body = body
            .map(|b| serde_json::to_vec(b))
            .transpose()
            .map_err(GitHubError::SerializeError)?;

        Ok(ApiRequest { method, url, body })
    }

    /// Execute a request.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure or a non-success status.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    struct Unsent(Url);

    #[async_trait]
    impl Transport for Unsent {
        fn base_url(&self) -> &Url {
            &self.0
        }

        async fn execute(&self, _request: ApiRequest) -> Result<ApiResponse> {
            unreachable!("requests are only built in these tests")
        }
    }

    fn transport(base: &str) -> Unsent {
        Unsent(Url::parse(base).unwrap())
    }

    #[test]
    fn test_build_request_keeps_base_path_prefix() {
        let t = transport("https://ghe.example.com/api/v3/");
        let req = t
            .build_request::<()>(Method::GET, "repos/o/r/properties/values", None)
            .unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path(), "/api/v3/repos/o/r/properties/values");
        assert!(req.body.is_none());
        assert!(req.body_json().is_none());
    }

    #[test]
    fn test_build_request_serializes_body() {
        let t = transport("https://api.github.com/");
        let body = BTreeMap::from([("k", "v")]);
        let req = t
            .build_request(Method::PATCH, "repos/o/r", Some(&body))
            .unwrap();

        assert_eq!(req.body.as_deref(), Some(&b"{\"k\":\"v\"}"[..]));
        assert_eq!(req.body_json(), Some(serde_json::json!({"k": "v"})));
    }

    #[test]
    fn test_build_request_serialize_failure_is_construction_error() {
        let t = transport("https://api.github.com/");
        // Non-string map keys cannot be JSON object keys.
        let body = BTreeMap::from([((1, 2), "v")]);
        let err = t
            .build_request(Method::PATCH, "repos/o/r", Some(&body))
            .unwrap_err();

        assert!(matches!(err, GitHubError::SerializeError(_)));
        assert!(err.is_construction());
    }

    #[test]
    fn test_decode_failure_keeps_meta() {
        let response = ApiResponse {
            meta: ResponseMeta::with_status(200),
            body: Bytes::from_static(b"{not json"),
        };

        let err = response.decode::<Vec<String>>().unwrap_err();
        assert!(matches!(err, GitHubError::DecodeError { .. }));
        assert_eq!(err.status_code(), Some(200));
    }
}
