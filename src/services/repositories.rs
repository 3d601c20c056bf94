//! Repository endpoints.

use reqwest::Method;

use crate::error::Result;
use crate::models::{CustomPropertyValue, CustomPropertyValuesEnvelope, RepoRef};
use crate::response::ResponseMeta;
use crate::transport::Transport;

const PROPERTY_VALUES: &str = "properties/values";

/// Accessor for repository endpoints.
///
/// Holds only a borrowed transport, so it is free to construct per call and
/// safe to use from many tasks at once.
///
/// # Example
///
/// ```no_run
/// use ghprops::{CustomPropertyValue, GitHubClient, RepoRef};
///
/// # async fn example() -> ghprops::Result<()> {
/// let client = GitHubClient::from_env()?;
/// let repo = RepoRef::new("octo-org", "hello-world");
///
/// let (values, _meta) = client
///     .repositories()
///     .get_all_custom_property_values(&repo)
///     .await?;
///
/// client
///     .repositories()
///     .create_or_update_custom_property_values(
///         &repo,
///         &[CustomPropertyValue::set("environment", "production")],
///     )
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RepositoriesService<'c, T> {
    client: &'c T,
}

impl<T> Clone for RepositoriesService<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RepositoriesService<'_, T> {}

impl<'c, T: Transport> RepositoriesService<'c, T> {
    /// Create an accessor over a shared transport.
    pub fn new(client: &'c T) -> Self {
        Self { client }
    }

    /// Get all custom property values set for a repository.
    ///
    /// `GET /repos/{owner}/{repo}/properties/values`
    ///
    /// # Errors
    ///
    /// Returns a construction error if the request cannot be built, or the
    /// transport's error if execution or decoding fails. No partial result is
    /// returned on error.
    #[tracing::instrument(skip(self, repo), fields(repo = %repo))]
    pub async fn get_all_custom_property_values(
        &self,
        repo: &RepoRef,
    ) -> Result<(Vec<CustomPropertyValue>, ResponseMeta)> {
        let path = repo.path(PROPERTY_VALUES)?;
        let request = self.client.build_request::<()>(Method::GET, &path, None)?;

        let (values, meta): (Vec<CustomPropertyValue>, _) =
            self.client.execute(request).await?.decode()?;

        tracing::debug!(count = values.len(), "fetched custom property values");
        Ok((values, meta))
    }

    /// Create or update custom property values for a repository.
    ///
    /// `PATCH /repos/{owner}/{repo}/properties/values`
    ///
    /// An empty slice is still sent. Values of `None` clear the property on
    /// the repository. The response body is discarded.
    ///
    /// # Errors
    ///
    /// Returns a construction error if the request cannot be built, or the
    /// transport's error if execution fails.
    #[tracing::instrument(skip(self, repo, properties), fields(repo = %repo, count = properties.len()))]
    pub async fn create_or_update_custom_property_values(
        &self,
        repo: &RepoRef,
        properties: &[CustomPropertyValue],
    ) -> Result<ResponseMeta> {
        let path = repo.path(PROPERTY_VALUES)?;
        let body = CustomPropertyValuesEnvelope { properties };
        let request = self
            .client
            .build_request(Method::PATCH, &path, Some(&body))?;

        let meta = self.client.execute(request).await?.into_meta();

        tracing::debug!(status = meta.status, "updated custom property values");
        Ok(meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use bytes::Bytes;
    use serde_json::json;
    use url::Url;

    use crate::error::GitHubError;
    use crate::transport::{ApiRequest, ApiResponse};

    /// Records requests and replies with a canned outcome.
    struct Recorder {
        base_url: Url,
        requests: Mutex<Vec<ApiRequest>>,
        reply: fn() -> Result<ApiResponse>,
    }

    impl Recorder {
        fn new(reply: fn() -> Result<ApiResponse>) -> Self {
            Self {
                base_url: Url::parse("https://api.github.com/").unwrap(),
                requests: Mutex::new(Vec::new()),
                reply,
            }
        }

        fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for Recorder {
        fn base_url(&self) -> &Url {
            &self.base_url
        }

        async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
            self.requests.lock().unwrap().push(request);
            (self.reply)()
        }
    }

    fn two_values() -> Result<ApiResponse> {
        Ok(ApiResponse {
            meta: ResponseMeta::with_status(200),
            body: Bytes::from_static(
                br#"[{"property_name":"environment","value":"production"},{"property_name":"service","value":"web"}]"#,
            ),
        })
    }

    fn no_content() -> Result<ApiResponse> {
        Ok(ApiResponse {
            meta: ResponseMeta::with_status(204),
            body: Bytes::new(),
        })
    }

    fn server_error() -> Result<ApiResponse> {
        Err(GitHubError::ApiError {
            status_code: 500,
            message: "boom".to_string(),
            documentation_url: None,
            response: Box::new(ResponseMeta::with_status(500)),
        })
    }

    #[tokio::test]
    async fn test_get_builds_get_without_body() {
        let transport = Recorder::new(two_values);
        let repo = RepoRef::new("o", "r");

        let (values, meta) = RepositoriesService::new(&transport)
            .get_all_custom_property_values(&repo)
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path(), "/repos/o/r/properties/values");
        assert!(requests[0].body.is_none());

        assert_eq!(meta.status, 200);
        assert_eq!(
            values,
            vec![
                CustomPropertyValue::set("environment", "production"),
                CustomPropertyValue::set("service", "web"),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_transport_error_passes_through() {
        let transport = Recorder::new(server_error);

        let err = RepositoriesService::new(&transport)
            .get_all_custom_property_values(&RepoRef::new("o", "r"))
            .await
            .unwrap_err();

        assert!(matches!(err, GitHubError::ApiError { status_code: 500, .. }));
        assert_eq!(err.response().map(|r| r.status), Some(500));
    }

    #[tokio::test]
    async fn test_get_decode_error_carries_meta() {
        let transport = Recorder::new(no_content);

        let err = RepositoriesService::new(&transport)
            .get_all_custom_property_values(&RepoRef::new("o", "r"))
            .await
            .unwrap_err();

        assert!(matches!(err, GitHubError::DecodeError { .. }));
        assert_eq!(err.status_code(), Some(204));
    }

    #[tokio::test]
    async fn test_update_wraps_body_in_envelope() {
        let transport = Recorder::new(no_content);
        let properties = vec![
            CustomPropertyValue::set("service", "web"),
            CustomPropertyValue::unset("team"),
            CustomPropertyValue::set("notes", ""),
        ];

        let meta = RepositoriesService::new(&transport)
            .create_or_update_custom_property_values(&RepoRef::new("o", "r"), &properties)
            .await
            .unwrap();

        assert_eq!(meta.status, 204);
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::PATCH);
        assert_eq!(requests[0].path(), "/repos/o/r/properties/values");
        assert_eq!(
            requests[0].body_json(),
            Some(json!({
                "properties": [
                    {"property_name": "service", "value": "web"},
                    {"property_name": "team", "value": null},
                    {"property_name": "notes", "value": ""}
                ]
            }))
        );
        // Input is borrowed, never consumed or reordered.
        assert_eq!(properties[0], CustomPropertyValue::set("service", "web"));
    }

    #[tokio::test]
    async fn test_update_empty_still_sends() {
        let transport = Recorder::new(no_content);

        RepositoriesService::new(&transport)
            .create_or_update_custom_property_values(&RepoRef::new("o", "r"), &[])
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].body.as_deref(), Some(&br#"{"properties":[]}"#[..]));
    }

    #[tokio::test]
    async fn test_update_transport_error_passes_through() {
        let transport = Recorder::new(server_error);

        let err = RepositoriesService::new(&transport)
            .create_or_update_custom_property_values(
                &RepoRef::new("o", "r"),
                &[CustomPropertyValue::set("service", "web")],
            )
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn test_invalid_repo_never_reaches_transport() {
        let transport = Recorder::new(no_content);
        let service = RepositoriesService::new(&transport);
        let repo = RepoRef::new("o", "");

        let get_err = service.get_all_custom_property_values(&repo).await.unwrap_err();
        let update_err = service
            .create_or_update_custom_property_values(&repo, &[])
            .await
            .unwrap_err();

        assert!(get_err.is_construction());
        assert!(get_err.response().is_none());
        assert!(update_err.is_construction());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_service_is_copy_over_sized_transport() {
        let transport = Recorder::new(no_content);
        let service = RepositoriesService::new(&transport);
        let copied = service;
        let repo = RepoRef::new("o", "r");

        service
            .create_or_update_custom_property_values(&repo, &[])
            .await
            .unwrap();
        copied
            .create_or_update_custom_property_values(&repo, &[])
            .await
            .unwrap();

        assert_eq!(transport.requests().len(), 2);
    }
}
