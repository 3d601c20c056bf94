//! Custom property value endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::mock_server::state::MockState;
use crate::CustomPropertyValue;

const DOCS_URL: &str = "https://docs.github.com/rest/repos/custom-properties";

/// Body of a property values write.
#[derive(Debug, Deserialize)]
pub struct UpdatePropertyValuesRequest {
    pub properties: Vec<CustomPropertyValue>,
}

/// GET /repos/{owner}/{repo}/properties/values
pub async fn get_property_values(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((owner, repo)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;

    if !state.is_authorized(bearer_token(&headers)) {
        return bad_credentials();
    }

    match state.property_values(&owner, &repo) {
        Some(values) => (StatusCode::OK, Json(values.to_vec())).into_response(),
        None => not_found(),
    }
}

/// PATCH /repos/{owner}/{repo}/properties/values
pub async fn update_property_values(
    State(state): State<Arc<RwLock<MockState>>>,
    Path((owner, repo)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<UpdatePropertyValuesRequest>,
) -> Response {
    let mut state = state.write().await;

    if !state.is_authorized(bearer_token(&headers)) {
        return bad_credentials();
    }

    match state.update_property_values(&owner, &repo, body.properties) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found(),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "message": "Not Found",
            "documentation_url": DOCS_URL
        })),
    )
        .into_response()
}

fn bad_credentials() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })),
    )
        .into_response()
}
