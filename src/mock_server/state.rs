//! Mock server state management.
//!
//! Provides the in-memory data store for the mock GitHub API server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{CustomPropertyValue, RepoRef};

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Custom property values indexed by "owner/repo", in insertion order.
    /// Stored values are always set; clearing a value removes the entry.
    pub repositories: HashMap<String, Vec<CustomPropertyValue>>,

    /// Optional authentication token. If set, requests must include this token.
    pub required_token: Option<String>,

    /// Number of write requests accepted.
    pub update_count: usize,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a repository with its property values.
    pub fn with_repository(mut self, repo: &RepoRef, values: Vec<CustomPropertyValue>) -> Self {
        self.repositories.insert(repo.to_string(), values);
        self
    }

    /// Set the required authentication token.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Get the property values for a repository.
    pub fn property_values(&self, owner: &str, repo: &str) -> Option<&[CustomPropertyValue]> {
        self.repositories
            .get(&format!("{owner}/{repo}"))
            .map(Vec::as_slice)
    }

    /// Apply a write to a repository's property values.
    ///
    /// A `None` value removes the property, any other value replaces an
    /// existing entry in place or is appended. Returns `None` if the
    /// repository does not exist.
    pub fn update_property_values(
        &mut self,
        owner: &str,
        repo: &str,
        updates: Vec<CustomPropertyValue>,
    ) -> Option<&[CustomPropertyValue]> {
        let current = self.repositories.get_mut(&format!("{owner}/{repo}"))?;

        for update in updates {
            let existing = current
                .iter()
                .position(|p| p.property_name == update.property_name);

            match (existing, update.value) {
                (Some(i), None) => {
                    current.remove(i);
                }
                (Some(i), Some(value)) => current[i].value = Some(value),
                (None, None) => {}
                (None, Some(value)) => {
                    current.push(CustomPropertyValue::set(update.property_name, value));
                }
            }
        }

        self.update_count += 1;
        Some(current.as_slice())
    }

    /// Check a bearer token against the required token, if any.
    pub fn is_authorized(&self, token: Option<&str>) -> bool {
        match &self.required_token {
            Some(required) => token == Some(required.as_str()),
            None => true,
        }
    }
}
