//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use crate::{CustomPropertyValue, RepoRef};

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    /// Repository with two property values set.
    pub fn configured_repo() -> RepoRef {
        RepoRef::new("octo-org", "hello-world")
    }

    /// Repository with no property values set.
    pub fn bare_repo() -> RepoRef {
        RepoRef::new("octo-org", "scratch")
    }

    /// Values stored on [`configured_repo`](Self::configured_repo).
    pub fn default_values() -> Vec<CustomPropertyValue> {
        vec![
            CustomPropertyValue::set("environment", "production"),
            CustomPropertyValue::set("service", "web"),
        ]
    }

    /// Create the default scenario with realistic test data.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario {
            repositories: vec![
                (Self::configured_repo(), Self::default_values()),
                (Self::bare_repo(), vec![]),
            ],
        }
    }
}

/// Default test scenario.
pub struct DefaultScenario {
    pub repositories: Vec<(RepoRef, Vec<CustomPropertyValue>)>,
}
