//! Custom property value model.

use serde::{Deserialize, Serialize};

/// One custom property value set on a repository.
///
/// `value` distinguishes "not set" (`None`, sent as JSON `null`) from an
/// explicitly empty string. On write, `None` asks GitHub to remove the value
/// from the repository; `Some(String::new())` is sent as `""` and left to
/// GitHub to accept or reject for the property's type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomPropertyValue {
    /// Name of the organization-level property definition.
    pub property_name: String,

    /// Value assigned to the repository.
    #[serde(default)]
    pub value: Option<String>,
}

impl CustomPropertyValue {
    /// Create a property value.
    pub fn new(property_name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            property_name: property_name.into(),
            value,
        }
    }

    /// A property with a concrete value.
    pub fn set(property_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(property_name, Some(value.into()))
    }

    /// A property whose value should be removed.
    pub fn unset(property_name: impl Into<String>) -> Self {
        Self::new(property_name, None)
    }

    /// Returns true if the property has a value.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

/// Request body for the custom property values write endpoint.
///
/// The write endpoint expects `{"properties": [...]}` while the read endpoint
/// returns a bare array, so this wrapper only exists on the way out.
#[derive(Debug, Serialize)]
pub(crate) struct CustomPropertyValuesEnvelope<'a> {
    pub properties: &'a [CustomPropertyValue],
}
