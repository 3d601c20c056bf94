//! GitHub API model types.

mod custom_property;
mod repository;

pub use custom_property::CustomPropertyValue;
pub(crate) use custom_property::CustomPropertyValuesEnvelope;
pub use repository::RepoRef;
