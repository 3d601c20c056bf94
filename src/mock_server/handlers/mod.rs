//! HTTP handlers for the mock server.

mod properties;

pub use properties::{get_property_values, update_property_values};
