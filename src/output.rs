//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{CustomPropertyValue, ResponseMeta};

/// Shown in place of a value that is not set.
pub const UNSET_MARKER: &str = "(unset)";

/// Trait for human-readable key-value output.
///
/// Implemented by result types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for CustomPropertyValue {
    fn pretty_print(&self) -> String {
        format!(
            "{}: {}",
            self.property_name,
            self.value.as_deref().unwrap_or(UNSET_MARKER)
        )
    }
}

impl PrettyPrint for [CustomPropertyValue] {
    fn pretty_print(&self) -> String {
        if self.is_empty() {
            return "No custom property values set".to_string();
        }

        let width = self
            .iter()
            .map(|p| p.property_name.len())
            .max()
            .unwrap_or(0);

        self.iter()
            .map(|p| {
                format!(
                    "{:<width$}  {}",
                    p.property_name,
                    p.value.as_deref().unwrap_or(UNSET_MARKER),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl PrettyPrint for ResponseMeta {
    fn pretty_print(&self) -> String {
        let mut lines = vec![format!("Status:         {}", self.status)];

        if let Some(ref id) = self.request_id {
            lines.push(format!("Request ID:     {}", id));
        }

        if let Some(ref rate) = self.rate {
            lines.push(format!(
                "Rate limit:     {}/{} remaining, resets {}",
                rate.remaining,
                rate.limit,
                rate.reset.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_set_pretty_print_aligns_names() {
        let values = vec![
            CustomPropertyValue::set("env", "production"),
            CustomPropertyValue::unset("service"),
        ];

        let output = values.pretty_print();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines, vec!["env      production", "service  (unset)"]);
    }

    #[test]
    fn test_empty_property_set() {
        let values: Vec<CustomPropertyValue> = vec![];
        assert_eq!(values.pretty_print(), "No custom property values set");
    }

    #[test]
    fn test_meta_pretty_print() {
        let mut meta = ResponseMeta::with_status(204);
        meta.request_id = Some("ABCD:1234".to_string());

        let output = meta.pretty_print();
        assert!(output.starts_with("Status:         204"));
        assert!(output.contains("ABCD:1234"));
    }
}
