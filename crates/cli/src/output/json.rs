//! JSON output formatting.

/// Format a value as JSON.
pub fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}
