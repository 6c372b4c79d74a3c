//! Output formatting functions.

pub mod json;
pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Format a value for output, using `pretty` for human-readable output.
pub fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => Ok(json::format_json(value)?),
        OutputFormat::Pretty => Ok(pretty(value)),
    }
}
