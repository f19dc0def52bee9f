//! Error formatting utilities
//!
//! Produces human-readable messages with their cause chain, and structured
//! records for log output.

use crate::Error;
use std::error::Error as StdError;

/// Format error for display, appending nested causes not already in the message
pub fn format_error(error: &Error) -> String {
    let mut result = match error {
        Error::Io { path, source } => {
            format!("Failed to access '{}': {}", path.display(), source)
        }
        Error::MissingField { path } => {
            format!(
                "Configuration document has no '{}' field; it must exist before patching",
                path
            )
        }
        _ => error.to_string(),
    };

    let mut source = error.source();
    while let Some(cause) = source {
        if !result.contains(&cause.to_string()) {
            result = format!("{} (caused by {})", result, cause);
        }
        source = cause.source();
    }

    result
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": format_error(error),
        "category": error.category(),
    });

    match error {
        Error::Io { path, source } => {
            log_data["path"] = serde_json::Value::String(path.display().to_string());
            log_data["io_kind"] = serde_json::Value::String(format!("{:?}", source.kind()));
        }
        Error::Json(e) => {
            log_data["line"] = serde_json::Value::Number(e.line().into());
            log_data["column"] = serde_json::Value::Number(e.column().into());
        }
        Error::MissingField { path } | Error::NotAnObject { path, .. } => {
            log_data["field"] = serde_json::Value::String(path.clone());
        }
        Error::Config { field, .. } => {
            log_data["field"] = serde_json::Value::String(field.clone());
        }
        Error::Toml(_) => {}
    }

    log_data
}
