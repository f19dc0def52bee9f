//! Error types for the config patcher
//!
//! Every failure is surfaced as-is to the caller; nothing here recovers.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error)]
pub enum Error {
    /// I/O errors on the target configuration file
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File the operation was performed on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML settings parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Settings errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The settings field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// A key the patch assigns into does not exist
    #[error("Missing field '{path}' in configuration document")]
    MissingField {
        /// Dotted key path of the missing field
        path: String,
    },

    /// A value the patch assigns into is not a JSON object
    #[error("Field '{path}' is not a JSON object (found {found})")]
    NotAnObject {
        /// Dotted key path of the offending value, `<root>` for the document itself
        path: String,
        /// JSON type name of the value actually found
        found: &'static str,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an I/O error bound to a path
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a settings error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field<S: Into<String>>(path: S) -> Self {
        Self::MissingField { path: path.into() }
    }

    /// Create a not-an-object error from the value that was found
    pub fn not_an_object<S: Into<String>>(path: S, found: &serde_json::Value) -> Self {
        Self::NotAnObject {
            path: path.into(),
            found: json_type_name(found),
        }
    }

    /// Check whether the error was raised before the target file was touched
    /// for writing
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            Error::Json(..) | Error::MissingField { .. } | Error::NotAnObject { .. }
        )
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Io { .. } => "io",
            Error::Json(..) => "json",
            Error::Toml(..) => "toml",
            Error::Config { .. } => "config",
            Error::MissingField { .. } => "missing_field",
            Error::NotAnObject { .. } => "not_an_object",
        }
    }
}

/// Name of a JSON value's type, as used in error messages
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
