//! Error types for panel configuration loading.

use panelkit_core::LayoutError;
use std::fmt;

/// Error type for panel configuration parsing and building.
#[derive(Debug)]
pub enum ParseError {
    /// YAML parsing error
    Yaml(serde_yaml_ng::Error),
    /// A strategy rejected a configured parameter
    Layout(LayoutError),
    /// Validation error
    Validation(String),
    /// Missing required field
    MissingField(String),
    /// Invalid value
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(e) => write!(f, "YAML error: {e}"),
            Self::Layout(e) => write!(f, "Layout error: {e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::MissingField(field) => write!(f, "Missing required field: {field}"),
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml(e) => Some(e),
            Self::Layout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml_ng::Error> for ParseError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<LayoutError> for ParseError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}
