//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The caller did not pick an output format at all
    #[error("No output format selected")]
    NoFormatSelected,
    /// A format option had a value the format cannot use
    #[error("Invalid value '{value}' for option '{key}'")]
    InvalidOption { key: String, value: String },
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
