//! Error types for the Record Verification Agent
//!
//! The validation core is infallible by contract; these errors cover the
//! outer surfaces only (file access, document parsing, serialization).

use thiserror::Error;

/// Main error type for verification operations
#[derive(Error, Debug)]
pub enum VerificationError {
    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    FileError(String),

    /// Record or answers document parsing error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl VerificationError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        VerificationError::InvalidInput(msg.into())
    }

    /// Create a file error
    pub fn file_error(msg: impl Into<String>) -> Self {
        VerificationError::FileError(msg.into())
    }

    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        VerificationError::ParseError(msg.into())
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            VerificationError::InvalidInput(_)
                | VerificationError::FileError(_)
                | VerificationError::ParseError(_)
        )
    }
}

impl From<std::io::Error> for VerificationError {
    fn from(err: std::io::Error) -> Self {
        VerificationError::FileError(err.to_string())
    }
}

impl From<serde_json::Error> for VerificationError {
    fn from(err: serde_json::Error) -> Self {
        VerificationError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for VerificationError {
    fn from(err: serde_yaml::Error) -> Self {
        VerificationError::SerializationError(format!("YAML error: {}", err))
    }
}

/// Result type alias for verification operations
pub type Result<T> = std::result::Result<T, VerificationError>;
