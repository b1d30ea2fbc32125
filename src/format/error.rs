//! The save format's single error kind

use crate::facility::FacilityError;
use thiserror::Error;

/// Any defect found while reading the save format
///
/// Structural, numeric and referential problems are all reported as this one
/// kind. The message is meant for logs and users, not for matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Format error: {message}")]
pub struct FormatError {
    message: String,
}

impl FormatError {
    /// Create a format error with a description of the defect
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Description of the defect
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<FacilityError> for FormatError {
    fn from(error: FacilityError) -> Self {
        Self::new(error.to_string())
    }
}

/// Result type for save format operations
pub type FormatResult<T> = Result<T, FormatError>;
