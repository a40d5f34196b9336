//! Validation error types and shared field checks

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required field absent from the request
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Value doesn't match the required format (e.g., integer id)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Request body could not be read as JSON of the expected shape
    MalformedBody(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::MalformedBody(reason) => write!(f, "invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a present, non-blank text field. The value is kept as sent.
pub fn required_text(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

/// Require a present field of any type.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}
