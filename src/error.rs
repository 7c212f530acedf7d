use std::error;
use thiserror::Error;

/// A caller-supplied request failed a required-field precondition.
///
/// Raised before any store access; the `Display` output is the exact message
/// returned to the caller in the 400 response body.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// One or more of the required record fields is missing or empty.
    #[error("Missing required fields")]
    MissingFields,
    /// The record id is missing from the addressing context.
    #[error("User ID is required")]
    MissingId,
}

/// A failure reported by the external store collaborator.
///
/// The source error is kept for logging; callers of the service only ever see
/// a fixed generic message, never the detail carried here.
#[derive(Debug, Error)]
#[error("store request failed: {source}")]
pub struct StoreError {
    source: Box<dyn error::Error + Send + Sync>,
}

impl StoreError {
    /// Wrap any error raised by a store implementation.
    pub fn new(source: impl Into<Box<dyn error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::missing_fields(ValidationError::MissingFields, "Missing required fields")]
    #[case::missing_id(ValidationError::MissingId, "User ID is required")]
    fn test_validation_error_message(#[case] error: ValidationError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_store_error_keeps_source_detail() {
        let error = StoreError::new("throttled");
        assert_eq!(error.to_string(), "store request failed: throttled");
    }
}
