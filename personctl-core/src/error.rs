/// Structured error types for personctl-core.
///
/// Uses `thiserror` so the server can log the detail while
/// the binary crate stays on `anyhow`.
use thiserror::Error;

/// Failure raised by a [`crate::PersonProvider`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The record source could not be reached
    #[error("Provider unavailable: {reason}")]
    Unavailable { reason: String },

    /// No record to serve
    #[error("Person not found")]
    NotFound,
}

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

impl ProviderError {
    /// Create an unavailable error
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}
