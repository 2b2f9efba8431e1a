//! Wire envelopes wrapping every JSON response body.

use personctl_core::Person;
use serde::{Deserialize, Serialize};

/// Client-facing message for every 500. Internal detail goes to the log only.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// `{"person": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonEnvelope {
    pub person: Person,
}

/// `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn internal() -> Self {
        Self {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}
