//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use subreg_client::ClientError;

use crate::validation::ValidationErrors;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The form failed field-level validation; nothing was sent.
    #[error("Validation error: {0}")]
    Validation(ValidationErrors),

    /// A request from the same form is still in flight.
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// Backend call failed (converted from the client library).
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, backend rejection) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::SubmissionInFlight => true,
            Self::Client(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
