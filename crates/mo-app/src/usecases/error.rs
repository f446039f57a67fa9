use mo_core::onboarding::FlowError;
use mo_core::ports::{AuthError, LocationError};
use mo_core::validation::FieldErrors;
use thiserror::Error;

/// Errors produced by the onboarding use cases.
#[derive(Debug, Error)]
pub enum OperationError {
    /// Rejected locally; no state was touched and nothing was sent.
    #[error("invalid input: {0}")]
    Invalid(#[from] FieldErrors),

    #[error("another operation is already in progress")]
    Busy,

    #[error("please wait {remaining}s before requesting a new code")]
    ResendNotReady { remaining: u32 },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error("resend countdown failed: {0}")]
    Countdown(#[source] anyhow::Error),

    #[error("ui interaction failed: {0}")]
    Ui(#[source] anyhow::Error),
}

impl From<OperationError> for FlowError {
    fn from(err: OperationError) -> Self {
        match err {
            OperationError::Invalid(errors) => FlowError::Invalid(errors),
            OperationError::Busy => FlowError::Busy,
            OperationError::ResendNotReady { remaining } => FlowError::ResendNotReady { remaining },
            OperationError::Location(err) => FlowError::LocationUnavailable {
                message: err.to_string(),
            },
            other => FlowError::Rejected {
                message: other.to_string(),
            },
        }
    }
}
