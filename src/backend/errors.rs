use thiserror::Error;

use crate::dto::envelope::EnvelopeError;
use crate::forms::FormError;

/// Notice shown to the user when no usable response came back.
pub const TRANSPORT_FAILURE_NOTICE: &str = "The request could not be completed, please try again.";

#[derive(Debug, Error)]
pub enum BackendError {
    /// The request could not complete (no response, non-success status).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered `success: false`.
    #[error("{0}")]
    Application(String),

    /// A response arrived but could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The request form could not be built or encoded.
    #[error("Form error: {0}")]
    Form(#[from] FormError),
}

impl BackendError {
    /// Text presented to the user: the backend's own message for application
    /// faults, a generic notice for everything else.
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Application(message) => message.clone(),
            _ => TRANSPORT_FAILURE_NOTICE.to_string(),
        }
    }

    pub fn is_application(&self) -> bool {
        matches!(self, BackendError::Application(_))
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

impl From<EnvelopeError> for BackendError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Rejected(message) => BackendError::Application(message),
            EnvelopeError::Malformed(message) => BackendError::Decode(message),
        }
    }
}
