//! Controllers behind the configuration page.
//!
//! Every remote action is split into a `prepare`/`begin` step returning a
//! ticket and a `complete`/`on_*` step receiving the backend outcome for that
//! ticket, so page callbacks can dispatch requests however they like. The free
//! functions in each module run both halves against a backend in one call.

use thiserror::Error;

use crate::backend::errors::BackendError;
use crate::domain::profile_type::{ProfileTypeError, ProfileTypeKey};
use crate::domain::types::RequestToken;

pub mod connection_test;
pub mod copy_workflow;
pub mod editor;
pub mod prompt;

pub const SAVE_SUCCESS_MESSAGE: &str = "Save successful";
pub const DELETE_SUCCESS_MESSAGE: &str = "Delete successful";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this type?";
pub const OVERWRITE_CONFIRMATION: &str = "Type already exists, do you want to replace it?";
pub const COPY_SUCCESS_MESSAGE: &str = "Copy successful";
pub const CONNECTION_OK_MESSAGE: &str = "ok";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("no record bound for {0}")]
    UnknownRecord(ProfileTypeKey),

    #[error(transparent)]
    Record(#[from] ProfileTypeError),

    #[error("copy dialog is not open")]
    CopyDialogClosed,

    #[error("copy workflow is not {0}")]
    CopyPhase(&'static str),

    #[error("Form error: {0}")]
    Form(String),

    #[error("Type constraint error: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// An encoded request waiting to be dispatched, tagged with its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket<F> {
    pub token: RequestToken,
    pub form: F,
}

/// What a completion did to local state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The transition committed.
    Applied,
    /// The backend refused or could not be reached; carries the message shown.
    Rejected(String),
    /// The user declined a confirmation; nothing was sent.
    Declined,
    /// A newer request superseded this one; nothing changed.
    Stale,
}
