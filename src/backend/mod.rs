//! Seams to the configuration backend.
//!
//! Each concern gets its own trait so services only ask for what they call.
//! [`FormBackend`] implements all of them on top of a [`FormTransport`].

use crate::backend::errors::BackendResult;
use crate::dto::envelope::{CopyReply, TypeExistsReply};
use crate::forms::connection::ConnectionTestForm;
use crate::forms::profile_detail::{ProfileDetailDeleteForm, ProfileDetailSaveForm};
use crate::forms::profile_type::{ProfileTypeCheckForm, ProfileTypeCopyForm};

pub mod errors;
pub mod form_backend;
#[cfg(feature = "http")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use form_backend::FormBackend;

/// Posts an urlencoded body and returns the raw response text.
///
/// Implementations report anything that prevents a response body from
/// arriving as [`errors::BackendError::Transport`].
pub trait FormTransport {
    fn post_form(&self, body: &str) -> BackendResult<String>;
}

pub trait ConnectionTester {
    fn test_connection(&self, form: &ConnectionTestForm) -> BackendResult<()>;
}

pub trait ProfileDetailWriter {
    fn save_profile_detail(&self, form: &ProfileDetailSaveForm) -> BackendResult<()>;
    fn delete_profile_detail(&self, form: &ProfileDetailDeleteForm) -> BackendResult<()>;
}

pub trait ProfileTypeReader {
    fn check_profile_type(&self, form: &ProfileTypeCheckForm) -> BackendResult<TypeExistsReply>;
}

pub trait ProfileTypeWriter {
    fn copy_profile_type(&self, form: &ProfileTypeCopyForm) -> BackendResult<CopyReply>;
}
