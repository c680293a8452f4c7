//! Request forms posted to the configuration backend.
//!
//! Every request is a urlencoded form whose `rm` field selects the backend
//! run mode.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

pub mod connection;
pub mod profile_detail;
pub mod profile_type;

#[derive(Debug, Error)]
/// Errors that can occur when building or encoding a request form.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("failed to encode form: {0}")]
    Encode(#[from] serde_html_form::ser::Error),

    #[error("failed to serialize details: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value: {0}")]
    TypeConstraint(String),
}

/// Backend run modes, sent as the `rm` form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    DbmsSave,
    DbmsTest,
    ProfileDetailSave,
    ProfileTypeCheck,
    ProfileTypeCopy,
}

impl RunMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            RunMode::DbmsSave => "dbms_save",
            RunMode::DbmsTest => "dbms_test",
            RunMode::ProfileDetailSave => "profile_detail_save",
            RunMode::ProfileTypeCheck => "profile_type_check",
            RunMode::ProfileTypeCopy => "profile_type_copy",
        }
    }
}

/// Encodes a form as `application/x-www-form-urlencoded`.
pub fn encode<F: Serialize>(form: &F) -> Result<String, FormError> {
    Ok(serde_html_form::to_string(form)?)
}
