//! Forms driving the driver type copy workflow.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::copy_request::CopyRequest;
use crate::forms::RunMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
/// Form asking whether the target profile type already holds details for `db`.
pub struct ProfileTypeCheckForm {
    pub rm: RunMode,
    #[validate(length(min = 1))]
    pub db: String,
    #[serde(rename = "type")]
    #[validate(range(min = 1))]
    pub type_id: i32,
}

impl From<&CopyRequest> for ProfileTypeCheckForm {
    fn from(request: &CopyRequest) -> Self {
        Self {
            rm: RunMode::ProfileTypeCheck,
            db: request.source_db.as_str().to_string(),
            type_id: request.target_type_id.get(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
/// Form copying a source driver type into the target profile type.
pub struct ProfileTypeCopyForm {
    pub rm: RunMode,
    #[validate(range(min = 1))]
    pub profile_type: i32,
    #[validate(length(min = 1))]
    pub db: String,
    #[validate(range(min = 1))]
    pub db_type: i32,
    #[validate(length(min = 1))]
    pub db_type_name: String,
}

impl From<&CopyRequest> for ProfileTypeCopyForm {
    fn from(request: &CopyRequest) -> Self {
        Self {
            rm: RunMode::ProfileTypeCopy,
            profile_type: request.target_type_id.get(),
            db: request.source_db.as_str().to_string(),
            db_type: request.source_type_id.get(),
            db_type_name: request.source_type_name.as_str().to_string(),
        }
    }
}
