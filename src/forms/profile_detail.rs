//! Forms saving and deleting the details of one profile type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::profile_type::{ProfileType, ProfileTypeKey};
use crate::forms::{FormError, RunMode};

/// Both attribute groups as posted in the `JSONDATA` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDetails {
    pub standard: BTreeMap<String, String>,
    pub extended: BTreeMap<String, String>,
}

impl From<&ProfileType> for TypeDetails {
    fn from(record: &ProfileType) -> Self {
        Self {
            standard: record.standard().to_map(),
            extended: record.extended().to_map(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
/// Form persisting the current field values of a profile type.
pub struct ProfileDetailSaveForm {
    pub rm: RunMode,
    #[validate(range(min = 1))]
    pub profile: i32,
    #[serde(rename = "type")]
    #[validate(range(min = 1))]
    pub type_id: i32,
    #[serde(rename = "JSONDATA")]
    pub json_data: String,
}

impl TryFrom<&ProfileType> for ProfileDetailSaveForm {
    type Error = FormError;

    fn try_from(record: &ProfileType) -> Result<Self, Self::Error> {
        let key = record.key();
        let json_data = serde_json::to_string(&TypeDetails::from(record))?;

        Ok(Self {
            rm: RunMode::ProfileDetailSave,
            profile: key.profile_id.get(),
            type_id: key.type_id.get(),
            json_data,
        })
    }
}

impl ProfileDetailSaveForm {
    /// Decodes the posted details back into both attribute groups.
    pub fn details(&self) -> Result<TypeDetails, FormError> {
        Ok(serde_json::from_str(&self.json_data)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
/// Form removing the details of a profile type.
pub struct ProfileDetailDeleteForm {
    pub rm: RunMode,
    #[validate(range(min = 1))]
    pub profile: i32,
    #[serde(rename = "type")]
    #[validate(range(min = 1))]
    pub type_id: i32,
    #[validate(range(min = 1, max = 1))]
    pub delete: u8,
}

impl From<ProfileTypeKey> for ProfileDetailDeleteForm {
    fn from(key: ProfileTypeKey) -> Self {
        Self {
            rm: RunMode::ProfileDetailSave,
            profile: key.profile_id.get(),
            type_id: key.type_id.get(),
            delete: 1,
        }
    }
}
