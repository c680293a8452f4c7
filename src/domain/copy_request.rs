//! Value objects describing a driver type copy into a profile.

use serde::{Deserialize, Serialize};

use crate::domain::types::{DbId, DriverTypeId, ProfileId, TypeName};

/// The driver type a user picked from the overview to copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopySource {
    pub db: DbId,
    pub type_id: DriverTypeId,
    pub type_name: TypeName,
}

impl CopySource {
    #[must_use]
    pub fn new(db: DbId, type_id: DriverTypeId, type_name: TypeName) -> Self {
        Self {
            db,
            type_id,
            type_name,
        }
    }

    /// Pairs the source with the profile type selected in the copy dialog.
    #[must_use]
    pub fn into_request(self, target_type_id: DriverTypeId) -> CopyRequest {
        CopyRequest {
            source_db: self.db,
            source_type_id: self.type_id,
            source_type_name: self.type_name,
            target_type_id,
        }
    }
}

/// A pending copy, carried between the existence check and the copy call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyRequest {
    pub source_db: DbId,
    pub source_type_id: DriverTypeId,
    pub source_type_name: TypeName,
    /// Profile type, chosen within the target profile category, that receives the copy.
    pub target_type_id: DriverTypeId,
}

/// Result of a successful copy, used to refresh the overview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopiedType {
    /// Profile column that received the copy, as reported by the backend.
    pub profile: ProfileId,
    pub target_type_id: DriverTypeId,
    pub type_name: TypeName,
}
