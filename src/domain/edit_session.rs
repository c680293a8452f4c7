//! Transient state held while a profile type record is being edited.

use serde::{Deserialize, Serialize};

use crate::domain::profile_type::FieldGroup;

/// Action that moved a record into editing mode.
///
/// Cancelling returns the record to the controls this action replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryAction {
    Create,
    Edit,
}

/// Pre-edit values of both attribute groups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub standard: FieldGroup,
    pub extended: FieldGroup,
}

/// Edit session owned by a record in editing mode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    entered_via: EntryAction,
    snapshot: FieldSnapshot,
}

impl EditSession {
    #[must_use]
    pub fn new(entered_via: EntryAction, snapshot: FieldSnapshot) -> Self {
        Self {
            entered_via,
            snapshot,
        }
    }

    pub fn entered_via(&self) -> EntryAction {
        self.entered_via
    }

    pub fn snapshot(&self) -> &FieldSnapshot {
        &self.snapshot
    }

    /// Consumes the session, handing back the snapshot for restoration.
    pub fn into_snapshot(self) -> FieldSnapshot {
        self.snapshot
    }
}
