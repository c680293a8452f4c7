//! Domain model for profile type records and their edit-state machine.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::edit_session::{EditSession, EntryAction, FieldSnapshot};
use crate::domain::types::{DriverTypeId, FieldName, ProfileId};

/// Identity of a profile type record: one driver type within one profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProfileTypeKey {
    pub profile_id: ProfileId,
    pub type_id: DriverTypeId,
}

impl ProfileTypeKey {
    #[must_use]
    pub fn new(profile_id: ProfileId, type_id: DriverTypeId) -> Self {
        Self {
            profile_id,
            type_id,
        }
    }
}

impl Display for ProfileTypeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "profile {} / type {}", self.profile_id, self.type_id)
    }
}

/// The two attribute groups every profile type carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldGroupKind {
    Standard,
    Extended,
}

/// A single named input of a profile type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: FieldName,
    pub value: String,
}

/// Ordered set of fields; order follows the page layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldGroup {
    fields: Vec<Field>,
}

impl FieldGroup {
    /// Builds a group, keeping the first position and the last value of a
    /// repeated field name.
    pub fn new<I, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (FieldName, V)>,
        V: Into<String>,
    {
        let mut group = Self::default();
        for (name, value) in fields {
            let value = value.into();
            match group.fields.iter_mut().find(|field| field.name == name) {
                Some(existing) => existing.value = value,
                None => group.fields.push(Field { name, value }),
            }
        }
        group
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name.as_str() == name)
            .map(|field| field.value.as_str())
    }

    /// Replaces the value of an existing field; returns `false` for unknown names.
    fn set(&mut self, name: &str, value: String) -> bool {
        match self
            .fields
            .iter_mut()
            .find(|field| field.name.as_str() == name)
        {
            Some(field) => {
                field.value = value;
                true
            }
            None => false,
        }
    }

    fn clear_values(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Name to value mapping as posted to the backend.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|field| (field.name.as_str().to_string(), field.value.clone()))
            .collect()
    }
}

/// User actions offered by a record's control strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordAction {
    Create,
    Edit,
    Delete,
    Save,
    Cancel,
}

impl Display for RecordAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordAction::Create => "create",
            RecordAction::Edit => "edit",
            RecordAction::Delete => "delete",
            RecordAction::Save => "save",
            RecordAction::Cancel => "cancel",
        };
        f.write_str(name)
    }
}

/// Visibility of each action control of a record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ActionControls {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
    pub save: bool,
    pub cancel: bool,
}

impl ActionControls {
    pub fn is_visible(&self, action: RecordAction) -> bool {
        match action {
            RecordAction::Create => self.create,
            RecordAction::Edit => self.edit,
            RecordAction::Delete => self.delete,
            RecordAction::Save => self.save,
            RecordAction::Cancel => self.cancel,
        }
    }

    /// Visible actions in control-strip order.
    pub fn visible(&self) -> Vec<RecordAction> {
        [
            RecordAction::Create,
            RecordAction::Edit,
            RecordAction::Delete,
            RecordAction::Save,
            RecordAction::Cancel,
        ]
        .into_iter()
        .filter(|action| self.is_visible(*action))
        .collect()
    }
}

/// Mode of a record; the edit session only exists while editing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RecordMode {
    #[default]
    Viewing,
    Editing(EditSession),
}

/// Errors raised when an action is not valid for the record's current state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileTypeError {
    #[error("{action} is not available for {key}")]
    ActionUnavailable {
        key: ProfileTypeKey,
        action: RecordAction,
    },
    #[error("fields of {0} are read-only until editing starts")]
    FieldDisabled(ProfileTypeKey),
    #[error("{key} has no {group:?} field named {name}")]
    UnknownField {
        key: ProfileTypeKey,
        group: FieldGroupKind,
        name: String,
    },
}

/// A profile type record as bound to the configuration page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileType {
    key: ProfileTypeKey,
    standard: FieldGroup,
    extended: FieldGroup,
    exists: bool,
    mode: RecordMode,
}

impl ProfileType {
    /// Creates a record in viewing mode.
    ///
    /// `exists` tells whether the backend already holds details for this
    /// profile and type; it decides between the `create` and `edit`/`delete`
    /// controls.
    #[must_use]
    pub fn new(key: ProfileTypeKey, standard: FieldGroup, extended: FieldGroup, exists: bool) -> Self {
        Self {
            key,
            standard,
            extended,
            exists,
            mode: RecordMode::Viewing,
        }
    }

    pub fn key(&self) -> ProfileTypeKey {
        self.key
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn mode(&self) -> &RecordMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, RecordMode::Editing(_))
    }

    pub fn session(&self) -> Option<&EditSession> {
        match &self.mode {
            RecordMode::Editing(session) => Some(session),
            RecordMode::Viewing => None,
        }
    }

    /// Inputs are writable only while editing.
    pub fn fields_enabled(&self) -> bool {
        self.is_editing()
    }

    pub fn controls(&self) -> ActionControls {
        match (&self.mode, self.exists) {
            (RecordMode::Editing(_), _) => ActionControls {
                save: true,
                cancel: true,
                ..ActionControls::default()
            },
            (RecordMode::Viewing, true) => ActionControls {
                edit: true,
                delete: true,
                ..ActionControls::default()
            },
            (RecordMode::Viewing, false) => ActionControls {
                create: true,
                ..ActionControls::default()
            },
        }
    }

    pub fn group(&self, kind: FieldGroupKind) -> &FieldGroup {
        match kind {
            FieldGroupKind::Standard => &self.standard,
            FieldGroupKind::Extended => &self.extended,
        }
    }

    pub fn standard(&self) -> &FieldGroup {
        &self.standard
    }

    pub fn extended(&self) -> &FieldGroup {
        &self.extended
    }

    pub fn field(&self, kind: FieldGroupKind, name: &str) -> Option<&str> {
        self.group(kind).get(name)
    }

    fn unavailable(&self, action: RecordAction) -> ProfileTypeError {
        ProfileTypeError::ActionUnavailable {
            key: self.key,
            action,
        }
    }

    /// Moves the record into editing mode, snapshotting every field.
    pub fn enter_edit(&mut self, via: EntryAction) -> Result<(), ProfileTypeError> {
        let action = match via {
            EntryAction::Create => RecordAction::Create,
            EntryAction::Edit => RecordAction::Edit,
        };
        if !self.controls().is_visible(action) {
            return Err(self.unavailable(action));
        }

        let snapshot = FieldSnapshot {
            standard: self.standard.clone(),
            extended: self.extended.clone(),
        };
        self.mode = RecordMode::Editing(EditSession::new(via, snapshot));
        Ok(())
    }

    /// Updates one input of a record in editing mode.
    pub fn set_field(
        &mut self,
        kind: FieldGroupKind,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ProfileTypeError> {
        if !self.fields_enabled() {
            return Err(ProfileTypeError::FieldDisabled(self.key));
        }

        let group = match kind {
            FieldGroupKind::Standard => &mut self.standard,
            FieldGroupKind::Extended => &mut self.extended,
        };
        if group.set(name, value.into()) {
            Ok(())
        } else {
            Err(ProfileTypeError::UnknownField {
                key: self.key,
                group: kind,
                name: name.to_string(),
            })
        }
    }

    /// Restores the snapshot and returns to the controls shown before editing.
    pub fn cancel_edit(&mut self) -> Result<EntryAction, ProfileTypeError> {
        match std::mem::take(&mut self.mode) {
            RecordMode::Editing(session) => {
                let via = session.entered_via();
                let snapshot = session.into_snapshot();
                self.standard = snapshot.standard;
                self.extended = snapshot.extended;
                self.exists = via == EntryAction::Edit;
                Ok(via)
            }
            RecordMode::Viewing => Err(self.unavailable(RecordAction::Cancel)),
        }
    }

    /// Ensures the record can be saved right now.
    pub fn ensure_can_save(&self) -> Result<(), ProfileTypeError> {
        if self.is_editing() {
            Ok(())
        } else {
            Err(self.unavailable(RecordAction::Save))
        }
    }

    /// Ensures the record can be deleted right now.
    pub fn ensure_can_delete(&self) -> Result<(), ProfileTypeError> {
        if self.controls().delete {
            Ok(())
        } else {
            Err(self.unavailable(RecordAction::Delete))
        }
    }

    /// Accepts the current values as persisted; the edit session is dropped.
    pub fn commit_saved(&mut self) {
        self.mode = RecordMode::Viewing;
        self.exists = true;
    }

    /// Clears every value after the backend removed the record.
    pub fn commit_deleted(&mut self) {
        self.standard.clear_values();
        self.extended.clear_values();
        self.mode = RecordMode::Viewing;
        self.exists = false;
    }
}
