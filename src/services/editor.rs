//! Edit-state controller for the profile type records of the details page.

use std::collections::HashMap;

use crate::backend::ProfileDetailWriter;
use crate::backend::errors::BackendResult;
use crate::domain::edit_session::EntryAction;
use crate::domain::profile_type::{ActionControls, FieldGroupKind, ProfileType, ProfileTypeKey};
use crate::domain::types::RequestToken;
use crate::forms::profile_detail::{ProfileDetailDeleteForm, ProfileDetailSaveForm};
use crate::services::prompt::UserPrompt;
use crate::services::{
    Completion, DELETE_CONFIRMATION, DELETE_SUCCESS_MESSAGE, SAVE_SUCCESS_MESSAGE, ServiceError,
    ServiceResult,
};

/// A request issued for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTicket<F> {
    pub key: ProfileTypeKey,
    pub token: RequestToken,
    pub form: F,
}

pub type SaveTicket = RecordTicket<ProfileDetailSaveForm>;
pub type DeleteTicket = RecordTicket<ProfileDetailDeleteForm>;

#[derive(Debug)]
struct RecordSlot {
    record: ProfileType,
    latest: RequestToken,
}

impl RecordSlot {
    fn issue(&mut self) -> RequestToken {
        self.latest = self.latest.next();
        self.latest
    }

    fn is_current(&self, token: RequestToken) -> bool {
        self.latest == token
    }
}

/// Holds one independent slot per bound record.
#[derive(Debug, Default)]
pub struct ProfileTypeEditor {
    slots: HashMap<ProfileTypeKey, RecordSlot>,
}

impl ProfileTypeEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a record rendered on the page, returning the one it replaces.
    ///
    /// Requests still in flight for a replaced record are ignored on
    /// completion.
    pub fn bind(&mut self, record: ProfileType) -> Option<ProfileType> {
        let key = record.key();
        let latest = self
            .slots
            .get(&key)
            .map(|slot| slot.latest.next())
            .unwrap_or_default();
        self.slots
            .insert(key, RecordSlot { record, latest })
            .map(|slot| slot.record)
    }

    pub fn record(&self, key: ProfileTypeKey) -> Option<&ProfileType> {
        self.slots.get(&key).map(|slot| &slot.record)
    }

    pub fn records(&self) -> impl Iterator<Item = &ProfileType> {
        self.slots.values().map(|slot| &slot.record)
    }

    fn slot(&self, key: ProfileTypeKey) -> ServiceResult<&RecordSlot> {
        self.slots.get(&key).ok_or(ServiceError::UnknownRecord(key))
    }

    fn slot_mut(&mut self, key: ProfileTypeKey) -> ServiceResult<&mut RecordSlot> {
        self.slots
            .get_mut(&key)
            .ok_or(ServiceError::UnknownRecord(key))
    }

    pub fn fields_enabled(&self, key: ProfileTypeKey) -> ServiceResult<bool> {
        Ok(self.slot(key)?.record.fields_enabled())
    }

    pub fn controls(&self, key: ProfileTypeKey) -> ServiceResult<ActionControls> {
        Ok(self.slot(key)?.record.controls())
    }

    /// Starts filling in details for a type the profile does not have yet.
    pub fn begin_create(&mut self, key: ProfileTypeKey) -> ServiceResult<()> {
        let slot = self.slot_mut(key)?;
        slot.record.enter_edit(EntryAction::Create)?;
        slot.issue();
        log::info!("Creating details for {key}");
        Ok(())
    }

    /// Starts editing the stored details of a type.
    pub fn begin_edit(&mut self, key: ProfileTypeKey) -> ServiceResult<()> {
        let slot = self.slot_mut(key)?;
        slot.record.enter_edit(EntryAction::Edit)?;
        slot.issue();
        log::info!("Editing details for {key}");
        Ok(())
    }

    pub fn set_field(
        &mut self,
        key: ProfileTypeKey,
        group: FieldGroupKind,
        name: &str,
        value: impl Into<String>,
    ) -> ServiceResult<()> {
        self.slot_mut(key)?.record.set_field(group, name, value)?;
        Ok(())
    }

    /// Drops the edit session, restoring every field to its pre-edit value.
    ///
    /// A save still in flight for the session is ignored on completion.
    pub fn cancel(&mut self, key: ProfileTypeKey) -> ServiceResult<()> {
        let slot = self.slot_mut(key)?;
        let via = slot.record.cancel_edit()?;
        slot.issue();
        log::info!("Cancelled {via:?} of {key}");
        Ok(())
    }

    /// Gathers both attribute groups into a save request.
    ///
    /// The record stays in editing mode until the outcome is known.
    pub fn prepare_save(&mut self, key: ProfileTypeKey) -> ServiceResult<SaveTicket> {
        let slot = self.slot_mut(key)?;
        slot.record.ensure_can_save()?;
        let form = ProfileDetailSaveForm::try_from(&slot.record)?;
        let token = slot.issue();
        log::info!("Saving details for {key} ({token})");

        Ok(RecordTicket { key, token, form })
    }

    /// Applies the outcome of a save request.
    ///
    /// On success the record returns to viewing with `edit` and `delete`
    /// available. On failure it stays in editing mode with the user's values
    /// and the session intact, and the error is shown.
    pub fn complete_save<P>(
        &mut self,
        ticket: &SaveTicket,
        outcome: BackendResult<()>,
        prompt: &P,
    ) -> ServiceResult<Completion>
    where
        P: UserPrompt + ?Sized,
    {
        let slot = self.slot_mut(ticket.key)?;
        if !slot.is_current(ticket.token) {
            log::debug!("Ignoring superseded save {} of {}", ticket.token, ticket.key);
            return Ok(Completion::Stale);
        }

        match outcome {
            Ok(()) => {
                slot.record.commit_saved();
                log::info!("Saved details for {}", ticket.key);
                prompt.alert(SAVE_SUCCESS_MESSAGE);
                Ok(Completion::Applied)
            }
            Err(err) => {
                log::warn!("Failed to save details for {}: {err}", ticket.key);
                let message = err.user_message();
                prompt.alert(&message);
                Ok(Completion::Rejected(message))
            }
        }
    }

    /// Asks for confirmation and builds a delete request.
    ///
    /// Returns `None` without touching anything when the user declines.
    pub fn prepare_delete<P>(
        &mut self,
        key: ProfileTypeKey,
        prompt: &P,
    ) -> ServiceResult<Option<DeleteTicket>>
    where
        P: UserPrompt + ?Sized,
    {
        self.slot(key)?.record.ensure_can_delete()?;

        if !prompt.confirm(DELETE_CONFIRMATION) {
            log::info!("Delete of {key} declined");
            return Ok(None);
        }

        let token = self.slot_mut(key)?.issue();
        log::info!("Deleting details for {key} ({token})");
        Ok(Some(RecordTicket {
            key,
            token,
            form: ProfileDetailDeleteForm::from(key),
        }))
    }

    /// Applies the outcome of a delete request.
    ///
    /// On success every field is cleared and only `create` remains; on
    /// failure nothing changes and the error is shown.
    pub fn complete_delete<P>(
        &mut self,
        ticket: &DeleteTicket,
        outcome: BackendResult<()>,
        prompt: &P,
    ) -> ServiceResult<Completion>
    where
        P: UserPrompt + ?Sized,
    {
        let slot = self.slot_mut(ticket.key)?;
        if !slot.is_current(ticket.token) {
            log::debug!("Ignoring superseded delete {} of {}", ticket.token, ticket.key);
            return Ok(Completion::Stale);
        }

        match outcome {
            Ok(()) => {
                slot.record.commit_deleted();
                log::info!("Deleted details for {}", ticket.key);
                prompt.alert(DELETE_SUCCESS_MESSAGE);
                Ok(Completion::Applied)
            }
            Err(err) => {
                log::warn!("Failed to delete details for {}: {err}", ticket.key);
                let message = err.user_message();
                prompt.alert(&message);
                Ok(Completion::Rejected(message))
            }
        }
    }
}

/// Saves a record in editing mode and applies the outcome.
pub fn save_profile_type<B, P>(
    editor: &mut ProfileTypeEditor,
    key: ProfileTypeKey,
    backend: &B,
    prompt: &P,
) -> ServiceResult<Completion>
where
    B: ProfileDetailWriter + ?Sized,
    P: UserPrompt + ?Sized,
{
    let ticket = editor.prepare_save(key).map_err(|err| {
        log::error!("Failed to prepare save: {err}");
        err
    })?;
    let outcome = backend.save_profile_detail(&ticket.form);
    editor.complete_save(&ticket, outcome, prompt)
}

/// Deletes a stored record after the user confirms.
pub fn delete_profile_type<B, P>(
    editor: &mut ProfileTypeEditor,
    key: ProfileTypeKey,
    backend: &B,
    prompt: &P,
) -> ServiceResult<Completion>
where
    B: ProfileDetailWriter + ?Sized,
    P: UserPrompt + ?Sized,
{
    let ticket = editor.prepare_delete(key, prompt).map_err(|err| {
        log::error!("Failed to prepare delete: {err}");
        err
    })?;
    let Some(ticket) = ticket else {
        return Ok(Completion::Declined);
    };
    let outcome = backend.delete_profile_detail(&ticket.form);
    editor.complete_delete(&ticket, outcome, prompt)
}
