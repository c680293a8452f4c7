//! Copy of a driver type into a profile: existence check, optional
//! overwrite confirmation, then the copy itself.

use crate::backend::errors::BackendResult;
use crate::backend::{ProfileTypeReader, ProfileTypeWriter};
use crate::domain::copy_request::{CopiedType, CopyRequest, CopySource};
use crate::domain::profile_grid::ProfileGrid;
use crate::domain::status::StatusIndicator;
use crate::domain::types::{DriverTypeId, RequestToken};
use crate::dto::envelope::{CopyReply, TypeExistsReply};
use crate::forms::profile_type::{ProfileTypeCheckForm, ProfileTypeCopyForm};
use crate::services::prompt::UserPrompt;
use crate::services::{
    COPY_SUCCESS_MESSAGE, OVERWRITE_CONFIRMATION, RequestTicket, ServiceError, ServiceResult,
};

pub type CheckTicket = RequestTicket<ProfileTypeCheckForm>;
pub type CopyTicket = RequestTicket<ProfileTypeCopyForm>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum CopyPhase {
    #[default]
    Ready,
    Checking(CopyRequest),
    Copying(CopyRequest),
}

/// How a copy attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(CopiedType),
    /// The target already existed and the user kept it.
    Declined,
    /// Either call failed; carries the message shown in the result cell.
    Failed(String),
    /// A newer attempt superseded this one.
    Stale,
}

/// Result of the existence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Proceed(CopyTicket),
    Stopped(CopyOutcome),
}

/// State of the copy dialog.
#[derive(Debug, Default)]
pub struct TypeCopyWorkflow {
    source: Option<CopySource>,
    phase: CopyPhase,
    indicator: StatusIndicator,
    latest: RequestToken,
}

impl TypeCopyWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(&self) -> Option<&CopySource> {
        self.source.as_ref()
    }

    /// The request currently travelling between the two phases, if any.
    pub fn pending(&self) -> Option<&CopyRequest> {
        match &self.phase {
            CopyPhase::Checking(request) | CopyPhase::Copying(request) => Some(request),
            CopyPhase::Ready => None,
        }
    }

    pub fn indicator(&self) -> &StatusIndicator {
        &self.indicator
    }

    fn supersede(&mut self) -> RequestToken {
        self.latest = self.latest.next();
        self.latest
    }

    /// Opens the dialog for `source`, returning the target preselected in the
    /// type selector.
    pub fn open(&mut self, source: CopySource) -> DriverTypeId {
        let preselected = source.type_id;
        log::info!("Copy dialog opened for {} type {}", source.db, source.type_id);
        self.source = Some(source);
        self.phase = CopyPhase::Ready;
        self.indicator = StatusIndicator::Idle;
        self.supersede();
        preselected
    }

    /// Closes the dialog; later completions of its requests are ignored.
    pub fn close(&mut self) {
        self.source = None;
        self.phase = CopyPhase::Ready;
        self.indicator = StatusIndicator::Idle;
        self.supersede();
    }

    /// Starts the existence check for copying the open source into `target`.
    pub fn begin(&mut self, target: DriverTypeId) -> ServiceResult<CheckTicket> {
        let source = self.source.clone().ok_or(ServiceError::CopyDialogClosed)?;
        let request = source.into_request(target);
        let form = ProfileTypeCheckForm::from(&request);
        let token = self.supersede();

        log::info!(
            "Checking whether type {} exists for {} ({token})",
            request.target_type_id,
            request.source_db
        );
        self.phase = CopyPhase::Checking(request);
        self.indicator = StatusIndicator::Loading;

        Ok(RequestTicket { token, form })
    }

    fn stop(&mut self, outcome: CopyOutcome) -> CopyOutcome {
        self.phase = CopyPhase::Ready;
        self.indicator = match &outcome {
            CopyOutcome::Failed(message) => StatusIndicator::Failure(message.clone()),
            CopyOutcome::Copied(_) => StatusIndicator::Success(COPY_SUCCESS_MESSAGE.to_string()),
            CopyOutcome::Declined | CopyOutcome::Stale => StatusIndicator::Idle,
        };
        outcome
    }

    /// Applies the existence check outcome.
    ///
    /// A missing target proceeds straight to the copy. An existing one needs
    /// the user's confirmation; declining clears the indicator and sends
    /// nothing.
    pub fn on_check_complete<P>(
        &mut self,
        ticket: &CheckTicket,
        outcome: BackendResult<TypeExistsReply>,
        prompt: &P,
    ) -> ServiceResult<CheckOutcome>
    where
        P: UserPrompt + ?Sized,
    {
        if ticket.token != self.latest {
            log::debug!("Ignoring superseded type check {}", ticket.token);
            return Ok(CheckOutcome::Stopped(CopyOutcome::Stale));
        }
        let CopyPhase::Checking(request) = std::mem::take(&mut self.phase) else {
            return Err(ServiceError::CopyPhase("checking"));
        };

        let reply = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                log::warn!("Type check failed: {err}");
                let outcome = CopyOutcome::Failed(err.user_message());
                return Ok(CheckOutcome::Stopped(self.stop(outcome)));
            }
        };

        if reply.exists && !prompt.confirm(OVERWRITE_CONFIRMATION) {
            log::info!("Overwrite of type {} declined", request.target_type_id);
            return Ok(CheckOutcome::Stopped(self.stop(CopyOutcome::Declined)));
        }

        let form = ProfileTypeCopyForm::from(&request);
        let token = self.supersede();
        log::info!(
            "Copying {} type {} into type {} ({token})",
            request.source_db,
            request.source_type_id,
            request.target_type_id
        );
        self.phase = CopyPhase::Copying(request);

        Ok(CheckOutcome::Proceed(RequestTicket { token, form }))
    }

    /// Applies the copy outcome. Only a success reports what changed; the
    /// caller refreshes the overview from it.
    pub fn on_copy_complete(
        &mut self,
        ticket: &CopyTicket,
        outcome: BackendResult<CopyReply>,
    ) -> ServiceResult<CopyOutcome> {
        if ticket.token != self.latest {
            log::debug!("Ignoring superseded copy {}", ticket.token);
            return Ok(CopyOutcome::Stale);
        }
        let CopyPhase::Copying(request) = std::mem::take(&mut self.phase) else {
            return Err(ServiceError::CopyPhase("copying"));
        };

        match outcome {
            Ok(reply) => {
                log::info!(
                    "Copied type {} into profile {}",
                    request.source_type_name,
                    reply.profile_uid
                );
                let copied = CopiedType {
                    profile: reply.profile_uid,
                    target_type_id: request.target_type_id,
                    type_name: request.source_type_name,
                };
                Ok(self.stop(CopyOutcome::Copied(copied)))
            }
            Err(err) => {
                log::warn!("Type copy failed: {err}");
                Ok(self.stop(CopyOutcome::Failed(err.user_message())))
            }
        }
    }
}

/// Runs the existence check and, when allowed, the copy of the open source
/// into `target`.
pub fn request_copy<B, P>(
    workflow: &mut TypeCopyWorkflow,
    target: DriverTypeId,
    backend: &B,
    prompt: &P,
) -> ServiceResult<CopyOutcome>
where
    B: ProfileTypeReader + ProfileTypeWriter + ?Sized,
    P: UserPrompt + ?Sized,
{
    let check = workflow.begin(target).map_err(|err| {
        log::error!("Failed to start copy: {err}");
        err
    })?;
    let exists = backend.check_profile_type(&check.form);

    let copy = match workflow.on_check_complete(&check, exists, prompt)? {
        CheckOutcome::Proceed(ticket) => ticket,
        CheckOutcome::Stopped(outcome) => return Ok(outcome),
    };
    let copied = backend.copy_profile_type(&copy.form);
    workflow.on_copy_complete(&copy, copied)
}

/// Runs the whole copy of the open source into `target` and, on success,
/// shows the copied type in the overview.
pub fn copy_type<B, P>(
    workflow: &mut TypeCopyWorkflow,
    target: DriverTypeId,
    backend: &B,
    prompt: &P,
    grid: &mut ProfileGrid,
) -> ServiceResult<CopyOutcome>
where
    B: ProfileTypeReader + ProfileTypeWriter + ?Sized,
    P: UserPrompt + ?Sized,
{
    let outcome = request_copy(workflow, target, backend, prompt)?;
    if let CopyOutcome::Copied(copied) = &outcome {
        if let Err(err) = grid.apply_copy(copied) {
            log::warn!("Copied type could not be shown in the overview: {err}");
        }
    }
    Ok(outcome)
}
