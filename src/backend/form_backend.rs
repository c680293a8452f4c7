use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::backend::errors::{BackendError, BackendResult};
use crate::backend::{
    ConnectionTester, FormTransport, ProfileDetailWriter, ProfileTypeReader, ProfileTypeWriter,
};
use crate::dto::envelope::{Ack, CopyReply, Envelope, TypeExistsReply};
use crate::forms::connection::ConnectionTestForm;
use crate::forms::profile_detail::{ProfileDetailDeleteForm, ProfileDetailSaveForm};
use crate::forms::profile_type::{ProfileTypeCheckForm, ProfileTypeCopyForm};
use crate::forms::{FormError, encode};

/// Backend talking urlencoded forms in and JSON envelopes out.
#[derive(Debug, Clone)]
pub struct FormBackend<T> {
    transport: T,
}

impl<T: FormTransport> FormBackend<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn call<F, R>(&self, form: &F) -> BackendResult<R>
    where
        F: Serialize + Validate,
        R: DeserializeOwned,
    {
        form.validate().map_err(FormError::from)?;
        let body = encode(form)?;
        log::debug!("Posting form: {body}");

        let response = self.transport.post_form(&body)?;
        let reply = Envelope::parse(&response)
            .and_then(Envelope::into_reply::<R>)
            .map_err(BackendError::from)?;
        Ok(reply)
    }
}

impl<T: FormTransport> ConnectionTester for FormBackend<T> {
    fn test_connection(&self, form: &ConnectionTestForm) -> BackendResult<()> {
        self.call::<_, Ack>(form).map(|_| ())
    }
}

impl<T: FormTransport> ProfileDetailWriter for FormBackend<T> {
    fn save_profile_detail(&self, form: &ProfileDetailSaveForm) -> BackendResult<()> {
        self.call::<_, Ack>(form).map(|_| ())
    }

    fn delete_profile_detail(&self, form: &ProfileDetailDeleteForm) -> BackendResult<()> {
        self.call::<_, Ack>(form).map(|_| ())
    }
}

impl<T: FormTransport> ProfileTypeReader for FormBackend<T> {
    fn check_profile_type(&self, form: &ProfileTypeCheckForm) -> BackendResult<TypeExistsReply> {
        self.call(form)
    }
}

impl<T: FormTransport> ProfileTypeWriter for FormBackend<T> {
    fn copy_profile_type(&self, form: &ProfileTypeCopyForm) -> BackendResult<CopyReply> {
        self.call(form)
    }
}
