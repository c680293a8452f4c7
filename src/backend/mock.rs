//! Mock backend implementations for isolating services in tests.

use mockall::mock;

use crate::backend::errors::BackendResult;
use crate::backend::{ConnectionTester, ProfileDetailWriter, ProfileTypeReader, ProfileTypeWriter};
use crate::dto::envelope::{CopyReply, TypeExistsReply};
use crate::forms::connection::ConnectionTestForm;
use crate::forms::profile_detail::{ProfileDetailDeleteForm, ProfileDetailSaveForm};
use crate::forms::profile_type::{ProfileTypeCheckForm, ProfileTypeCopyForm};

mock! {
    pub Backend {}

    impl ConnectionTester for Backend {
        fn test_connection(&self, form: &ConnectionTestForm) -> BackendResult<()>;
    }

    impl ProfileDetailWriter for Backend {
        fn save_profile_detail(&self, form: &ProfileDetailSaveForm) -> BackendResult<()>;
        fn delete_profile_detail(&self, form: &ProfileDetailDeleteForm) -> BackendResult<()>;
    }

    impl ProfileTypeReader for Backend {
        fn check_profile_type(&self, form: &ProfileTypeCheckForm) -> BackendResult<TypeExistsReply>;
    }

    impl ProfileTypeWriter for Backend {
        fn copy_profile_type(&self, form: &ProfileTypeCopyForm) -> BackendResult<CopyReply>;
    }
}
