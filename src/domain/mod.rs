//! Domain records and value objects of the profile type administration page.

pub mod copy_request;
pub mod dsn;
pub mod edit_session;
pub mod profile_grid;
pub mod profile_type;
pub mod status;
pub mod types;
