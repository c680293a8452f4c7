//! Client-side controller for the DBMS profile type administration page.
//!
//! Records are edited through [`services::editor::ProfileTypeEditor`], driver
//! types are copied between profiles with
//! [`services::copy_workflow::TypeCopyWorkflow`] and the connection form is
//! tested with [`services::connection_test::ConnectionTestPanel`]. All remote
//! calls go through the traits in [`backend`].

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;

#[cfg(feature = "client")]
pub mod backend;
#[cfg(feature = "client")]
pub mod error_conversions;
#[cfg(feature = "client")]
pub mod forms;
#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "client")]
pub mod services;
