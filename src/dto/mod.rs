//! DTO modules bridging the backend's JSON replies and the services.

pub mod envelope;
