//! Domain models for the version lookup endpoint.
//!
//! These types are shared across all modules: store, handler, and the API binaries.

pub mod record;
pub mod request;
pub mod response;
