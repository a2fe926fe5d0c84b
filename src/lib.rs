/// Latest Version — Shared Library
///
/// This crate contains the lookup logic, backing stores, models and
/// configuration used by the serverless handlers.
///
/// Each serverless function in `api/` imports from this library
/// to keep handlers thin and logic reusable.

pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod models;
pub mod store;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
