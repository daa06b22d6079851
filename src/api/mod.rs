//! Varsheet API Server module
//!
//! Provides the HTTP REST API surface.
//! Run with `varsheet serve`.

pub mod handlers;
pub mod server;

pub use server::run_api_server;
