//! CLI command handlers

pub mod commands;

pub use commands::{load, parse, sample, serve, submit};
