//! Shared utilities: constants, error types and date/time helpers.

pub mod constants;
pub mod error;
pub mod time;
