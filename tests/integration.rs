//! Integration tests for EventCatalog.
//!
//! These exercise the library crate end to end: the table view engine over
//! realistic rows, the JSON catalog store on a temporary file, and export.
//! Each file also builds as its own test target.

mod backend_crud;
mod constants_validation;
mod error_types;
mod export_validation;
mod time_utils;
mod view_engine;
