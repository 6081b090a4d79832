//! EventCatalog library crate.
//!
//! Re-exports the core modules so that integration tests can access them.
//! The binary entry point is in `main.rs`.

pub mod backend;
pub mod core;
pub mod export;
pub mod util;
