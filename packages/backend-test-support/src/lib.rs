//! Backend test support utilities
//!
//! Shared harness for unit and integration tests: an in-memory SQLite
//! database with the full schema applied, and unified logging
//! initialization.

pub mod db;
pub mod logging;

pub use db::{sqlite_mem, TestDbError};
