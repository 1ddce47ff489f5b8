//! Workplace simulation library
//!
//! Re-exports modules for use by the binary and tests.

pub mod error;
pub mod workplace;

pub use error::{ConfigError, Result, WorkplaceError};
