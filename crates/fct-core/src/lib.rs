//! Shared types for the FCT harness.
//!
//! This crate carries everything the instrument, I/O and logging layers have
//! in common: the workspace error type, the status token returned by digital
//! I/O operations, the RGB measurement triple, electrical default constants,
//! and the pass/fail threshold evaluator used on every measured value.

pub mod checks;
pub mod constants;
pub mod error;
pub mod status;
pub mod types;

pub use checks::{check_scalar, check_scalar_logged, check_vector, check_vector_logged, report_line};
pub use error::{Error, Result};
pub use status::Status;
pub use types::Rgb;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
