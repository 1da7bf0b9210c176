//! Structured logging and run reporting for tickema.
//!
//! - Logging goes to stderr (stdout carries the data table)
//! - JSON log lines when `RUST_ENV=production`, pretty output otherwise
//! - End-of-run summary of the poll loop counters

pub mod error;
pub mod logging;
pub mod summary;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
pub use summary::{log_summary, write_summary};
