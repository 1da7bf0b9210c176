//! Core domain types for tickema.
//!
//! This crate provides the values that flow through the ingestion pipeline:
//! - `Sample`: One decoded ticker update
//! - `StreamCursor`: Ordering state owned by the poll loop
//! - `RunStatistics`: Counters reported at shutdown
//! - `OutputRow`: One emitted row of the smoothed table

pub mod error;
pub mod stats;
pub mod stream;
pub mod types;

pub use error::{CoreError, Result};
pub use stats::RunStatistics;
pub use stream::StreamCursor;
pub use types::{OutputRow, Sample};
