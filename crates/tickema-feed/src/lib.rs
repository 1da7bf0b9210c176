//! Ticker ingestion stages for tickema.
//!
//! Each admitted frame passes through, in order:
//! - `parser`: raw text frame to `Sample` (or a reject)
//! - `timestamp`: feed time string to epoch microseconds
//! - `gate`: drops samples whose sequence went backwards
//! - `ema`: time-weighted moving averages over irregular samples

pub mod ema;
pub mod error;
pub mod gate;
pub mod parser;
pub mod timestamp;

pub use ema::{next_ema, EmaSmoother, EmaState, DEFAULT_WINDOW_US};
pub use error::{FeedError, FeedResult};
pub use gate::{admit, Admission};
pub use parser::{FrameDecoder, TICKER_TYPE};
pub use timestamp::{parse_epoch_us, TIMESTAMP_PARSE_FAILED};
