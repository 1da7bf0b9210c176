//! tickema: single-ticker feed collector.
//!
//! Subscribes to one product on the ticker feed, smooths mid and traded
//! prices with a time-weighted EMA, and prints one CSV row per handled
//! sample until the sample budget is reached or the transport fails.

pub mod app;
pub mod config;
pub mod error;
pub mod output;
pub mod poll_loop;

pub use app::{Application, RunReport};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use output::CsvWriter;
pub use poll_loop::{PollLoop, Step, Termination};
