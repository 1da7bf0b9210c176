//! Main application orchestration.
//!
//! One run: connect and subscribe, print the table header, drive the poll
//! loop to termination, close the connection, print the exit summary.

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::output::CsvWriter;
use crate::poll_loop::{PollLoop, Termination};
use std::io::Write;
use tickema_core::RunStatistics;
use tickema_telemetry::{log_summary, write_summary};
use tickema_ws::WsTransport;
use tracing::{error, info, warn};

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub termination: Termination,
    pub stats: RunStatistics,
}

impl RunReport {
    /// A run fails iff at least one critical error was recorded.
    pub fn is_failure(&self) -> bool {
        self.stats.has_critical_errors()
    }
}

/// Main application.
pub struct Application {
    config: AppConfig,
}

impl Application {
    /// Create a new application from validated configuration.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Collect up to `budget` samples of `symbol`, writing the table and
    /// the exit summary to `out`.
    ///
    /// Feed and transport failures are reported through the returned
    /// statistics. `Err` means `out` could not be written.
    pub async fn run<W: Write>(
        &self,
        symbol: &str,
        budget: u64,
        out: &mut W,
    ) -> AppResult<RunReport> {
        info!(
            symbol,
            budget,
            url = %self.config.ws_url,
            window_us = self.config.smoothing.window_us,
            "Starting run"
        );

        let connection = self.config.connection_config();
        let mut transport = match WsTransport::connect_and_subscribe(&connection, symbol).await {
            Ok(transport) => transport,
            Err(e) => {
                error!(error = %e, symbol, "Failed to subscribe");
                let mut stats = RunStatistics::new();
                stats.record_critical_error();
                return Self::finish(out, Termination::FatalError, stats);
            }
        };
        info!(symbol, "Subscribed");

        let mut poll_loop = PollLoop::new(budget, self.config.smoothing.window_us);

        let mut csv = CsvWriter::new(&mut *out);
        let outcome = match csv.write_header() {
            Ok(()) => match poll_loop.run(&mut transport, &mut csv).await {
                Ok(termination) => csv.flush().map(|()| termination),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };
        let rows_written = csv.rows_written();

        // Teardown runs whatever the outcome
        if let Err(e) = transport.close().await {
            warn!(error = %e, "Close handshake failed");
        }

        let termination = outcome?;
        info!(?termination, rows_written, "Poll loop ended");

        Self::finish(out, termination, poll_loop.stats())
    }

    fn finish<W: Write>(
        out: &mut W,
        termination: Termination,
        stats: RunStatistics,
    ) -> AppResult<RunReport> {
        write_summary(out, &stats)?;
        log_summary(&stats);
        Ok(RunReport { termination, stats })
    }
}
