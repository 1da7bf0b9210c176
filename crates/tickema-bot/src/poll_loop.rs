//! Busy-poll ingestion loop.
//!
//! Each iteration makes one non-blocking receive attempt and pushes the
//! frame, if any, through decode, the sequence gate and both smoothers.
//! The loop never waits on the transport; an empty receive yields to the
//! runtime and tries again. There is no backoff: the spin burns CPU while
//! the feed is idle, a known inefficiency for a short bounded run and not a
//! correctness issue.
//!
//! Ends when the handled count reaches the budget or on the first fatal
//! error: a transport failure or a ticker with an unreadable timestamp.

use crate::output::CsvWriter;
use std::io::{self, Write};
use tickema_core::{OutputRow, RunStatistics, Sample, StreamCursor};
use tickema_feed::{admit, EmaSmoother, FrameDecoder};
use tickema_ws::{FrameSource, RecvStatus, MAX_FRAME_BYTES};
use tracing::{debug, error, warn};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    BudgetReached,
    FatalError,
}

/// Result of a single iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Nothing usable this time: empty receive, non-ticker frame or a
    /// rejected ticker.
    Retry,
    DroppedOutOfOrder,
    DroppedZeroDelta,
    Handled(OutputRow),
    Done(Termination),
}

/// Owns every piece of per-run state.
pub struct PollLoop {
    budget: u64,
    /// Receive buffer, reused for every frame.
    buf: Box<[u8; MAX_FRAME_BYTES]>,
    decoder: FrameDecoder,
    cursor: StreamCursor,
    mid_ema: EmaSmoother,
    price_ema: EmaSmoother,
    stats: RunStatistics,
    termination: Option<Termination>,
}

impl PollLoop {
    /// Loop that stops after `budget` handled samples.
    ///
    /// # Panics
    /// Panics if `window_us` is zero.
    pub fn new(budget: u64, window_us: u64) -> Self {
        Self {
            budget,
            buf: Box::new([0u8; MAX_FRAME_BYTES]),
            decoder: FrameDecoder::new(),
            cursor: StreamCursor::new(),
            mid_ema: EmaSmoother::new(window_us),
            price_ema: EmaSmoother::new(window_us),
            stats: RunStatistics::new(),
            termination: None,
        }
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn stats(&self) -> RunStatistics {
        self.stats
    }

    pub fn cursor(&self) -> StreamCursor {
        self.cursor
    }

    pub fn mid_ema(&self) -> &EmaSmoother {
        &self.mid_ema
    }

    pub fn price_ema(&self) -> &EmaSmoother {
        &self.price_ema
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Run one iteration against `source`.
    ///
    /// Once a `Done` step has been returned every later call returns the
    /// same `Done` without touching the source.
    pub fn step<S: FrameSource>(&mut self, source: &mut S) -> Step {
        if let Some(termination) = self.termination {
            return Step::Done(termination);
        }
        if self.stats.handled >= self.budget {
            return self.finish(Termination::BudgetReached);
        }

        let len = match source.try_receive(&mut self.buf[..]) {
            Ok(RecvStatus::Ready(len)) => len,
            Ok(RecvStatus::WouldBlock) => {
                self.stats.record_retry();
                return Step::Retry;
            }
            Err(e) => {
                error!(error = %e, "Transport failure, stopping");
                self.stats.record_critical_error();
                return self.finish(Termination::FatalError);
            }
        };

        let sample = match self.decoder.decode(&self.buf[..len]) {
            Ok(Some(sample)) => sample,
            Ok(None) => {
                self.stats.record_retry();
                return Step::Retry;
            }
            Err(e) if e.is_fatal() => {
                error!(error = %e, "Unreadable ticker timestamp, stopping");
                self.stats.record_critical_error();
                return self.finish(Termination::FatalError);
            }
            Err(e) => {
                debug!(error = %e, "Rejected frame");
                self.stats.record_retry();
                return Step::Retry;
            }
        };

        self.process(sample)
    }

    /// Gate and smooth one decoded sample.
    ///
    /// # Panics
    /// Panics if an admitted sample is older than the last handled one.
    /// The feed guarantees time never runs backwards within a run.
    pub fn process(&mut self, sample: Sample) -> Step {
        if !admit(&sample, &mut self.cursor).is_accepted() {
            warn!(
                sequence = sample.sequence,
                last_sequence = self.cursor.last_sequence,
                "Out-of-order sample dropped"
            );
            self.stats.record_out_of_order();
            return Step::DroppedOutOfOrder;
        }

        let last_ts = self.cursor.last_timestamp_us;
        assert!(
            sample.timestamp_us >= last_ts,
            "negative time delta: sequence {} at {}us precedes {}us",
            sample.sequence,
            sample.timestamp_us,
            last_ts
        );
        let dt_us = sample.timestamp_us - last_ts;

        if dt_us == 0 {
            debug!(sequence = sample.sequence, "Zero time delta, sample dropped");
            self.stats.record_zero_delta();
            return Step::DroppedZeroDelta;
        }

        let mid_ema = self.mid_ema.advance(sample.mid_price(), dt_us);
        let price_ema = self.price_ema.advance(sample.price, dt_us);
        self.cursor.last_timestamp_us = sample.timestamp_us;
        self.stats.record_handled();

        Step::Handled(OutputRow::new(&sample, mid_ema, price_ema))
    }

    /// Drive the loop until it terminates, writing each handled row.
    ///
    /// Only a failed write to `out` surfaces as `Err`; feed and transport
    /// failures end the loop with [`Termination::FatalError`].
    pub async fn run<S, W>(
        &mut self,
        source: &mut S,
        out: &mut CsvWriter<W>,
    ) -> io::Result<Termination>
    where
        S: FrameSource,
        W: Write,
    {
        loop {
            match self.step(source) {
                Step::Retry => tokio::task::yield_now().await,
                Step::Handled(row) => out.write_row(&row)?,
                Step::DroppedOutOfOrder | Step::DroppedZeroDelta => {}
                Step::Done(termination) => return Ok(termination),
            }
        }
    }

    fn finish(&mut self, termination: Termination) -> Step {
        self.termination = Some(termination);
        Step::Done(termination)
    }
}
