//! Exponential moving average over irregularly spaced samples.
//!
//! Uses the first-order approximation of continuous-time smoothing:
//!
//! `next = prev + (dt / T) * (value - prev)`
//!
//! where `T` is the smoothing window. `dt / T` approximates `1 - e^(-dt/T)`
//! for `dt << T`; it is capped at 1 so a gap longer than the window lands on
//! the new value instead of overshooting it.

/// Smoothing window: 5 seconds.
pub const DEFAULT_WINDOW_US: u64 = 5_000_000;

/// Accumulator for one smoothed signal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EmaState {
    /// Current average. `None` until the first sample.
    value: Option<f64>,
}

impl EmaState {
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_initialized(&self) -> bool {
        self.value.is_some()
    }
}

/// One smoothing step.
///
/// With no previous value the average is seeded with `new_value`.
pub fn next_ema(prev: Option<f64>, new_value: f64, dt_us: u64, window_us: u64) -> f64 {
    match prev {
        None => new_value,
        Some(prev) => {
            let weight = (dt_us as f64 / window_us as f64).min(1.0);
            prev + weight * (new_value - prev)
        }
    }
}

/// Moving average of one signal with a window fixed at construction.
#[derive(Debug, Clone)]
pub struct EmaSmoother {
    window_us: u64,
    state: EmaState,
}

impl EmaSmoother {
    pub fn new(window_us: u64) -> Self {
        assert!(window_us > 0, "EMA window must be > 0");
        Self {
            window_us,
            state: EmaState::default(),
        }
    }

    /// Fold in a sample observed `dt_us` after the previous one.
    ///
    /// `dt_us` must be positive. Zero-delta samples are the caller's to drop.
    pub fn advance(&mut self, new_value: f64, dt_us: u64) -> f64 {
        debug_assert!(dt_us > 0, "zero time delta must be filtered before smoothing");
        let next = next_ema(self.state.value, new_value, dt_us, self.window_us);
        self.state.value = Some(next);
        next
    }

    pub fn value(&self) -> Option<f64> {
        self.state.value()
    }

    pub fn state(&self) -> EmaState {
        self.state
    }

    pub fn window_us(&self) -> u64 {
        self.window_us
    }
}

impl Default for EmaSmoother {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_US)
    }
}
