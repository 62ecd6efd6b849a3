//! Wall-clock timing of rasterization passes.

use std::time::{Duration, Instant};

/// Measure a closure with a monotonic clock.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Holds the duration of the most recent rasterization pass.
///
/// The measured value is returned untouched. A pass that was not drawn
/// (incomplete parameters) must call [`Instrumentation::clear`] so that the
/// previous duration is not shown for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Instrumentation {
    elapsed: Option<Duration>,
}

impl Instrumentation {
    /// Create with no recorded duration.
    #[must_use]
    pub const fn new() -> Self {
        Self { elapsed: None }
    }

    /// Run one pass and record how long it took.
    pub fn measure<T>(&mut self, pass: impl FnOnce() -> T) -> T {
        let (value, elapsed) = timed(pass);
        self.elapsed = Some(elapsed);
        tracing::debug!(elapsed_us = elapsed.as_micros() as u64, "rasterization pass measured");
        value
    }

    /// Forget the recorded duration.
    pub fn clear(&mut self) {
        self.elapsed = None;
    }

    /// Duration of the last measured pass, if the last pass drew anything.
    #[must_use]
    pub const fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// [`Self::elapsed`] in fractional milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> Option<f64> {
        self.elapsed.map(|d| d.as_secs_f64() * 1000.0)
    }

    /// Text for a read-only display field: milliseconds with two decimals,
    /// or empty when nothing was drawn.
    #[must_use]
    pub fn display(&self) -> String {
        self.elapsed_ms().map(|ms| format!("{ms:.2}")).unwrap_or_default()
    }
}
