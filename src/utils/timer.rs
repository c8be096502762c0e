//! Stopwatch for scripts.

use std::time::{Duration, Instant};

use super::logging::Log;

/// Measures the total runtime since creation and the time since the last
/// checkpoint.
///
/// # Examples
///
/// ```
/// use pointfree::utils::Timer;
///
/// let mut timer = Timer::start();
/// let before = timer.delta();
/// timer.reset_delta();
/// assert!(timer.delta() <= timer.total());
/// assert!(before <= timer.total());
/// ```
#[derive(Debug, Clone)]
pub struct Timer {
    started: Instant,
    checkpoint: Instant,
    log: Log,
}

impl Timer {
    /// Starts a timer that reports through a default [`Log`].
    #[must_use]
    pub fn start() -> Self {
        Self::with_log(Log::default())
    }

    /// Starts a timer that reports through `log`.
    #[must_use]
    pub fn with_log(log: Log) -> Self {
        let now = Instant::now();
        Self {
            started: now,
            checkpoint: now,
            log,
        }
    }

    /// Time elapsed since the timer started.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.started.elapsed()
    }

    /// Time elapsed since the last [`reset_delta`](Self::reset_delta), or
    /// since the start.
    #[must_use]
    pub fn delta(&self) -> Duration {
        self.checkpoint.elapsed()
    }

    /// Moves the checkpoint to now.
    pub fn reset_delta(&mut self) {
        self.checkpoint = Instant::now();
    }

    /// Returns the logger used for reports.
    #[must_use]
    pub const fn log(&self) -> &Log {
        &self.log
    }

    /// Formats the total runtime report.
    #[must_use]
    pub fn format_total(&self) -> String {
        self.log.format(format_args!(
            "Total runtime: {} seconds",
            self.total().as_secs_f64()
        ))
    }

    /// Formats the time since the checkpoint.
    #[must_use]
    pub fn format_delta(&self) -> String {
        self.log
            .format(format_args!("+ {} seconds", self.delta().as_secs_f64()))
    }

    /// Prints the total runtime report.
    pub fn print_total(&self) {
        println!("{}", self.format_total());
    }

    /// Prints the time since the checkpoint.
    pub fn print_delta(&self) {
        println!("{}", self.format_delta());
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::start()
    }
}
