//! Scripting utilities.
//!
//! - [`Log`]: an indenting line logger driven by an explicit [`LogConfig`]
//! - [`Timer`]: a stopwatch reporting total and incremental runtime
//! - [`ensure_directories`], [`timestamp`], [`timestamp_with`]
//! - [`assert_value_one_of`], [`assert_type_one_of`]

mod logging;
mod misc;
mod timer;

pub use logging::{Log, LogConfig, LogLevel};
pub use misc::{
    AssertionError, DATE_FORMAT, DATETIME_FORMAT, TIME_FORMAT, TypeTag, assert_type_one_of,
    assert_value_one_of, ensure_directories, timestamp, timestamp_with,
};
pub use timer::Timer;
