//! Indenting line logger.
//!
//! [`Log`] is for user-facing script output. Library diagnostics go through
//! `tracing` instead.

use std::fmt::Display;
use std::io::{self, Write};

/// Severity of a message passed to [`Log::format_at`] and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Most verbose.
    #[default]
    Trace,
    /// Debugging detail.
    Debug,
    /// Normal progress output.
    Info,
    /// Something unexpected.
    Warn,
    /// A failure.
    Error,
}

/// Formatting options for a [`Log`].
///
/// A formatted line is the `separator`-joined sequence of `prefix`, one
/// `indent` per indentation level, the message and `suffix`.
///
/// # Examples
///
/// ```
/// use pointfree::utils::{Log, LogConfig};
///
/// let config = LogConfig::default()
///     .with_indent("#")
///     .with_prefix("[")
///     .with_suffix("]")
///     .with_separator(" ");
/// let mut log = Log::new(config);
///
/// assert_eq!(log.format(format_args!("hi {}", "bar")), "[ hi bar ]");
/// log.indent(1);
/// assert_eq!(log.format("bye bar"), "[ # bye bar ]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// Repeated once per indentation level.
    pub indent: String,
    /// First part of every line.
    pub prefix: String,
    /// Last part of every line.
    pub suffix: String,
    /// Placed between consecutive parts.
    pub separator: String,
    /// Messages below this level are dropped by the `*_at` methods.
    pub threshold: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            prefix: String::new(),
            suffix: String::new(),
            separator: String::new(),
            threshold: LogLevel::Trace,
        }
    }
}

impl LogConfig {
    /// Sets the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Sets the line prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the line suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the separator between parts.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the minimum level emitted by the `*_at` methods.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: LogLevel) -> Self {
        self.threshold = threshold;
        self
    }
}

/// A line logger that tracks an indentation depth.
#[derive(Debug, Clone, Default)]
pub struct Log {
    config: LogConfig,
    depth: usize,
}

impl Log {
    /// Creates a logger at depth zero.
    #[must_use]
    pub const fn new(config: LogConfig) -> Self {
        Self { config, depth: 0 }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Returns the current indentation depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Increases the depth by `levels`.
    pub const fn indent(&mut self, levels: usize) {
        self.depth = self.depth.saturating_add(levels);
    }

    /// Decreases the depth by `levels`, stopping at zero.
    pub const fn dedent(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// Formats `message` as a full line, without a trailing newline.
    pub fn format(&self, message: impl Display) -> String {
        let message = message.to_string();
        let mut parts: Vec<&str> = Vec::with_capacity(self.depth + 3);
        parts.push(&self.config.prefix);
        parts.extend(std::iter::repeat_n(self.config.indent.as_str(), self.depth));
        parts.push(&message);
        parts.push(&self.config.suffix);
        parts.join(self.config.separator.as_str())
    }

    /// Formats `message` unless `level` is below the threshold.
    pub fn format_at(&self, level: LogLevel, message: impl Display) -> Option<String> {
        (level >= self.config.threshold).then(|| self.format(message))
    }

    /// Prints the formatted line to stdout.
    pub fn print(&self, message: impl Display) {
        println!("{}", self.format(message));
    }

    /// Prints the formatted line unless `level` is below the threshold.
    pub fn print_at(&self, level: LogLevel, message: impl Display) {
        if let Some(line) = self.format_at(level, message) {
            println!("{line}");
        }
    }

    /// Writes the formatted line to stdout without a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while writing or flushing stdout.
    pub fn print_inline(&self, message: impl Display) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(self.format(message).as_bytes())?;
        stdout.flush()
    }
}
