//! Leveled logging with a pluggable output sink.
//!
//! The driver logs through the [`klog!`] family of macros. Output goes to a
//! single registered [`LogSink`] (the embedder decides where bytes end up:
//! a serial console, a host test buffer, nothing at all). With no sink
//! registered every log call is a no-op, so library users pay nothing for
//! logging they do not want.
//!
//! No allocation: records are formatted directly into the sink through
//! `core::fmt`.

use core::fmt::{self, Write as _};

use crate::sync::SpinLock;

/// Log severity level. Lower numeric value = more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    /// Fatal: unrecoverable error.
    Fatal = 0,
    /// Error: an operation failed but the system continues.
    Error = 1,
    /// Warning: unexpected condition, not necessarily an error.
    Warn = 2,
    /// Informational: high-level progress messages.
    Info = 3,
    /// Debug: detailed diagnostic information.
    Debug = 4,
    /// Trace: very verbose, per-operation tracing.
    Trace = 5,
}

impl LogLevel {
    /// Returns the human-readable name (fixed-width for aligned output).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN ",
            Self::Info => "INFO ",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

/// A dyn-compatible output sink for log records.
///
/// Takes `&self` because sinks are shared between the producer and consumer
/// contexts; implementations use interior locking where they need it.
pub trait LogSink: Send + Sync {
    /// Writes a string fragment to this sink.
    fn write_str(&self, s: &str);

    /// Maximum accepted level (records with `level <= max_level` are written).
    fn max_level(&self) -> LogLevel;

    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;
}

/// The registered global sink. `None` until [`set_sink`] is called.
static SINK: SpinLock<Option<&'static dyn LogSink>> = SpinLock::new(None);

/// Registers the global log sink.
///
/// May be called more than once; the latest sink wins. Records logged before
/// registration are dropped.
pub fn set_sink(sink: &'static dyn LogSink) {
    *SINK.lock() = Some(sink);
}

/// Adapter so `core::fmt` machinery can write into a [`LogSink`].
struct SinkWriter<'a>(&'a dyn LogSink);

impl fmt::Write for SinkWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s);
        Ok(())
    }
}

/// Formats one record into `sink`, honoring the sink's level filter.
fn write_record(sink: &dyn LogSink, level: LogLevel, args: fmt::Arguments<'_>) {
    if level > sink.max_level() {
        return;
    }
    let mut writer = SinkWriter(sink);
    // Sinks cannot report errors and SinkWriter never fails.
    let _ = writeln!(writer, "[{}] {}", level.name(), args);
}

/// Implementation detail for [`klog!`]. Not public API.
#[doc(hidden)]
pub fn _log(level: LogLevel, args: fmt::Arguments<'_>) {
    // Copy the reference out so the slot is not held while formatting.
    let sink = *SINK.lock();
    if let Some(sink) = sink {
        write_record(sink, level, args);
    }
}

/// Logs a message at the given level.
#[macro_export]
macro_rules! klog {
    ($level:expr, $($arg:tt)*) => {
        $crate::log::_log($level, format_args!($($arg)*))
    };
}

/// Logs a fatal-level message (level 0).
#[macro_export]
macro_rules! kfatal {
    ($($arg:tt)*) => { $crate::klog!($crate::log::LogLevel::Fatal, $($arg)*) };
}

/// Logs an error-level message (level 1).
#[macro_export]
macro_rules! kerr {
    ($($arg:tt)*) => { $crate::klog!($crate::log::LogLevel::Error, $($arg)*) };
}

/// Logs a warning-level message (level 2).
#[macro_export]
macro_rules! kwarn {
    ($($arg:tt)*) => { $crate::klog!($crate::log::LogLevel::Warn, $($arg)*) };
}

/// Logs an info-level message (level 3).
#[macro_export]
macro_rules! kinfo {
    ($($arg:tt)*) => { $crate::klog!($crate::log::LogLevel::Info, $($arg)*) };
}

/// Logs a debug-level message (level 4).
#[macro_export]
macro_rules! kdebug {
    ($($arg:tt)*) => { $crate::klog!($crate::log::LogLevel::Debug, $($arg)*) };
}

/// Logs a trace-level message (level 5).
#[macro_export]
macro_rules! ktrace {
    ($($arg:tt)*) => { $crate::klog!($crate::log::LogLevel::Trace, $($arg)*) };
}
