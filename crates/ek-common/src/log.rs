// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Qbitel Inc.

//! Endorsement event log
//!
//! A no_std ring of formatted events. The orchestrator records every state
//! transition and failure reason here; it is the only diagnostic channel a
//! caller has, since the endorsement result itself is coarse.
//!
//! # Security
//!
//! - Seeds, unwrap keys and HMAC keys must NEVER be formatted into an entry
//! - Entries are truncated to `MAX_LOG_MESSAGE_LEN` bytes

use core::fmt::{self, Write};
use heapless::String;

/// Maximum log message length
pub const MAX_LOG_MESSAGE_LEN: usize = 128;

/// Log buffer size (number of entries)
pub const LOG_BUFFER_SIZE: usize = 32;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Attempt-ending failures
    Error = 0,
    /// Degraded outcomes (fallback identity, partial installs)
    Warn = 1,
    /// State transitions
    Info = 2,
    /// Per-step detail
    Debug = 3,
    /// Register-level detail
    Trace = 4,
}

impl LogLevel {
    /// Get the log level name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Get a short prefix for the log level
    #[must_use]
    pub const fn prefix(&self) -> char {
        match self {
            Self::Error => 'E',
            Self::Warn => 'W',
            Self::Info => 'I',
            Self::Debug => 'D',
            Self::Trace => 'T',
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded event
#[derive(Clone)]
pub struct LogEntry {
    /// Log level
    pub level: LogLevel,
    /// Event sequence number within the attempt
    pub sequence: u32,
    /// Emitting component
    pub component: &'static str,
    /// Formatted message
    pub message: String<MAX_LOG_MESSAGE_LEN>,
}

impl LogEntry {
    /// Create a new log entry, truncating the message on a char boundary
    #[must_use]
    pub fn new(level: LogLevel, sequence: u32, component: &'static str, message: &str) -> Self {
        let mut msg = String::new();
        let mut end = message.len().min(MAX_LOG_MESSAGE_LEN);
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        let _ = msg.push_str(&message[..end]);

        Self {
            level,
            sequence,
            component,
            message: msg,
        }
    }
}

impl fmt::Debug for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:04}] {} [{}] {}",
            self.sequence,
            self.level.prefix(),
            self.component,
            self.message
        )
    }
}

/// Circular event buffer
///
/// Sequence numbers are assigned by the buffer itself, so entries stay
/// ordered even after the ring wraps.
pub struct LogBuffer {
    entries: [Option<LogEntry>; LOG_BUFFER_SIZE],
    write_index: usize,
    count: usize,
    next_sequence: u32,
    min_level: LogLevel,
}

impl LogBuffer {
    /// Create a new empty log buffer
    #[must_use]
    pub const fn new() -> Self {
        const NONE: Option<LogEntry> = None;
        Self {
            entries: [NONE; LOG_BUFFER_SIZE],
            write_index: 0,
            count: 0,
            next_sequence: 0,
            min_level: LogLevel::Info,
        }
    }

    /// Set the minimum log level
    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Get the minimum log level
    #[must_use]
    pub const fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Check if a log level should be recorded
    #[must_use]
    pub const fn should_log(&self, level: LogLevel) -> bool {
        (level as u8) <= (self.min_level as u8)
    }

    fn push(&mut self, entry: LogEntry) {
        self.entries[self.write_index] = Some(entry);
        self.write_index = (self.write_index + 1) % LOG_BUFFER_SIZE;
        if self.count < LOG_BUFFER_SIZE {
            self.count += 1;
        }
    }

    /// Record a preformatted message
    pub fn record(&mut self, level: LogLevel, component: &'static str, message: &str) {
        if !self.should_log(level) {
            return;
        }
        let entry = LogEntry::new(level, self.next_sequence, component, message);
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.push(entry);
    }

    /// Record with format arguments
    pub fn log(&mut self, level: LogLevel, component: &'static str, args: fmt::Arguments<'_>) {
        if !self.should_log(level) {
            return;
        }

        let mut message = String::<MAX_LOG_MESSAGE_LEN>::new();
        let _ = message.write_fmt(args);

        let entry = LogEntry {
            level,
            sequence: self.next_sequence,
            component,
            message,
        };
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.push(entry);
    }

    /// Get the number of entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Check if buffer is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Clear all entries and restart sequence numbering
    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            *entry = None;
        }
        self.write_index = 0;
        self.count = 0;
        self.next_sequence = 0;
    }

    /// Check whether any retained entry contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.iter().any(|e| e.message.contains(needle))
    }

    /// Number of retained entries at exactly `level`
    #[must_use]
    pub fn count_at(&self, level: LogLevel) -> usize {
        self.iter().filter(|e| e.level == level).count()
    }

    /// Iterate over entries (oldest first)
    pub fn iter(&self) -> LogBufferIter<'_> {
        LogBufferIter {
            buffer: self,
            index: 0,
            remaining: self.count,
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over log buffer entries
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    index: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let start_index = if self.buffer.count < LOG_BUFFER_SIZE {
            0
        } else {
            self.buffer.write_index
        };

        let actual_index = (start_index + self.index) % LOG_BUFFER_SIZE;
        self.index += 1;
        self.remaining -= 1;

        self.buffer.entries[actual_index].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Log an error
#[macro_export]
macro_rules! log_error {
    ($buffer:expr, $component:expr, $($arg:tt)*) => {
        $buffer.log($crate::log::LogLevel::Error, $component, format_args!($($arg)*))
    };
}

/// Log a warning
#[macro_export]
macro_rules! log_warn {
    ($buffer:expr, $component:expr, $($arg:tt)*) => {
        $buffer.log($crate::log::LogLevel::Warn, $component, format_args!($($arg)*))
    };
}

/// Log an informational message
#[macro_export]
macro_rules! log_info {
    ($buffer:expr, $component:expr, $($arg:tt)*) => {
        $buffer.log($crate::log::LogLevel::Info, $component, format_args!($($arg)*))
    };
}

/// Log a debug message
#[macro_export]
macro_rules! log_debug {
    ($buffer:expr, $component:expr, $($arg:tt)*) => {
        $buffer.log($crate::log::LogLevel::Debug, $component, format_args!($($arg)*))
    };
}

/// Log a trace-level message
#[macro_export]
macro_rules! log_trace {
    ($buffer:expr, $component:expr, $($arg:tt)*) => {
        $buffer.log($crate::log::LogLevel::Trace, $component, format_args!($($arg)*))
    };
}
