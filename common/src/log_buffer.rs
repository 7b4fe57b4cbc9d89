//! Levelled log ring buffer for on-screen log viewing.
//!
//! Keeps the last [`LOG_ENTRIES`] messages. Old entries are dropped when the
//! buffer is full and long messages are truncated to [`LOG_MSG_LEN`].
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push(LogLevel::Info, "Gauge configured");
//! log.push(LogLevel::Warn, "Preferences store full");
//!
//! for entry in log.iter() {
//!     println!("{} {}", entry.level.prefix(), entry.message);
//! }
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use heapless::{Deque, String};

use crate::colors::{GRAY, GREEN, RED, WHITE, YELLOW};

/// Maximum number of log entries to keep.
pub const LOG_ENTRIES: usize = 8;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 48;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LogLevel {
    /// Verbose debugging
    Trace = 0,
    /// Debug information
    Debug = 1,
    /// Normal operation
    #[default]
    Info = 2,
    /// Warnings
    Warn = 3,
    /// Errors
    Error = 4,
}

impl LogLevel {
    /// Display color for this level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Trace | Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => YELLOW,
            Self::Error => RED,
        }
    }

    /// Single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Trace => 'T',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message, truncated to `LOG_MSG_LEN`.
    pub message: String<LOG_MSG_LEN>,
}

impl LogEntry {
    pub fn new(
        level: LogLevel,
        message: &str,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for c in message.chars() {
            if msg.push(c).is_err() {
                break;
            }
        }
        Self { level, message: msg }
    }
}

/// Ring buffer of log entries, oldest first.
pub struct DebugLog {
    buffer: Deque<LogEntry, LOG_ENTRIES>,
}

impl DebugLog {
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a message. If the buffer is full, the oldest entry is dropped.
    pub fn push(
        &mut self,
        level: LogLevel,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(LogEntry::new(level, msg)).ok();
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.buffer.iter() }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&LogEntry> { self.buffer.back() }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    pub fn clear(&mut self) { self.buffer.clear(); }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

/// Footer color for an entry: info text stays neutral, everything else uses
/// its level color.
pub const fn footer_color(level: LogLevel) -> Rgb565 {
    match level {
        LogLevel::Info => WHITE,
        other => other.color(),
    }
}
