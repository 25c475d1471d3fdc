use std::{fmt, str::FromStr};

use thiserror::Error;

/// Defines the severity levels for log messages.
///
/// Levels are ordered by verbosity: `Trace` is the most verbose and `Fatal`
/// the least. A registry emits a message iff its level is `>=` the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Designates very fine-grained informational events.
    Trace = 0,
    /// Designates fine-grained informational events that are most useful to debug an application.
    Debug = 1,
    /// Designates informational messages that highlight the progress of the application at coarse-grained level.
    Info = 2,
    /// Designates potentially harmful situations.
    Warn = 3,
    /// Designates error events that might still allow the application to continue running.
    Error = 4,
    /// Designates severe error events that will presumably lead the application to abort.
    Fatal = 5,
}

impl LogLevel {
    /// Threshold of a freshly created registry.
    pub const DEFAULT: LogLevel = LogLevel::Info;

    /// All levels, most verbose first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Parses a level name.
    ///
    /// Matching is case-insensitive and accepts the synonyms `WARNING` and
    /// `ERR`. Surrounding whitespace is *not* stripped.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseLevelError`] for unknown names. The error still
    /// carries a usable level through [`ParseLevelError::fallback`].
    ///
    /// ```
    /// use rootlog::log::log_level::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("warning"), Ok(LogLevel::Warn));
    /// let level = LogLevel::parse("bogus").unwrap_or_else(|e| e.fallback());
    /// assert_eq!(level, LogLevel::Info);
    /// ```
    pub fn parse(text: &str) -> Result<LogLevel, ParseLevelError> {
        let upper = text.to_uppercase();
        match upper.as_str() {
            "TRACE" => Ok(LogLevel::Trace),
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERR" | "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(ParseLevelError { input: upper }),
        }
    }

    /// Fixed-width (5 character) label used in rendered lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO ",
            LogLevel::Warn => "WARN ",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Canonical name without padding.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Inverse of `level as u8`. Out-of-range values saturate to `Fatal`.
    pub(crate) const fn from_rank(rank: u8) -> LogLevel {
        match rank {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Fatal,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::DEFAULT
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::parse(s)
    }
}

/// Unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no such log level {input}")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// The rejected input, uppercased.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Level to use when the caller chooses to continue anyway.
    #[must_use]
    pub const fn fallback(&self) -> LogLevel {
        LogLevel::DEFAULT
    }
}
