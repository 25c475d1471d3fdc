use crate::log::log_level::LogLevel;

/// A single emission, as handed to every sink.
///
/// The registry renders the message once and builds the decorated line once;
/// sinks pick whichever representation suits them.
#[derive(Debug, Clone, Copy)]
pub struct LogEntry<'a> {
    /// The severity level of the message.
    pub level: LogLevel,
    /// Logger name, empty for the root logger.
    pub name: &'a str,
    /// The rendered message without timestamp, level or name.
    pub message: &'a str,
    /// `(timestamp) [LEVEL] (name) message`, trimmed, without a newline.
    pub line: &'a str,
}

impl<'a> LogEntry<'a> {
    pub fn new(level: LogLevel, name: &'a str, message: &'a str, line: &'a str) -> Self {
        Self {
            level,
            name,
            message,
            line,
        }
    }
}
