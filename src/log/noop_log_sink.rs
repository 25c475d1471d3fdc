use crate::log::{log_entry::LogEntry, log_sink::LogSink};

/// Sink that discards everything.
#[derive(Debug, Clone, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log(&self, _entry: &LogEntry<'_>) {}
}
