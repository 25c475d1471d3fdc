use std::sync::Arc;

use crate::log::log_entry::LogEntry;

/// Destination for log entries.
///
/// Text-oriented sinks write [`LogEntry::line`]; sinks backed by a facility
/// that stamps its own metadata (syslog) use [`LogEntry::level`] and
/// [`LogEntry::message`]. Implementations swallow their own I/O errors.
pub trait LogSink: Send + Sync {
    fn log(&self, entry: &LogEntry<'_>);
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    #[inline]
    fn log(&self, entry: &LogEntry<'_>) {
        (**self).log(entry);
    }
}

impl<T: LogSink + ?Sized> LogSink for Box<T> {
    #[inline]
    fn log(&self, entry: &LogEntry<'_>) {
        (**self).log(entry);
    }
}
