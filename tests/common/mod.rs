#![allow(dead_code)]

use std::sync::{Arc, Mutex, PoisonError};

use rootlog::log::{
    log_entry::LogEntry, log_level::LogLevel, log_sink::LogSink, registry::Registry,
};

/// Records every entry it receives.
#[derive(Default)]
pub struct CaptureSink {
    entries: Mutex<Vec<Captured>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Captured {
    pub level: LogLevel,
    pub name: String,
    pub message: String,
    pub line: String,
}

impl CaptureSink {
    pub fn entries(&self) -> Vec<Captured> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.line).collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl LogSink for CaptureSink {
    fn log(&self, entry: &LogEntry<'_>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Captured {
                level: entry.level,
                name: entry.name.to_owned(),
                message: entry.message.to_owned(),
                line: entry.line.to_owned(),
            });
    }
}

/// Isolated registry with a single capture sink.
pub fn captured(level: LogLevel) -> (Registry, Arc<CaptureSink>) {
    let registry = Registry::without_outputs();
    registry.set_level(level);
    let sink = Arc::new(CaptureSink::default());
    registry.add_output(sink.clone());
    (registry, sink)
}
