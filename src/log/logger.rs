use std::{fmt, sync::Arc};

use crate::log::{log_level::LogLevel, registry::Registry};

/// Named child logger.
///
/// A `Logger` is only a display name plus a handle to the [`Registry`] that
/// owns the level and the sinks. Creating one registers nothing and dropping
/// one releases nothing; clone it freely across threads. An empty name
/// produces lines without the `(name) ` segment.
///
/// # Example
///
/// ```
/// use rootlog::log::logger::get_logger;
/// use rootlog::logger_info;
///
/// let net = get_logger("net");
/// net.info("listening");
/// logger_info!(net, "connect to {}", "host1");
/// ```
#[derive(Clone, Debug)]
pub struct Logger {
    registry: Registry,
    name: Arc<str>,
}

impl Logger {
    pub fn new(registry: Registry, name: impl Into<Arc<str>>) -> Self {
        Self {
            registry,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.registry.dispatch(level, &self.name, message);
    }

    pub fn trace(&self, message: impl fmt::Display) {
        self.log(LogLevel::Trace, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    pub fn fatal(&self, message: impl fmt::Display) {
        self.log(LogLevel::Fatal, message);
    }
}

/// Returns a logger named `name` bound to [`Registry::root`].
pub fn get_logger(name: impl Into<Arc<str>>) -> Logger {
    Registry::root().get_logger(name)
}
