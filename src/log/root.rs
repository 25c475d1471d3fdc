//! Free functions over [`Registry::root`].
//!
//! Lines logged through these functions carry no logger name.

use std::{fmt, sync::Arc};

use crate::log::{log_level::LogLevel, log_sink::LogSink, registry::Registry};

pub use crate::log::logger::get_logger;

/// Appends a sink to the root registry.
pub fn add_output(sink: Arc<dyn LogSink>) {
    Registry::root().add_output(sink);
}

/// Sets the root registry's minimum level.
pub fn set_level(level: LogLevel) {
    Registry::root().set_level(level);
}

#[must_use]
pub fn level() -> LogLevel {
    Registry::root().level()
}

pub fn log(level: LogLevel, message: impl fmt::Display) {
    Registry::root().dispatch(level, "", message);
}

pub fn trace(message: impl fmt::Display) {
    log(LogLevel::Trace, message);
}

pub fn debug(message: impl fmt::Display) {
    log(LogLevel::Debug, message);
}

pub fn info(message: impl fmt::Display) {
    log(LogLevel::Info, message);
}

pub fn warn(message: impl fmt::Display) {
    log(LogLevel::Warn, message);
}

pub fn error(message: impl fmt::Display) {
    log(LogLevel::Error, message);
}

pub fn fatal(message: impl fmt::Display) {
    log(LogLevel::Fatal, message);
}
