pub mod file_sink;
pub mod log_entry;
pub mod log_error;
pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod logger;
pub mod noop_log_sink;
pub mod registry;
pub mod root;
pub mod syslog_sink;
pub mod writer_sink;
pub use noop_log_sink::NoopLogSink;
