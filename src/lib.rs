//! rootlog is a small leveled-logging library.
//!
//! A process-wide [`Registry`](log::registry::Registry) holds the minimum
//! level and an ordered list of sinks (standard output by default, plus files
//! or the system log). Named [`Logger`](log::logger::Logger)s are
//! lightweight handles that tag each line with their name and delegate
//! everything else to the registry.
//!
//! Lines sent to text sinks look like:
//!
//! ```text
//! (2025-11-02 02:30:45.123) [INFO ] (net) connect to host1
//! ```
//!
//! # Example
//!
//! ```
//! use rootlog::log::{log_level::LogLevel, root};
//! use rootlog::{logger_warn, root_info};
//!
//! root::set_level(LogLevel::Debug);
//! root_info!("starting {} workers", 4);
//!
//! let net = root::get_logger("net");
//! logger_warn!(net, "retrying {}", "host1");
//! ```

/// Handles configuration loading and management.
pub mod config;
/// Levels, sinks, the registry and named loggers.
pub mod log;
