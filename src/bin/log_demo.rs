//! Small demo binary: applies an optional config file to the root registry
//! and logs one line per level, from the root and from a named logger.
//!
//! ```text
//! cargo run --bin log_demo
//! cargo run --bin log_demo -- demo.conf
//! ```

use std::{env, process};

use rootlog::{
    config::Config,
    log::{log_error::LogError, log_level::LogLevel, registry::Registry, root},
    logger_debug, logger_error, logger_fatal, logger_info, logger_trace, logger_warn, root_info,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if let Err(e) = configure(args.get(1).map(String::as_str)) {
        eprintln!("[log_demo] {e}");
        process::exit(1);
    }

    root_info!("log_demo starting at level {}", root::level().as_str());

    let net = root::get_logger("net");
    logger_trace!(net, "resolving {}", "host1");
    logger_debug!(net, "resolved {} to {}", "host1", "10.0.0.7");
    logger_info!(net, "connect to {}", "host1");
    logger_warn!(net, "slow handshake: {} ms", 840);
    logger_error!(net, "connection reset by {}", "host1");
    logger_fatal!(net, "giving up after {} attempts", 3);

    for level in LogLevel::ALL {
        root::log(level, format_args!("root line at {}", level.as_str()));
    }
}

fn configure(path: Option<&str>) -> Result<(), LogError> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::empty(),
    };
    Registry::root().apply_config(&config)
}
