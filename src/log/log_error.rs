use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{config::ConfigError, log::log_level::ParseLevelError};

/// Errors raised while setting up outputs or applying configuration.
///
/// Emitting a message never fails; only construction and configuration do.
#[derive(Debug, Error)]
pub enum LogError {
    #[error(transparent)]
    Level(#[from] ParseLevelError),

    #[error("cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown syslog facility {0}")]
    UnknownFacility(String),

    #[error("invalid boolean for {key}: {value}")]
    InvalidBool { key: &'static str, value: String },

    #[error("syslog output is not supported on this platform")]
    SyslogUnsupported,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
