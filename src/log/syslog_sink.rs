//! Sink that forwards messages to the system log.
//!
//! The system log stamps time, host and tag on its own, so this sink sends
//! only the undecorated message, at the priority matching the entry's level.
//! Delivery goes through a [`SyslogBackend`]; on Unix the production backend
//! is [`SyslogConnection`], which talks to syslog(3) through `libc`.
//!
//! `openlog` keeps one ident/facility pair per process, so the first
//! [`SyslogConnection::open`] decides both and the session stays open until
//! the process exits.

use std::fmt;

use crate::log::{log_entry::LogEntry, log_level::LogLevel, log_sink::LogSink};

/// Where the system log files our messages. Applications normally log as
/// `user`, as a `daemon`, or under one of the site-defined `local0`..`local7`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SyslogFacility {
    #[default]
    User,
    Daemon,
    /// `local0` through `local7`; slots above 7 are treated as 7.
    Local(u8),
}

impl SyslogFacility {
    /// Case-insensitive: `user`, `daemon`, `local0`..`local7`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "user" => Some(Self::User),
            "daemon" => Some(Self::Daemon),
            other => match other.strip_prefix("local")?.as_bytes() {
                [slot @ b'0'..=b'7'] => Some(Self::Local(slot - b'0')),
                _ => None,
            },
        }
    }

    /// The `LOG_*` facility value handed to `openlog`.
    pub const fn code(self) -> i32 {
        match self {
            Self::User => 1 << 3,
            Self::Daemon => 3 << 3,
            Self::Local(slot) => (16 + Self::clamp(slot) as i32) << 3,
        }
    }

    const fn clamp(slot: u8) -> u8 {
        if slot > 7 { 7 } else { slot }
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::User => f.write_str("user"),
            Self::Daemon => f.write_str("daemon"),
            Self::Local(slot) => write!(f, "local{}", Self::clamp(slot)),
        }
    }
}

/// The syslog severities our levels map onto. Discriminants are the
/// `LOG_*` priority values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogPriority {
    Critical = 2,
    Error = 3,
    Warning = 4,
    Info = 6,
    Debug = 7,
}

impl From<LogLevel> for SyslogPriority {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace | LogLevel::Debug => SyslogPriority::Debug,
            LogLevel::Info => SyslogPriority::Info,
            LogLevel::Warn => SyslogPriority::Warning,
            LogLevel::Error => SyslogPriority::Error,
            LogLevel::Fatal => SyslogPriority::Critical,
        }
    }
}

/// Ident used when `syslog_tag` is not configured.
pub const DEFAULT_SYSLOG_TAG: &str = "rootlog";

/// How to open the process syslog session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyslogConfig {
    pub facility: SyslogFacility,
    pub tag: String,
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self {
            facility: SyslogFacility::default(),
            tag: DEFAULT_SYSLOG_TAG.to_owned(),
        }
    }
}

/// Delivery seam between [`SyslogSink`] and the actual system log.
pub trait SyslogBackend: Send + Sync {
    fn send(&self, priority: SyslogPriority, message: &str);
}

/// Sink that hands undecorated messages to a [`SyslogBackend`].
#[derive(Debug)]
pub struct SyslogSink<B: SyslogBackend> {
    backend: B,
}

impl<B: SyslogBackend> SyslogSink<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(unix)]
impl SyslogSink<SyslogConnection> {
    /// Opens the process syslog connection and wraps it in a sink.
    pub fn open(config: &SyslogConfig) -> Self {
        Self::with_backend(SyslogConnection::open(config))
    }
}

impl<B: SyslogBackend> LogSink for SyslogSink<B> {
    fn log(&self, entry: &LogEntry<'_>) {
        self.backend.send(SyslogPriority::from(entry.level), entry.message);
    }
}

#[cfg(unix)]
pub use self::unix::SyslogConnection;

#[cfg(unix)]
mod unix {
    use std::{
        ffi::{CStr, CString},
        sync::OnceLock,
    };

    use super::{DEFAULT_SYSLOG_TAG, SyslogBackend, SyslogConfig, SyslogPriority};

    /// Handle on the process-wide syslog(3) session.
    ///
    /// All handles share the session opened by the first call to
    /// [`open`](Self::open); it is never closed.
    #[derive(Clone, Copy, Debug)]
    pub struct SyslogConnection {
        ident: &'static CStr,
    }

    impl SyslogConnection {
        pub fn open(config: &SyslogConfig) -> Self {
            // openlog keeps the ident pointer, so it must live for the process.
            static IDENT: OnceLock<CString> = OnceLock::new();

            let ident = IDENT.get_or_init(|| {
                let ident = CString::new(config.tag.as_str())
                    .or_else(|_| CString::new(DEFAULT_SYSLOG_TAG))
                    .unwrap_or_default();

                // SAFETY: the string's heap buffer does not move when the
                // CString is stored in IDENT, which is never dropped.
                unsafe {
                    libc::openlog(
                        ident.as_ptr(),
                        libc::LOG_PID,
                        config.facility.code() as libc::c_int,
                    );
                }
                ident
            });

            Self {
                ident: ident.as_c_str(),
            }
        }

        pub fn ident(&self) -> &str {
            self.ident.to_str().unwrap_or_default()
        }
    }

    impl SyslogBackend for SyslogConnection {
        fn send(&self, priority: SyslogPriority, message: &str) {
            let message = to_c_message(message);

            // SAFETY: openlog ran in `open`; the "%s" format keeps `%` in the
            // message from being interpreted, and both pointers are valid C
            // strings for the duration of the call.
            unsafe {
                libc::syslog(priority as libc::c_int, c"%s".as_ptr(), message.as_ptr());
            }
        }
    }

    /// Embedded NULs cannot cross the C boundary; each one is sent as `\0`.
    pub(super) fn to_c_message(message: &str) -> CString {
        let bytes = if message.contains('\0') {
            message.replace('\0', "\\0").into_bytes()
        } else {
            message.as_bytes().to_vec()
        };
        CString::new(bytes).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<(SyslogPriority, String)>>);

    impl SyslogBackend for Recorder {
        fn send(&self, priority: SyslogPriority, message: &str) {
            self.0.lock().unwrap().push((priority, message.to_owned()));
        }
    }

    #[test]
    fn level_to_priority_mapping() {
        assert_eq!(SyslogPriority::from(LogLevel::Trace), SyslogPriority::Debug);
        assert_eq!(SyslogPriority::from(LogLevel::Debug), SyslogPriority::Debug);
        assert_eq!(SyslogPriority::from(LogLevel::Info), SyslogPriority::Info);
        assert_eq!(SyslogPriority::from(LogLevel::Warn), SyslogPriority::Warning);
        assert_eq!(SyslogPriority::from(LogLevel::Error), SyslogPriority::Error);
        assert_eq!(SyslogPriority::from(LogLevel::Fatal), SyslogPriority::Critical);
    }

    #[test]
    fn sink_sends_undecorated_message() {
        let sink = SyslogSink::with_backend(Recorder::default());
        sink.log(&LogEntry::new(
            LogLevel::Warn,
            "net",
            "link down",
            "(2025-01-01 00:00:00.000) [WARN ] (net) link down",
        ));

        let sent = sink.backend().0.lock().unwrap().clone();
        assert_eq!(sent, vec![(SyslogPriority::Warning, "link down".to_owned())]);
    }

    #[test]
    fn facility_names() {
        assert_eq!(SyslogFacility::from_name("user"), Some(SyslogFacility::User));
        assert_eq!(SyslogFacility::from_name("Daemon"), Some(SyslogFacility::Daemon));
        assert_eq!(SyslogFacility::from_name("LOCAL3"), Some(SyslogFacility::Local(3)));
        assert_eq!(SyslogFacility::from_name("local0"), Some(SyslogFacility::Local(0)));
        for bad in ["local8", "local", "local+7", "local07", "kern", ""] {
            assert_eq!(SyslogFacility::from_name(bad), None, "{bad}");
        }

        assert_eq!(SyslogFacility::Local(7).to_string(), "local7");
        assert_eq!(SyslogFacility::Local(42).to_string(), "local7");
        assert_eq!(SyslogFacility::default().to_string(), "user");
    }

    #[test]
    fn config_defaults() {
        let config = SyslogConfig::default();
        assert_eq!(config.facility, SyslogFacility::User);
        assert_eq!(config.tag, DEFAULT_SYSLOG_TAG);
    }

    #[cfg(unix)]
    #[test]
    fn codes_match_libc_constants() {
        assert_eq!(SyslogFacility::User.code(), libc::LOG_USER);
        assert_eq!(SyslogFacility::Daemon.code(), libc::LOG_DAEMON);
        assert_eq!(SyslogFacility::Local(0).code(), libc::LOG_LOCAL0);
        assert_eq!(SyslogFacility::Local(7).code(), libc::LOG_LOCAL7);
        assert_eq!(SyslogFacility::Local(9).code(), libc::LOG_LOCAL7);

        assert_eq!(SyslogPriority::Critical as i32, libc::LOG_CRIT);
        assert_eq!(SyslogPriority::Error as i32, libc::LOG_ERR);
        assert_eq!(SyslogPriority::Warning as i32, libc::LOG_WARNING);
        assert_eq!(SyslogPriority::Info as i32, libc::LOG_INFO);
        assert_eq!(SyslogPriority::Debug as i32, libc::LOG_DEBUG);
    }

    #[cfg(unix)]
    #[test]
    fn nul_bytes_are_escaped_not_dropped() {
        assert_eq!(unix::to_c_message("before\0after").to_bytes(), b"before\\0after");
        assert_eq!(unix::to_c_message("\0").to_bytes(), b"\\0");
        assert_eq!(unix::to_c_message("100% done").to_bytes(), b"100% done");
        assert_eq!(unix::to_c_message("").to_bytes(), b"");
    }

    #[cfg(unix)]
    #[test]
    fn connections_share_one_session() {
        let first = SyslogConnection::open(&SyslogConfig {
            facility: SyslogFacility::User,
            tag: "rootlog-test".to_owned(),
        });
        let second = SyslogConnection::open(&SyslogConfig {
            facility: SyslogFacility::Local(2),
            tag: "someone-else".to_owned(),
        });
        assert_eq!(first.ident(), second.ident());

        second.send(SyslogPriority::Debug, "");
        second.send(SyslogPriority::Info, "100% done");
        second.send(SyslogPriority::Info, "before\0after");
    }
}
