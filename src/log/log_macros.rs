//! Leveled logging macros for the root registry and for named `Logger`s.
//!
//! `root_*!` log through [`crate::log::root`]; `logger_*!` take anything with
//! a `log(LogLevel, impl Display)` method (`Logger` or `Registry`) as their
//! first argument. Arguments are captured with `format_args!`, so nothing is
//! rendered when the level is filtered out at runtime.
//!
//! # Feature Flags
//! specific log levels are controlled by cargo features:
//! `log-trace`, `log-debug`, `log-info`, `log-warn`, `log-error`.
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all formatting and allocation overhead at compile time. FATAL is never
//! compiled out.

// ============================================================================
// 1. GENERIC INTERNAL MACROS (The "Workers")
// ============================================================================

#[macro_export]
macro_rules! log_at {
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {{
        $logger.log($lvl, format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! root_log {
    ($lvl:expr, $($arg:tt)+) => {{
        $crate::log::root::log($lvl, format_args!($($arg)+))
    }};
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- TRACE ----------------------
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! root_trace   { ($($arg:tt)+)                => { $crate::root_log!($crate::log::log_level::LogLevel::Trace, $($arg)+) } }
#[cfg(feature = "log-trace")]
#[macro_export]
macro_rules! logger_trace { ($logger:expr, $($arg:tt)+)  => { $crate::log_at!($logger, $crate::log::log_level::LogLevel::Trace, $($arg)+) } }

#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! root_trace {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-trace"))]
#[macro_export]
macro_rules! logger_trace {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! root_debug   { ($($arg:tt)+)                => { $crate::root_log!($crate::log::log_level::LogLevel::Debug, $($arg)+) } }
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)+)  => { $crate::log_at!($logger, $crate::log::log_level::LogLevel::Debug, $($arg)+) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! root_debug {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! root_info   { ($($arg:tt)+)                => { $crate::root_log!($crate::log::log_level::LogLevel::Info, $($arg)+) } }
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)+)  => { $crate::log_at!($logger, $crate::log::log_level::LogLevel::Info, $($arg)+) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! root_info {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! root_warn   { ($($arg:tt)+)                => { $crate::root_log!($crate::log::log_level::LogLevel::Warn, $($arg)+) } }
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warn { ($logger:expr, $($arg:tt)+)  => { $crate::log_at!($logger, $crate::log::log_level::LogLevel::Warn, $($arg)+) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! root_warn {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warn {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! root_error   { ($($arg:tt)+)                => { $crate::root_log!($crate::log::log_level::LogLevel::Error, $($arg)+) } }
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)+)  => { $crate::log_at!($logger, $crate::log::log_level::LogLevel::Error, $($arg)+) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! root_error {
    ($($arg:tt)*) => {
        ()
    };
}
#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- FATAL ----------------------
#[macro_export]
macro_rules! root_fatal   { ($($arg:tt)+)                => { $crate::root_log!($crate::log::log_level::LogLevel::Fatal, $($arg)+) } }
#[macro_export]
macro_rules! logger_fatal { ($logger:expr, $($arg:tt)+)  => { $crate::log_at!($logger, $crate::log::log_level::LogLevel::Fatal, $($arg)+) } }
