use std::{
    fmt,
    sync::{
        Arc, OnceLock, PoisonError, RwLock,
        atomic::{AtomicU8, Ordering},
    },
};

use chrono::Local;

use crate::{
    config::Config,
    log::{
        file_sink::FileSink,
        log_entry::LogEntry,
        log_error::LogError,
        log_level::LogLevel,
        log_sink::LogSink,
        logger::Logger,
        syslog_sink::{DEFAULT_SYSLOG_TAG, SyslogConfig, SyslogFacility},
        writer_sink::WriterSink,
    },
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

const CONFIG_SECTION: &str = "Logging";

type SinkList = Arc<Vec<Arc<dyn LogSink>>>;

/// Shared authority on whether a message is emitted and where it goes.
///
/// `Registry` is a cheap, cloneable handle; clones share the same level and
/// sink list. One process-wide instance is available through
/// [`Registry::root`], but registries can also be built and injected
/// explicitly, which is what tests and embedders that need isolation do.
///
/// # Concurrency
///
/// The level is an atomic. The sink list is a copy-on-write snapshot behind a
/// reader/writer lock: [`add_output`](Self::add_output) swaps in a new list
/// under the write lock, and [`dispatch`](Self::dispatch) clones the current
/// snapshot under the read lock and releases it before any sink runs. Sinks
/// present when a dispatch starts each receive its entry exactly once.
#[derive(Clone)]
pub struct Registry {
    shared: Arc<Shared>,
}

struct Shared {
    level: AtomicU8,
    sinks: RwLock<SinkList>,
}

impl Registry {
    /// Registry at [`LogLevel::DEFAULT`] writing to standard output.
    #[must_use]
    pub fn new() -> Self {
        let registry = Self::without_outputs();
        registry.add_output(Arc::new(WriterSink::stdout()));
        registry
    }

    /// Registry at [`LogLevel::DEFAULT`] with no sinks at all.
    #[must_use]
    pub fn without_outputs() -> Self {
        Self {
            shared: Arc::new(Shared {
                level: AtomicU8::new(LogLevel::DEFAULT as u8),
                sinks: RwLock::new(Arc::new(Vec::new())),
            }),
        }
    }

    /// The process-wide default registry, created on first use with a
    /// standard output sink at [`LogLevel::DEFAULT`].
    pub fn root() -> &'static Registry {
        static ROOT: OnceLock<Registry> = OnceLock::new();
        ROOT.get_or_init(Registry::new)
    }

    /// Builds a registry from the `[Logging]` section of `config`.
    ///
    /// Standard output is included unless `stdout = false`.
    ///
    /// # Errors
    ///
    /// See [`apply_config`](Self::apply_config).
    pub fn from_config(config: &Config) -> Result<Self, LogError> {
        let registry = if config_flag(config, "stdout", true)? {
            Self::new()
        } else {
            Self::without_outputs()
        };
        registry.apply_config(config)?;
        Ok(registry)
    }

    /// Applies the `[Logging]` section of `config`: sets the level and
    /// appends the configured sinks. Existing sinks are kept.
    ///
    /// Recognised keys: `level`, `stderr`, `file`, `dir`, `app_name`,
    /// `syslog`, `syslog_tag`, `syslog_facility`. Each key is looked up in
    /// `[Logging]` first and then among the global keys.
    ///
    /// # Errors
    ///
    /// Fails on an unknown level or facility, a malformed boolean, a log file
    /// that cannot be opened, or `syslog = true` on a platform without syslog.
    /// Every key is validated before any file or directory is created, and
    /// the registry is left untouched when an error is returned. A file
    /// opened before a later open fails is not removed again.
    pub fn apply_config(&self, config: &Config) -> Result<(), LogError> {
        let plan = OutputPlan::from_config(config)?;
        let level = plan.level;
        let sinks = plan.open()?;

        if let Some(level) = level {
            self.set_level(level);
        }
        for sink in sinks {
            self.add_output(sink);
        }
        Ok(())
    }

    /// Appends a sink. Sinks receive entries in insertion order; the same
    /// sink added twice receives every entry twice.
    pub fn add_output(&self, sink: Arc<dyn LogSink>) {
        let mut guard = self
            .shared
            .sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.extend(guard.iter().cloned());
        next.push(sink);
        *guard = Arc::new(next);
    }

    /// Replaces the minimum level.
    pub fn set_level(&self, level: LogLevel) {
        self.shared.level.store(level as u8, Ordering::Relaxed);
    }

    /// Current minimum level.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_rank(self.shared.level.load(Ordering::Relaxed))
    }

    /// Whether a message at `level` would be emitted right now.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.snapshot().len()
    }

    /// Returns a named child logger. Nothing is registered.
    pub fn get_logger(&self, name: impl Into<Arc<str>>) -> Logger {
        Logger::new(self.clone(), name)
    }

    /// Filters, formats and fans out one message.
    ///
    /// Below the threshold this returns before `message` is rendered.
    /// Otherwise the message is rendered once, decorated as
    /// `(timestamp) [LEVEL] (name) message` (the name segment only when
    /// `name` is non-empty), trimmed, and handed to every sink.
    pub fn dispatch(&self, level: LogLevel, name: &str, message: impl fmt::Display) {
        if !self.enabled(level) {
            return;
        }

        let message = render_message(message);
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let line = render_line(&timestamp, level, name, &message);
        let entry = LogEntry::new(level, name, &message, &line);

        for sink in self.snapshot().iter() {
            sink.log(&entry);
        }
    }

    /// Logs without a name.
    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        self.dispatch(level, "", message);
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

    fn snapshot(&self) -> SinkList {
        Arc::clone(
            &self
                .shared
                .sinks
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("level", &self.level())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

/// Renders `message` without panicking. A `Display` impl that fails keeps
/// whatever it wrote before the error.
fn render_message(message: impl fmt::Display) -> String {
    let mut rendered = String::new();
    let _ = fmt::Write::write_fmt(&mut rendered, format_args!("{message}"));
    rendered
}

/// Builds the decorated line: `(timestamp) [LEVEL] (name) message`, trimmed.
pub(crate) fn render_line(timestamp: &str, level: LogLevel, name: &str, message: &str) -> String {
    let mut line = String::with_capacity(timestamp.len() + name.len() + message.len() + 16);
    line.push('(');
    line.push_str(timestamp);
    line.push_str(") [");
    line.push_str(level.label());
    line.push_str("] ");

    if !name.is_empty() {
        line.push('(');
        line.push_str(name);
        line.push_str(") ");
    }

    line.push_str(message);

    let trimmed = line.trim();
    if trimmed.len() == line.len() {
        line
    } else {
        trimmed.to_owned()
    }
}

/// Validated `[Logging]` settings. Nothing has been opened yet.
struct OutputPlan<'a> {
    level: Option<LogLevel>,
    stderr: bool,
    file: Option<&'a str>,
    dir: Option<(&'a str, Option<&'a str>)>,
    syslog: Option<SyslogConfig>,
}

impl<'a> OutputPlan<'a> {
    fn from_config(config: &'a Config) -> Result<Self, LogError> {
        let level = setting(config, "level").map(LogLevel::parse).transpose()?;
        let stderr = config_flag(config, "stderr", false)?;
        let syslog = if config_flag(config, "syslog", false)? {
            Some(syslog_config(config)?)
        } else {
            None
        };

        Ok(Self {
            level,
            stderr,
            file: setting(config, "file"),
            dir: setting(config, "dir").map(|dir| (dir, setting(config, "app_name"))),
            syslog,
        })
    }

    fn open(self) -> Result<Vec<Arc<dyn LogSink>>, LogError> {
        let mut sinks: Vec<Arc<dyn LogSink>> = Vec::new();

        if self.stderr {
            sinks.push(Arc::new(WriterSink::stderr()));
        }
        if let Some(path) = self.file {
            sinks.push(Arc::new(FileSink::open(path)?));
        }
        if let Some((dir, app_name)) = self.dir {
            sinks.push(Arc::new(FileSink::in_dir(dir, app_name)?));
        }
        if let Some(syslog) = &self.syslog {
            sinks.push(open_syslog(syslog)?);
        }
        Ok(sinks)
    }
}

fn setting<'a>(config: &'a Config, key: &str) -> Option<&'a str> {
    config.get_non_empty_or_global(CONFIG_SECTION, key)
}

fn config_flag(config: &Config, key: &'static str, default: bool) -> Result<bool, LogError> {
    match setting(config, key) {
        None => Ok(default),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(LogError::InvalidBool {
                key,
                value: value.to_owned(),
            }),
        },
    }
}

fn syslog_config(config: &Config) -> Result<SyslogConfig, LogError> {
    if cfg!(not(unix)) {
        return Err(LogError::SyslogUnsupported);
    }

    let facility = match setting(config, "syslog_facility") {
        Some(name) => SyslogFacility::from_name(name)
            .ok_or_else(|| LogError::UnknownFacility(name.to_owned()))?,
        None => SyslogFacility::default(),
    };
    Ok(SyslogConfig {
        facility,
        tag: setting(config, "syslog_tag")
            .unwrap_or(DEFAULT_SYSLOG_TAG)
            .to_owned(),
    })
}

#[cfg(unix)]
fn open_syslog(config: &SyslogConfig) -> Result<Arc<dyn LogSink>, LogError> {
    use crate::log::syslog_sink::SyslogSink;

    Ok(Arc::new(SyslogSink::open(config)))
}

#[cfg(not(unix))]
fn open_syslog(_config: &SyslogConfig) -> Result<Arc<dyn LogSink>, LogError> {
    Err(LogError::SyslogUnsupported)
}
