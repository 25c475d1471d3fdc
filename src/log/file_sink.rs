use std::{
    fs::{self, File, OpenOptions},
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::log::{
    log_entry::LogEntry, log_error::LogError, log_sink::LogSink, writer_sink::WriterSink,
};

/// Appends decorated lines to a file.
///
/// Writes are unbuffered: each line has reached the file when `log` returns.
#[derive(Debug)]
pub struct FileSink {
    inner: WriterSink<File>,
    path: PathBuf,
}

impl FileSink {
    /// Opens `path` for appending, creating it and any missing parent
    /// directories. A leading `~` is expanded to the home directory.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] when the directory or file cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = expand_path(path.as_ref());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| LogError::Open {
                path: path.clone(),
                source,
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            inner: WriterSink::new(file),
            path,
        })
    }

    /// Opens a fresh, uniquely named file inside `dir`.
    ///
    /// # Example Filename
    /// `logs/demo-20251102_023045-pid1234.log`
    ///
    /// # Errors
    ///
    /// Same as [`FileSink::open`].
    pub fn in_dir<D: AsRef<Path>>(dir: D, app_name: Option<&str>) -> Result<Self, LogError> {
        let dir = expand_path(dir.as_ref());
        Self::open(dir.join(log_file_name(app_name)))
    }

    /// Returns the path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    #[inline]
    fn log(&self, entry: &LogEntry<'_>) {
        self.inner.log(entry);
    }
}

fn log_file_name(app_name: Option<&str>) -> String {
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let pid = std::process::id();

    match app_name.filter(|name| !name.is_empty()) {
        Some(name) => format!("{name}-{ts}-pid{pid}.log"),
        None => format!("{ts}-pid{pid}.log"),
    }
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path: &Path) -> PathBuf {
    let Some(path_str) = path.to_str() else {
        return path.to_path_buf();
    };

    if !path_str.starts_with('~') {
        return path.to_path_buf();
    }

    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .map(PathBuf::from);

    match home {
        Some(home) if path_str == "~" => home,
        Some(mut home) if path_str.starts_with("~/") || path_str.starts_with("~\\") => {
            home.push(&path_str[2..]);
            home
        }
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::log::log_level::LogLevel;

    #[test]
    fn open_creates_parents_and_appends() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("nested").join("app.log");

        {
            let sink = FileSink::open(&path).expect("open");
            sink.log(&LogEntry::new(LogLevel::Info, "", "one", "line one"));
        }
        {
            let sink = FileSink::open(&path).expect("reopen");
            assert_eq!(sink.path(), path.as_path());
            sink.log(&LogEntry::new(LogLevel::Warn, "", "two", "line two"));
        }

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "line one\nline two\n");
    }

    #[test]
    fn open_fails_when_parent_is_a_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let err = FileSink::open(blocker.join("app.log")).expect_err("parent is a file");
        assert!(matches!(err, LogError::Open { .. }), "got {err:?}");
    }

    #[test]
    fn in_dir_names_file_after_app_and_pid() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let sink = FileSink::in_dir(tmp.path(), Some("demo")).expect("in_dir");

        let name = sink.path().file_name().unwrap().to_str().unwrap().to_owned();
        assert!(name.starts_with("demo-"), "{name}");
        assert!(name.ends_with(&format!("-pid{}.log", std::process::id())), "{name}");
        assert!(sink.path().exists());
    }

    #[test]
    fn in_dir_without_app_name_starts_with_timestamp() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let sink = FileSink::in_dir(tmp.path(), None).expect("in_dir");

        let name = sink.path().file_name().unwrap().to_str().unwrap().to_owned();
        assert!(name.chars().next().unwrap().is_ascii_digit(), "{name}");
    }

    #[test]
    fn expand_path_leaves_plain_paths_alone() {
        assert_eq!(expand_path(Path::new("/var/log/x.log")), PathBuf::from("/var/log/x.log"));
        assert_eq!(expand_path(Path::new("rel/x.log")), PathBuf::from("rel/x.log"));
    }

    #[test]
    fn expand_path_uses_home() {
        if let Ok(home) = std::env::var("HOME") {
            assert_eq!(expand_path(Path::new("~")), PathBuf::from(&home));
            assert_eq!(
                expand_path(Path::new("~/logs/a.log")),
                PathBuf::from(&home).join("logs/a.log")
            );
        }
    }
}
