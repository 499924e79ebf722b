use super::{FlogError, Level, LockScope, WriteLock};
use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::trace;

/// The four leveled print operations. Each appends one record and returns
/// the number of bytes written.
pub trait FileLogger: Send + Sync {
    fn log_info(&self, args: fmt::Arguments<'_>) -> Result<usize, FlogError>;
    fn log_debug(&self, args: fmt::Arguments<'_>) -> Result<usize, FlogError>;
    fn log_warning(&self, args: fmt::Arguments<'_>) -> Result<usize, FlogError>;
    fn log_error(&self, args: fmt::Arguments<'_>) -> Result<usize, FlogError>;
}

/// Appends timestamped lines to a single file.
///
/// The file is opened and closed on every write, so nothing stays open
/// between calls and external rotation of the file is tolerated.
#[derive(Debug, Clone)]
pub struct LineLogger {
    path: PathBuf,
    level: Level,
    lock: WriteLock,
}

impl LineLogger {
    /// Binds `path` under the process-wide write lock, with level `Info`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FlogError> {
        Self::with_scope(path, LockScope::Global)
    }

    pub fn with_scope(path: impl AsRef<Path>, scope: LockScope) -> Result<Self, FlogError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(FlogError::InvalidArgument("no log file path was given".into()));
        }
        Ok(Self {
            path: path.to_path_buf(),
            level: Level::default(),
            lock: WriteLock::for_scope(scope, path),
        })
    }

    /// Sets the level used by [`LineLogger::log`].
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn log(&self, args: fmt::Arguments<'_>) -> Result<usize, FlogError> {
        self.write_record(self.level, args)
    }

    pub fn log_at(&self, level: Level, args: fmt::Arguments<'_>) -> Result<usize, FlogError> {
        self.write_record(level, args)
    }

    fn write_record(&self, level: Level, args: fmt::Arguments<'_>) -> Result<usize, FlogError> {
        let _guard = self.lock.acquire();
        let now = Local::now().naive_local();
        self.append_record(level, now, args)
    }

    /// Appends one record stamped with `at`. Callers must hold the write lock.
    fn append_record(
        &self,
        level: Level,
        at: NaiveDateTime,
        args: fmt::Arguments<'_>,
    ) -> Result<usize, FlogError> {
        let prefix = format_prefix(level, at);
        let mut file = open_append(&self.path).map_err(|e| self.io_error(e))?;
        let record = format!("{prefix}{args}\n");
        file.write_all(record.as_bytes()).map_err(|e| self.io_error(e))?;
        // Close errors are not reported.
        drop(file);

        trace!(path = ?self.path, %level, bytes = record.len(), "record appended");
        Ok(record.len())
    }

    fn io_error(&self, source: io::Error) -> FlogError {
        FlogError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl FileLogger for LineLogger {
    fn log_info(&self, args: fmt::Arguments<'_>) -> Result<usize, FlogError> {
        self.write_record(Level::Info, args)
    }

    fn log_debug(&self, args: fmt::Arguments<'_>) -> Result<usize, FlogError> {
        self.write_record(Level::Debug, args)
    }

    fn log_warning(&self, args: fmt::Arguments<'_>) -> Result<usize, FlogError> {
        self.write_record(Level::Warning, args)
    }

    fn log_error(&self, args: fmt::Arguments<'_>) -> Result<usize, FlogError> {
        self.write_record(Level::Error, args)
    }
}

/// `[DD.MM.YYYY HH:MM:SS]: LEVEL ` including the trailing space.
pub fn format_prefix(level: Level, at: NaiveDateTime) -> String {
    format!("[{}]: {} ", at.format("%d.%m.%Y %H:%M:%S"), level.tag())
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).read(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o744);
    }
    options.open(path)
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::flog::FileLogger as _;
        ($logger).log_info(format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::flog::FileLogger as _;
        ($logger).log_debug(format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::flog::FileLogger as _;
        ($logger).log_warning(format_args!($($arg)+))
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {{
        use $crate::flog::FileLogger as _;
        ($logger).log_error(format_args!($($arg)+))
    }};
}
