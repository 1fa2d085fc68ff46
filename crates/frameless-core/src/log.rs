//! File logger for diagnosing misbehaving target windows.
//!
//! Progress meant for the user goes to stdout. This log records the
//! per-window detail behind it in `~/.config/frameless/logs/frameless.log`.
//!
//! A run is short, but the non-elevated parent and its elevated relaunch
//! both write here, so every line carries the writing process id. The
//! file is rotated to `frameless.log.1` when a run starts and finds it
//! over the size limit; a run never rotates under itself.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "frameless.log";
const BACKUP_SUFFIX: &str = ".1";

/// Logging configuration, the `[logging]` table of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum level written. Unknown names mean `info`.
    pub level: Level,
    /// Size in megabytes above which the next run starts a fresh file.
    /// `0` never rotates.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: Level::Info,
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<String> for Level {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" | "warning" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.to_string().to_ascii_lowercase()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        })
    }
}

struct Logger {
    file: File,
    min_level: Level,
    pid: u32,
}

/// Initialises the global logger. Call once at startup.
///
/// Does nothing if `config.enabled` is `false`. Failing to open the file
/// leaves logging off; a diagnostic log never stops a run.
pub fn init(config: &LogConfig) {
    if !config.enabled {
        return;
    }
    let Some(dir) = crate::config::config_dir() else {
        return;
    };
    let Ok(file) = open_log(&dir.join("logs"), config.max_file_mb * 1024 * 1024) else {
        return;
    };

    let _ = LOGGER.set(Mutex::new(Logger {
        file,
        min_level: config.level,
        pid: std::process::id(),
    }));
}

/// Opens the log for appending, first moving an oversized one aside.
fn open_log(dir: &Path, max_bytes: u64) -> io::Result<File> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE_NAME);

    let len = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
    if needs_rotation(len, max_bytes) {
        let _ = fs::rename(&path, backup_path(&path));
    }

    OpenOptions::new().create(true).append(true).open(&path)
}

fn needs_rotation(len: u64, max_bytes: u64) -> bool {
    max_bytes > 0 && len >= max_bytes
}

/// `frameless.log` -> `frameless.log.1`.
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

/// Writes a log line if the level is at or above the configured minimum.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    if level < logger.min_level {
        return;
    }
    let line = format_line(&timestamp(), logger.pid, level, args);
    let _ = logger.file.write_all(line.as_bytes());
}

fn format_line(time: &str, pid: u32, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{time} {pid:>6} {level:<5} {args}\n")
}

fn timestamp() -> String {
    // UTC wall clock; good enough to line up with a repro.
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}
