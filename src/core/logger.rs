use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Local;
use env_logger::{Builder, Env};

use crate::core::clock;
use crate::core::error::{Error, Result};

pub const DEFAULT_LOG_PATH: &str = "logs.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Error,
    Title,
}

impl LogKind {
    /// Message body as it appears after the `timestamp | ` separator.
    pub fn render(&self, message: &str) -> String {
        match self {
            LogKind::Info => format!("[I]: {}", message),
            LogKind::Error => format!("[E]: {}", message),
            LogKind::Title => message.to_uppercase(),
        }
    }
}

impl FromStr for LogKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(LogKind::Info),
            "error" => Ok(LogKind::Error),
            "title" => Ok(LogKind::Title),
            other => Err(Error::UnknownLogKind(other.to_string())),
        }
    }
}

/// Append-only activity log. The file is opened and released on every write,
/// no handle is kept between calls.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ActivityLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn info(&self, message: &str) -> Result<()> {
        self.log(message, LogKind::Info)
    }

    pub fn error(&self, message: &str) -> Result<()> {
        self.log(message, LogKind::Error)
    }

    pub fn title(&self, message: &str) -> Result<()> {
        self.log(message, LogKind::Title)
    }

    /// Same as [`ActivityLog::log`] but with the kind given by name. An unknown
    /// name leaves an error record in the log before the failure is returned.
    pub fn log_as(&self, message: &str, kind: &str) -> Result<()> {
        match kind.parse::<LogKind>() {
            Ok(kind) => self.log(message, kind),
            Err(err) => {
                self.error(&err.to_string())?;
                Err(err)
            }
        }
    }

    pub fn log(&self, message: &str, kind: LogKind) -> Result<()> {
        let body = kind.render(message);
        match kind {
            LogKind::Error => log::error!("{}", message),
            LogKind::Info | LogKind::Title => log::info!("{}", message),
        }

        let line = format!("\n{} | {}", clock::now(), body);
        let mut file = match OpenOptions::new().create(true).append(true).open(&self.path) {
            Ok(file) => file,
            Err(source) => {
                // The store itself is gone, so the console is the only place left to report it.
                log::error!("Can't find the logs file {:?} to save the log", self.path);
                return Err(Error::LogStoreUnavailable {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if let Err(e) = file.write_all(line.as_bytes()) {
            log::error!("Undefined error: {}", e);
            let fallback = format!(
                "\n{} | {}",
                clock::now(),
                LogKind::Error.render(&format!("Undefined error: {}", e))
            );
            let _ = file.write_all(fallback.as_bytes());
        }
        Ok(())
    }

    /// Records an error that has no dedicated handling and lets the caller carry on.
    pub fn log_undefined_error(&self, err: &dyn fmt::Display) -> Result<()> {
        self.error(&format!("Undefined error: {}", err))
    }

    /// Writes `message` as an error line and hands back `err` for the caller to return.
    /// If the log itself is unreachable that failure wins.
    pub fn report(&self, message: &str, err: Error) -> Error {
        match self.error(message) {
            Ok(()) => err,
            Err(log_err) => log_err,
        }
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        ActivityLog::new(DEFAULT_LOG_PATH)
    }
}

/// Console diagnostics on stderr. `RUST_LOG` wins over the default level.
pub fn init_console(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}
