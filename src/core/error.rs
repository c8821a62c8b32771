use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// How far an error is allowed to travel once it has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Stops the run before any further stage executes.
    Fatal,
    /// Recorded, then the run carries on in a degraded state.
    Recoverable,
}

#[derive(Debug, Error)]
pub enum Error {
    // configuration
    #[error("Could not find the configuration file ({0}), remember to run from the project root")]
    ConfigNotFound(PathBuf),

    #[error("Failed to read configuration file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't parse the configuration for querying the tweets: {0}")]
    ConfigParse(String),

    #[error("Missing credential in configuration: {0}")]
    MissingCredential(&'static str),

    #[error("{0}")]
    UnsupportedLanguage(String),

    #[error("The result type should be 'mixed', 'recent' or 'popular', you requested '{0}'")]
    InvalidResultType(String),

    // activity log
    #[error("Internal key error when trying to log a message of kind '{0}'")]
    UnknownLogKind(String),

    #[error("Can't open the log file {path} to save the log")]
    LogStoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // platform
    #[error("Network error: {0}")]
    Http(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

impl Error {
    pub fn severity(&self) -> Severity {
        match self {
            Error::Http(_) | Error::Api { .. } | Error::Decode(_) => Severity::Recoverable,
            _ => Severity::Fatal,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<reqwest_oauth1::Error> for Error {
    fn from(err: reqwest_oauth1::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}
