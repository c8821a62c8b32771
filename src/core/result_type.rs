use std::fmt;

use crate::core::error::{Error, Result};
use crate::core::logger::ActivityLog;

/// Ranking mode passed to the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultType {
    Mixed,
    Recent,
    Popular,
}

impl ResultType {
    pub const ALL: [ResultType; 3] = [ResultType::Mixed, ResultType::Recent, ResultType::Popular];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResultType::Mixed => "mixed",
            ResultType::Recent => "recent",
            ResultType::Popular => "popular",
        }
    }

    /// Case-sensitive after trimming.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ALL.into_iter().find(|kind| kind.as_str() == trimmed)
    }
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn validate(value: &str, log: &ActivityLog) -> Result<ResultType> {
    match ResultType::parse(value) {
        Some(kind) => Ok(kind),
        None => Err(log.report(
            "Invalid result type from the configuration",
            Error::InvalidResultType(value.trim().to_string()),
        )),
    }
}
