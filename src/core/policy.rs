use crate::core::error::{Error, Severity};
use crate::models::FetchPolicy;

/// Pipeline stage an error surfaced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    LoadConfig,
    Connect,
    Fetch,
}

/// What the caller does with an error once it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Return it and stop the run.
    Propagate,
    /// Record it as an undefined error in the activity log and keep going.
    LogAndContinue,
    /// Drop it without a trace in the activity log.
    Suppress,
}

pub fn for_stage(stage: Stage, err: &Error, fetch: FetchPolicy) -> Policy {
    match (err.severity(), stage) {
        (Severity::Fatal, _) => Policy::Propagate,
        (Severity::Recoverable, Stage::LoadConfig) => Policy::Propagate,
        (Severity::Recoverable, Stage::Connect) => Policy::LogAndContinue,
        (Severity::Recoverable, Stage::Fetch) => match fetch {
            FetchPolicy::Lenient => Policy::Suppress,
            FetchPolicy::Strict => Policy::Propagate,
        },
    }
}
