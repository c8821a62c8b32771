use chrono::{DateTime, Utc};

use crate::core::result_type::ResultType;

#[derive(Clone, Debug, PartialEq)]
pub struct Tweet {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
    pub token_source: TokenSource,
}

/// Where the access-token pair came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenSource {
    Config,
    Environment,
    /// No token: requests are signed with the consumer pair only.
    #[default]
    None,
}

impl TokenSource {
    pub fn describe(&self) -> &'static str {
        match self {
            TokenSource::Config => "access token taken from the configuration file",
            TokenSource::Environment => "access token taken from the environment",
            TokenSource::None => "no access token configured, signing with the consumer key only",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub query: String,
    pub language: Option<&'static str>,
    pub result_type: Option<ResultType>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            language: None,
            result_type: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Stop quietly on the first failure and keep what was collected.
    #[default]
    Lenient,
    /// Log the failure and hand it back to the caller.
    Strict,
}
