use std::path::Path;

use serde::Deserialize;

use crate::core::error::{Error, Result};
use crate::core::language;
use crate::core::logger::ActivityLog;
use crate::core::result_type::{self, ResultType};
use crate::models::{Credentials, FetchPolicy, SearchRequest, TokenSource};

pub const DEFAULT_CONFIG_PATH: &str = "configuration.json";

pub const ACCESS_TOKEN_VAR: &str = "TWITTER_ACCESS_TOKEN";
pub const ACCESS_TOKEN_SECRET_VAR: &str = "TWITTER_ACCESS_TOKEN_SECRET";

#[derive(Debug, Deserialize)]
struct RawConfig {
    credentials: Option<RawCredentials>,
    hashtag: Option<String>,
    #[serde(rename = "max-tweets")]
    max_tweets: Option<u32>,
    language: Option<String>,
    #[serde(rename = "result-type")]
    result_type: Option<String>,
    #[serde(default)]
    strict: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawCredentials {
    consumer_key: Option<String>,
    consumer_secret: Option<String>,
    access_token: Option<String>,
    access_token_secret: Option<String>,
}

/// Validated bot configuration. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub credentials: Credentials,
    pub hashtag: String,
    pub max_tweets: u32,
    /// Two-letter code, already resolved from the configured language name.
    pub language: &'static str,
    pub result_type: ResultType,
    pub strict: bool,
}

impl Config {
    /// Load the configuration file, taking the access-token fallback from the process environment.
    pub fn load(path: &Path, log: &ActivityLog) -> Result<Self> {
        if !path.exists() {
            let err = Error::ConfigNotFound(path.to_path_buf());
            return Err(log.report(&err.to_string(), err));
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(source) => {
                let err = Error::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                };
                log.log_undefined_error(&err)?;
                return Err(err);
            }
        };

        Self::parse(&contents, log, |name| std::env::var(name).ok())
    }

    pub fn parse<F>(contents: &str, log: &ActivityLog, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw: RawConfig = serde_json::from_str(contents).map_err(|e| {
            let err = Error::ConfigParse(e.to_string());
            log.report(&err.to_string(), err)
        })?;

        let credentials = Self::extract_credentials(raw.credentials, log, env)?;

        let missing = |field: &str| {
            let err = Error::ConfigParse(format!("missing '{}'", field));
            log.report("Can't parse the configuration for querying the tweets...", err)
        };
        let hashtag = raw.hashtag.ok_or_else(|| missing("hashtag"))?;
        let max_tweets = raw.max_tweets.ok_or_else(|| missing("max-tweets"))?;
        let language_name = raw.language.ok_or_else(|| missing("language"))?;
        let result_type_name = raw.result_type.ok_or_else(|| missing("result-type"))?;

        let language = language::resolve(&language_name.to_lowercase(), log)?;
        let result_type = result_type::validate(&result_type_name.to_lowercase(), log)?;

        Ok(Config {
            credentials,
            hashtag,
            max_tweets,
            language,
            result_type,
            strict: raw.strict,
        })
    }

    fn extract_credentials<F>(
        raw: Option<RawCredentials>,
        log: &ActivityLog,
        env: F,
    ) -> Result<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing = |field: &'static str| {
            log.report(
                "Internal key error when using the credentials...",
                Error::MissingCredential(field),
            )
        };

        let raw = raw.ok_or_else(|| missing("credentials"))?;
        let consumer_key = raw.consumer_key.ok_or_else(|| missing("consumer-key"))?;
        let consumer_secret = raw.consumer_secret.ok_or_else(|| missing("consumer-secret"))?;

        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        let from_config = non_empty(raw.access_token).zip(non_empty(raw.access_token_secret));
        let from_env = || non_empty(env(ACCESS_TOKEN_VAR)).zip(non_empty(env(ACCESS_TOKEN_SECRET_VAR)));

        let ((access_token, access_token_secret), token_source) = match from_config {
            Some(pair) => (pair, TokenSource::Config),
            None => match from_env() {
                Some(pair) => (pair, TokenSource::Environment),
                None => ((String::new(), String::new()), TokenSource::None),
            },
        };

        Ok(Credentials {
            consumer_key,
            consumer_secret,
            access_token,
            access_token_secret,
            token_source,
        })
    }

    pub fn search_request(&self) -> SearchRequest {
        SearchRequest {
            query: self.hashtag.clone(),
            language: Some(self.language),
            result_type: Some(self.result_type),
        }
    }

    pub fn fetch_policy(&self) -> FetchPolicy {
        if self.strict {
            FetchPolicy::Strict
        } else {
            FetchPolicy::Lenient
        }
    }
}
