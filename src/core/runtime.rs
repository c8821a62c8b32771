use std::path::PathBuf;

use crate::{
    core::config::{Config, DEFAULT_CONFIG_PATH},
    core::error::Result,
    core::fetcher,
    core::logger::{ActivityLog, DEFAULT_LOG_PATH},
    core::policy::{self, Policy, Stage},
    models::{Credentials, FetchPolicy, Tweet},
    providers::twitter::Twitter,
    providers::SearchSource,
};

#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    pub config_path: PathBuf,
    pub log_path: PathBuf,
    /// Forces strict fetching even if the configuration file does not ask for it.
    pub strict: bool,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        RuntimeOptions {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            strict: false,
        }
    }
}

/// Everything a run needs, assembled once by [`Runtime::init`].
pub struct Runtime<S: SearchSource = Twitter> {
    config: Config,
    source: S,
    log: ActivityLog,
    fetch_policy: FetchPolicy,
}

impl Runtime<Twitter> {
    /// Loads the configuration and builds the client handle. No request is sent yet.
    pub fn init(options: &RuntimeOptions) -> Result<Self> {
        let log = ActivityLog::new(&options.log_path);
        log.title("hashtag rt bot starting")?;

        let config = Config::load(&options.config_path, &log)?;
        log.info(&format!(
            "Searching for '{}' ({} tweets max, lang {}, {} results)",
            config.hashtag, config.max_tweets, config.language, config.result_type
        ))?;
        log.info(config.credentials.token_source.describe())?;

        let twitter = connect(Twitter::new(&config.credentials), &config.credentials, &log)?;

        let fetch_policy = if options.strict {
            FetchPolicy::Strict
        } else {
            config.fetch_policy()
        };

        Ok(Runtime::with_source(config, twitter, log, fetch_policy))
    }
}

/// Applies the connect-stage policy to the outcome of building the client handle.
pub(crate) fn connect(
    built: Result<Twitter>,
    credentials: &Credentials,
    log: &ActivityLog,
) -> Result<Twitter> {
    match built {
        Ok(twitter) => Ok(twitter),
        Err(err) => match policy::for_stage(Stage::Connect, &err, FetchPolicy::Lenient) {
            Policy::Propagate => Err(log.report("Can't build the Twitter client", err)),
            Policy::LogAndContinue | Policy::Suppress => {
                log.log_undefined_error(&err)?;
                Ok(Twitter::unusable(credentials, err.to_string()))
            }
        },
    }
}

impl<S: SearchSource> Runtime<S> {
    pub fn with_source(config: Config, source: S, log: ActivityLog, fetch_policy: FetchPolicy) -> Self {
        Runtime {
            config,
            source,
            log,
            fetch_policy,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn fetch_policy(&self) -> FetchPolicy {
        self.fetch_policy
    }

    /// Runs the bounded search and records how many tweets came back.
    pub async fn run(&self) -> Result<Vec<Tweet>> {
        let request = self.config.search_request();
        let tweets = fetcher::fetch(
            &self.source,
            &request,
            self.config.max_tweets,
            self.fetch_policy,
            &self.log,
        )
        .await?;

        self.log.title("search results")?;
        self.log.info(&format!(
            "Collected {} of {} requested tweets for '{}'",
            tweets.len(),
            self.config.max_tweets,
            self.config.hashtag
        ))?;
        Ok(tweets)
    }
}
