use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest_oauth1::{OAuthClientProvider, Secrets};
use serde::Deserialize;

use crate::core::error::{Error, Result};
use crate::models::{Credentials, SearchRequest, Tweet};
use crate::providers::SearchSource;

const SEARCH_URL: &str = "https://api.twitter.com/1.1/search/tweets.json";
const USER_AGENT: &str = concat!("hashtag-rt-bot/", env!("CARGO_PKG_VERSION"));

/// `created_at` as the search endpoint renders it, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    statuses: Vec<Status>,
}

#[derive(Debug, Deserialize)]
struct Status {
    id: u64,
    created_at: String,
    text: String,
}

/// Client handle bound to one set of OAuth 1.0a credentials.
pub struct Twitter {
    /// The construction error when the HTTP client could not be built.
    client: std::result::Result<reqwest::Client, String>,
    credentials: Credentials,
}

impl Twitter {
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Twitter {
            client: Ok(client),
            credentials: credentials.clone(),
        })
    }

    /// Handle without an HTTP client. Every search on it fails with the
    /// error that stopped [`Twitter::new`].
    pub fn unusable(credentials: &Credentials, reason: impl Into<String>) -> Self {
        Twitter {
            client: Err(reason.into()),
            credentials: credentials.clone(),
        }
    }

    pub fn is_usable(&self) -> bool {
        self.client.is_ok()
    }

    fn secrets(&self) -> Secrets<'_> {
        let secrets = Secrets::new(
            self.credentials.consumer_key.as_str(),
            self.credentials.consumer_secret.as_str(),
        );
        if self.credentials.access_token.is_empty() {
            secrets
        } else {
            secrets.token(
                self.credentials.access_token.as_str(),
                self.credentials.access_token_secret.as_str(),
            )
        }
    }
}

#[async_trait(?Send)]
impl SearchSource for Twitter {
    async fn search_page(
        &self,
        request: &SearchRequest,
        count: u32,
        max_id: Option<u64>,
    ) -> Result<Vec<Tweet>> {
        let client = match &self.client {
            Ok(client) => client.clone(),
            Err(reason) => return Err(Error::Http(format!("no usable HTTP client: {}", reason))),
        };
        let params = query_params(request, count, max_id);
        log::debug!("GET {} {:?}", SEARCH_URL, params);

        let response = client
            .oauth1(self.secrets())
            .get(SEARCH_URL)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        parse_search_response(&body)
    }
}

pub fn query_params(request: &SearchRequest, count: u32, max_id: Option<u64>) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("q", request.query.clone()),
        ("count", count.to_string()),
    ];
    if let Some(language) = request.language {
        params.push(("lang", language.to_string()));
    }
    if let Some(result_type) = request.result_type {
        params.push(("result_type", result_type.as_str().to_string()));
    }
    if let Some(max_id) = max_id {
        params.push(("max_id", max_id.to_string()));
    }
    params
}

pub fn parse_search_response(body: &str) -> Result<Vec<Tweet>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    response
        .statuses
        .into_iter()
        .map(|status| {
            let created_at = DateTime::parse_from_str(&status.created_at, CREATED_AT_FORMAT)
                .map_err(|e| {
                    Error::Decode(format!("bad created_at '{}': {}", status.created_at, e))
                })?
                .with_timezone(&Utc);
            Ok(Tweet {
                id: status.id,
                created_at,
                text: status.text,
            })
        })
        .collect()
}
