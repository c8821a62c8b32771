use std::collections::VecDeque;

use crate::core::error::Result;
use crate::core::logger::ActivityLog;
use crate::core::policy::{self, Policy, Stage};
use crate::models::{FetchPolicy, SearchRequest, Tweet};
use crate::providers::SearchSource;

/// Largest page the search endpoint will hand out.
pub const PAGE_SIZE: u32 = 100;

/// Walks search pages newest-first, handing out at most `limit` tweets in total.
pub struct SearchCursor<'a, S: SearchSource + ?Sized> {
    source: &'a S,
    request: &'a SearchRequest,
    remaining: u32,
    max_id: Option<u64>,
    buffer: VecDeque<Tweet>,
    exhausted: bool,
}

impl<'a, S: SearchSource + ?Sized> SearchCursor<'a, S> {
    pub fn new(source: &'a S, request: &'a SearchRequest, limit: u32) -> Self {
        SearchCursor {
            source,
            request,
            remaining: limit,
            max_id: None,
            buffer: VecDeque::new(),
            exhausted: false,
        }
    }

    pub async fn next_tweet(&mut self) -> Result<Option<Tweet>> {
        if self.remaining == 0 {
            return Ok(None);
        }

        if self.buffer.is_empty() {
            if self.exhausted {
                return Ok(None);
            }
            let count = self.remaining.min(PAGE_SIZE);
            let page = self.source.search_page(self.request, count, self.max_id).await?;

            // Next page starts just below the oldest id seen so far
            match page.iter().map(|tweet| tweet.id).min() {
                Some(0) | None => self.exhausted = true,
                Some(oldest) => self.max_id = Some(oldest - 1),
            }
            self.buffer.extend(page);
        }

        match self.buffer.pop_front() {
            Some(tweet) => {
                self.remaining -= 1;
                Ok(Some(tweet))
            }
            None => Ok(None),
        }
    }
}

/// Collects up to `max_results` tweets for `request`.
///
/// With [`FetchPolicy::Lenient`] a failure part way through ends the search and
/// whatever was collected is returned, nothing is written to the activity log.
/// With [`FetchPolicy::Strict`] the failure is logged and returned.
pub async fn fetch<S: SearchSource + ?Sized>(
    source: &S,
    request: &SearchRequest,
    max_results: u32,
    fetch_policy: FetchPolicy,
    log: &ActivityLog,
) -> Result<Vec<Tweet>> {
    let mut cursor = SearchCursor::new(source, request, max_results);
    let mut tweets = Vec::new();

    loop {
        match cursor.next_tweet().await {
            Ok(Some(tweet)) => tweets.push(tweet),
            Ok(None) => break,
            Err(err) => match policy::for_stage(Stage::Fetch, &err, fetch_policy) {
                Policy::Suppress => {
                    log::debug!("Search stopped after {} tweets: {}", tweets.len(), err);
                    break;
                }
                _ => {
                    let message = format!("Search failed after {} tweets: {}", tweets.len(), err);
                    return Err(log.report(&message, err));
                }
            },
        }
    }

    Ok(tweets)
}
