mod fetcher_tests;

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use crate::core::error::{Error, Result};
use crate::models::{SearchRequest, Tweet};
use crate::providers::SearchSource;

pub fn tweet(id: u64) -> Tweet {
    Tweet {
        id,
        created_at: Utc.with_ymd_and_hms(2021, 3, 8, 12, 0, 0).unwrap() + Duration::seconds(id as i64),
        text: format!("#test tweet number {}", id),
    }
}

/// Timeline of tweets, newest first, that honours `count` and `max_id` like the
/// real endpoint. Fails once `fail_after` tweets have been handed out.
pub struct TimelineSource {
    pub tweets: Vec<Tweet>,
    pub fail_after: Option<usize>,
    pub calls: RefCell<Vec<(u32, Option<u64>)>>,
    served: RefCell<usize>,
}

impl TimelineSource {
    pub fn new(count: u64) -> Self {
        TimelineSource {
            tweets: (1..=count).rev().map(|id| tweet(id * 10)).collect(),
            fail_after: None,
            calls: RefCell::new(Vec::new()),
            served: RefCell::new(0),
        }
    }

    pub fn failing_after(mut self, served: usize) -> Self {
        self.fail_after = Some(served);
        self
    }
}

#[async_trait(?Send)]
impl SearchSource for TimelineSource {
    async fn search_page(
        &self,
        _request: &SearchRequest,
        count: u32,
        max_id: Option<u64>,
    ) -> Result<Vec<Tweet>> {
        self.calls.borrow_mut().push((count, max_id));
        let served = *self.served.borrow();
        if self.fail_after.is_some_and(|limit| served >= limit) {
            return Err(Error::Api {
                status: 429,
                message: "Rate limit exceeded".to_string(),
            });
        }

        let mut page: Vec<Tweet> = self
            .tweets
            .iter()
            .filter(|t| max_id.map_or(true, |max| t.id <= max))
            .take(count as usize)
            .cloned()
            .collect();
        if let Some(limit) = self.fail_after {
            page.truncate(limit - served);
        }
        *self.served.borrow_mut() += page.len();
        Ok(page)
    }
}

/// Hands out a fixed sequence of page results, then empty pages.
pub struct ScriptedSource {
    pages: RefCell<VecDeque<Result<Vec<Tweet>>>>,
}

impl ScriptedSource {
    pub fn new(pages: Vec<Result<Vec<Tweet>>>) -> Self {
        ScriptedSource {
            pages: RefCell::new(pages.into()),
        }
    }
}

#[async_trait(?Send)]
impl SearchSource for ScriptedSource {
    async fn search_page(
        &self,
        _request: &SearchRequest,
        _count: u32,
        _max_id: Option<u64>,
    ) -> Result<Vec<Tweet>> {
        self.pages.borrow_mut().pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}
