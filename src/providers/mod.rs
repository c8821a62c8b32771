pub mod twitter;


use async_trait::async_trait;

use crate::core::error::Result;
use crate::models::{SearchRequest, Tweet};

/// A platform that answers keyword searches one page at a time.
#[async_trait(?Send)]
pub trait SearchSource {
    /// Up to `count` results, newest first. When `max_id` is set, only results
    /// with an id less than or equal to it are returned.
    async fn search_page(
        &self,
        request: &SearchRequest,
        count: u32,
        max_id: Option<u64>,
    ) -> Result<Vec<Tweet>>;
}
