// src/application/queries/feeds/index.rs
use super::FeedQueryService;
use crate::application::{
    dto::{FeedPage, PostDto},
    error::ApplicationResult,
};

pub struct IndexFeedQuery {
    pub page: i64,
}

impl FeedQueryService {
    /// Global feed: every post, newest first.
    pub async fn index_feed(&self, query: IndexFeedQuery) -> ApplicationResult<FeedPage<PostDto>> {
        let entries = self.post_repo.list_all().await?;
        Ok(Self::page_of(entries, query.page))
    }
}
