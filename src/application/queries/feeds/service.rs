// src/application/queries/feeds/service.rs
use std::sync::Arc;

use crate::{
    application::dto::{FEED_PAGE_SIZE, FeedPage, PostDto, paginate},
    domain::{
        author::AuthorRepository,
        group::GroupRepository,
        post::{FeedEntry, PostReadRepository},
    },
};

/// Assembles the three feed surfaces: global index, per-group, and author
/// profile. Read-only and world-readable; no actor identity is involved.
pub struct FeedQueryService {
    pub(super) post_repo: Arc<dyn PostReadRepository>,
    pub(super) group_repo: Arc<dyn GroupRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
}

impl FeedQueryService {
    pub fn new(
        post_repo: Arc<dyn PostReadRepository>,
        group_repo: Arc<dyn GroupRepository>,
        author_repo: Arc<dyn AuthorRepository>,
    ) -> Self {
        Self {
            post_repo,
            group_repo,
            author_repo,
        }
    }

    pub(super) fn page_of(entries: Vec<FeedEntry>, page: i64) -> FeedPage<PostDto> {
        let items: Vec<PostDto> = entries.into_iter().map(Into::into).collect();
        paginate(items, FEED_PAGE_SIZE, page)
    }
}
