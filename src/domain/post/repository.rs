use crate::domain::author::value_objects::AuthorId;
use crate::domain::errors::DomainResult;
use crate::domain::group::value_objects::GroupId;
use crate::domain::post::entity::{FeedEntry, NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::PostId;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    /// Fails with `NotFound` when the id is unknown.
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
}

/// All listings are ordered by descending `pub_date`, ties broken by
/// descending id. The ordering is part of the contract, not an
/// implementation detail.
#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<FeedEntry>>;
    async fn list_all(&self) -> DomainResult<Vec<FeedEntry>>;
    async fn list_by_group(&self, group_id: GroupId) -> DomainResult<Vec<FeedEntry>>;
    async fn list_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<FeedEntry>>;
}
