// src/application/queries/feeds/group.rs
use super::FeedQueryService;
use crate::{
    application::{
        dto::{FeedPage, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::group::GroupSlug,
};

pub struct GroupFeedQuery {
    pub slug: String,
    pub page: i64,
}

impl FeedQueryService {
    /// Posts assigned to one group, newest first. Unknown slugs are a
    /// lookup failure; a malformed slug cannot name any group and reports
    /// the same way.
    pub async fn group_feed(&self, query: GroupFeedQuery) -> ApplicationResult<FeedPage<PostDto>> {
        let unknown = || ApplicationError::not_found(format!("unknown group '{}'", query.slug));

        let slug = GroupSlug::new(query.slug.as_str()).map_err(|_| unknown())?;
        let group = self
            .group_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(unknown)?;

        let entries = self.post_repo.list_by_group(group.id).await?;
        Ok(Self::page_of(entries, query.page))
    }
}
