// src/application/queries/feeds/get_group.rs
use super::FeedQueryService;
use crate::{
    application::{
        dto::GroupDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::group::GroupSlug,
};

pub struct GetGroupQuery {
    pub slug: String,
}

impl FeedQueryService {
    /// Group metadata for rendering a group page header.
    pub async fn get_group(&self, query: GetGroupQuery) -> ApplicationResult<GroupDto> {
        let unknown = || ApplicationError::not_found(format!("unknown group '{}'", query.slug));

        let slug = GroupSlug::new(query.slug.as_str()).map_err(|_| unknown())?;
        let group = self
            .group_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(unknown)?;
        Ok(group.into())
    }
}
