// src/application/queries/feeds/profile.rs
use super::FeedQueryService;
use crate::{
    application::{
        dto::{FeedPage, PostDto},
        error::ApplicationResult,
    },
    domain::author::Username,
};

pub struct ProfileFeedQuery {
    pub username: String,
    pub page: i64,
}

impl FeedQueryService {
    /// Posts by one author, newest first. An unknown username is an empty
    /// feed, not a failure.
    pub async fn profile_feed(
        &self,
        query: ProfileFeedQuery,
    ) -> ApplicationResult<FeedPage<PostDto>> {
        let author = match Username::new(query.username.as_str()) {
            Ok(username) => self.author_repo.find_by_username(&username).await?,
            Err(_) => None,
        };

        let entries = match author {
            Some(author) => self.post_repo.list_by_author(author.id).await?,
            None => Vec::new(),
        };

        Ok(Self::page_of(entries, query.page))
    }
}
