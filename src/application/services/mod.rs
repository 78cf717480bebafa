// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            authors::AuthorCommandService, groups::GroupCommandService, posts::PostCommandService,
        },
        ports::time::Clock,
        queries::feeds::FeedQueryService,
    },
    domain::{
        author::AuthorRepository,
        group::GroupRepository,
        post::{PostReadRepository, PostWriteRepository},
    },
};

/// Wiring bundle handed to the presentation layer: one command service per
/// mutable aggregate plus the read-only feed assembler.
pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub group_commands: Arc<GroupCommandService>,
    pub author_commands: Arc<AuthorCommandService>,
    pub feed_queries: Arc<FeedQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        group_repo: Arc<dyn GroupRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&group_repo),
            Arc::clone(&clock),
        ));

        let group_commands = Arc::new(GroupCommandService::new(Arc::clone(&group_repo)));
        let author_commands = Arc::new(AuthorCommandService::new(Arc::clone(&author_repo)));

        let feed_queries = Arc::new(FeedQueryService::new(
            post_read_repo,
            group_repo,
            author_repo,
        ));

        Self {
            post_commands,
            group_commands,
            author_commands,
            feed_queries,
        }
    }
}
