// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{ActingAuthor, PostDto},
        error::ApplicationResult,
    },
    domain::post::{FeedEntry, NewPost, PostText},
};

pub struct CreatePostCommand {
    pub text: String,
    /// Slug of the group to assign the post to, if any.
    pub group: Option<String>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &ActingAuthor,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let text = PostText::new(command.text)?;
        let group = self.resolve_group(command.group.as_deref()).await?;
        let now = self.clock.now();

        let created = self
            .write_repo
            .insert(NewPost {
                text,
                pub_date: now,
                group_id: group.as_ref().map(|g| g.id),
                author_id: actor.id,
            })
            .await?;

        tracing::info!(
            post_id = i64::from(created.id),
            author = %actor.username,
            group = group.as_ref().map(|g| g.slug.as_str()),
            "post created"
        );

        Ok(FeedEntry {
            post: created,
            author_username: actor.username.clone(),
            group_slug: group.map(|g| g.slug),
        }
        .into())
    }
}
