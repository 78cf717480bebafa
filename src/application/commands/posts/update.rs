// src/application/commands/posts/update.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{ActingAuthor, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{
        FeedEntry, PostId, PostText, PostUpdate, specifications::CanEditPostSpec,
    },
};

pub struct UpdatePostCommand {
    pub id: i64,
    pub text: String,
    /// Slug of the group to assign; `None` clears the assignment.
    pub group: Option<String>,
}

impl PostCommandService {
    /// Edit a post's text and group assignment. The authorization check
    /// runs before any validation or write, so a rejected actor observes
    /// no mutation at all. `author` and `pub_date` are never touched.
    pub async fn update_post(
        &self,
        actor: &ActingAuthor,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::new(command.id)?;
        let entry = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if !CanEditPostSpec::new(&entry.post, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author may edit a post",
            ));
        }

        let text = PostText::new(command.text)?;
        let group = self.resolve_group(command.group.as_deref()).await?;

        let updated = self
            .write_repo
            .update(PostUpdate {
                id,
                text,
                group_id: group.as_ref().map(|g| g.id),
            })
            .await?;

        tracing::info!(
            post_id = i64::from(updated.id),
            author = %actor.username,
            "post updated"
        );

        Ok(FeedEntry {
            post: updated,
            author_username: entry.author_username,
            group_slug: group.map(|g| g.slug),
        }
        .into())
    }
}
