// src/application/commands/groups/create.rs
use super::GroupCommandService;
use crate::{
    application::{
        dto::GroupDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::group::{GroupSlug, GroupTitle, NewGroup},
};

pub struct CreateGroupCommand {
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl GroupCommandService {
    /// Administrative operation. Groups are immutable once created; there
    /// is no update counterpart.
    pub async fn create_group(&self, command: CreateGroupCommand) -> ApplicationResult<GroupDto> {
        let title = GroupTitle::new(command.title)?;
        let slug = GroupSlug::new(command.slug)?;

        // The unique constraint still backstops concurrent creations.
        if self.group_repo.find_by_slug(&slug).await?.is_some() {
            return Err(ApplicationError::conflict(format!(
                "group slug '{slug}' already exists"
            )));
        }

        let created = self
            .group_repo
            .insert(NewGroup {
                title,
                slug,
                description: command.description,
            })
            .await?;

        tracing::info!(group_id = i64::from(created.id), slug = %created.slug, "group created");

        Ok(created.into())
    }
}
