// src/application/commands/authors/register.rs
use super::AuthorCommandService;
use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::author::{NewAuthor, Username},
};

pub struct RegisterAuthorCommand {
    pub username: String,
    pub display_name: String,
}

impl AuthorCommandService {
    /// Mint an author row for the external identity collaborator.
    /// Credentials and sessions stay outside the core; this only
    /// guarantees a stable id and a unique username.
    pub async fn register_author(
        &self,
        command: RegisterAuthorCommand,
    ) -> ApplicationResult<AuthorDto> {
        let username = Username::new(command.username)?;

        if self
            .author_repo
            .find_by_username(&username)
            .await?
            .is_some()
        {
            return Err(ApplicationError::conflict(format!(
                "username '{username}' is already taken"
            )));
        }

        let created = self
            .author_repo
            .insert(NewAuthor {
                username,
                display_name: command.display_name,
            })
            .await?;

        tracing::info!(author_id = i64::from(created.id), username = %created.username, "author registered");

        Ok(created.into())
    }
}
