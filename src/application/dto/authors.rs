use crate::domain::author::{Author, AuthorId, Username};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDto {
    pub id: i64,
    pub username: String,
    pub display_name: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            id: author.id.into(),
            username: author.username.into_inner(),
            display_name: author.display_name,
        }
    }
}

/// The identity attempting a mutation, threaded explicitly into every
/// lifecycle call. Supplied by the external identity collaborator; read
/// paths never require one.
#[derive(Debug, Clone)]
pub struct ActingAuthor {
    pub id: AuthorId,
    pub username: Username,
}

impl From<&Author> for ActingAuthor {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            username: author.username.clone(),
        }
    }
}
