// src/domain/author/entity.rs
use crate::domain::author::value_objects::{AuthorId, Username};

/// Identity entity. Credentials and sessions live with the external
/// identity collaborator; the core only needs a stable id and a unique
/// username for display and profile feeds.
#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub username: Username,
    pub display_name: String,
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub username: Username,
    pub display_name: String,
}
