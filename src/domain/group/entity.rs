// src/domain/group/entity.rs
use crate::domain::group::value_objects::{GroupId, GroupSlug, GroupTitle};

/// Topical group posts can be assigned to. Created administratively and
/// immutable afterwards: there is no rename or re-slug operation, and
/// deletion is blocked at the store while any post references the group.
#[derive(Debug, Clone)]
pub struct Group {
    pub id: GroupId,
    pub title: GroupTitle,
    pub slug: GroupSlug,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewGroup {
    pub title: GroupTitle,
    pub slug: GroupSlug,
    pub description: String,
}
