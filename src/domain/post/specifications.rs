use crate::domain::author::value_objects::AuthorId;
use crate::domain::post::entity::Post;

/// Edit gate: a post may only be mutated by its author. No roles, no
/// group-level permissions, no delegation. Never consulted on read paths;
/// feeds and detail views are world-readable.
pub struct CanEditPostSpec<'a> {
    post: &'a Post,
    actor_id: AuthorId,
}

impl<'a> CanEditPostSpec<'a> {
    pub fn new(post: &'a Post, actor_id: AuthorId) -> Self {
        Self { post, actor_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.post.author_id == self.actor_id
    }
}
