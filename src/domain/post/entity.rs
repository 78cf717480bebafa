// src/domain/post/entity.rs
use crate::domain::author::value_objects::{AuthorId, Username};
use crate::domain::group::value_objects::{GroupId, GroupSlug};
use crate::domain::post::value_objects::{PostId, PostText};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub text: PostText,
    /// Assigned once at creation from the server clock, never changed by
    /// an edit.
    pub pub_date: DateTime<Utc>,
    pub group_id: Option<GroupId>,
    pub author_id: AuthorId,
}

impl Post {
    /// Replace the two mutable fields. `id`, `author_id` and `pub_date`
    /// are frozen after creation.
    pub fn edit(&mut self, text: PostText, group_id: Option<GroupId>) {
        self.text = text;
        self.group_id = group_id;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub text: PostText,
    pub pub_date: DateTime<Utc>,
    pub group_id: Option<GroupId>,
    pub author_id: AuthorId,
}

/// Full overwrite of the mutable fields; a `None` group clears the
/// assignment.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub text: PostText,
    pub group_id: Option<GroupId>,
}

/// Read model for feed surfaces: a post joined with its author's username
/// and, when assigned, its group's slug. Kept as id references plus
/// denormalized display fields so Group -> posts stays a derived reverse
/// lookup rather than a stored back-reference.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub post: Post,
    pub author_username: Username,
    pub group_slug: Option<GroupSlug>,
}
