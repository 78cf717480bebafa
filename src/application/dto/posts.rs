use crate::domain::post::FeedEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: i64,
    pub author_username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_slug: Option<String>,
}

impl From<FeedEntry> for PostDto {
    fn from(entry: FeedEntry) -> Self {
        Self {
            id: entry.post.id.into(),
            text: entry.post.text.into_inner(),
            pub_date: entry.post.pub_date,
            author_id: entry.post.author_id.into(),
            author_username: entry.author_username.into_inner(),
            group_slug: entry.group_slug.map(|slug| slug.into_inner()),
        }
    }
}
