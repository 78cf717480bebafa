use crate::domain::author::{AuthorId, Username};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::group::{GroupId, GroupSlug};
use crate::domain::post::{
    FeedEntry, NewPost, Post, PostId, PostReadRepository, PostText, PostUpdate,
    PostWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::error::map_sqlx;

// Feed ordering is part of the repository contract: descending pub_date,
// ties broken by descending id (insertion order).
const FEED_SELECT: &str = "SELECT p.id, p.text, p.pub_date, p.group_id, p.author_id, \
     a.username AS author_username, g.slug AS group_slug \
     FROM posts p \
     JOIN authors a ON a.id = p.author_id \
     LEFT JOIN \"groups\" g ON g.id = p.group_id";

const FEED_ORDER: &str = " ORDER BY p.pub_date DESC, p.id DESC";

#[derive(Clone)]
pub struct SqlitePostWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqlitePostReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    text: String,
    pub_date: DateTime<Utc>,
    group_id: Option<i64>,
    author_id: i64,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            text: PostText::new(row.text)?,
            pub_date: row.pub_date,
            group_id: row.group_id.map(GroupId::new).transpose()?,
            author_id: AuthorId::new(row.author_id)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct FeedRow {
    id: i64,
    text: String,
    pub_date: DateTime<Utc>,
    group_id: Option<i64>,
    author_id: i64,
    author_username: String,
    group_slug: Option<String>,
}

impl TryFrom<FeedRow> for FeedEntry {
    type Error = DomainError;

    fn try_from(row: FeedRow) -> Result<Self, Self::Error> {
        Ok(FeedEntry {
            post: Post {
                id: PostId::new(row.id)?,
                text: PostText::new(row.text)?,
                pub_date: row.pub_date,
                group_id: row.group_id.map(GroupId::new).transpose()?,
                author_id: AuthorId::new(row.author_id)?,
            },
            author_username: Username::new(row.author_username)?,
            group_slug: row.group_slug.map(GroupSlug::new).transpose()?,
        })
    }
}

#[async_trait]
impl PostWriteRepository for SqlitePostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            text,
            pub_date,
            group_id,
            author_id,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (text, pub_date, group_id, author_id) VALUES (?, ?, ?, ?) \
             RETURNING id, text, pub_date, group_id, author_id",
        )
        .bind(text.as_str())
        .bind(pub_date)
        .bind(group_id.map(i64::from))
        .bind(i64::from(author_id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate { id, text, group_id } = update;

        // Single-statement overwrite of the two mutable fields keeps the
        // row transition atomic under SQLite's write lock; pub_date and
        // author_id are deliberately absent from the SET list.
        let row = sqlx::query_as::<_, PostRow>(
            "UPDATE posts SET text = ?, group_id = ? WHERE id = ? \
             RETURNING id, text, pub_date, group_id, author_id",
        )
        .bind(text.as_str())
        .bind(group_id.map(i64::from))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }
}

#[async_trait]
impl PostReadRepository for SqlitePostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<FeedEntry>> {
        let query = format!("{FEED_SELECT} WHERE p.id = ?");
        let row = sqlx::query_as::<_, FeedRow>(&query)
            .bind(i64::from(id))
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(FeedEntry::try_from).transpose()
    }

    async fn list_all(&self) -> DomainResult<Vec<FeedEntry>> {
        let query = format!("{FEED_SELECT}{FEED_ORDER}");
        let rows = sqlx::query_as::<_, FeedRow>(&query)
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(FeedEntry::try_from).collect()
    }

    async fn list_by_group(&self, group_id: GroupId) -> DomainResult<Vec<FeedEntry>> {
        let query = format!("{FEED_SELECT} WHERE p.group_id = ?{FEED_ORDER}");
        let rows = sqlx::query_as::<_, FeedRow>(&query)
            .bind(i64::from(group_id))
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(FeedEntry::try_from).collect()
    }

    async fn list_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<FeedEntry>> {
        let query = format!("{FEED_SELECT} WHERE p.author_id = ?{FEED_ORDER}");
        let rows = sqlx::query_as::<_, FeedRow>(&query)
            .bind(i64::from(author_id))
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(FeedEntry::try_from).collect()
    }
}
