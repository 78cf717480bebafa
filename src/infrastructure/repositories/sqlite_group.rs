use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::group::{Group, GroupId, GroupRepository, GroupSlug, GroupTitle, NewGroup};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::error::map_sqlx;

#[derive(Clone)]
pub struct SqliteGroupRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteGroupRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GroupRow {
    id: i64,
    title: String,
    slug: String,
    description: String,
}

impl TryFrom<GroupRow> for Group {
    type Error = DomainError;

    fn try_from(row: GroupRow) -> Result<Self, Self::Error> {
        Ok(Group {
            id: GroupId::new(row.id)?,
            title: GroupTitle::new(row.title)?,
            slug: GroupSlug::new(row.slug)?,
            description: row.description,
        })
    }
}

#[async_trait]
impl GroupRepository for SqliteGroupRepository {
    async fn insert(&self, group: NewGroup) -> DomainResult<Group> {
        let NewGroup {
            title,
            slug,
            description,
        } = group;

        let row = sqlx::query_as::<_, GroupRow>(
            "INSERT INTO \"groups\" (title, slug, description) VALUES (?, ?, ?) \
             RETURNING id, title, slug, description",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(&description)
        .fetch_one(&*self.pool)
        .await
        .map_err(|err| match map_sqlx(err) {
            DomainError::Conflict(_) => {
                DomainError::Conflict(format!("group slug '{slug}' already exists"))
            }
            other => other,
        })?;

        Group::try_from(row)
    }

    async fn find_by_id(&self, id: GroupId) -> DomainResult<Option<Group>> {
        let row = sqlx::query_as::<_, GroupRow>(
            "SELECT id, title, slug, description FROM \"groups\" WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Group::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &GroupSlug) -> DomainResult<Option<Group>> {
        let row = sqlx::query_as::<_, GroupRow>(
            "SELECT id, title, slug, description FROM \"groups\" WHERE slug = ?",
        )
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Group::try_from).transpose()
    }

    async fn delete(&self, id: GroupId) -> DomainResult<()> {
        // The RESTRICT foreign key turns deletion of a referenced group
        // into a Conflict rather than cascading into the feed.
        let result = sqlx::query("DELETE FROM \"groups\" WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(|err| match map_sqlx(err) {
                DomainError::Conflict(_) => {
                    DomainError::Conflict("group is still referenced by posts".into())
                }
                other => other,
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("group not found".into()));
        }
        Ok(())
    }
}
