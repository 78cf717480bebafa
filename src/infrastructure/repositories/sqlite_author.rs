use crate::domain::author::{Author, AuthorId, AuthorRepository, NewAuthor, Username};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use super::error::map_sqlx;

#[derive(Clone)]
pub struct SqliteAuthorRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAuthorRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: i64,
    username: String,
    display_name: String,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(row.id)?,
            username: Username::new(row.username)?,
            display_name: row.display_name,
        })
    }
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let NewAuthor {
            username,
            display_name,
        } = author;

        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (username, display_name) VALUES (?, ?) \
             RETURNING id, username, display_name",
        )
        .bind(username.as_str())
        .bind(&display_name)
        .fetch_one(&*self.pool)
        .await
        .map_err(|err| match map_sqlx(err) {
            DomainError::Conflict(_) => {
                DomainError::Conflict(format!("username '{username}' is already taken"))
            }
            other => other,
        })?;

        Author::try_from(row)
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, username, display_name FROM authors WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, username, display_name FROM authors WHERE username = ?",
        )
        .bind(username.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }
}
