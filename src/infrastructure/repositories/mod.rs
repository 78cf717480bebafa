// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_author;
mod sqlite_group;
mod sqlite_post;

pub use sqlite_author::SqliteAuthorRepository;
pub use sqlite_group::SqliteGroupRepository;
pub use sqlite_post::{SqlitePostReadRepository, SqlitePostWriteRepository};
