// src/application/commands/authors/service.rs
use std::sync::Arc;

use crate::domain::author::AuthorRepository;

pub struct AuthorCommandService {
    pub(super) author_repo: Arc<dyn AuthorRepository>,
}

impl AuthorCommandService {
    pub fn new(author_repo: Arc<dyn AuthorRepository>) -> Self {
        Self { author_repo }
    }
}
