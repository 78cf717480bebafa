// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        group::{Group, GroupRepository, GroupSlug},
        post::{PostReadRepository, PostWriteRepository},
    },
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) group_repo: Arc<dyn GroupRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        group_repo: Arc<dyn GroupRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            group_repo,
            clock,
        }
    }

    /// Resolve an optional group reference. A present but unresolved
    /// reference is a validation failure on the `group` field, not a
    /// lookup NotFound.
    pub(super) async fn resolve_group(
        &self,
        reference: Option<&str>,
    ) -> ApplicationResult<Option<Group>> {
        let Some(raw) = reference else {
            return Ok(None);
        };
        let slug = GroupSlug::new(raw)?;
        let group = self
            .group_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::validation(format!("group '{slug}' does not exist")))?;
        Ok(Some(group))
    }
}
