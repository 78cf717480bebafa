// src/application/commands/groups/service.rs
use std::sync::Arc;

use crate::domain::group::GroupRepository;

pub struct GroupCommandService {
    pub(super) group_repo: Arc<dyn GroupRepository>,
}

impl GroupCommandService {
    pub fn new(group_repo: Arc<dyn GroupRepository>) -> Self {
        Self { group_repo }
    }
}
