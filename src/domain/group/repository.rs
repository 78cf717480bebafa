use crate::domain::errors::DomainResult;
use crate::domain::group::entity::{Group, NewGroup};
use crate::domain::group::value_objects::{GroupId, GroupSlug};
use async_trait::async_trait;

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Fails with `Conflict` when the slug is already taken.
    async fn insert(&self, group: NewGroup) -> DomainResult<Group>;
    async fn find_by_id(&self, id: GroupId) -> DomainResult<Option<Group>>;
    async fn find_by_slug(&self, slug: &GroupSlug) -> DomainResult<Option<Group>>;
    /// Administrative path. Fails with `Conflict` while any post still
    /// references the group (RESTRICT foreign key).
    async fn delete(&self, id: GroupId) -> DomainResult<()>;
}
