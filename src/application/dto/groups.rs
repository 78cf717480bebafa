use crate::domain::group::Group;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl From<Group> for GroupDto {
    fn from(group: Group) -> Self {
        Self {
            id: group.id.into(),
            title: group.title.into_inner(),
            slug: group.slug.into_inner(),
            description: group.description,
        }
    }
}
