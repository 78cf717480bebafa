pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Group, NewGroup};
pub use repository::GroupRepository;
pub use value_objects::{GroupId, GroupSlug, GroupTitle};
