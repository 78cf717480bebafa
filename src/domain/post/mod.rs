pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{FeedEntry, NewPost, Post, PostUpdate};
pub use repository::{PostReadRepository, PostWriteRepository};
pub use value_objects::{PostId, PostText};
