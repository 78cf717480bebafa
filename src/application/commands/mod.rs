pub mod authors;
pub mod groups;
pub mod posts;
