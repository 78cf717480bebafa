pub mod author;
pub mod errors;
pub mod group;
pub mod post;
