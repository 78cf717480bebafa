pub mod authors;
pub mod groups;
pub mod pagination;
pub mod posts;

pub use authors::{ActingAuthor, AuthorDto};
pub use groups::GroupDto;
pub use pagination::{FEED_PAGE_SIZE, FeedPage, paginate};
pub use posts::PostDto;
