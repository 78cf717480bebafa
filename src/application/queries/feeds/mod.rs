// src/application/queries/feeds/mod.rs
mod get_group;
mod get_post;
mod group;
mod index;
mod profile;
mod service;

pub use get_group::GetGroupQuery;
pub use get_post::GetPostQuery;
pub use group::GroupFeedQuery;
pub use index::IndexFeedQuery;
pub use profile::ProfileFeedQuery;
pub use service::FeedQueryService;
