//! Content and authorship core for a minimal blogging platform.
//!
//! Authors publish text posts, optionally assigned to a topical group;
//! readers browse a global feed, a per-group feed, or an author profile
//! feed, all paginated with a fixed page size. Only a post's author may
//! edit it. Routing, templating, and identity management are external
//! consumers of the services exposed here.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
