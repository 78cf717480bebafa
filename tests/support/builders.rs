// tests/support/builders.rs
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use weblog_core::application::dto::ActingAuthor;
use weblog_core::application::services::ApplicationServices;
use weblog_core::domain::author::Author;

use super::mocks::{InMemoryBlog, ManualClock};

pub fn acting(author: &Author) -> ActingAuthor {
    ActingAuthor::from(author)
}

pub fn manual_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::starting_at(
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    ))
}

/// Wire the full service bundle over a single in-memory store.
pub fn services(blog: &Arc<InMemoryBlog>, clock: &Arc<ManualClock>) -> ApplicationServices {
    ApplicationServices::new(
        Arc::clone(blog) as _,
        Arc::clone(blog) as _,
        Arc::clone(blog) as _,
        Arc::clone(blog) as _,
        Arc::clone(clock) as _,
    )
}
