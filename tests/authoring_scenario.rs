//! End-to-end walk through the authoring flow over the in-memory store:
//! group creation, first post, a rejected edit by a stranger, then a
//! successful edit by the author.

use std::sync::Arc;

mod support;

use support::builders::{acting, manual_clock, services};
use support::helpers::{init_tracing, is_forbidden};
use support::mocks::InMemoryBlog;
use weblog_core::application::commands::groups::CreateGroupCommand;
use weblog_core::application::commands::posts::{CreatePostCommand, UpdatePostCommand};
use weblog_core::application::queries::feeds::{GetPostQuery, IndexFeedQuery};

#[tokio::test]
async fn author_publishes_then_edits_while_strangers_cannot() {
    init_tracing();
    let blog = Arc::new(InMemoryBlog::new());
    let clock = manual_clock();
    let services = services(&blog, &clock);

    let alice = blog.seed_author("alice");
    let bob = blog.seed_author("bob");

    services
        .group_commands
        .create_group(CreateGroupCommand {
            title: "T".into(),
            slug: "t".into(),
            description: "d".into(),
        })
        .await
        .unwrap();

    let created = services
        .post_commands
        .create_post(
            &acting(&alice),
            CreatePostCommand {
                text: "hello".into(),
                group: Some("t".into()),
            },
        )
        .await
        .unwrap();

    let index = services
        .feed_queries
        .index_feed(IndexFeedQuery { page: 1 })
        .await
        .unwrap();
    assert_eq!(index.total, 1);
    assert_eq!(index.items[0].author_username, "alice");
    assert_eq!(index.items[0].group_slug.as_deref(), Some("t"));

    let err = services
        .post_commands
        .update_post(
            &acting(&bob),
            UpdatePostCommand {
                id: created.id,
                text: "bye".into(),
                group: Some("t".into()),
            },
        )
        .await
        .unwrap_err();
    assert!(is_forbidden(&err));

    let unchanged = services
        .feed_queries
        .get_post(GetPostQuery { id: created.id })
        .await
        .unwrap();
    assert_eq!(unchanged.text, "hello");

    clock.advance(chrono::Duration::minutes(1));
    services
        .post_commands
        .update_post(
            &acting(&alice),
            UpdatePostCommand {
                id: created.id,
                text: "bye".into(),
                group: Some("t".into()),
            },
        )
        .await
        .unwrap();

    let edited = services
        .feed_queries
        .get_post(GetPostQuery { id: created.id })
        .await
        .unwrap();
    assert_eq!(edited.text, "bye");
    assert_eq!(edited.pub_date, created.pub_date);
}
