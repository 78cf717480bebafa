// tests/support/mocks.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use weblog_core::application::ports::time::Clock;
use weblog_core::domain::author::{Author, AuthorId, AuthorRepository, NewAuthor, Username};
use weblog_core::domain::errors::{DomainError, DomainResult};
use weblog_core::domain::group::{Group, GroupId, GroupRepository, GroupSlug, GroupTitle, NewGroup};
use weblog_core::domain::post::{
    FeedEntry, NewPost, Post, PostId, PostReadRepository, PostUpdate, PostWriteRepository,
};

/// Deterministic clock for pinning `pub_date` in service tests.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, delta: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[derive(Default)]
struct State {
    authors: HashMap<i64, Author>,
    groups: HashMap<i64, Group>,
    posts: HashMap<i64, Post>,
    next_author: i64,
    next_group: i64,
    next_post: i64,
}

/// In-memory stand-in for the whole entity store, implementing every
/// repository trait. Listings reproduce the contractual ordering
/// (descending pub_date, descending id).
#[derive(Default)]
pub struct InMemoryBlog {
    state: Mutex<State>,
}

impl InMemoryBlog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_author(&self, username: &str) -> Author {
        let mut state = self.state.lock().unwrap();
        state.next_author += 1;
        let id = state.next_author;
        let author = Author {
            id: AuthorId::new(id).unwrap(),
            username: Username::new(username).unwrap(),
            display_name: username.to_string(),
        };
        state.authors.insert(id, author.clone());
        author
    }

    pub fn seed_group(&self, title: &str, slug: &str) -> Group {
        let mut state = self.state.lock().unwrap();
        state.next_group += 1;
        let id = state.next_group;
        let group = Group {
            id: GroupId::new(id).unwrap(),
            title: GroupTitle::new(title).unwrap(),
            slug: GroupSlug::new(slug).unwrap(),
            description: String::new(),
        };
        state.groups.insert(id, group.clone());
        group
    }

    pub fn post_count(&self) -> usize {
        self.state.lock().unwrap().posts.len()
    }

    pub fn stored_post(&self, id: i64) -> Option<Post> {
        self.state.lock().unwrap().posts.get(&id).cloned()
    }

    fn entry_for(state: &State, post: &Post) -> FeedEntry {
        let author = &state.authors[&i64::from(post.author_id)];
        let group_slug = post
            .group_id
            .map(|gid| state.groups[&i64::from(gid)].slug.clone());
        FeedEntry {
            post: post.clone(),
            author_username: author.username.clone(),
            group_slug,
        }
    }

    fn ordered(state: &State, mut posts: Vec<Post>) -> Vec<FeedEntry> {
        posts.sort_by(|a, b| {
            b.pub_date
                .cmp(&a.pub_date)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        posts.iter().map(|post| Self::entry_for(state, post)).collect()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryBlog {
    async fn insert(&self, author: NewAuthor) -> DomainResult<Author> {
        let mut state = self.state.lock().unwrap();
        if state
            .authors
            .values()
            .any(|a| a.username == author.username)
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        state.next_author += 1;
        let id = state.next_author;
        let created = Author {
            id: AuthorId::new(id)?,
            username: author.username,
            display_name: author.display_name,
        };
        state.authors.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let state = self.state.lock().unwrap();
        Ok(state.authors.get(&i64::from(id)).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<Author>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .authors
            .values()
            .find(|a| &a.username == username)
            .cloned())
    }
}

#[async_trait]
impl GroupRepository for InMemoryBlog {
    async fn insert(&self, group: NewGroup) -> DomainResult<Group> {
        let mut state = self.state.lock().unwrap();
        if state.groups.values().any(|g| g.slug == group.slug) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        state.next_group += 1;
        let id = state.next_group;
        let created = Group {
            id: GroupId::new(id)?,
            title: group.title,
            slug: group.slug,
            description: group.description,
        };
        state.groups.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: GroupId) -> DomainResult<Option<Group>> {
        let state = self.state.lock().unwrap();
        Ok(state.groups.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &GroupSlug) -> DomainResult<Option<Group>> {
        let state = self.state.lock().unwrap();
        Ok(state.groups.values().find(|g| &g.slug == slug).cloned())
    }

    async fn delete(&self, id: GroupId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.posts.values().any(|p| p.group_id == Some(id)) {
            return Err(DomainError::Conflict(
                "group is still referenced by posts".into(),
            ));
        }
        state
            .groups
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("group not found".into()))
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryBlog {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        state.next_post += 1;
        let id = state.next_post;
        let created = Post {
            id: PostId::new(id)?,
            text: post.text,
            pub_date: post.pub_date,
            group_id: post.group_id,
            author_id: post.author_id,
        };
        state.posts.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        let post = state
            .posts
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        post.edit(update.text, update.group_id);
        Ok(post.clone())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryBlog {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<FeedEntry>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .get(&i64::from(id))
            .map(|post| Self::entry_for(&state, post)))
    }

    async fn list_all(&self) -> DomainResult<Vec<FeedEntry>> {
        let state = self.state.lock().unwrap();
        let posts: Vec<Post> = state.posts.values().cloned().collect();
        Ok(Self::ordered(&state, posts))
    }

    async fn list_by_group(&self, group_id: GroupId) -> DomainResult<Vec<FeedEntry>> {
        let state = self.state.lock().unwrap();
        let posts: Vec<Post> = state
            .posts
            .values()
            .filter(|p| p.group_id == Some(group_id))
            .cloned()
            .collect();
        Ok(Self::ordered(&state, posts))
    }

    async fn list_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<FeedEntry>> {
        let state = self.state.lock().unwrap();
        let posts: Vec<Post> = state
            .posts
            .values()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        Ok(Self::ordered(&state, posts))
    }
}
