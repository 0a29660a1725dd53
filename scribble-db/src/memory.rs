use crate::store::{DbError, PostStore, Result};
use async_trait::async_trait;
use scribble_common::model::{
    Id,
    post::{CreatePost, Post, PostMarker, UpdatePost},
    user::UserId,
};
use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

/// Post store that keeps everything in process memory.
///
/// Ids are handed out sequentially starting at 1, like a `SERIAL` column.
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i32,
    posts: BTreeMap<Id<PostMarker>, Post>,
}

impl MemoryPostStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn create_post(&self, post: &CreatePost) -> Result<Id<PostMarker>> {
        let mut state = self.state();
        state.last_id = state
            .last_id
            .checked_add(1)
            .ok_or(DbError::IdsExhausted)?;
        let id = Id::new(state.last_id);

        state.posts.insert(
            id,
            Post {
                id,
                title: post.content.title.clone(),
                content: post.content.content.clone(),
                published: false,
                author_id: post.author.clone(),
            },
        );

        Ok(id)
    }

    async fn update_post(&self, update: &UpdatePost, author: &UserId) -> Result<u64> {
        let mut state = self.state();

        match state.posts.get_mut(&update.id) {
            Some(post) if post.is_authored_by(author) => {
                post.title.clone_from(&update.content.title);
                post.content.clone_from(&update.content.content);
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn fetch_post(&self, post_id: Id<PostMarker>) -> Result<Option<Post>> {
        Ok(self.state().posts.get(&post_id).cloned())
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        Ok(self.state().posts.values().cloned().collect())
    }
}
