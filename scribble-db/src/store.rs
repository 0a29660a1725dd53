use async_trait::async_trait;
use scribble_common::model::{
    Id, ModelValidationError,
    post::{CreatePost, Post, PostMarker, UpdatePost},
    user::UserId,
};
use thiserror::Error;

pub type Result<T, E = DbError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("An object in the database was invalid: {0}")]
    Data(#[from] ModelValidationError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error("No post ids are left to hand out")]
    IdsExhausted,
}

/// Storage for blog posts.
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn create_post(&self, post: &CreatePost) -> Result<Id<PostMarker>>;

    /// Overwrites title and content of the post with `update.id`, but only if
    /// it was written by `author`. Returns how many posts were changed.
    async fn update_post(&self, update: &UpdatePost, author: &UserId) -> Result<u64>;

    async fn fetch_post(&self, post_id: Id<PostMarker>) -> Result<Option<Post>>;

    /// All posts, in no particular order.
    async fn fetch_posts(&self) -> Result<Vec<Post>>;
}
