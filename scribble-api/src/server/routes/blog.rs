use crate::server::{Result, ServerError, ServerRouter, auth::AuthenticatedUser, json::Json};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use scribble_common::model::post::{
    CreatePost, CreatedPost, Post, PostContent, PostList, UpdatePost,
};
use scribble_db::store::PostStore;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_post(create_post)
        .typed_put(update_post)
        .typed_get(get_post)
        .typed_get(get_posts)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/", rejection(ServerError))]
struct CreatePostPath();

async fn create_post(
    CreatePostPath(): CreatePostPath,
    State(db): State<Arc<dyn PostStore>>,
    user: AuthenticatedUser,
    Json(content): Json<PostContent>,
) -> Result<Json<CreatedPost>> {
    let post = CreatePost {
        author: user.into_user_id(),
        content,
    };

    let id = db
        .create_post(&post)
        .await
        .map_err(ServerError::CreatePost)?;

    debug!(%id, author = %post.author, "Created post");

    Ok(Json(CreatedPost { id }))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/update", rejection(ServerError))]
struct UpdatePostPath();

async fn update_post(
    UpdatePostPath(): UpdatePostPath,
    State(db): State<Arc<dyn PostStore>>,
    user: AuthenticatedUser,
    Json(update): Json<UpdatePost>,
) -> Result<&'static str> {
    let updated = db
        .update_post(&update, user.user_id())
        .await
        .map_err(ServerError::UpdatePost)?;

    if updated == 0 {
        return Err(ServerError::PostNotUpdated(update.id));
    }

    debug!(id = %update.id, author = %user.user_id(), "Updated post");

    Ok("Updated post")
}

// The id stays a string here so malformed ids end up as a plain not-found.
#[derive(TypedPath, Deserialize)]
#[typed_path("/get/{id}", rejection(ServerError))]
struct GetPostPath {
    id: String,
}

async fn get_post(
    GetPostPath { id }: GetPostPath,
    State(db): State<Arc<dyn PostStore>>,
    _user: AuthenticatedUser,
) -> Result<Json<Post>> {
    let post_id = id.parse().map_err(|_| ServerError::InvalidPostId(id))?;

    let post = db
        .fetch_post(post_id)
        .await
        .map_err(ServerError::FetchPost)?
        .ok_or(ServerError::PostByIdNotFound(post_id))?;

    Ok(Json(post))
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/bulk", rejection(ServerError))]
struct GetPostsPath();

async fn get_posts(
    GetPostsPath(): GetPostsPath,
    State(db): State<Arc<dyn PostStore>>,
    _user: AuthenticatedUser,
) -> Result<Json<PostList>> {
    let blogs = db.fetch_posts().await.map_err(ServerError::FetchPosts)?;

    Ok(Json(PostList { blogs }))
}
