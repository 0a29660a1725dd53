use axum::{
    Router,
    extract::{
        FromRef, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, Uri, header::ToStrError},
    response::{IntoResponse, Response},
};
use json::json_response;
use scribble_common::model::{
    Id,
    auth::{TokenError, TokenVerifier},
    post::PostMarker,
};
use scribble_db::store::{DbError, PostStore};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

mod auth;
mod json;
mod routes;

pub type ServerRouter = Router<ServerState>;

#[derive(Clone, FromRef)]
pub struct ServerState {
    pub posts: Arc<dyn PostStore>,
    pub verifier: Arc<TokenVerifier>,
}

impl ServerState {
    #[must_use]
    pub fn new(posts: Arc<dyn PostStore>, verifier: TokenVerifier) -> Self {
        Self {
            posts,
            verifier: Arc::new(verifier),
        }
    }
}

/// The complete application with state applied, ready to be served.
pub fn app(state: ServerState) -> Router {
    routes::routes(&state).fallback(fallback).with_state(state)
}

pub async fn fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("Incoming JSON rejected: {0}")]
    JsonRejection(#[from] JsonRejection),
    #[error("JSON response could not be serialized: {0}")]
    JsonResponse(#[from] serde_json::Error),
    #[error("Authorization header was missing")]
    MissingAuthorization,
    #[error("Authorization header was not valid text: {0}")]
    InvalidAuthorizationHeader(ToStrError),
    #[error(transparent)]
    InvalidToken(#[from] TokenError),
    #[error("Post id {0:?} is not a number")]
    InvalidPostId(String),
    #[error("Post with id {0} was not found.")]
    PostByIdNotFound(Id<PostMarker>),
    #[error("Post with id {0} was not found or not written by the requester.")]
    PostNotUpdated(Id<PostMarker>),
    #[error("Creating post failed: {0}")]
    CreatePost(DbError),
    #[error("Updating post failed: {0}")]
    UpdatePost(DbError),
    #[error("Fetching post failed: {0}")]
    FetchPost(DbError),
    #[error("Fetching posts failed: {0}")]
    FetchPosts(DbError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_)
            | ServerError::PathRejection(_)
            | ServerError::InvalidPostId(_)
            | ServerError::PostByIdNotFound(_)
            | ServerError::PostNotUpdated(_) => StatusCode::NOT_FOUND,
            ServerError::MissingAuthorization
            | ServerError::InvalidAuthorizationHeader(_)
            | ServerError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            ServerError::JsonRejection(_) => StatusCode::BAD_REQUEST,
            ServerError::JsonResponse(_)
            | ServerError::CreatePost(_)
            | ServerError::UpdatePost(_)
            | ServerError::FetchPost(_)
            | ServerError::FetchPosts(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> ErrorResponse {
        match self {
            ServerError::UnknownRoute(_) | ServerError::PathRejection(_) => {
                ErrorResponse::message("Not found")
            }
            ServerError::JsonRejection(_) => ErrorResponse::message("Invalid request body"),
            ServerError::JsonResponse(_) => ErrorResponse::message("Internal server error"),
            ServerError::MissingAuthorization => ErrorResponse::error("unauthorized"),
            // Existing clients match on this exact spelling.
            ServerError::InvalidAuthorizationHeader(_) | ServerError::InvalidToken(_) => {
                ErrorResponse::error("unathorised")
            }
            ServerError::InvalidPostId(_) | ServerError::PostByIdNotFound(_) => {
                ErrorResponse::message("Post not found")
            }
            ServerError::PostNotUpdated(_) => {
                ErrorResponse::message("Post not found or you are not the author")
            }
            ServerError::CreatePost(_) => ErrorResponse::message("Error while creating post"),
            ServerError::UpdatePost(_) => ErrorResponse::message("Error while updating post"),
            ServerError::FetchPost(_) => ErrorResponse::message("Error while fetching blog post"),
            ServerError::FetchPosts(_) => {
                ErrorResponse::message("Error while fetching blog posts")
            }
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Serialize)]
#[serde(untagged)]
enum ErrorResponse {
    Error { error: &'static str },
    Message { message: &'static str },
}

impl ErrorResponse {
    fn error(error: &'static str) -> Self {
        Self::Error { error }
    }

    fn message(message: &'static str) -> Self {
        Self::Message { message }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        error!(error = %self, %status, "Replying with error");

        json_response(status, &self.error_response())
    }
}
