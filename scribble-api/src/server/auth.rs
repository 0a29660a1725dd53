use crate::server::{Result, ServerError};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use scribble_common::model::{auth::TokenVerifier, user::UserId};
use std::sync::Arc;

const BEARER_PREFIX: &str = "Bearer ";

/// The subject of the token presented with the current request.
///
/// Only available behind [`require_auth`].
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub struct AuthenticatedUser {
    id: UserId,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.id
    }

    #[must_use]
    pub fn into_user_id(self) -> UserId {
        self.id
    }
}

/// Rejects requests without a verifiable token before any handler or
/// extractor runs. The raw token and the `Bearer `-prefixed form are both
/// accepted.
pub async fn require_auth(
    State(verifier): State<Arc<TokenVerifier>>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or(ServerError::MissingAuthorization)?
        .to_str()
        .map_err(ServerError::InvalidAuthorizationHeader)?;

    let token = header.strip_prefix(BEARER_PREFIX).unwrap_or(header).trim();
    let id = verifier.verify(token)?;

    request.extensions_mut().insert(AuthenticatedUser { id });

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or(ServerError::MissingAuthorization)
    }
}
