use crate::server::{ServerRouter, ServerState, auth::require_auth};
use axum::{Router, middleware::from_fn_with_state};

mod blog;
mod landing;

pub fn routes(state: &ServerState) -> ServerRouter {
    let blog = blog::routes().route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new().nest("/blog", blog).merge(landing::routes())
}
