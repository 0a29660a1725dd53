use crate::server::{ServerError, ServerRouter};
use axum::response::Redirect;
use axum_extra::{
    extract::CookieJar,
    routing::{RouterExt, TypedPath},
};
use scribble_common::landing::{LandingTarget, TokenSource};
use serde::Deserialize;
use tracing::debug;

const TOKEN_COOKIE: &str = "token";

pub fn routes() -> ServerRouter {
    ServerRouter::new().typed_get(landing)
}

struct CookieTokens<'a>(&'a CookieJar);

impl TokenSource for CookieTokens<'_> {
    fn token(&self) -> Option<&str> {
        self.0.get(TOKEN_COOKIE).map(|cookie| cookie.value())
    }
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/", rejection(ServerError))]
struct LandingPath();

async fn landing(LandingPath(): LandingPath, jar: CookieJar) -> Redirect {
    let target = LandingTarget::resolve(&CookieTokens(&jar));

    debug!(%target, "Redirecting from landing page");

    Redirect::to(target.path())
}
