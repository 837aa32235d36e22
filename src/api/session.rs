use std::sync::Arc;

use axum::{
    Extension,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_cookies::Cookies;

use crate::{server::AppContext, spotify::client::SpotifyClient};

pub const ACCESS_TOKEN_COOKIE: &str = "spotifyAccessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "spotifyRefreshToken";

/// Gate in front of the authenticated routes.
///
/// Both session cookies present: a Spotify client configured for this
/// request is attached to the request extensions and the inner handler runs.
/// Otherwise the browser is sent to the authorization entry point. The
/// cookie values are taken at face value; stale tokens surface as provider
/// failures further down.
pub async fn session_gate(
    Extension(ctx): Extension<AppContext>,
    cookies: Cookies,
    mut request: Request,
    next: Next,
) -> Response {
    let access_token = cookies
        .get(ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string());
    let refresh_token = cookies
        .get(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string());

    match (access_token, refresh_token) {
        (Some(access_token), Some(_refresh_token)) => {
            let client = SpotifyClient::from_request(Arc::clone(&ctx.config), request.headers())
                .with_access_token(access_token);
            request.extensions_mut().insert(client);
            next.run(request).await
        }
        _ => Redirect::to("/auth").into_response(),
    }
}
