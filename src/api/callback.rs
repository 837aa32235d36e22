use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension, Json,
    extract::Query,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use tower_cookies::{Cookie, Cookies, cookie::time::Duration};

use crate::{server::AppContext, spotify::client::SpotifyClient};

use super::{ACCESS_TOKEN_COOKIE, ApiError, REFRESH_TOKEN_COOKIE};

/// How long the session cookies live. The refresh token deliberately gets
/// the same hour as the access token, mirroring the observed flow instead of
/// extending it.
const COOKIE_MAX_AGE_HOURS: i64 = 1;

/// Completes the authorization flow.
///
/// The echoed state token must be live in the registry; it is consumed by
/// the lookup whether accepted or not, so every token works exactly once.
/// An unknown, reused, or expired token ends the request with HTTP 400 and
/// no exchange is attempted. Errors during the exchange itself escape as
/// [`ApiError`] and surface as HTTP 500.
pub async fn callback(
    Extension(ctx): Extension<AppContext>,
    cookies: Cookies,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let state = params.get("state").map(String::as_str).unwrap_or_default();
    if !ctx.states.take(state).await {
        let body = Json(json!({ "error": "invalid state" }));
        return Ok((StatusCode::BAD_REQUEST, body).into_response());
    }

    let code = params.get("code").ok_or("missing code parameter")?;

    let client = SpotifyClient::from_request(Arc::clone(&ctx.config), &headers);
    let token = client.exchange_code(code).await?;

    cookies.add(session_cookie(ACCESS_TOKEN_COOKIE, token.access_token));
    cookies.add(session_cookie(REFRESH_TOKEN_COOKIE, token.refresh_token));

    Ok(Redirect::to("/").into_response())
}

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .secure(true)
        .max_age(Duration::hours(COOKIE_MAX_AGE_HOURS))
        .build()
}
