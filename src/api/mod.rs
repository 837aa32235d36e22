//! # API Module
//!
//! This module provides the HTTP surface of the random playlist server. It
//! implements the OAuth2 entry and callback endpoints, the cookie-based
//! session gate, and the playlist-creation endpoint.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`auth`] - Mints an anti-CSRF state token and redirects the browser to
//!   the provider's authorization page.
//! - [`callback`] - Validates the echoed state token, exchanges the
//!   authorization code for tokens, and stores them as session cookies.
//!
//! ### Playlist
//!
//! - [`new_playlist`] - Samples fifty random tracks and redirects to the
//!   freshly created playlist.
//!
//! ### Pages and Monitoring
//!
//! - [`index`] - The static landing page.
//! - [`health`] - Liveness endpoint returning status and version.
//!
//! ## Session Handling
//!
//! [`session_gate`] wraps the authenticated routes. It inspects the two
//! session cookies and either attaches a request-scoped Spotify client to the
//! request or answers with a redirect to the authorization entry point. The
//! gate performs no token validation; an expired token simply fails at the
//! provider and the playlist handler falls back to re-authentication.
//!
//! ## Error Semantics
//!
//! - Invalid or unknown OAuth state: HTTP 400 with a structured JSON body.
//! - Unauthenticated request: redirect to `/auth`.
//! - Provider failure while building a playlist: logged, then redirect to
//!   `/auth`.
//! - Anything escaping the callback's token exchange: [`ApiError`], an
//!   opaque HTTP 500.

mod auth;
mod callback;
mod health;
mod index;
mod playlist;
mod session;

pub use auth::auth;
pub use callback::callback;
pub use health::health;
pub use index::index;
pub use playlist::new_playlist;
pub use session::ACCESS_TOKEN_COOKIE;
pub use session::REFRESH_TOKEN_COOKIE;
pub use session::session_gate;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::warning;

/// Error escaping a request handler through `?`.
///
/// Wraps any boxed error and renders as an opaque HTTP 500 after logging the
/// cause server-side. Only the callback's code exchange surfaces this; every
/// other failure path has a friendlier recovery.
pub struct ApiError(Box<dyn std::error::Error + Send + Sync>);

impl<E> From<E> for ApiError
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warning!("Unhandled request error: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "internal server error" })),
        )
            .into_response()
    }
}
