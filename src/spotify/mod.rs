//! # Spotify Integration Module
//!
//! This module implements the slice of the Spotify Web API this server
//! needs: the OAuth2 authorization-code flow, track search, and playlist
//! management. It is the only place that talks HTTP to Spotify; the `api`
//! layer above it deals purely in handler logic.
//!
//! ## Core Modules
//!
//! - [`client`] - The per-request [`client::SpotifyClient`]. A client is
//!   configured for exactly one incoming request: it derives the OAuth
//!   redirect URI from that request's Host header and forwarded scheme, and
//!   optionally carries the access token found in the session cookies.
//! - [`auth`] - Authorization URL construction and the code-for-token
//!   exchange against the token endpoint, authenticated with the client
//!   id/secret pair.
//! - [`search`] - Single-track search plus the random sampler that feeds
//!   playlist creation. Sampler failures degrade silently to "no result".
//! - [`playlist`] - Private playlist creation and batch track addition.
//!
//! ## Error Handling
//!
//! Every request maps non-2xx responses to errors with `error_for_status`
//! and decodes bodies into the typed structures in [`crate::types`]. Errors
//! are plain `reqwest::Error` values; policy (propagate, redirect, swallow)
//! belongs to the callers.
//!
//! ## API Coverage
//!
//! - `GET /search` - single-result track search with a random offset
//! - `POST /me/playlists` - create a private playlist for the current user
//! - `POST /playlists/{id}/tracks` - add tracks in one batch
//! - `POST /api/token` - authorization-code exchange (accounts service)

pub mod auth;
pub mod client;
pub mod playlist;
pub mod search;
