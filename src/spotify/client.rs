use std::sync::Arc;

use axum::http::{HeaderMap, header};
use reqwest::Client;

use crate::config::Config;

/// Spotify Web API client configured for a single incoming request.
///
/// Carries its own `reqwest::Client` and the redirect URI derived from the
/// request it was built for. Never shared across requests and never cached.
#[derive(Clone)]
pub struct SpotifyClient {
    pub(crate) http: Client,
    pub(crate) config: Arc<Config>,
    pub(crate) redirect_uri: String,
    pub(crate) access_token: Option<String>,
}

impl SpotifyClient {
    pub fn from_request(config: Arc<Config>, headers: &HeaderMap) -> Self {
        let redirect_uri = callback_uri(headers);
        Self {
            http: Client::new(),
            config,
            redirect_uri,
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, token: String) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Token for bearer authentication. Empty when the request carried no
    /// session; the API call then fails downstream, which is the intended
    /// surface for stale or absent credentials.
    pub(crate) fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or_default()
    }
}

/// Builds the OAuth callback URI from the incoming request.
///
/// The scheme honors `x-forwarded-proto` since TLS, when present, terminates
/// in front of this server.
fn callback_uri(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    let scheme = match headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
    {
        Some("https") => "https",
        _ => "http",
    };
    format!("{scheme}://{host}/auth-callback")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_uri_uses_host_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "example.com:3000".parse().unwrap());
        assert_eq!(callback_uri(&headers), "http://example.com:3000/auth-callback");
    }

    #[test]
    fn test_callback_uri_honors_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "example.com".parse().unwrap());
        headers.insert("x-forwarded-proto", "https".parse().unwrap());
        assert_eq!(callback_uri(&headers), "https://example.com/auth-callback");
    }

    #[test]
    fn test_callback_uri_without_host_falls_back() {
        let headers = HeaderMap::new();
        assert_eq!(callback_uri(&headers), "http://localhost/auth-callback");
    }
}
