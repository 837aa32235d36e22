use serde_json::Value;

use crate::types::Token;

use super::client::SpotifyClient;

impl SpotifyClient {
    /// Computes the provider authorization URL the browser is sent to.
    ///
    /// Carries the configured client id and scope, the redirect URI derived
    /// from the current request, and the freshly minted `state` token that
    /// the callback will be required to echo.
    pub fn authorize_url(&self, state: &str) -> String {
        format!(
            "{auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&scope={scope}&state={state}",
            auth_url = &self.config.auth_url,
            client_id = &self.config.client_id,
            redirect_uri = &self.redirect_uri,
            scope = &self.config.scope,
            state = state
        )
    }

    /// Exchanges an authorization code for an access/refresh token pair.
    ///
    /// Completes the OAuth2 authorization-code flow by posting the code to
    /// the provider's token endpoint. The request is authenticated with the
    /// client id and secret via HTTP Basic auth, and must present the same
    /// redirect URI the authorization request carried.
    ///
    /// # Arguments
    ///
    /// * `code` - Authorization code received from the OAuth callback
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(Token)` - Access token, refresh token, and metadata
    /// - `Err(reqwest::Error)` - HTTP error, network error, or API error
    ///
    /// # Error Handling
    ///
    /// Common failure scenarios:
    /// - Invalid or expired authorization code
    /// - Redirect URI mismatch with the authorization request
    /// - Network connectivity issues
    /// - Spotify API service errors
    ///
    /// The authorization code is single-use and expires quickly, so the
    /// exchange happens immediately inside the callback handler.
    pub async fn exchange_code(&self, code: &str) -> Result<Token, reqwest::Error> {
        let res = self
            .http
            .post(&self.config.token_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let json: Value = res.json().await?;

        Ok(Token {
            access_token: json["access_token"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
            refresh_token: json["refresh_token"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
            scope: json["scope"].as_str().unwrap_or_default().to_string(),
            expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
            obtained_at: chrono::Utc::now().timestamp() as u64,
        })
    }
}
