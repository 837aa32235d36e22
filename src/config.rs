//! Configuration management for the random playlist server.
//!
//! All configuration is read from environment variables exactly once at
//! process start and carried in a [`Config`] value that the server hands to
//! every component needing it. A `.env` file in the working directory is
//! honored for local development; real environment variables win.
//!
//! Only the client credentials are mandatory. The Spotify endpoint URLs and
//! the requested scope carry production defaults and exist as variables so
//! tests can point the server at a local stand-in.

use std::env;

/// Port the server listens on when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 3000;

const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_SCOPE: &str = "playlist-modify-private";

/// Runtime configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub port: u16,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub scope: String,
}

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are fine; the process environment may already carry
/// everything needed.
pub fn load_env() {
    dotenv::dotenv().ok();
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error message naming the offending variable if
    /// `SPOTIFY_CLIENT_ID` or `SPOTIFY_CLIENT_SECRET` is missing, or if
    /// `PORT` is set but not a valid port number.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env()?;
    /// println!("listening on port {}", config.port);
    /// ```
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            client_id: require("SPOTIFY_CLIENT_ID")?,
            client_secret: require("SPOTIFY_CLIENT_SECRET")?,
            port: match env::var("PORT") {
                Ok(port) => port
                    .parse::<u16>()
                    .map_err(|e| format!("PORT is not a valid port number: {}", e))?,
                Err(_) => DEFAULT_PORT,
            },
            auth_url: or_default("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: or_default("SPOTIFY_API_URL", DEFAULT_API_URL),
            scope: or_default("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE),
        })
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}

fn or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
