//! Random Playlist Web Server Library
//!
//! This library implements a small web server that walks a user through the
//! Spotify OAuth2 authorization-code flow and then builds a private playlist
//! of randomly sampled tracks on their behalf.
//!
//! # Modules
//!
//! - `api` - HTTP request handlers and the session gate middleware
//! - `config` - Configuration loaded once from environment variables
//! - `management` - In-memory registry for pending authorization state tokens
//! - `server` - Router wiring and the listening loop
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Random string and offset helpers
//!
//! # Example
//!
//! ```
//! use randplay::{config, server};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env();
//!     let config = config::Config::from_env().unwrap();
//!     server::start_server(config).await;
//! }
//! ```

pub mod api;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational log line with a blue bullet point.
///
/// Each line carries a UTC timestamp so concurrent request handling stays
/// readable in the server log. Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
        "{} [{}] {}",
        ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
        "o".blue().bold(),
        std::format_args!($($arg)*)
    );
  })
}

/// Prints a success log line with a green checkmark.
///
/// Accepts the same arguments as `println!`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
        "{} [{}] {}",
        ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
        "✓".green().bold(),
        std::format_args!($($arg)*)
    );
  })
}

/// Prints an error log line with a red exclamation mark and exits the process.
///
/// Only for unrecoverable startup failures such as missing configuration or
/// a port that cannot be bound. Request handling must never use this macro;
/// request errors are answered, not fatal.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
        "{} [{}] {}",
        ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
        "!".red().bold(),
        std::format_args!($($arg)*)
    );
    std::process::exit(1);
  })
}

/// Prints a warning log line with a yellow exclamation mark.
///
/// Used for recoverable request-level failures, for example a playlist build
/// that fell through to the re-authentication redirect. Accepts the same
/// arguments as `println!`.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!(
        "{} [{}] {}",
        ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
        "!".yellow().bold(),
        std::format_args!($($arg)*)
    );
  })
}
