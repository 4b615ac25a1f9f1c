//! Application configuration

use std::env;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Leaderboard size when the request does not specify a limit
    pub default_leaderboard_limit: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            default_leaderboard_limit: env::var("LEADERBOARD_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(25),
        }
    }
}
