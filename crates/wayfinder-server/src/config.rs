//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub advice_url: String,
    pub advice_api_key: String,
    /// When false, the external advice source is never contacted and the
    /// static fallback pair is applied directly.
    pub advice_enabled: bool,
    /// Simulated playback speed of the default narration backend.
    pub narration_ms_per_char: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("WAYFINDER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
            advice_url: env::var("ADVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            advice_api_key: env::var("ADVICE_API_KEY").unwrap_or_default(),
            advice_enabled: env::var("ADVICE_ENABLED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
            narration_ms_per_char: env::var("NARRATION_MS_PER_CHAR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
        }
    }
}
