use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model_name: String,
    /// When true, the bundled sample clue data is served instead of calling
    /// the Gemini API.
    pub use_sample_data: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let use_sample_data = std::env::var("USE_SAMPLE_CROSSWORD_DATA")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        // The API key is only needed when the real clue source is in play.
        let gemini_api_key = if use_sample_data {
            std::env::var("GEMINI_API_KEY").unwrap_or_default()
        } else {
            require_env("GEMINI_API_KEY")?
        };

        Ok(Config {
            gemini_api_key,
            gemini_model_name: std::env::var("GEMINI_MODEL_NAME")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            use_sample_data,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
