use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// API key for the generative model endpoint. Missing key disables the
    /// summarization endpoints only; everything else keeps serving.
    pub model_api_key: Option<String>,
    pub model_name: String,
    pub fallback_model_name: String,
    /// Serve the built-in fixture dataset instead of live store queries.
    pub use_fixture_data: bool,
    /// Directory for accepted knowledge-base document uploads.
    pub upload_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            model_api_key: env::var("MODEL_API_KEY").ok(),
            model_name: env::var("MODEL_NAME")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            fallback_model_name: env::var("FALLBACK_MODEL_NAME")
                .unwrap_or_else(|_| "gemini-1.5-flash-8b".to_string()),
            use_fixture_data: env::var("USE_FIXTURE_DATA")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("uploads")),
        })
    }
}
