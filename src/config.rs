use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Translation service
    pub translator_url: String,
    pub translator_api_key: Option<String>,
    pub translator_timeout_secs: u64,

    // Content
    pub menu_file: String,

    // Display
    pub display_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Translation service
            translator_url: std::env::var("TRANSLATOR_URL")
                .context("TRANSLATOR_URL not set")?,
            translator_api_key: std::env::var("TRANSLATOR_API_KEY")
                .ok()
                .filter(|v| !v.is_empty()),
            translator_timeout_secs: std::env::var("TRANSLATOR_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),

            // Content
            menu_file: std::env::var("MENU_FILE")
                .unwrap_or_else(|_| "data/menu.json".to_string()),

            // Display
            display_language: std::env::var("DISPLAY_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
        })
    }
}
