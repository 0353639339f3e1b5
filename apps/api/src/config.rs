use anyhow::{Context, Result};

const DEFAULT_NOTION_API_URL: &str = "https://api.notion.com/v1";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub notion_api_key: String,
    pub notion_api_url: String,
    pub resume_database_id: String,
    pub users_database_id: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            notion_api_key: require_env("NOTION_API_KEY")?,
            notion_api_url: std::env::var("NOTION_API_URL")
                .unwrap_or_else(|_| DEFAULT_NOTION_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            resume_database_id: require_env("NOTION_RESUME_DATABASE_ID")?,
            users_database_id: require_env("NOTION_USERS_DATABASE_ID")?,
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
