use anyhow::{Context, Result};

pub const DEFAULT_CAREERS_SOURCE: &str = "data/careers_stem.json";
pub const DEFAULT_RESOURCE_SOURCES: &str =
    "data/resources_massive.json,data/math_resources_massive.json";

/// Application configuration loaded from environment variables.
/// Every setting has a workable default: the engine boots (possibly with an
/// empty corpus) even with nothing set.
#[derive(Debug, Clone)]
pub struct Config {
    /// File path or http(s) URL of the careers dataset.
    pub careers_source: String,
    /// File paths or http(s) URLs of resource datasets, comma-separated in
    /// the environment.
    pub resource_sources: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            careers_source: env_or("CAREERS_SOURCE", DEFAULT_CAREERS_SOURCE),
            resource_sources: parse_source_list(&env_or(
                "RESOURCE_SOURCES",
                DEFAULT_RESOURCE_SOURCES,
            )),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_source_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}
