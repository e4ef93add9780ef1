//! Pluggable, trait-based document fetchers for the one-time corpus load.
//!
//! Default: `FileSource` (local JSON files). `HttpSource` covers datasets
//! served from object storage or a static host; both are chosen per
//! configured location string at startup.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

/// A fetchable corpus document. Implement this to add a new dataset origin
/// without touching the loader.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable origin for load logs.
    fn describe(&self) -> String;

    /// Reads the full document body as UTF-8 text.
    async fn fetch(&self) -> Result<String>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read dataset file '{}'", self.path.display()))
    }
}

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        HttpSource {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("failed to fetch dataset from '{}'", self.url))?
            .error_for_status()
            .with_context(|| format!("dataset endpoint '{}' returned an error status", self.url))?;
        response
            .text()
            .await
            .with_context(|| format!("failed to read dataset body from '{}'", self.url))
    }
}

/// Picks a source for one configured location: http(s) URLs fetch over the
/// network, everything else is treated as a file path.
pub fn source_for(location: &str) -> Box<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location))
    } else {
        Box::new(FileSource::new(location))
    }
}
