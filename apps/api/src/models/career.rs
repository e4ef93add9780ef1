//! Career catalog and resource corpus records.
//!
//! Both types are reference data: validated once at ingestion, then immutable
//! for the process lifetime. Handlers clone them into responses.

use serde::{Deserialize, Serialize};

/// A STEM career from the careers dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_salary: Option<String>,
}

/// A learning resource from the corpus.
///
/// Ingestion guarantees `title` and `url` are non-empty and that a present
/// `rating` lies in [0, 5]. `category` is the dataset key the entry was
/// ingested under (a resource category, or a topic name for math datasets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default)]
    pub free: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    pub category: String,
}

/// Canonical lookup key for a career name: lower-cased, with interior
/// whitespace runs collapsed to a single space. "  data   SCIENTIST " and
/// "Data Scientist" resolve to the same key.
pub fn normalize_career_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
