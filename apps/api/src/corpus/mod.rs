//! In-memory resource corpus and career catalog.
//!
//! Loaded once at startup and immutable afterwards: every request handler
//! reads the same snapshot lock-free through an `Arc`. A failed or partial
//! load degrades (skipped entries, skipped documents, possibly an empty
//! corpus) but never aborts the process.

pub mod handlers;
pub mod index;
pub mod ingest;
pub mod source;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::models::career::{normalize_career_key, Career, Resource};
use crate::roadmap::domains::{self, TopicDomain};
use crate::roadmap::matcher;

use index::TokenIndex;
use source::DatasetSource;

/// Load-time accounting, surfaced by the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub resources: usize,
    pub careers: usize,
    pub categories: usize,
    pub indexed_tokens: usize,
    pub skipped_entries: usize,
    pub skipped_documents: usize,
    pub loaded_at: DateTime<Utc>,
}

pub struct CorpusStore {
    /// Corpus order. Positions are stable ids for the index and subsets.
    resources: Vec<Resource>,
    /// Keyed by normalized career name.
    careers: HashMap<String, Career>,
    /// Category name -> ascending corpus positions.
    by_category: BTreeMap<String, Vec<usize>>,
    /// Positions whose category or tags read as mathematics.
    math_subset: Vec<usize>,
    /// The complement of `math_subset`.
    general_subset: Vec<usize>,
    index: TokenIndex,
    stats: CorpusStats,
}

impl CorpusStore {
    /// Loads every configured source. Unreadable or unrecognized documents
    /// and malformed entries are skipped and counted; an empty corpus is a
    /// valid degraded outcome.
    pub async fn load(
        resource_sources: &[Box<dyn DatasetSource>],
        careers_source: &dyn DatasetSource,
    ) -> Self {
        let mut resources = Vec::new();
        let mut careers = Vec::new();
        let mut skipped_entries = 0;
        let mut skipped_documents = 0;

        for source in resource_sources {
            match source.fetch().await {
                Ok(text) => match ingest::parse_resource_document(&text) {
                    Ok((mut parsed, report)) => {
                        if report.skipped > 0 {
                            warn!(
                                source = %source.describe(),
                                skipped = report.skipped,
                                "skipped malformed resource entries"
                            );
                        }
                        info!(
                            source = %source.describe(),
                            loaded = report.loaded,
                            "loaded resource document"
                        );
                        skipped_entries += report.skipped;
                        resources.append(&mut parsed);
                    }
                    Err(e) => {
                        skipped_documents += 1;
                        warn!(
                            source = %source.describe(),
                            error = %e,
                            "unrecognized resource document shape, skipping"
                        );
                    }
                },
                Err(e) => {
                    skipped_documents += 1;
                    warn!(source = %source.describe(), error = %e, "failed to fetch resource document, skipping");
                }
            }
        }

        match careers_source.fetch().await {
            Ok(text) => match ingest::parse_careers_document(&text) {
                Ok((parsed, report)) => {
                    info!(
                        source = %careers_source.describe(),
                        loaded = report.loaded,
                        "loaded careers document"
                    );
                    skipped_entries += report.skipped;
                    careers = parsed;
                }
                Err(e) => {
                    skipped_documents += 1;
                    warn!(source = %careers_source.describe(), error = %e, "unrecognized careers document, skipping");
                }
            },
            Err(e) => {
                skipped_documents += 1;
                warn!(source = %careers_source.describe(), error = %e, "failed to fetch careers document, skipping");
            }
        }

        Self::build(resources, careers, skipped_entries, skipped_documents)
    }

    /// Assembles a store from already-validated records. The tail of `load`,
    /// and the direct construction path for tests.
    pub fn from_records(resources: Vec<Resource>, careers: Vec<Career>) -> Self {
        Self::build(resources, careers, 0, 0)
    }

    fn build(
        resources: Vec<Resource>,
        careers: Vec<Career>,
        skipped_entries: usize,
        skipped_documents: usize,
    ) -> Self {
        let mut by_category: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut math_subset = Vec::new();
        let mut general_subset = Vec::new();

        for (position, resource) in resources.iter().enumerate() {
            by_category
                .entry(resource.category.clone())
                .or_default()
                .push(position);
            let is_math = domains::is_math_label(&resource.category)
                || resource.tags.iter().any(|tag| domains::is_math_label(tag));
            if is_math {
                math_subset.push(position);
            } else {
                general_subset.push(position);
            }
        }

        let index = TokenIndex::build(&resources);
        let stats = CorpusStats {
            resources: resources.len(),
            careers: careers.len(),
            categories: by_category.len(),
            indexed_tokens: index.token_count(),
            skipped_entries,
            skipped_documents,
            loaded_at: Utc::now(),
        };
        let careers = careers
            .into_iter()
            .map(|career| (normalize_career_key(&career.name), career))
            .collect();

        CorpusStore {
            resources,
            careers,
            by_category,
            math_subset,
            general_subset,
            index,
            stats,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.careers.is_empty()
    }

    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    /// Case- and whitespace-insensitive career lookup.
    pub fn get_career(&self, name: &str) -> Option<&Career> {
        self.careers.get(&normalize_career_key(name))
    }

    /// All careers sorted by name, for stable listings.
    pub fn careers(&self) -> Vec<&Career> {
        let mut all: Vec<&Career> = self.careers.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Category names in sorted order.
    pub fn category_names(&self) -> Vec<String> {
        self.by_category.keys().cloned().collect()
    }

    /// Categories selected by an optional filter: `None` selects all, else
    /// exact case-insensitive name matches, else every category containing
    /// the query as a substring.
    pub fn matching_categories(&self, query: Option<&str>) -> Vec<&str> {
        let query = match query {
            Some(q) => q.trim().to_lowercase(),
            None => return self.by_category.keys().map(String::as_str).collect(),
        };
        let exact: Vec<&str> = self
            .by_category
            .keys()
            .filter(|name| name.to_lowercase() == query)
            .map(String::as_str)
            .collect();
        if !exact.is_empty() {
            return exact;
        }
        self.by_category
            .keys()
            .filter(|name| name.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }

    /// Resources under one exact category name, in corpus order.
    pub fn category_resources(&self, name: &str) -> Vec<&Resource> {
        self.by_category
            .get(name)
            .map(|positions| positions.iter().map(|&i| &self.resources[i]).collect())
            .unwrap_or_default()
    }

    /// Resources across every category the filter selects, merged back into
    /// corpus order.
    pub fn resources_in_category(&self, category: &str) -> Vec<&Resource> {
        let mut positions: Vec<usize> = self
            .matching_categories(Some(category))
            .into_iter()
            .flat_map(|name| self.by_category[name].iter().copied())
            .collect();
        positions.sort_unstable();
        positions.into_iter().map(|i| &self.resources[i]).collect()
    }

    /// Distinct non-empty platforms, sorted.
    pub fn platforms(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .resources
            .iter()
            .filter(|r| !r.platform.is_empty())
            .map(|r| r.platform.as_str())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Distinct difficulty labels present in the corpus, sorted.
    pub fn difficulty_levels(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .resources
            .iter()
            .filter_map(|r| r.difficulty.as_deref())
            .filter(|d| !d.is_empty())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// Free-text search used by the resource search endpoint. Same scoring
    /// and tie-breaking as topic matching, optionally restricted to the
    /// categories a filter selects.
    pub fn search(&self, query: &str, category: Option<&str>, limit: usize) -> Vec<&Resource> {
        let tokens = matcher::tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }
        let candidates: Vec<&Resource> = match category {
            Some(filter) => self.resources_in_category(filter),
            None => self
                .index
                .candidates(&tokens)
                .into_iter()
                .map(|i| &self.resources[i])
                .collect(),
        };
        matcher::rank(query, &candidates, limit)
            .into_iter()
            .map(|ranked| ranked.resource)
            .collect()
    }

    /// Top matches for a roadmap topic. Math-flavored topics search only the
    /// math partition of the corpus, everything else the general partition;
    /// candidate discovery goes through the token index.
    pub fn match_topic(&self, topic: &str, limit: usize) -> Vec<&Resource> {
        let tokens = matcher::tokenize(topic);
        if tokens.is_empty() || self.resources.is_empty() {
            return Vec::new();
        }
        let subset = match domains::topic_domain(topic) {
            TopicDomain::Math => &self.math_subset,
            TopicDomain::General => &self.general_subset,
        };
        let discovered = self.index.candidates(&tokens);
        let positions = intersect_sorted(&discovered, subset);
        let candidates: Vec<&Resource> = positions.iter().map(|&i| &self.resources[i]).collect();
        matcher::rank(topic, &candidates, limit)
            .into_iter()
            .map(|ranked| ranked.resource)
            .collect()
    }
}

/// Intersection of two ascending position lists, ascending.
fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
