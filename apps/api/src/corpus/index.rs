//! Inverted token index over the resource corpus.
//!
//! Built once after load. Each whitespace token of a resource's title,
//! description, and tags maps to the resource's corpus position. Topic
//! matching first collects candidate positions whose indexed tokens contain
//! a query token as a substring, then re-scores only those candidates.
//!
//! Results are identical to a linear scan of the corpus: query tokens are
//! whitespace-free, so any substring hit inside a field necessarily lies
//! within a single whitespace token of that field, and that token is in the
//! index.

use std::collections::{BTreeSet, HashMap};

use crate::models::career::Resource;
use crate::roadmap::matcher;

#[derive(Debug, Default)]
pub struct TokenIndex {
    /// token -> ascending corpus positions containing it.
    postings: HashMap<String, Vec<usize>>,
}

impl TokenIndex {
    pub fn build(resources: &[Resource]) -> Self {
        let mut postings: HashMap<String, BTreeSet<usize>> = HashMap::new();
        for (position, resource) in resources.iter().enumerate() {
            for token in index_tokens(resource) {
                postings.entry(token).or_default().insert(position);
            }
        }
        TokenIndex {
            postings: postings
                .into_iter()
                .map(|(token, positions)| (token, positions.into_iter().collect()))
                .collect(),
        }
    }

    /// Corpus positions of every resource holding at least one indexed token
    /// that contains any of `tokens` as a substring. Ascending, i.e. corpus
    /// order, so downstream ranking ties resolve the same way a scan would.
    pub fn candidates(&self, tokens: &[String]) -> Vec<usize> {
        let mut hits: BTreeSet<usize> = BTreeSet::new();
        for token in tokens {
            if token.is_empty() {
                continue;
            }
            for (indexed, positions) in &self.postings {
                if indexed.contains(token.as_str()) {
                    hits.extend(positions.iter().copied());
                }
            }
        }
        hits.into_iter().collect()
    }

    /// Number of distinct indexed tokens.
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }
}

fn index_tokens(resource: &Resource) -> BTreeSet<String> {
    let mut tokens: BTreeSet<String> = BTreeSet::new();
    tokens.extend(matcher::tokenize(&resource.title));
    tokens.extend(matcher::tokenize(&resource.description));
    for tag in &resource.tags {
        tokens.extend(matcher::tokenize(tag));
    }
    tokens
}
