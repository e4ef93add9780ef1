//! Token-overlap ranking of corpus resources against a topic label.
//!
//! Pure functions with no clock, I/O, or store access: the same
//! (topic, candidates, limit) always produces the same output order, which
//! the roadmap determinism guarantee rests on.
//!
//! Scoring: each lower-cased whitespace token of the topic scores 2 when it
//! appears as a substring of the resource title, else 1 when it appears in
//! the description or any tag, else 0. A title hit shadows description and
//! tag hits for the same token; token scores sum per resource.

use crate::models::career::Resource;

const TITLE_WEIGHT: u32 = 2;
const TEXT_WEIGHT: u32 = 1;

/// A candidate resource paired with its relevance score for one topic.
#[derive(Debug, Clone)]
pub struct RankedResource<'a> {
    pub resource: &'a Resource,
    pub score: u32,
}

/// Lower-cased whitespace tokens of a topic label. No punctuation stripping:
/// "problem-solving" stays one token.
pub fn tokenize(topic: &str) -> Vec<String> {
    topic
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Relevance of one resource against pre-tokenized topic tokens.
pub fn score_resource(tokens: &[String], resource: &Resource) -> u32 {
    if tokens.is_empty() {
        return 0;
    }
    let title = resource.title.to_lowercase();
    let description = resource.description.to_lowercase();
    let tags: Vec<String> = resource.tags.iter().map(|t| t.to_lowercase()).collect();

    tokens
        .iter()
        .map(|token| {
            if title.contains(token.as_str()) {
                TITLE_WEIGHT
            } else if description.contains(token.as_str())
                || tags.iter().any(|tag| tag.contains(token.as_str()))
            {
                TEXT_WEIGHT
            } else {
                0
            }
        })
        .sum()
}

/// Ranks `candidates` for `topic`: score descending, then rating descending
/// (a missing rating ranks as 0), then original candidate order. Zero-score
/// resources are excluded, and the result holds at most `limit` entries with
/// no padding when fewer qualify.
pub fn rank<'a>(topic: &str, candidates: &[&'a Resource], limit: usize) -> Vec<RankedResource<'a>> {
    let tokens = tokenize(topic);
    let mut ranked: Vec<RankedResource<'a>> = candidates
        .iter()
        .filter_map(|&resource| {
            let score = score_resource(&tokens, resource);
            (score > 0).then_some(RankedResource { resource, score })
        })
        .collect();

    // Stable sort: candidates tied on score and rating keep corpus order.
    ranked.sort_by(|a, b| {
        b.score.cmp(&a.score).then_with(|| {
            let ra = a.resource.rating.unwrap_or(0.0);
            let rb = b.resource.rating.unwrap_or(0.0);
            rb.partial_cmp(&ra).unwrap_or(std::cmp::Ordering::Equal)
        })
    });
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_resource(title: &str, description: &str, tags: &[&str], rating: Option<f32>) -> Resource {
        Resource {
            title: title.to_string(),
            url: format!("https://example.org/{}", title.replace(' ', "-").to_lowercase()),
            platform: "TestPlatform".to_string(),
            duration: "4 weeks".to_string(),
            description: description.to_string(),
            rating,
            free: true,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            difficulty: None,
            category: "general".to_string(),
        }
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_on_whitespace() {
        assert_eq!(
            tokenize("Object-Oriented  Programming"),
            vec!["object-oriented", "programming"]
        );
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_title_hit_scores_double() {
        let titled = make_resource("Python Basics", "", &[], None);
        let described = make_resource("Intro Course", "learn python fast", &[], None);
        let tokens = tokenize("Python");
        assert_eq!(score_resource(&tokens, &titled), 2);
        assert_eq!(score_resource(&tokens, &described), 1);
    }

    #[test]
    fn test_title_hit_shadows_description_and_tags() {
        // Token present everywhere still scores 2, not 2 + 1.
        let resource = make_resource("Python Handbook", "all about python", &["python"], None);
        let tokens = tokenize("python");
        assert_eq!(score_resource(&tokens, &resource), 2);
    }

    #[test]
    fn test_token_scores_sum_across_tokens() {
        let resource = make_resource("Linear Algebra", "matrix methods", &[], None);
        // "linear" in title (2) + "methods" in description (1).
        let tokens = tokenize("Linear Methods");
        assert_eq!(score_resource(&tokens, &resource), 3);
    }

    #[test]
    fn test_tag_match_scores_one() {
        let resource = make_resource("Course One", "", &["statistics"], None);
        assert_eq!(score_resource(&tokenize("statistics"), &resource), 1);
    }

    #[test]
    fn test_substring_matching_within_words() {
        // "algebra" is a substring of the title word "algebraic".
        let resource = make_resource("Algebraic Structures", "", &[], None);
        assert_eq!(score_resource(&tokenize("algebra"), &resource), 2);
    }

    #[test]
    fn test_zero_score_resources_excluded() {
        let resources = vec![
            make_resource("Organic Chemistry", "", &[], Some(5.0)),
            make_resource("Python Basics", "", &[], Some(3.0)),
        ];
        let candidates: Vec<&Resource> = resources.iter().collect();
        let ranked = rank("python", &candidates, 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].resource.title, "Python Basics");
    }

    #[test]
    fn test_rank_orders_by_score_then_rating() {
        let resources = vec![
            make_resource("About python", "", &[], Some(2.0)),
            make_resource("Notes", "python notes", &[], Some(5.0)),
            make_resource("Python Deep Dive", "", &[], Some(4.5)),
        ];
        let candidates: Vec<&Resource> = resources.iter().collect();
        let ranked = rank("python", &candidates, 10);
        // Title hits (score 2) first, higher rating breaking the tie.
        assert_eq!(ranked[0].resource.title, "Python Deep Dive");
        assert_eq!(ranked[1].resource.title, "About python");
        assert_eq!(ranked[2].resource.title, "Notes");
    }

    #[test]
    fn test_missing_rating_ranks_as_zero() {
        let resources = vec![
            make_resource("Python A", "", &[], None),
            make_resource("Python B", "", &[], Some(0.1)),
        ];
        let candidates: Vec<&Resource> = resources.iter().collect();
        let ranked = rank("python", &candidates, 10);
        assert_eq!(ranked[0].resource.title, "Python B");
        assert_eq!(ranked[1].resource.title, "Python A");
    }

    #[test]
    fn test_full_ties_keep_candidate_order() {
        let resources = vec![
            make_resource("Python First", "", &[], Some(4.0)),
            make_resource("Python Second", "", &[], Some(4.0)),
            make_resource("Python Third", "", &[], Some(4.0)),
        ];
        let candidates: Vec<&Resource> = resources.iter().collect();
        let ranked = rank("python", &candidates, 10);
        let titles: Vec<&str> = ranked.iter().map(|r| r.resource.title.as_str()).collect();
        assert_eq!(titles, vec!["Python First", "Python Second", "Python Third"]);
    }

    #[test]
    fn test_limit_truncates_without_padding() {
        let resources: Vec<Resource> = (0..8)
            .map(|i| make_resource(&format!("Python Course {i}"), "", &[], Some(3.0)))
            .collect();
        let candidates: Vec<&Resource> = resources.iter().collect();
        assert_eq!(rank("python", &candidates, 5).len(), 5);
        assert_eq!(rank("chemistry", &candidates, 5).len(), 0);
    }

    #[test]
    fn test_empty_topic_matches_nothing() {
        let resources = vec![make_resource("Python Basics", "", &[], None)];
        let candidates: Vec<&Resource> = resources.iter().collect();
        assert!(rank("", &candidates, 5).is_empty());
        assert!(rank("   ", &candidates, 5).is_empty());
    }

    #[test]
    fn test_rank_is_deterministic() {
        let resources = vec![
            make_resource("Python Alpha", "intro", &["python"], Some(4.0)),
            make_resource("Beta", "python for experts", &[], None),
            make_resource("Python Gamma", "", &[], Some(4.0)),
        ];
        let candidates: Vec<&Resource> = resources.iter().collect();
        let first: Vec<String> = rank("python intro", &candidates, 10)
            .iter()
            .map(|r| r.resource.title.clone())
            .collect();
        let second: Vec<String> = rank("python intro", &candidates, 10)
            .iter()
            .map(|r| r.resource.title.clone())
            .collect();
        assert_eq!(first, second);
    }
}
