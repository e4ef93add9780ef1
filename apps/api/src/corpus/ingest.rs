//! Corpus document parsing and per-entry validation.
//!
//! Datasets arrive in three known JSON shapes, detected by structure rather
//! than by filename:
//!
//! - wrapped:   `{ "resources": { "<category>": [entry, ...] }, "metadata": {...} }`
//! - math:      `{ "mathematics_massive": { "topics": { "<topic>": { "courses": [...], ... } } } }`
//! - bare:      `{ "<category>": [entry, ...] }`
//!
//! Validation is per entry, not per document: entries missing a title or
//! url, or carrying a numeric rating outside [0, 5], are skipped and counted
//! while the rest of the document loads. Categories and topics are walked in
//! sorted key order so corpus positions are reproducible across runs.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::models::career::{Career, Resource};

/// Entry-level accounting for one parsed document.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResourceDocument {
    Wrapped {
        resources: BTreeMap<String, Value>,
    },
    Math {
        mathematics_massive: MathRoot,
    },
    // Catch-all variant last: it accepts any JSON object.
    Bare(BTreeMap<String, Value>),
}

#[derive(Debug, Deserialize)]
struct MathRoot {
    #[serde(default)]
    topics: BTreeMap<String, MathTopic>,
}

/// A math topic's resource lists. Walked in this fixed order, so courses for
/// a topic always precede its books, videos, and practice problems.
#[derive(Debug, Deserialize)]
struct MathTopic {
    #[serde(default)]
    courses: Vec<Value>,
    #[serde(default)]
    books: Vec<Value>,
    #[serde(default)]
    videos: Vec<Value>,
    #[serde(default)]
    practice_problems: Vec<Value>,
}

/// Lenient mirror of a raw corpus entry. Everything optional; validation
/// decides what survives.
#[derive(Debug, Deserialize)]
struct RawResource {
    title: Option<String>,
    url: Option<String>,
    platform: Option<String>,
    duration: Option<String>,
    description: Option<String>,
    rating: Option<Value>,
    #[serde(default)]
    tags: Vec<String>,
    difficulty: Option<String>,
    free: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawCareer {
    #[serde(default)]
    description: String,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    category: String,
    degree_required: Option<String>,
    growth_rate: Option<String>,
    avg_salary: Option<String>,
}

/// Parses one resource document. `Err` means the document matched none of
/// the known shapes; entry-level problems land in the report instead.
pub fn parse_resource_document(text: &str) -> Result<(Vec<Resource>, LoadReport), serde_json::Error> {
    let document: ResourceDocument = serde_json::from_str(text)?;
    let mut resources = Vec::new();
    let mut report = LoadReport::default();

    match document {
        ResourceDocument::Wrapped { resources: categories }
        | ResourceDocument::Bare(categories) => {
            for (category, value) in categories {
                ingest_category(&category, value, &mut resources, &mut report);
            }
        }
        ResourceDocument::Math { mathematics_massive } => {
            for (topic, lists) in mathematics_massive.topics {
                let entry_lists = [
                    lists.courses,
                    lists.books,
                    lists.videos,
                    lists.practice_problems,
                ];
                for entries in entry_lists {
                    for entry in entries {
                        ingest_entry(&topic, entry, &mut resources, &mut report);
                    }
                }
            }
        }
    }

    Ok((resources, report))
}

/// Parses the careers document: a map of career name to attributes.
pub fn parse_careers_document(text: &str) -> Result<(Vec<Career>, LoadReport), serde_json::Error> {
    let document: BTreeMap<String, Value> = serde_json::from_str(text)?;
    let mut careers = Vec::new();
    let mut report = LoadReport::default();

    for (name, value) in document {
        if name.trim().is_empty() {
            report.skipped += 1;
            continue;
        }
        match serde_json::from_value::<RawCareer>(value) {
            Ok(raw) => {
                careers.push(Career {
                    name: name.trim().to_string(),
                    category: raw.category,
                    description: raw.description,
                    skills: raw.skills,
                    degree_required: raw.degree_required,
                    growth_rate: raw.growth_rate,
                    avg_salary: raw.avg_salary,
                });
                report.loaded += 1;
            }
            Err(_) => report.skipped += 1,
        }
    }

    Ok((careers, report))
}

fn ingest_category(category: &str, value: Value, out: &mut Vec<Resource>, report: &mut LoadReport) {
    match value {
        Value::Array(entries) => {
            for entry in entries {
                ingest_entry(category, entry, out, report);
            }
        }
        // Non-list payloads under a category key (stray metadata blocks and
        // the like) count as one skipped entry.
        _ => report.skipped += 1,
    }
}

fn ingest_entry(category: &str, entry: Value, out: &mut Vec<Resource>, report: &mut LoadReport) {
    match validate_entry(category, entry) {
        Some(resource) => {
            out.push(resource);
            report.loaded += 1;
        }
        None => report.skipped += 1,
    }
}

fn validate_entry(category: &str, entry: Value) -> Option<Resource> {
    let raw: RawResource = serde_json::from_value(entry).ok()?;
    let title = raw.title.filter(|t| !t.trim().is_empty())?;
    let url = raw.url.filter(|u| !u.trim().is_empty())?;
    let rating = match parse_rating(raw.rating) {
        Rating::Absent => None,
        Rating::Valid(r) => Some(r),
        Rating::OutOfRange => return None,
    };

    Some(Resource {
        title,
        url,
        platform: raw.platform.unwrap_or_default(),
        duration: raw.duration.unwrap_or_default(),
        description: raw.description.unwrap_or_default(),
        rating,
        free: raw.free.unwrap_or(false),
        tags: raw.tags,
        difficulty: raw.difficulty,
        category: category.to_string(),
    })
}

enum Rating {
    Absent,
    Valid(f32),
    OutOfRange,
}

/// Ratings appear as numbers and as strings in the wild. A numeric value
/// outside [0, 5] rejects the whole entry; a string that fails to parse
/// degrades to "no rating".
fn parse_rating(value: Option<Value>) -> Rating {
    match value {
        None | Some(Value::Null) => Rating::Absent,
        Some(Value::Number(n)) => match n.as_f64() {
            Some(r) if (0.0..=5.0).contains(&r) => Rating::Valid(r as f32),
            _ => Rating::OutOfRange,
        },
        Some(Value::String(s)) => match s.trim().parse::<f32>() {
            Ok(r) if (0.0..=5.0).contains(&r) => Rating::Valid(r),
            Ok(_) => Rating::OutOfRange,
            Err(_) => Rating::Absent,
        },
        Some(_) => Rating::Absent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_document_parses_and_ignores_metadata() {
        let doc = r#"{
            "resources": {
                "programming": [
                    {"title": "Intro to Python", "url": "https://example.org/py", "rating": 4.5}
                ]
            },
            "metadata": {"version": 3, "generated": "2024-01-01"}
        }"#;
        let (resources, report) = parse_resource_document(doc).unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 0);
        assert_eq!(resources[0].category, "programming");
        assert_eq!(resources[0].rating, Some(4.5));
    }

    #[test]
    fn test_bare_document_parses() {
        let doc = r#"{
            "chemistry": [
                {"title": "Organic Chemistry", "url": "https://example.org/oc"}
            ]
        }"#;
        let (resources, report) = parse_resource_document(doc).unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(resources[0].category, "chemistry");
        assert!(resources[0].rating.is_none());
    }

    #[test]
    fn test_math_document_uses_topic_as_category() {
        let doc = r#"{
            "mathematics_massive": {
                "topics": {
                    "Linear Algebra": {
                        "description": "Vectors and matrices",
                        "difficulty": "intermediate",
                        "courses": [
                            {"title": "LA Course", "url": "https://example.org/la"}
                        ],
                        "books": [
                            {"title": "LA Book", "url": "https://example.org/la-book"}
                        ],
                        "videos": [],
                        "practice_problems": [
                            {"title": "LA Problems", "url": "https://example.org/la-prob"}
                        ]
                    }
                }
            }
        }"#;
        let (resources, report) = parse_resource_document(doc).unwrap();
        assert_eq!(report.loaded, 3);
        assert!(resources.iter().all(|r| r.category == "Linear Algebra"));
        // Fixed list order within a topic: courses, books, then practice.
        assert_eq!(resources[0].title, "LA Course");
        assert_eq!(resources[1].title, "LA Book");
        assert_eq!(resources[2].title, "LA Problems");
    }

    #[test]
    fn test_categories_walked_in_sorted_order() {
        let doc = r#"{
            "zoology": [{"title": "Z", "url": "https://example.org/z"}],
            "astronomy": [{"title": "A", "url": "https://example.org/a"}]
        }"#;
        let (resources, _) = parse_resource_document(doc).unwrap();
        assert_eq!(resources[0].category, "astronomy");
        assert_eq!(resources[1].category, "zoology");
    }

    #[test]
    fn test_entry_missing_title_or_url_is_skipped() {
        let doc = r#"{
            "programming": [
                {"url": "https://example.org/1"},
                {"title": "  ", "url": "https://example.org/2"},
                {"title": "No URL"},
                {"title": "Good", "url": "https://example.org/good"}
            ]
        }"#;
        let (resources, report) = parse_resource_document(doc).unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 3);
        assert_eq!(resources[0].title, "Good");
    }

    #[test]
    fn test_numeric_rating_out_of_range_rejects_entry() {
        let doc = r#"{
            "programming": [
                {"title": "Too High", "url": "https://example.org/h", "rating": 7.2},
                {"title": "Negative", "url": "https://example.org/n", "rating": -1},
                {"title": "Boundary", "url": "https://example.org/b", "rating": 5.0}
            ]
        }"#;
        let (resources, report) = parse_resource_document(doc).unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(resources[0].title, "Boundary");
    }

    #[test]
    fn test_string_ratings_parse_or_degrade() {
        let doc = r#"{
            "programming": [
                {"title": "Parsed", "url": "https://example.org/p", "rating": "4.8"},
                {"title": "Junk", "url": "https://example.org/j", "rating": "five stars"},
                {"title": "StringHigh", "url": "https://example.org/s", "rating": "9.9"}
            ]
        }"#;
        let (resources, report) = parse_resource_document(doc).unwrap();
        // "five stars" keeps the entry with no rating; "9.9" is out of range.
        assert_eq!(report.loaded, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(resources[0].rating, Some(4.8));
        assert_eq!(resources[1].title, "Junk");
        assert!(resources[1].rating.is_none());
    }

    #[test]
    fn test_non_list_category_counts_one_skip() {
        let doc = r#"{
            "programming": [{"title": "Ok", "url": "https://example.org/ok"}],
            "oddball": {"nested": true}
        }"#;
        let (resources, report) = parse_resource_document(doc).unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_unrecognized_document_shape_errors() {
        assert!(parse_resource_document("[1, 2, 3]").is_err());
        assert!(parse_resource_document("not json at all").is_err());
    }

    #[test]
    fn test_careers_document_parses() {
        let doc = r#"{
            "Data Scientist": {
                "description": "Analyzes data",
                "skills": ["Statistics", "Python Programming"],
                "category": "Technology",
                "avg_salary": "$120,000"
            },
            "Chemist": {
                "description": "Studies matter",
                "skills": ["Chemistry"]
            }
        }"#;
        let (careers, report) = parse_careers_document(doc).unwrap();
        assert_eq!(report.loaded, 2);
        assert_eq!(careers[0].name, "Chemist");
        assert_eq!(careers[1].name, "Data Scientist");
        assert_eq!(careers[1].avg_salary.as_deref(), Some("$120,000"));
    }

    #[test]
    fn test_careers_with_blank_name_or_bad_shape_skipped() {
        let doc = r#"{
            "  ": {"description": "nameless"},
            "Physicist": "not an object",
            "Biologist": {"description": "Studies life"}
        }"#;
        let (careers, report) = parse_careers_document(doc).unwrap();
        assert_eq!(report.loaded, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(careers[0].name, "Biologist");
    }
}
