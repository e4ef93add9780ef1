//! Keyword classification of skills and topics into skill domains.
//!
//! Case-insensitive substring checks against fixed term lists. Deliberately
//! includes stems ("statistic" covers both "statistics" and "statistical"),
//! so exact-word matching would be wrong here.

use crate::models::roadmap::SkillDomains;

const MATH_TERMS: &[&str] = &[
    "math",
    "calculus",
    "statistic",
    "algebra",
    "geometry",
    "probability",
    "trigonometry",
];

const PROGRAMMING_TERMS: &[&str] = &[
    "programming",
    "coding",
    "software",
    "development",
    "python",
    "java",
    "javascript",
    "sql",
    "git",
    "algorithm",
];

const SOFT_SKILL_TERMS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem-solving",
    "critical thinking",
    "collaboration",
    "presentation",
];

/// Which corpus subset a roadmap topic is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicDomain {
    /// Mathematics-flavored topics search only math-tagged resources.
    Math,
    /// Everything else searches the non-math remainder of the corpus.
    General,
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    let lower = text.to_lowercase();
    terms.iter().any(|term| lower.contains(term))
}

/// True when the label reads as mathematics. Used both to partition the
/// corpus at load time and to route topics at match time, so the two sides
/// can never disagree.
pub fn is_math_label(text: &str) -> bool {
    contains_any(text, MATH_TERMS)
}

pub fn topic_domain(topic: &str) -> TopicDomain {
    if is_math_label(topic) {
        TopicDomain::Math
    } else {
        TopicDomain::General
    }
}

/// Buckets skill labels into math / programming / soft skills. Filters are
/// independent: "Statistical Programming" lands in both math and programming.
pub fn classify_skills<S: AsRef<str>>(skills: &[S]) -> SkillDomains {
    let mut domains = SkillDomains::default();
    for skill in skills {
        let label = skill.as_ref();
        if contains_any(label, MATH_TERMS) {
            domains.math.push(label.to_string());
        }
        if contains_any(label, PROGRAMMING_TERMS) {
            domains.programming.push(label.to_string());
        }
        if contains_any(label, SOFT_SKILL_TERMS) {
            domains.soft_skills.push(label.to_string());
        }
    }
    domains
}
