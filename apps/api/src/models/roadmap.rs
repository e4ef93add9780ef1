//! Roadmap response models: phases, milestones, skill domains.
//!
//! Shared by the curated catalog, the fallback synthesizer, and the HTTP
//! handlers. Progress fields (`completed_topics`, `completion_percentage`,
//! `overall_completion`) stay `None` unless the caller supplied completion
//! state, and absent fields are omitted from JSON entirely.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::career::Resource;

/// Difficulty tier of a roadmap phase.
///
/// Ordering is part of the contract: phases within a roadmap never decrease
/// in difficulty, which the derived `Ord` lets callers check directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Career skills bucketed into the three matching domains. A skill may land
/// in more than one bucket; unclassified skills appear in none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillDomains {
    #[serde(default)]
    pub math: Vec<String>,
    #[serde(default)]
    pub programming: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
}

/// Response view of a resource attached to a phase. Intentionally slimmer
/// than the corpus record: matching internals (tags, category) stay out of
/// roadmap payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSummary {
    pub title: String,
    pub url: String,
    pub platform: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub description: String,
}

impl From<&Resource> for ResourceSummary {
    fn from(resource: &Resource) -> Self {
        ResourceSummary {
            title: resource.title.clone(),
            url: resource.url.clone(),
            platform: resource.platform.clone(),
            duration: resource.duration.clone(),
            rating: resource.rating,
            description: resource.description.clone(),
        }
    }
}

/// One learning phase of a roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub duration: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub topics: Vec<String>,
    #[serde(default)]
    pub resources: Vec<ResourceSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_topics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_percentage: Option<u8>,
}

/// A checkpoint with completion criteria and a rough target date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub description: String,
    pub target_date: String,
    pub criteria: Vec<String>,
}

/// A complete career roadmap as returned by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    pub career: String,
    pub overview: String,
    pub estimated_duration: String,
    pub skill_domains: SkillDomains,
    pub phases: Vec<Phase>,
    pub milestones: Vec<Milestone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_completion: Option<u8>,
}

impl Roadmap {
    /// Structural validity every assembled roadmap must satisfy: at least one
    /// phase, every phase carries topics, difficulty never decreases across
    /// phases, and at least one milestone with non-empty criteria each.
    pub fn is_structurally_valid(&self) -> bool {
        if self.phases.is_empty() || self.milestones.is_empty() {
            return false;
        }
        if self.phases.iter().any(|p| p.topics.is_empty()) {
            return false;
        }
        let ordered = self
            .phases
            .windows(2)
            .all(|pair| pair[0].difficulty <= pair[1].difficulty);
        let criteria_ok = self.milestones.iter().all(|m| !m.criteria.is_empty());
        ordered && criteria_ok
    }
}
