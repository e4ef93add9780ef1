//! Deterministic roadmap synthesis for careers without a curated entry.
//!
//! Pure construction from fixed templates: no corpus access, no clock, no
//! randomness. The same (career, level) input always yields the same
//! roadmap, so the preview and generate endpoints can never drift apart.

use crate::models::roadmap::{Difficulty, Milestone, Phase, Roadmap};
use crate::roadmap::domains;

/// Overall estimate per proficiency level.
const OVERALL_DURATIONS: &[(&str, &str)] = &[
    ("beginner", "2-3 years"),
    ("intermediate", "1-2 years"),
    ("advanced", "6-12 months"),
];

/// Estimate for levels outside the table.
const DEFAULT_OVERALL_DURATION: &str = "1-2 years";

struct PhaseTemplate {
    name: &'static str,
    duration: &'static str,
    description: &'static str,
    difficulty: Difficulty,
    /// Topic templates; `{career}` is replaced with the trimmed career name.
    topics: [&'static str; 5],
}

const PHASE_TEMPLATES: &[PhaseTemplate] = &[
    PhaseTemplate {
        name: "Foundation & Basics",
        duration: "3-6 months",
        description: "Build fundamental knowledge and core skills",
        difficulty: Difficulty::Beginner,
        topics: [
            "Core Concepts & Theory of {career}",
            "Basic Tools & Technologies for {career}",
            "Fundamental Principles of {career}",
            "Industry Standards in {career}",
            "Essential Skills for {career}",
        ],
    },
    PhaseTemplate {
        name: "Intermediate Development",
        duration: "6-12 months",
        description: "Develop practical skills and hands-on experience",
        difficulty: Difficulty::Intermediate,
        topics: [
            "Practical Applications of {career}",
            "Real-world Projects in {career}",
            "Problem-solving Skills for {career}",
            "Hands-on Practice with {career}",
            "Collaboration & Teamwork in {career}",
        ],
    },
    PhaseTemplate {
        name: "Advanced Specialization",
        duration: "6-12 months",
        description: "Master advanced concepts and specialize in your area of interest",
        difficulty: Difficulty::Advanced,
        topics: [
            "Advanced Techniques in {career}",
            "Industry Best Practices for {career}",
            "Specialized Knowledge of {career}",
            "Leadership & Communication in {career}",
            "Emerging Trends in {career}",
        ],
    },
];

/// Overall duration estimate for a requested level, case-insensitively.
pub fn overall_duration(level: &str) -> &'static str {
    let level = level.trim().to_lowercase();
    OVERALL_DURATIONS
        .iter()
        .find(|(name, _)| *name == level)
        .map(|(_, duration)| *duration)
        .unwrap_or(DEFAULT_OVERALL_DURATION)
}

/// Synthesizes the generic three-phase roadmap for `career`. The career name
/// is echoed back trimmed but otherwise as given; skill domains are derived
/// by classifying the generated topics.
pub fn synthesize(career: &str, level: &str) -> Roadmap {
    let career = career.trim();

    let phases: Vec<Phase> = PHASE_TEMPLATES
        .iter()
        .map(|template| Phase {
            name: template.name.to_string(),
            duration: template.duration.to_string(),
            description: template.description.to_string(),
            difficulty: template.difficulty,
            topics: template
                .topics
                .iter()
                .map(|topic| topic.replace("{career}", career))
                .collect(),
            resources: Vec::new(),
            completed_topics: None,
            completion_percentage: None,
        })
        .collect();

    let all_topics: Vec<String> = phases
        .iter()
        .flat_map(|phase| phase.topics.iter().cloned())
        .collect();

    Roadmap {
        career: career.to_string(),
        overview: format!("Comprehensive learning path for {career}"),
        estimated_duration: overall_duration(level).to_string(),
        skill_domains: domains::classify_skills(&all_topics),
        phases,
        milestones: generic_milestones(),
        overall_completion: None,
    }
}

fn generic_milestones() -> Vec<Milestone> {
    vec![
        Milestone {
            name: "Foundation Complete".to_string(),
            description: "Mastered basic concepts and skills".to_string(),
            target_date: "3-6 months".to_string(),
            criteria: vec![
                "Completed foundation phase".to_string(),
                "Basic skills demonstrated".to_string(),
                "Ready for intermediate level".to_string(),
            ],
        },
        Milestone {
            name: "Intermediate Complete".to_string(),
            description: "Developed practical skills and experience".to_string(),
            target_date: "9-18 months".to_string(),
            criteria: vec![
                "Completed intermediate phase".to_string(),
                "Practical projects completed".to_string(),
                "Ready for advanced concepts".to_string(),
            ],
        },
        Milestone {
            name: "Career Ready".to_string(),
            description: "Achieved professional competency".to_string(),
            target_date: "15-30 months".to_string(),
            criteria: vec![
                "All phases completed".to_string(),
                "Portfolio of work".to_string(),
                "Industry knowledge".to_string(),
                "Professional network".to_string(),
            ],
        },
    ]
}
