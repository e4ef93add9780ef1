//! Hand-authored roadmaps for flagship careers.
//!
//! Looked up by exact career name after case folding and whitespace
//! normalization; every other career goes through the fallback synthesizer.
//! Authored phases carry no resources: attachment happens at assembly time
//! against whatever corpus is loaded.

use std::collections::HashMap;

use crate::models::career::normalize_career_key;
use crate::models::roadmap::{Difficulty, Milestone, Phase, Roadmap, SkillDomains};

/// Overall duration estimate per requested proficiency level.
#[derive(Debug, Clone)]
pub struct LevelDurations {
    pub beginner: &'static str,
    pub intermediate: &'static str,
    pub advanced: &'static str,
    /// Used when the requested level matches no table entry.
    pub default: &'static str,
}

impl LevelDurations {
    pub fn for_level(&self, level: &str) -> &'static str {
        match level.trim().to_lowercase().as_str() {
            "beginner" => self.beginner,
            "intermediate" => self.intermediate,
            "advanced" => self.advanced,
            _ => self.default,
        }
    }
}

/// One authored roadmap. A template: `instantiate` clones it into a fresh
/// per-request `Roadmap` with the level-appropriate duration estimate.
#[derive(Debug, Clone)]
pub struct CuratedRoadmap {
    pub career: &'static str,
    pub overview: &'static str,
    pub durations: LevelDurations,
    pub skill_domains: SkillDomains,
    pub phases: Vec<Phase>,
    pub milestones: Vec<Milestone>,
}

impl CuratedRoadmap {
    pub fn instantiate(&self, level: &str) -> Roadmap {
        Roadmap {
            career: self.career.to_string(),
            overview: self.overview.to_string(),
            estimated_duration: self.durations.for_level(level).to_string(),
            skill_domains: self.skill_domains.clone(),
            phases: self.phases.clone(),
            milestones: self.milestones.clone(),
            overall_completion: None,
        }
    }
}

pub struct CuratedCatalog {
    entries: HashMap<String, CuratedRoadmap>,
}

impl CuratedCatalog {
    /// The built-in catalog: Software Engineer, Data Scientist, AI Engineer.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        for entry in [software_engineer(), data_scientist(), ai_engineer()] {
            entries.insert(normalize_career_key(entry.career), entry);
        }
        CuratedCatalog { entries }
    }

    pub fn lookup(&self, career: &str) -> Option<&CuratedRoadmap> {
        self.entries.get(&normalize_career_key(career))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn phase(
    name: &str,
    duration: &str,
    description: &str,
    difficulty: Difficulty,
    topics: &[&str],
) -> Phase {
    Phase {
        name: name.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
        difficulty,
        topics: topics.iter().map(|t| t.to_string()).collect(),
        resources: Vec::new(),
        completed_topics: None,
        completion_percentage: None,
    }
}

fn milestone(name: &str, description: &str, target_date: &str, criteria: &[&str]) -> Milestone {
    Milestone {
        name: name.to_string(),
        description: description.to_string(),
        target_date: target_date.to_string(),
        criteria: criteria.iter().map(|c| c.to_string()).collect(),
    }
}

fn skill_domains(math: &[&str], programming: &[&str], soft_skills: &[&str]) -> SkillDomains {
    SkillDomains {
        math: math.iter().map(|s| s.to_string()).collect(),
        programming: programming.iter().map(|s| s.to_string()).collect(),
        soft_skills: soft_skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn software_engineer() -> CuratedRoadmap {
    CuratedRoadmap {
        career: "Software Engineer",
        overview: "Comprehensive roadmap to become a professional software engineer with strong technical skills.",
        durations: LevelDurations {
            beginner: "18-24 months",
            intermediate: "12-18 months",
            advanced: "6-12 months",
            default: "18-24 months",
        },
        skill_domains: skill_domains(
            &["Basic Algebra", "Discrete Mathematics", "Statistics", "Linear Algebra"],
            &["Python", "JavaScript", "Java", "TypeScript", "Git"],
            &[],
        ),
        phases: vec![
            phase(
                "Programming Fundamentals",
                "2-4 months",
                "Master core programming concepts and your first language",
                Difficulty::Beginner,
                &[
                    "Variables and Data Types",
                    "Control Flow",
                    "Functions",
                    "Object-Oriented Programming",
                    "Basic Algorithms",
                ],
            ),
            phase(
                "Data Structures & Algorithms",
                "3-4 months",
                "Learn essential CS concepts for technical interviews",
                Difficulty::Intermediate,
                &[
                    "Arrays and Lists",
                    "Stacks and Queues",
                    "Trees and Graphs",
                    "Sorting Algorithms",
                    "Hash Tables",
                ],
            ),
            phase(
                "Web Development",
                "3-5 months",
                "Build full-stack web applications",
                Difficulty::Intermediate,
                &[
                    "HTML/CSS/JavaScript",
                    "Frontend Framework (React/Vue)",
                    "Backend APIs",
                    "Databases",
                    "DevOps Basics",
                ],
            ),
            phase(
                "System Design & Architecture",
                "4-6 months",
                "Learn to design scalable systems",
                Difficulty::Advanced,
                &[
                    "Microservices",
                    "Load Balancing",
                    "Caching",
                    "Database Design",
                    "Cloud Platforms",
                ],
            ),
        ],
        milestones: vec![
            milestone(
                "Programming Proficient",
                "Can write clean, working code in at least one language",
                "2-4 months",
                &["Complete programming projects", "Understand OOP", "Debug effectively"],
            ),
            milestone(
                "Technical Interview Ready",
                "Can solve coding problems and explain solutions",
                "6-8 months",
                &["Solve coding problems", "Explain algorithms", "System design basics"],
            ),
        ],
    }
}

fn data_scientist() -> CuratedRoadmap {
    CuratedRoadmap {
        career: "Data Scientist",
        overview: "Complete roadmap to become a professional data scientist with strong mathematical and ML skills.",
        durations: LevelDurations {
            beginner: "20-30 months",
            intermediate: "15-20 months",
            advanced: "8-12 months",
            default: "20-30 months",
        },
        skill_domains: skill_domains(
            &["Statistics", "Linear Algebra", "Calculus", "Probability Theory"],
            &["Python", "R", "SQL", "Pandas", "NumPy"],
            &[],
        ),
        phases: vec![
            phase(
                "Mathematics & Statistics Foundation",
                "3-5 months",
                "Build essential mathematical foundation for data science",
                Difficulty::Beginner,
                &[
                    "Statistics",
                    "Probability",
                    "Linear Algebra",
                    "Calculus",
                    "Hypothesis Testing",
                ],
            ),
            phase(
                "Programming & Data Manipulation",
                "3-4 months",
                "Master Python/R and data manipulation libraries",
                Difficulty::Intermediate,
                &[
                    "Python Programming",
                    "Pandas/NumPy",
                    "Data Cleaning",
                    "SQL",
                    "Jupyter Notebooks",
                ],
            ),
            phase(
                "Machine Learning Fundamentals",
                "4-6 months",
                "Learn core ML algorithms and techniques",
                Difficulty::Intermediate,
                &[
                    "Supervised Learning",
                    "Unsupervised Learning",
                    "Feature Engineering",
                    "Model Evaluation",
                ],
            ),
            phase(
                "Advanced ML & Deep Learning",
                "4-6 months",
                "Master advanced techniques and neural networks",
                Difficulty::Advanced,
                &["Deep Learning", "Neural Networks", "Computer Vision", "NLP", "Time Series"],
            ),
        ],
        milestones: vec![milestone(
            "Data Analysis Proficient",
            "Can perform exploratory data analysis and statistical tests",
            "6-8 months",
            &["Clean and analyze datasets", "Create visualizations", "Statistical tests"],
        )],
    }
}

fn ai_engineer() -> CuratedRoadmap {
    CuratedRoadmap {
        career: "AI Engineer",
        overview: "Specialized roadmap for AI engineering focusing on deep learning and production AI systems.",
        // Deliberately level-independent.
        durations: LevelDurations {
            beginner: "18-24 months",
            intermediate: "18-24 months",
            advanced: "18-24 months",
            default: "18-24 months",
        },
        skill_domains: skill_domains(
            &["Linear Algebra", "Calculus", "Statistics", "Information Theory"],
            &["Python", "C++", "PyTorch", "TensorFlow"],
            &[],
        ),
        phases: vec![
            phase(
                "AI Fundamentals",
                "3-4 months",
                "Build foundation in AI and machine learning",
                Difficulty::Beginner,
                &["Machine Learning Basics", "Neural Networks", "Python Programming"],
            ),
            phase(
                "Deep Learning Mastery",
                "4-6 months",
                "Master deep learning architectures and frameworks",
                Difficulty::Intermediate,
                &["CNNs", "RNNs", "Transformers", "PyTorch/TensorFlow"],
            ),
        ],
        // No authored milestones: assembly derives them from phase topics.
        milestones: vec![],
    }
}
