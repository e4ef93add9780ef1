//! Roadmap assembly for one (career, level) request.
//!
//! Selection order: curated entry if the name matches, otherwise the
//! fallback synthesizer overlaid with catalog data when the career is known.
//! Either way the result then gets corpus resources attached per topic and
//! its milestone list padded up to the floor. Assembly never fails: unknown
//! careers, unknown levels, and an empty corpus all degrade to a valid
//! roadmap.

use std::collections::HashSet;

use crate::corpus::CorpusStore;
use crate::models::roadmap::{Milestone, ResourceSummary, Roadmap};
use crate::roadmap::curated::CuratedCatalog;
use crate::roadmap::{domains, fallback};

/// Resources attached per topic, best-first.
pub const TOPIC_MATCH_LIMIT: usize = 5;

/// Minimum milestones per roadmap; derivation tops up a short list.
const MILESTONE_FLOOR: usize = 10;

/// Derivation overshoots the floor slightly before stopping.
const MILESTONE_TARGET: usize = 12;

/// At most this many derived milestones per phase.
const DERIVED_PER_PHASE: usize = 5;

pub fn assemble(
    corpus: &CorpusStore,
    curated: &CuratedCatalog,
    career: &str,
    level: &str,
) -> Roadmap {
    let mut roadmap = match curated.lookup(career) {
        Some(entry) => entry.instantiate(level),
        None => synthesize_with_catalog(corpus, career, level),
    };
    attach_resources(corpus, &mut roadmap);
    ensure_minimum_milestones(&mut roadmap);
    debug_assert!(roadmap.is_structurally_valid());
    roadmap
}

/// Fallback synthesis, enriched with catalog data when the career exists in
/// the careers dataset: canonical name casing, the catalog description as
/// the overview, and skill domains classified from the catalog skill list.
fn synthesize_with_catalog(corpus: &CorpusStore, career: &str, level: &str) -> Roadmap {
    let mut roadmap = fallback::synthesize(career, level);
    if let Some(known) = corpus.get_career(career) {
        roadmap.career = known.name.clone();
        if !known.description.trim().is_empty() {
            roadmap.overview = known.description.clone();
        }
        if !known.skills.is_empty() {
            roadmap.skill_domains = domains::classify_skills(&known.skills);
        }
    }
    roadmap
}

/// Matches every topic against the corpus and attaches results to the
/// owning phase, deduplicating by url across the whole roadmap. Earlier
/// phases win duplicated urls; within a topic the matcher's order is kept.
fn attach_resources(corpus: &CorpusStore, roadmap: &mut Roadmap) {
    let mut seen_urls: HashSet<String> = HashSet::new();
    for phase in &mut roadmap.phases {
        for topic in &phase.topics {
            for matched in corpus.match_topic(topic, TOPIC_MATCH_LIMIT) {
                if seen_urls.insert(matched.url.clone()) {
                    phase.resources.push(ResourceSummary::from(matched));
                }
            }
        }
    }
}

/// Tops up short milestone lists with "Complete: <topic>" entries derived
/// from phase topics, in phase order. Also the guarantee that every roadmap
/// carries at least one milestone, since curated entries may author none.
fn ensure_minimum_milestones(roadmap: &mut Roadmap) {
    if roadmap.milestones.len() >= MILESTONE_FLOOR {
        return;
    }
    let mut derived: Vec<Milestone> = Vec::new();
    'phases: for phase in &roadmap.phases {
        for topic in phase.topics.iter().take(DERIVED_PER_PHASE) {
            derived.push(Milestone {
                name: format!("Complete: {topic}"),
                description: format!("Finish {topic} in {}", phase.name),
                target_date: phase.duration.clone(),
                criteria: vec![
                    format!("Watch/Read core materials for {topic}"),
                    format!("Complete 2-3 exercises on {topic}"),
                ],
            });
            if roadmap.milestones.len() + derived.len() >= MILESTONE_TARGET {
                break 'phases;
            }
        }
    }
    roadmap.milestones.extend(derived);
}
