//! Topic completion state and percentage derivation.
//!
//! The engine computes roadmaps without any progress input; completion is a
//! presentation concern layered on top. Keeping toggle and percentage logic
//! in one pure module means a client deriving the same numbers locally can
//! never disagree with what the generate endpoint returns.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::roadmap::{Phase, Roadmap};

/// Completed topics keyed by phase name. Phase-scoped on purpose: the same
/// topic label in two phases tracks as two separate completions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressState {
    completed: BTreeMap<String, BTreeSet<String>>,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds state from a flat completed-topic list, the shape the generate
    /// endpoint accepts. A listed label completes the topic in every phase
    /// that carries it.
    pub fn from_flat_list(phases: &[Phase], completed_topics: &[String]) -> Self {
        let mut state = Self::new();
        for phase in phases {
            for topic in &phase.topics {
                if completed_topics.iter().any(|done| done == topic) {
                    state.toggle(&phase.name, topic);
                }
            }
        }
        state
    }

    /// Flips one topic's completion. Returns the new completed flag, so two
    /// toggles always restore the prior state.
    pub fn toggle(&mut self, phase: &str, topic: &str) -> bool {
        let topics = self.completed.entry(phase.to_string()).or_default();
        if topics.remove(topic) {
            false
        } else {
            topics.insert(topic.to_string());
            true
        }
    }

    pub fn is_completed(&self, phase: &str, topic: &str) -> bool {
        self.completed
            .get(phase)
            .map(|topics| topics.contains(topic))
            .unwrap_or(false)
    }

    fn completed_count(&self, phase: &Phase) -> usize {
        self.completed
            .get(&phase.name)
            .map(|done| phase.topics.iter().filter(|t| done.contains(*t)).count())
            .unwrap_or(0)
    }

    /// Completed share of one phase, floored to a whole percent. A phase
    /// without topics reads as 0, never a division error.
    pub fn phase_percentage(&self, phase: &Phase) -> u8 {
        percentage(self.completed_count(phase), phase.topics.len())
    }

    /// Completed share across all phases, floored. Weighting is by topic
    /// count, so a phase with more topics moves the number more.
    pub fn overall_percentage(&self, phases: &[Phase]) -> u8 {
        let total: usize = phases.iter().map(|p| p.topics.len()).sum();
        let completed: usize = phases.iter().map(|p| self.completed_count(p)).sum();
        percentage(completed, total)
    }

    /// Writes completion onto a roadmap: per-phase completed topics in topic
    /// order, per-phase percentages, and the overall percentage.
    pub fn apply(&self, roadmap: &mut Roadmap) {
        for phase in &mut roadmap.phases {
            let done: Vec<String> = phase
                .topics
                .iter()
                .filter(|topic| self.is_completed(&phase.name, topic))
                .cloned()
                .collect();
            phase.completion_percentage = Some(percentage(done.len(), phase.topics.len()));
            phase.completed_topics = Some(done);
        }
        roadmap.overall_completion = Some(self.overall_percentage(&roadmap.phases));
    }
}

fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed * 100) / total) as u8
}
