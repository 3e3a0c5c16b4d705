//! Term context for selection rule evaluation.

use std::collections::HashMap;

use crate::models::Term;

/// Per-term state passed to selection rules.
///
/// Carries the term being filled, its credit cap, and prerequisite-graph
/// statistics needed by context-aware rules.
#[derive(Debug, Clone)]
pub struct TermContext {
    /// Calendar year being filled.
    pub year: i32,
    /// Term being filled.
    pub term: Term,
    /// Credit cap for the term.
    pub max_term_credits: u32,
    /// Number of catalog courses listing each course as a prerequisite
    /// (course_id → dependent count).
    pub dependents: HashMap<String, usize>,
}

impl TermContext {
    /// Creates a context for the given term.
    pub fn for_term(year: i32, term: Term) -> Self {
        Self {
            year,
            term,
            max_term_credits: 0,
            dependents: HashMap::new(),
        }
    }

    /// Sets the credit cap.
    pub fn with_max_term_credits(mut self, credits: u32) -> Self {
        self.max_term_credits = credits;
        self
    }

    /// Sets the dependent count for one course.
    pub fn with_dependent_count(mut self, course_id: impl Into<String>, count: usize) -> Self {
        self.dependents.insert(course_id.into(), count);
        self
    }

    /// Replaces the whole dependent-count map.
    pub fn with_dependents(mut self, dependents: HashMap<String, usize>) -> Self {
        self.dependents = dependents;
        self
    }

    /// Dependent count for a course (0 when unknown).
    pub fn dependent_count(&self, course_id: &str) -> usize {
        self.dependents.get(course_id).copied().unwrap_or(0)
    }
}
