//! Unmet-prerequisite bookkeeping.
//!
//! Prerequisite state is per-run and lives outside the immutable catalog:
//! an unmet count per course, plus a reverse index from a course to the
//! courses that list it. Duplicate prerequisite edges are counted on both
//! sides, so satisfying the prerequisite once rebalances them exactly and
//! a count can never go below zero.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::models::Catalog;

/// Per-run unmet-prerequisite counters over the full catalog.
#[derive(Debug, Clone, Default)]
pub struct PrereqLedger {
    unmet: HashMap<String, u32>,
    dependents: HashMap<String, Vec<String>>,
}

impl PrereqLedger {
    /// Initializes counters for every catalog course.
    ///
    /// A course's count starts at the length of its prerequisite list;
    /// courses with no prerequisites start ready.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut unmet = HashMap::with_capacity(catalog.len());
        let mut dependents: HashMap<String, Vec<String>> = HashMap::new();

        for course in catalog.courses() {
            unmet.insert(course.course_id.clone(), course.prerequisites.len() as u32);
            for prereq in &course.prerequisites {
                dependents
                    .entry(prereq.clone())
                    .or_default()
                    .push(course.course_id.clone());
            }
        }

        Self { unmet, dependents }
    }

    /// Credits every dependent of the already-completed courses.
    ///
    /// Completed ids are deduplicated first, so a repeated input id cannot
    /// credit a dependent twice. Ids the catalog does not know are skipped.
    pub fn satisfy_completed(&mut self, catalog: &Catalog, completed: &[String]) {
        let unique: HashSet<&str> = completed.iter().map(String::as_str).collect();
        for course_id in unique {
            if catalog.contains(course_id) {
                self.mark_satisfied(course_id);
            }
        }
    }

    /// Credits every course listing `course_id` as a prerequisite.
    ///
    /// Called once per course, when it is completed or scheduled.
    pub fn mark_satisfied(&mut self, course_id: &str) {
        let dependent_ids = match self.dependents.get(course_id) {
            Some(ids) => ids.clone(),
            None => return,
        };
        for dependent in &dependent_ids {
            self.credit(dependent);
        }
    }

    fn credit(&mut self, course_id: &str) {
        if let Some(count) = self.unmet.get_mut(course_id) {
            debug_assert!(
                *count > 0,
                "prerequisite satisfaction for '{course_id}' counted twice"
            );
            if *count == 0 {
                warn!(course_id, "unmet count already zero, ignoring extra credit");
                return;
            }
            *count -= 1;
        }
    }

    /// Whether every prerequisite of the course is satisfied.
    ///
    /// Ids the catalog never knew are never ready.
    pub fn is_ready(&self, course_id: &str) -> bool {
        self.unmet.get(course_id).is_some_and(|count| *count == 0)
    }

    /// Current unmet count (`None` for unknown ids).
    pub fn unmet_count(&self, course_id: &str) -> Option<u32> {
        self.unmet.get(course_id).copied()
    }

    /// Dependent count per course, for selection-rule context.
    pub fn dependent_counts(&self) -> HashMap<String, usize> {
        self.dependents
            .iter()
            .map(|(id, deps)| (id.clone(), deps.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Term};

    fn sample_catalog() -> Catalog {
        Catalog::from_courses(vec![
            Course::new("CSCI-1100", "Computer Science I", 4).with_offering(Term::Fall),
            Course::new("CSCI-1200", "Data Structures", 4)
                .with_prerequisite("CSCI-1100")
                .with_offering(Term::Spring),
            Course::new("CSCI-2300", "Algorithms", 4)
                .with_prerequisite("CSCI-1200")
                .with_prerequisite("MATH-1010")
                .with_offering(Term::Fall),
            Course::new("MATH-1010", "Calculus I", 4).with_offering(Term::Fall),
        ])
    }

    #[test]
    fn test_initial_counts() {
        let ledger = PrereqLedger::from_catalog(&sample_catalog());
        assert_eq!(ledger.unmet_count("CSCI-1100"), Some(0));
        assert_eq!(ledger.unmet_count("CSCI-1200"), Some(1));
        assert_eq!(ledger.unmet_count("CSCI-2300"), Some(2));
        assert_eq!(ledger.unmet_count("GHOST-9999"), None);

        assert!(ledger.is_ready("CSCI-1100"));
        assert!(!ledger.is_ready("CSCI-1200"));
        assert!(!ledger.is_ready("GHOST-9999"));
    }

    #[test]
    fn test_mark_satisfied_unlocks_dependents() {
        let mut ledger = PrereqLedger::from_catalog(&sample_catalog());

        ledger.mark_satisfied("CSCI-1100");
        assert!(ledger.is_ready("CSCI-1200"));
        assert!(!ledger.is_ready("CSCI-2300"));

        ledger.mark_satisfied("CSCI-1200");
        ledger.mark_satisfied("MATH-1010");
        assert!(ledger.is_ready("CSCI-2300"));
    }

    #[test]
    fn test_completed_preseeding_dedupes() {
        let mut ledger = PrereqLedger::from_catalog(&sample_catalog());
        let completed = vec![
            "CSCI-1100".to_string(),
            "CSCI-1100".to_string(),
            "UNKNOWN-101".to_string(),
        ];
        ledger.satisfy_completed(&sample_catalog(), &completed);

        // Duplicate and unknown input ids credit CSCI-1200 exactly once.
        assert_eq!(ledger.unmet_count("CSCI-1200"), Some(0));
        assert_eq!(ledger.unmet_count("CSCI-2300"), Some(2));
    }

    #[test]
    fn test_duplicate_edges_stay_balanced() {
        let catalog = Catalog::from_courses(vec![
            Course::new("A", "A", 4).with_offering(Term::Fall),
            Course::new("B", "B", 4)
                .with_prerequisite("A")
                .with_prerequisite("A")
                .with_offering(Term::Fall),
        ]);
        let mut ledger = PrereqLedger::from_catalog(&catalog);

        // The duplicate edge is counted on init (2) and credited twice
        // by the one satisfaction, landing exactly on zero.
        assert_eq!(ledger.unmet_count("B"), Some(2));
        ledger.mark_satisfied("A");
        assert_eq!(ledger.unmet_count("B"), Some(0));
        assert!(ledger.is_ready("B"));
    }

    #[test]
    fn test_satisfying_leaf_course_is_noop() {
        let mut ledger = PrereqLedger::from_catalog(&sample_catalog());
        ledger.mark_satisfied("CSCI-2300"); // Nothing depends on it.
        assert_eq!(ledger.unmet_count("CSCI-1200"), Some(1));
    }

    #[test]
    fn test_dependent_counts() {
        let ledger = PrereqLedger::from_catalog(&sample_catalog());
        let counts = ledger.dependent_counts();
        assert_eq!(counts.get("CSCI-1100"), Some(&1));
        assert_eq!(counts.get("CSCI-1200"), Some(&1));
        assert_eq!(counts.get("MATH-1010"), Some(&1));
        assert_eq!(counts.get("CSCI-2300"), None);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "counted twice")]
    fn test_double_satisfaction_is_caught() {
        let mut ledger = PrereqLedger::from_catalog(&sample_catalog());
        ledger.mark_satisfied("CSCI-1100");
        ledger.mark_satisfied("CSCI-1100");
    }
}
