//! Course and term models.
//!
//! A course is the schedulable unit of a degree plan: a catalog entry with
//! a credit value, prerequisite edges to other courses, and the academic
//! terms in which it is offered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An academic term label.
///
/// The planner walks a configurable cycle of labels per year (default
/// `Fall`, `Spring`); `Summer` exists for catalogs that carry summer
/// offerings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Fall,
    Spring,
    Summer,
}

impl Term {
    /// The default two-term academic year cycle, in chronological order.
    pub const ACADEMIC_YEAR: [Term; 2] = [Term::Fall, Term::Spring];

    /// The label used in plan output.
    pub fn label(&self) -> &'static str {
        match self {
            Term::Fall => "Fall",
            Term::Spring => "Spring",
            Term::Summer => "Summer",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog course.
///
/// Immutable for the duration of a planning run; per-run state (unmet
/// prerequisite counts) lives in the planner's ledger, not here.
/// Prerequisite edges reference other courses by id and may contain
/// redundant duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier (e.g. "CSCI-1100").
    pub course_id: String,
    /// Human-readable name.
    pub name: String,
    /// Credit value.
    pub credits: u32,
    /// Identifiers of courses that must be completed first.
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Terms in which the course is offered.
    #[serde(default)]
    pub semesters_offered: Vec<Term>,
}

impl Course {
    /// Creates a new course with no prerequisites and no offerings.
    pub fn new(course_id: impl Into<String>, name: impl Into<String>, credits: u32) -> Self {
        Self {
            course_id: course_id.into(),
            name: name.into(),
            credits,
            prerequisites: Vec::new(),
            semesters_offered: Vec::new(),
        }
    }

    /// Adds a prerequisite course id.
    pub fn with_prerequisite(mut self, course_id: impl Into<String>) -> Self {
        self.prerequisites.push(course_id.into());
        self
    }

    /// Adds an offered term.
    pub fn with_offering(mut self, term: Term) -> Self {
        self.semesters_offered.push(term);
        self
    }

    /// Whether the course is offered in the given term.
    pub fn is_offered_in(&self, term: Term) -> bool {
        self.semesters_offered.contains(&term)
    }

    /// Number of terms in which the course is offered.
    ///
    /// Fewer offerings mean fewer future chances to place the course, so
    /// this feeds the scarcity-first selection rule.
    pub fn offering_count(&self) -> usize {
        self.semesters_offered.len()
    }

    /// Whether this course has any prerequisites.
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let course = Course::new("CSCI-2300", "Data Structures", 4)
            .with_prerequisite("CSCI-1100")
            .with_offering(Term::Fall)
            .with_offering(Term::Spring);

        assert_eq!(course.course_id, "CSCI-2300");
        assert_eq!(course.name, "Data Structures");
        assert_eq!(course.credits, 4);
        assert_eq!(course.prerequisites, vec!["CSCI-1100".to_string()]);
        assert!(course.has_prerequisites());
        assert_eq!(course.offering_count(), 2);
    }

    #[test]
    fn test_offering_lookup() {
        let course = Course::new("CSCI-4430", "Programming Languages", 4).with_offering(Term::Fall);
        assert!(course.is_offered_in(Term::Fall));
        assert!(!course.is_offered_in(Term::Spring));
        assert!(!course.is_offered_in(Term::Summer));
    }

    #[test]
    fn test_course_empty() {
        let course = Course::new("ELEC-0000", "Placeholder", 0);
        assert!(!course.has_prerequisites());
        assert_eq!(course.offering_count(), 0);
        assert!(!course.is_offered_in(Term::Fall));
    }

    #[test]
    fn test_term_labels() {
        assert_eq!(Term::Fall.label(), "Fall");
        assert_eq!(Term::Spring.label(), "Spring");
        assert_eq!(Term::Summer.to_string(), "Summer");
    }

    #[test]
    fn test_course_record_shape() {
        // Field names match the catalog record format produced upstream.
        let json = r#"{
            "course_id": "CSCI-2300",
            "name": "Data Structures",
            "credits": 4,
            "prerequisites": ["CSCI-1100"],
            "semesters_offered": ["Fall", "Spring"]
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.course_id, "CSCI-2300");
        assert_eq!(course.credits, 4);
        assert_eq!(course.semesters_offered, vec![Term::Fall, Term::Spring]);
    }

    #[test]
    fn test_course_record_defaults() {
        // Records may omit prerequisite and offering lists entirely.
        let json = r#"{"course_id": "STSO-1110", "name": "Science and Society", "credits": 4}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert!(course.prerequisites.is_empty());
        assert!(course.semesters_offered.is_empty());
    }
}
