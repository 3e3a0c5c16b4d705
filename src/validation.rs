//! Catalog integrity checks.
//!
//! The planner tolerates malformed catalogs (a broken course simply ends
//! up unmet), so validation is opt-in: callers that would rather reject a
//! bad catalog up front run `validate_catalog` and get every problem in
//! one pass — duplicate ids, zero-credit courses, courses offered in no
//! term, prerequisite references to unknown courses, and prerequisite
//! cycles.
//!
//! Cycle detection peels zero-in-degree courses off the prerequisite
//! graph; whatever cannot be peeled is caught in or behind a cycle.
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks"

use std::collections::{HashMap, HashSet};

use crate::models::Course;

/// Outcome of a catalog validation pass.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A single problem found in a course list.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Problem category.
    pub kind: ValidationErrorKind,
    /// Description naming the offending course ids.
    pub message: String,
}

/// The kinds of problem validation can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two catalog entries share a course id.
    DuplicateCourse,
    /// A prerequisite references a course the catalog does not know.
    UnknownPrerequisite,
    /// The prerequisite graph contains a cycle.
    PrerequisiteCycle,
    /// A course has zero credits.
    ZeroCredits,
    /// A course is offered in no term and can never be placed.
    NeverOffered,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course list before it becomes a catalog.
///
/// All problems are accumulated; the first error does not stop the scan.
/// Returns `Ok(())` when the list is clean.
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut known = HashSet::new();
    for course in courses {
        if !known.insert(course.course_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourse,
                format!("Duplicate course id: {}", course.course_id),
            ));
        }
        if course.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCredits,
                format!("Course '{}' has zero credits", course.course_id),
            ));
        }
        if course.semesters_offered.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NeverOffered,
                format!("Course '{}' is offered in no term", course.course_id),
            ));
        }
    }

    for course in courses {
        for prereq in &course.prerequisites {
            if !known.contains(prereq.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPrerequisite,
                    format!(
                        "Course '{}' requires unknown course '{}'",
                        course.course_id, prereq
                    ),
                ));
            }
        }
    }

    if let Some(cycle) = find_prerequisite_cycle(courses) {
        errors.push(cycle);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Looks for cycles in the prerequisite graph.
///
/// Peels courses with no remaining prerequisites, crediting their
/// dependents, until nothing more drains. Courses left with a positive
/// count sit in a cycle or behind one; they are reported together, in
/// sorted order, so the message is stable across runs. Dangling
/// prerequisite references are ignored here — `validate_catalog` reports
/// them separately and they cannot close a loop.
fn find_prerequisite_cycle(courses: &[Course]) -> Option<ValidationError> {
    let known: HashSet<&str> = courses.iter().map(|c| c.course_id.as_str()).collect();

    let mut remaining: HashMap<&str, usize> = HashMap::with_capacity(courses.len());
    let mut dependents: HashMap<&str, Vec<&str>> = HashMap::new();
    for course in courses {
        let id = course.course_id.as_str();
        let in_catalog = |p: &&String| known.contains(p.as_str());
        remaining.insert(id, course.prerequisites.iter().filter(in_catalog).count());
        for prereq in course.prerequisites.iter().filter(in_catalog) {
            dependents.entry(prereq.as_str()).or_default().push(id);
        }
    }

    let mut ready: Vec<&str> = remaining
        .iter()
        .filter(|(_, &count)| count == 0)
        .map(|(&id, _)| id)
        .collect();
    let mut drained = 0;
    while let Some(id) = ready.pop() {
        drained += 1;
        let deps = match dependents.get(id) {
            Some(deps) => deps,
            None => continue,
        };
        for &dep in deps {
            if let Some(count) = remaining.get_mut(dep) {
                // Duplicate catalog ids can over-credit; guard stays at 0.
                if *count > 0 {
                    *count -= 1;
                    if *count == 0 {
                        ready.push(dep);
                    }
                }
            }
        }
    }

    if drained == remaining.len() {
        return None;
    }

    let mut stuck: Vec<&str> = remaining
        .iter()
        .filter(|(_, &count)| count > 0)
        .map(|(&id, _)| id)
        .collect();
    stuck.sort_unstable();
    Some(ValidationError::new(
        ValidationErrorKind::PrerequisiteCycle,
        format!(
            "Prerequisite cycle detected; unresolvable courses: {}",
            stuck.join(", ")
        ),
    ))
}
