//! Course catalog.
//!
//! The catalog is the read-only collection of every known course, supplied
//! whole by the data layer. It is never filtered to the selected programs:
//! any catalog course can appear as a prerequisite, so prerequisite
//! bookkeeping needs all of them.

use std::collections::HashMap;

use super::Course;

/// Lookup collection of all known courses, keyed by course id.
///
/// Lookups return `Option` so call sites can skip unknown identifiers
/// instead of failing mid-run.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: HashMap<String, Course>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of course records.
    ///
    /// A later record with a duplicate id replaces the earlier one;
    /// [`validate_catalog`](crate::validation::validate_catalog) reports
    /// duplicates for callers that want to reject them instead.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        let mut map = HashMap::with_capacity(courses.len());
        for course in courses {
            map.insert(course.course_id.clone(), course);
        }
        Self { courses: map }
    }

    /// Inserts a course, replacing any existing entry with the same id.
    pub fn insert(&mut self, course: Course) {
        self.courses.insert(course.course_id.clone(), course);
    }

    /// Looks up a course by id.
    pub fn get(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }

    /// Whether the catalog knows the given id.
    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.contains_key(course_id)
    }

    /// Iterates over all courses, in no particular order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Term;

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::from_courses(vec![
            Course::new("CSCI-1100", "Computer Science I", 4).with_offering(Term::Fall),
            Course::new("MATH-1010", "Calculus I", 4).with_offering(Term::Fall),
        ]);

        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("CSCI-1100"));
        assert!(!catalog.contains("CSCI-9999"));
        assert_eq!(catalog.get("MATH-1010").unwrap().name, "Calculus I");
        assert!(catalog.get("CSCI-9999").is_none());
    }

    #[test]
    fn test_duplicate_id_replaces() {
        let catalog = Catalog::from_courses(vec![
            Course::new("CSCI-1100", "Old Title", 3),
            Course::new("CSCI-1100", "Computer Science I", 4),
        ]);

        assert_eq!(catalog.len(), 1);
        let course = catalog.get("CSCI-1100").unwrap();
        assert_eq!(course.name, "Computer Science I");
        assert_eq!(course.credits, 4);
    }

    #[test]
    fn test_insert() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        catalog.insert(Course::new("PHYS-1100", "Physics I", 4));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("PHYS-1100"));
    }
}
