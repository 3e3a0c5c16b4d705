//! Required-course pool.

use std::collections::HashSet;

use crate::models::{Catalog, Requirement};

/// The deduplicated set of course ids still to place, in first-mention
/// order.
///
/// Built once per run: the union of every requirement's explicit course
/// options, kept to ids the catalog actually knows, minus courses already
/// completed. Iteration order is first-mention order across requirements,
/// so identical inputs always walk the pool identically.
#[derive(Debug, Clone, Default)]
pub struct CoursePool {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl CoursePool {
    /// Builds the pool for one planning run.
    ///
    /// Option ids the catalog does not know are skipped; completed ids
    /// that were never pooled are a no-op. Requirement forms without an
    /// explicit course list contribute nothing.
    pub fn from_requirements(
        requirements: &[Requirement],
        catalog: &Catalog,
        completed: &[String],
    ) -> Self {
        let mut pool = Self::default();
        for requirement in requirements {
            let options = match requirement.course_options() {
                Some(options) => options,
                None => continue,
            };
            for course_id in options {
                if catalog.contains(course_id) {
                    pool.insert(course_id);
                }
            }
        }
        for course_id in completed {
            pool.remove(course_id);
        }
        pool
    }

    fn insert(&mut self, course_id: &str) {
        if self.members.insert(course_id.to_owned()) {
            self.ordered.push(course_id.to_owned());
        }
    }

    /// Removes an id. Absent ids are a no-op.
    pub fn remove(&mut self, course_id: &str) {
        if self.members.remove(course_id) {
            if let Some(pos) = self.ordered.iter().position(|id| id == course_id) {
                self.ordered.remove(pos);
            }
        }
    }

    /// Whether the id is still pooled.
    pub fn contains(&self, course_id: &str) -> bool {
        self.members.contains(course_id)
    }

    /// Iterates pooled ids in first-mention order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    /// Number of pooled ids.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Consumes the pool, yielding the remaining ids in order.
    pub fn into_remaining(self) -> Vec<String> {
        self.ordered
    }
}
