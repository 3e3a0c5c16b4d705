//! Data-access contract for program, requirement, and catalog records.
//!
//! The engine does not own persistence. A backing service implements
//! [`CurriculumStore`] over whatever storage it has; [`MemoryStore`] is
//! the in-memory implementation used by tests and embedders.
//!
//! Fetch failures surface to the caller unchanged. The resolver never
//! retries, degrades, or reinterprets a store error.

use thiserror::Error;

use crate::models::{Course, Program, ProgramId, Requirement};

/// Errors surfaced by a [`CurriculumStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// A stored row could not be decoded into a record.
    #[error("malformed record: {0}")]
    MalformedRecord(String),
    /// Any other backend failure.
    #[error(transparent)]
    Backend(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Read-only access to program, requirement, and catalog data.
///
/// The three fetches are independent reads; no transactional coupling
/// between them is assumed.
pub trait CurriculumStore: Send + Sync {
    /// Resolves program names to ids by exact name match.
    ///
    /// Names with no match are simply absent from the result; the store
    /// does not error on unknown names.
    fn program_ids_by_name(&self, names: &[String]) -> Result<Vec<ProgramId>, StoreError>;

    /// Fetches every requirement owned by the given programs.
    fn requirements_by_program_ids(&self, ids: &[ProgramId])
        -> Result<Vec<Requirement>, StoreError>;

    /// Fetches the entire course catalog, unfiltered.
    fn full_catalog(&self) -> Result<Vec<Course>, StoreError>;
}

/// In-memory [`CurriculumStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    programs: Vec<Program>,
    requirements: Vec<Requirement>,
    courses: Vec<Course>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a program.
    pub fn with_program(mut self, program: Program) -> Self {
        self.programs.push(program);
        self
    }

    /// Adds a requirement.
    pub fn with_requirement(mut self, requirement: Requirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Adds a course.
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }
}

impl CurriculumStore for MemoryStore {
    fn program_ids_by_name(&self, names: &[String]) -> Result<Vec<ProgramId>, StoreError> {
        Ok(self
            .programs
            .iter()
            .filter(|p| names.iter().any(|n| n == &p.name))
            .map(|p| p.id)
            .collect())
    }

    fn requirements_by_program_ids(
        &self,
        ids: &[ProgramId],
    ) -> Result<Vec<Requirement>, StoreError> {
        Ok(self
            .requirements
            .iter()
            .filter(|r| ids.contains(&r.program_id))
            .cloned()
            .collect())
    }

    fn full_catalog(&self) -> Result<Vec<Course>, StoreError> {
        Ok(self.courses.clone())
    }
}
