//! Requirement resolution.
//!
//! Gathers everything a planning run needs from the data layer: resolves
//! the student's selected program names to ids, fetches those programs'
//! requirements, and fetches the whole course catalog. The catalog is
//! deliberately unfiltered; any course can appear as a prerequisite.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{Catalog, Requirement};
use crate::store::{CurriculumStore, StoreError};

/// The programs a student declared.
///
/// Blank names are ignored when resolving; name matching is exact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramSelection {
    /// Declared major.
    pub major: String,
    /// Optional minor.
    pub minor: Option<String>,
    /// Optional concentration.
    pub concentration: Option<String>,
}

impl ProgramSelection {
    /// Creates a selection with just a major.
    pub fn new(major: impl Into<String>) -> Self {
        Self {
            major: major.into(),
            minor: None,
            concentration: None,
        }
    }

    /// Sets the minor.
    pub fn with_minor(mut self, minor: impl Into<String>) -> Self {
        self.minor = Some(minor.into());
        self
    }

    /// Sets the concentration.
    pub fn with_concentration(mut self, concentration: impl Into<String>) -> Self {
        self.concentration = Some(concentration.into());
        self
    }

    /// The non-blank selected names, in declaration order.
    pub fn names(&self) -> Vec<String> {
        [
            Some(&self.major),
            self.minor.as_ref(),
            self.concentration.as_ref(),
        ]
        .into_iter()
        .flatten()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
    }
}

/// Errors from requirement resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// None of the selected program names matched a known program.
    #[error("no known program matches any of {names:?}")]
    ProgramNotFound { names: Vec<String> },
    /// The data layer failed; surfaced unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Requirements and catalog gathered for one planning run.
#[derive(Debug, Clone)]
pub struct ResolvedCurriculum {
    /// Requirements of every resolved program, in store order.
    pub requirements: Vec<Requirement>,
    /// The full course catalog.
    pub catalog: Catalog,
}

/// Resolves a student's program selection against the data layer.
///
/// # Example
/// ```
/// use degree_plan::models::{Course, Program, ProgramKind, Requirement, Term};
/// use degree_plan::resolver::{ProgramSelection, RequirementResolver};
/// use degree_plan::store::MemoryStore;
///
/// let store = MemoryStore::new()
///     .with_program(Program::new(1, "Computer Science", ProgramKind::Major))
///     .with_requirement(Requirement::courses(1, "Intro", ["CSCI-1100"]))
///     .with_course(Course::new("CSCI-1100", "Computer Science I", 4).with_offering(Term::Fall));
///
/// let resolver = RequirementResolver::new(&store);
/// let resolved = resolver
///     .resolve(&ProgramSelection::new("Computer Science"))
///     .unwrap();
/// assert_eq!(resolved.requirements.len(), 1);
/// assert_eq!(resolved.catalog.len(), 1);
/// ```
pub struct RequirementResolver<'a> {
    store: &'a dyn CurriculumStore,
}

impl<'a> RequirementResolver<'a> {
    /// Creates a resolver over the given store.
    pub fn new(store: &'a dyn CurriculumStore) -> Self {
        Self { store }
    }

    /// Gathers requirements and catalog for the selected programs.
    ///
    /// Fails with [`ResolveError::ProgramNotFound`] only when none of the
    /// selected names resolve. A partially unknown selection (say, a
    /// typoed minor) proceeds with the programs that did match.
    pub fn resolve(&self, selection: &ProgramSelection) -> Result<ResolvedCurriculum, ResolveError> {
        let names = selection.names();
        let program_ids = self.store.program_ids_by_name(&names)?;
        if program_ids.is_empty() {
            return Err(ResolveError::ProgramNotFound { names });
        }

        let requirements = self.store.requirements_by_program_ids(&program_ids)?;
        let catalog = Catalog::from_courses(self.store.full_catalog()?);

        debug!(
            programs = program_ids.len(),
            requirements = requirements.len(),
            courses = catalog.len(),
            "resolved curriculum"
        );
        Ok(ResolvedCurriculum {
            requirements,
            catalog,
        })
    }
}
