//! Program and requirement models.
//!
//! A program (major, minor, or concentration) owns a set of named degree
//! requirements. Each requirement carries a rule describing how it can be
//! satisfied. Only the explicit course-pool form feeds the planner today;
//! the group-choice and credit-threshold forms are representable so
//! requirement data can round-trip without loss.

use serde::{Deserialize, Serialize};

/// Identifier assigned to programs by the data layer.
pub type ProgramId = i64;

/// Program classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramKind {
    Major,
    Minor,
    Concentration,
}

/// A declared academic program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Data-layer identifier.
    pub id: ProgramId,
    /// Program name. Students select programs by exact name match.
    pub name: String,
    /// Classification.
    pub kind: ProgramKind,
}

impl Program {
    /// Creates a new program.
    pub fn new(id: ProgramId, name: impl Into<String>, kind: ProgramKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }
}

/// How a requirement can be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequirementRule {
    /// Every listed course is required.
    Courses {
        /// Course identifiers, all of which must be taken.
        options_pool: Vec<String>,
    },
    /// Any `choose` of the listed courses satisfy the requirement.
    ChooseN {
        choose: u32,
        options_pool: Vec<String>,
    },
    /// A minimum number of credit hours within some grouping.
    CreditHours { hours: u32 },
}

/// A named degree requirement belonging to a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Owning program.
    pub program_id: ProgramId,
    /// Human-readable requirement name (e.g. "Core Sequence").
    pub name: String,
    /// Satisfaction rule. Stored records carry its fields inline, so it
    /// is flattened rather than nested.
    #[serde(flatten)]
    pub rule: RequirementRule,
}

impl Requirement {
    /// Creates a new requirement.
    pub fn new(program_id: ProgramId, name: impl Into<String>, rule: RequirementRule) -> Self {
        Self {
            program_id,
            name: name.into(),
            rule,
        }
    }

    /// Convenience constructor for the explicit course-pool form.
    pub fn courses(
        program_id: ProgramId,
        name: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::new(
            program_id,
            name,
            RequirementRule::Courses {
                options_pool: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    /// The explicit course pool, if this is the course-pool form.
    ///
    /// Returns `None` for the group-choice and credit-threshold forms,
    /// which the planner carries through unresolved.
    pub fn course_options(&self) -> Option<&[String]> {
        match &self.rule {
            RequirementRule::Courses { options_pool } => Some(options_pool),
            _ => None,
        }
    }
}
