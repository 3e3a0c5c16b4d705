//! Degree-planning domain models.
//!
//! Provides the core data types for representing curricula and plans.
//! Catalog-agnostic within academic planning — applicable to any
//! institution whose degree data reduces to programs, requirements,
//! courses with prerequisites, and term offerings.
//!
//! # Data Flow
//!
//! | Input | Working | Output |
//! |-------|---------|--------|
//! | Program, Requirement | course pool + prerequisite ledger | Plan |
//! | Course, Catalog | (planner-owned, per run) | TermSlot, UnmetRequirement |

mod catalog;
mod course;
mod plan;
mod program;

pub use catalog::Catalog;
pub use course::{Course, Term};
pub use plan::{Plan, ScheduledCourse, TermSlot, UnmetRequirement, UNMET_REASON};
pub use program::{Program, ProgramId, ProgramKind, Requirement, RequirementRule};
