//! Plan (output) model.
//!
//! A plan is the term-by-term result of a scheduling run: one slot for
//! every term of the planning horizon, plus the required courses that
//! could not be placed. Unplaceable courses are reported, never raised;
//! the planner always returns a best-effort plan.

use serde::{Deserialize, Serialize};

use super::{Course, Term};

/// Reason attached to every unmet requirement.
///
/// The planner does not record whether offering timing, an unsatisfied
/// prerequisite, or credit-cap pressure kept the course out.
pub const UNMET_REASON: &str =
    "could not be scheduled within the plan horizon (offering terms, prerequisites, or credit cap)";

/// A complete multi-term course plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// One slot per term of the horizon, in chronological order. Terms
    /// with no admitted courses still appear, with an empty course list.
    pub schedule: Vec<TermSlot>,
    /// Required courses that were never placed.
    pub unmet_requirements: Vec<UnmetRequirement>,
    /// Human-readable summary stating the unmet count.
    pub message: String,
}

/// One term of a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSlot {
    /// Calendar year.
    pub year: i32,
    /// Term within the year.
    pub semester: Term,
    /// Admitted courses, in admission order.
    pub courses: Vec<ScheduledCourse>,
    /// Total credits of the admitted courses.
    pub credits: u32,
}

/// A course placed into a term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCourse {
    /// Course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Credit value.
    pub credits: u32,
}

/// A required course that could not be placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmetRequirement {
    /// The unplaced course.
    pub course_id: String,
    /// Why it was left out.
    pub reason: String,
}

impl From<&Course> for ScheduledCourse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.course_id.clone(),
            name: course.name.clone(),
            credits: course.credits,
        }
    }
}

impl UnmetRequirement {
    /// Creates an unmet entry with the standard reason.
    pub fn unplaced(course_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            reason: UNMET_REASON.to_string(),
        }
    }
}

impl TermSlot {
    /// Creates an empty slot for the given term.
    pub fn new(year: i32, semester: Term) -> Self {
        Self {
            year,
            semester,
            courses: Vec::new(),
            credits: 0,
        }
    }

    /// Admits a course into this slot.
    pub fn push(&mut self, course: ScheduledCourse) {
        self.credits += course.credits;
        self.courses.push(course);
    }

    /// Whether `credits` more credits would stay within `cap`.
    pub fn can_fit(&self, credits: u32, cap: u32) -> bool {
        self.credits + credits <= cap
    }

    /// Whether no course was admitted.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Number of admitted courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a term slot.
    pub fn push_slot(&mut self, slot: TermSlot) {
        self.schedule.push(slot);
    }

    /// Records a required course that could not be placed.
    pub fn add_unmet(&mut self, unmet: UnmetRequirement) {
        self.unmet_requirements.push(unmet);
    }

    /// Whether every required course was placed.
    pub fn is_complete(&self) -> bool {
        self.unmet_requirements.is_empty()
    }

    /// Finds the slot for a given year and term.
    pub fn slot(&self, year: i32, semester: Term) -> Option<&TermSlot> {
        self.schedule
            .iter()
            .find(|s| s.year == year && s.semester == semester)
    }

    /// The term a course was placed into, if any.
    pub fn term_of(&self, course_id: &str) -> Option<(i32, Term)> {
        self.schedule
            .iter()
            .find(|s| s.courses.iter().any(|c| c.id == course_id))
            .map(|s| (s.year, s.semester))
    }

    /// Whether the plan placed the given course.
    pub fn contains_course(&self, course_id: &str) -> bool {
        self.term_of(course_id).is_some()
    }

    /// Total number of placed courses.
    pub fn scheduled_count(&self) -> usize {
        self.schedule.iter().map(|s| s.courses.len()).sum()
    }

    /// Total credits across all slots.
    pub fn total_credits(&self) -> u32 {
        self.schedule.iter().map(|s| s.credits).sum()
    }

    /// Ids of the unplaced courses, in report order.
    pub fn unmet_ids(&self) -> Vec<&str> {
        self.unmet_requirements
            .iter()
            .map(|u| u.course_id.as_str())
            .collect()
    }
}
