//! Selection rules and rule engine for term filling.
//!
//! When several pool courses are eligible in the same term, a selection
//! rule decides the admission order. Rules compose through [`RuleEngine`];
//! the planner's default ranks by offering scarcity alone.
//!
//! # Usage
//!
//! ```
//! use degree_plan::selection::{RuleEngine, TermContext};
//! use degree_plan::selection::rules;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ScarcityFirst)
//!     .with_tie_breaker(rules::MostUnlocked);
//! ```

mod context;
mod engine;
pub mod rules;

pub use context::TermContext;
pub use engine::{EvaluationMode, RuleEngine, TieBreaker};

use crate::models::Course;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = higher priority (admitted into the term first).
pub type RuleScore = f64;

/// A selection rule that ranks eligible courses within a term.
///
/// Scores sort ascending: a rule that prefers a course gives it a
/// *smaller* value, and the smallest score is admitted first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Short uppercase tag (e.g., "SCARCITY") used in `Debug` output.
    fn name(&self) -> &'static str;

    /// Scores a course for the term being filled; smaller sorts first.
    fn evaluate(&self, course: &Course, context: &TermContext) -> RuleScore;

    /// Longer display form; defaults to the tag.
    fn description(&self) -> &'static str {
        self.name()
    }
}
