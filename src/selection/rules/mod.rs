//! Built-in selection rules.
//!
//! # Categories
//!
//! - **Offering-based**: SCARCITY
//! - **Graph-based**: UNLOCK
//! - **Load-based**: HEAVY, LIGHT
//!
//! # Score Convention
//! Scores sort ascending; a rule gives its preferred course the smaller
//! value, per [`SelectionRule`]'s contract.

use super::{RuleScore, SelectionRule, TermContext};
use crate::models::Course;

/// Fewest Offered Terms First.
///
/// Prioritizes courses offered in fewer terms. A course offered only once
/// per year has fewer future chances to be placed than one offered every
/// term, so deferring it risks pushing it out of the horizon. This is the
/// planner's default rule.
#[derive(Debug, Clone, Copy)]
pub struct ScarcityFirst;

impl SelectionRule for ScarcityFirst {
    fn name(&self) -> &'static str {
        "SCARCITY"
    }

    fn evaluate(&self, course: &Course, _context: &TermContext) -> RuleScore {
        course.offering_count() as f64
    }

    fn description(&self) -> &'static str {
        "Fewest Offered Terms First"
    }
}

/// Most Dependents First.
///
/// Prioritizes courses that gate the most other catalog courses, so long
/// prerequisite chains start unlocking early. Uses `context.dependents`.
#[derive(Debug, Clone, Copy)]
pub struct MostUnlocked;

impl SelectionRule for MostUnlocked {
    fn name(&self) -> &'static str {
        "UNLOCK"
    }

    fn evaluate(&self, course: &Course, context: &TermContext) -> RuleScore {
        -(context.dependent_count(&course.course_id) as f64)
    }

    fn description(&self) -> &'static str {
        "Most Dependents First"
    }
}

/// Highest Credit Value First.
///
/// Fills the credit cap with large courses early, leaving small courses
/// to plug the remaining gaps.
#[derive(Debug, Clone, Copy)]
pub struct HeaviestLoad;

impl SelectionRule for HeaviestLoad {
    fn name(&self) -> &'static str {
        "HEAVY"
    }

    fn evaluate(&self, course: &Course, _context: &TermContext) -> RuleScore {
        -(course.credits as f64)
    }

    fn description(&self) -> &'static str {
        "Highest Credit Value First"
    }
}

/// Lowest Credit Value First.
///
/// Maximizes the number of courses admitted per term.
#[derive(Debug, Clone, Copy)]
pub struct LightestLoad;

impl SelectionRule for LightestLoad {
    fn name(&self) -> &'static str {
        "LIGHT"
    }

    fn evaluate(&self, course: &Course, _context: &TermContext) -> RuleScore {
        course.credits as f64
    }

    fn description(&self) -> &'static str {
        "Lowest Credit Value First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Term;

    fn make_course(id: &str, credits: u32, terms: &[Term]) -> Course {
        let mut course = Course::new(id, id, credits);
        for &term in terms {
            course = course.with_offering(term);
        }
        course
    }

    #[test]
    fn test_scarcity_first() {
        let ctx = TermContext::for_term(2024, Term::Fall);
        let rare = make_course("rare", 4, &[Term::Fall]);
        let common = make_course("common", 4, &[Term::Fall, Term::Spring]);
        assert!(ScarcityFirst.evaluate(&rare, &ctx) < ScarcityFirst.evaluate(&common, &ctx));
    }

    #[test]
    fn test_most_unlocked() {
        let ctx = TermContext::for_term(2024, Term::Fall)
            .with_dependent_count("gateway", 5)
            .with_dependent_count("leaf", 0);
        let gateway = make_course("gateway", 4, &[Term::Fall]);
        let leaf = make_course("leaf", 4, &[Term::Fall]);
        assert!(MostUnlocked.evaluate(&gateway, &ctx) < MostUnlocked.evaluate(&leaf, &ctx));
    }

    #[test]
    fn test_most_unlocked_unknown_course() {
        let ctx = TermContext::for_term(2024, Term::Fall);
        let course = make_course("unknown", 4, &[Term::Fall]);
        assert!((MostUnlocked.evaluate(&course, &ctx) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_heaviest_load() {
        let ctx = TermContext::for_term(2024, Term::Fall);
        let heavy = make_course("heavy", 4, &[Term::Fall]);
        let light = make_course("light", 1, &[Term::Fall]);
        assert!(HeaviestLoad.evaluate(&heavy, &ctx) < HeaviestLoad.evaluate(&light, &ctx));
    }

    #[test]
    fn test_lightest_load() {
        let ctx = TermContext::for_term(2024, Term::Fall);
        let heavy = make_course("heavy", 4, &[Term::Fall]);
        let light = make_course("light", 1, &[Term::Fall]);
        assert!(LightestLoad.evaluate(&light, &ctx) < LightestLoad.evaluate(&heavy, &ctx));
    }
}
