//! Rule engine for multi-criteria course ranking.
//!
//! Composes selection rules into one admission order. Ranking must be
//! deterministic: identical eligible sets in an identical context always
//! produce the same order, which is what makes whole plans reproducible.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{RuleScore, SelectionRule, TermContext};
use crate::models::Course;

/// Score difference below which two courses count as tied.
const SCORE_EPSILON: f64 = 1e-9;

/// Strategy for turning several rule scores into one ranking.
#[derive(Debug, Clone, Default)]
pub enum EvaluationMode {
    /// Earlier rules dominate; a later rule is consulted only on a tie.
    #[default]
    Sequential,
    /// Blend every rule's score into a single weighted sum.
    Weighted,
}

/// What settles a tie that survives every rule.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Keep the input order (default). The planner feeds courses in pool
    /// order, so fully tied courses keep their first-mention order.
    #[default]
    PoolOrder,
    /// Deterministic by course id (lexicographic).
    ById,
}

#[derive(Clone)]
struct RuleSlot {
    rule: Arc<dyn SelectionRule>,
    weight: f64,
}

/// A composable rule engine for course ranking.
///
/// Rules are layered: the first rule decides, later rules only split its
/// ties, and a final [`TieBreaker`] settles whatever is left. A weighted
/// mode collapses all rules into one blended score instead.
///
/// # Example
/// ```
/// use degree_plan::selection::{RuleEngine, TieBreaker};
/// use degree_plan::selection::rules;
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ScarcityFirst)
///     .with_tie_breaker(rules::MostUnlocked)
///     .with_final_tie_breaker(TieBreaker::ById);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<RuleSlot>,
    mode: EvaluationMode,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// An engine with no rules and default settings.
    ///
    /// With no rules, ranking falls straight through to the tie-breaker.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            mode: EvaluationMode::Sequential,
            tie_breaker: TieBreaker::PoolOrder,
        }
    }

    /// Appends a rule at weight 1.0.
    pub fn with_rule<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_weighted_rule(rule, 1.0)
    }

    /// Adds a tie-breaking rule.
    ///
    /// Weight 0.0: consulted by sequential evaluation when every earlier
    /// rule ties, invisible to the weighted sum.
    pub fn with_tie_breaker<R: SelectionRule + 'static>(self, rule: R) -> Self {
        self.with_weighted_rule(rule, 0.0)
    }

    /// Adds a rule with an explicit weight.
    pub fn with_weighted_rule<R: SelectionRule + 'static>(mut self, rule: R, weight: f64) -> Self {
        self.rules.push(RuleSlot {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Selects the score-combination strategy.
    pub fn with_mode(mut self, mode: EvaluationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Chooses what settles ties no rule can split.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Ranks courses by priority (highest priority first).
    ///
    /// Returns indices into the course slice. Each rule is evaluated once
    /// per course up front; the sort then compares cached scores. The sort
    /// is stable, so courses tied through the final tie-breaker keep
    /// their input order.
    pub fn rank_indices(&self, courses: &[&Course], context: &TermContext) -> Vec<usize> {
        let mut order: Vec<usize> = (0..courses.len()).collect();
        if courses.is_empty() {
            return order;
        }

        match &self.mode {
            EvaluationMode::Sequential => {
                let columns: Vec<Vec<RuleScore>> = self
                    .rules
                    .iter()
                    .map(|slot| {
                        courses
                            .iter()
                            .map(|course| slot.rule.evaluate(course, context))
                            .collect()
                    })
                    .collect();
                order.sort_by(|&a, &b| {
                    for column in &columns {
                        if (column[a] - column[b]).abs() > SCORE_EPSILON {
                            return column[a].partial_cmp(&column[b]).unwrap_or(Ordering::Equal);
                        }
                    }
                    self.break_tie(courses[a], courses[b])
                });
            }
            EvaluationMode::Weighted => {
                let blended: Vec<f64> = courses
                    .iter()
                    .map(|course| {
                        self.rules
                            .iter()
                            .map(|slot| slot.rule.evaluate(course, context) * slot.weight)
                            .sum()
                    })
                    .collect();
                order.sort_by(|&a, &b| {
                    blended[a].partial_cmp(&blended[b]).unwrap_or(Ordering::Equal)
                });
            }
        }

        order
    }

    /// Returns the index of the highest-priority course.
    pub fn select_best(&self, courses: &[&Course], context: &TermContext) -> Option<usize> {
        self.rank_indices(courses, context).first().copied()
    }

    /// Evaluates one course against every rule, in rule order.
    ///
    /// Scores are reported as the rules produce them; weights apply only
    /// when scores are combined, not here.
    pub fn evaluate(&self, course: &Course, context: &TermContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|slot| slot.rule.evaluate(course, context))
            .collect()
    }

    fn break_tie(&self, a: &Course, b: &Course) -> Ordering {
        match &self.tie_breaker {
            TieBreaker::PoolOrder => Ordering::Equal,
            TieBreaker::ById => a.course_id.cmp(&b.course_id),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let layers: Vec<String> = self
            .rules
            .iter()
            .map(|slot| format!("{}*{}", slot.rule.name(), slot.weight))
            .collect();
        f.debug_struct("RuleEngine")
            .field("rules", &layers)
            .field("mode", &self.mode)
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Term;
    use crate::selection::rules;

    fn make_course(id: &str, credits: u32, terms: &[Term]) -> Course {
        let mut course = Course::new(id, id, credits);
        for &term in terms {
            course = course.with_offering(term);
        }
        course
    }

    #[test]
    fn test_scarcity_ordering() {
        let everywhere = make_course("everywhere", 4, &[Term::Fall, Term::Spring, Term::Summer]);
        let rare = make_course("rare", 4, &[Term::Fall]);
        let common = make_course("common", 4, &[Term::Fall, Term::Spring]);
        let courses = vec![&everywhere, &rare, &common];

        let ctx = TermContext::for_term(2024, Term::Fall);
        let engine = RuleEngine::new().with_rule(rules::ScarcityFirst);

        let order = engine.rank_indices(&courses, &ctx);
        let ranked: Vec<&str> = order.iter().map(|&i| courses[i].course_id.as_str()).collect();
        assert_eq!(ranked, vec!["rare", "common", "everywhere"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let b = make_course("B", 4, &[Term::Fall]);
        let a = make_course("A", 4, &[Term::Fall]);
        let courses = vec![&b, &a];

        let ctx = TermContext::for_term(2024, Term::Fall);
        let engine = RuleEngine::new().with_rule(rules::ScarcityFirst);

        // Same offering count, default tie-breaker: input order survives.
        assert_eq!(engine.rank_indices(&courses, &ctx), vec![0, 1]);
    }

    #[test]
    fn test_tie_breaker_rule_splits_ties() {
        let light = make_course("light", 2, &[Term::Fall]);
        let heavy = make_course("heavy", 4, &[Term::Fall]);
        let courses = vec![&light, &heavy];

        let ctx = TermContext::for_term(2024, Term::Fall);
        let engine = RuleEngine::new()
            .with_rule(rules::ScarcityFirst)
            .with_tie_breaker(rules::HeaviestLoad);

        // Equal scarcity, so the credit layer decides.
        let order = engine.rank_indices(&courses, &ctx);
        assert_eq!(courses[order[0]].course_id, "heavy");
    }

    #[test]
    fn test_final_tie_breaker_by_id() {
        let b = make_course("B", 4, &[Term::Fall]);
        let a = make_course("A", 4, &[Term::Fall]);
        let courses = vec![&b, &a];

        let ctx = TermContext::for_term(2024, Term::Fall);
        let engine = RuleEngine::new()
            .with_rule(rules::ScarcityFirst)
            .with_final_tie_breaker(TieBreaker::ById);

        let order = engine.rank_indices(&courses, &ctx);
        assert_eq!(courses[order[0]].course_id, "A");
    }

    #[test]
    fn test_no_rules_falls_through_to_tie_breaker() {
        let b = make_course("B", 4, &[Term::Fall]);
        let a = make_course("A", 4, &[Term::Fall]);
        let courses = vec![&b, &a];

        let ctx = TermContext::for_term(2024, Term::Fall);
        let engine = RuleEngine::new().with_final_tie_breaker(TieBreaker::ById);

        let order = engine.rank_indices(&courses, &ctx);
        assert_eq!(courses[order[0]].course_id, "A");
    }

    #[test]
    fn test_weighted_combination() {
        let scarce_heavy = make_course("scarce_heavy", 4, &[Term::Fall]);
        let common_light = make_course("common_light", 1, &[Term::Fall, Term::Spring]);
        let courses = vec![&scarce_heavy, &common_light];

        let ctx = TermContext::for_term(2024, Term::Fall);
        let engine = RuleEngine::new()
            .with_mode(EvaluationMode::Weighted)
            .with_weighted_rule(rules::ScarcityFirst, 0.5)
            .with_weighted_rule(rules::LightestLoad, 0.5);

        // scarce_heavy blends to 0.5*1 + 0.5*4 = 2.5,
        // common_light to 0.5*2 + 0.5*1 = 1.5, so common_light leads.
        let order = engine.rank_indices(&courses, &ctx);
        assert_eq!(courses[order[0]].course_id, "common_light");
    }

    #[test]
    fn test_empty_eligible_set() {
        let ctx = TermContext::for_term(2024, Term::Fall);
        let engine = RuleEngine::new().with_rule(rules::ScarcityFirst);
        assert!(engine.rank_indices(&[], &ctx).is_empty());
        assert!(engine.select_best(&[], &ctx).is_none());
    }

    #[test]
    fn test_select_best() {
        let common = make_course("common", 4, &[Term::Fall, Term::Spring]);
        let rare = make_course("rare", 4, &[Term::Fall]);
        let courses = vec![&common, &rare];

        let ctx = TermContext::for_term(2024, Term::Fall);
        let engine = RuleEngine::new().with_rule(rules::ScarcityFirst);

        assert_eq!(engine.select_best(&courses, &ctx), Some(1));
    }

    #[test]
    fn test_evaluate_reports_raw_scores() {
        let course = make_course("C", 4, &[Term::Fall, Term::Spring]);
        let ctx = TermContext::for_term(2024, Term::Fall);
        let engine = RuleEngine::new()
            .with_rule(rules::ScarcityFirst)
            .with_weighted_rule(rules::LightestLoad, 0.25);

        // Weights never touch the reported scores.
        let scores = engine.evaluate(&course, &ctx);
        assert_eq!(scores.len(), 2);
        assert!((scores[0] - 2.0).abs() < 1e-10);
        assert!((scores[1] - 4.0).abs() < 1e-10);
    }
}
