//! Greedy term-by-term planner.
//!
//! # Algorithm
//!
//! 1. Build the required-course pool (requirement options known to the
//!    catalog, minus completed courses).
//! 2. Initialize unmet-prerequisite counters over the full catalog.
//! 3. Credit the counters for already-completed courses.
//! 4. Walk the configured terms in chronological order; in each term,
//!    admit ranked eligible courses while they fit the credit cap, then
//!    release their dependents.
//! 5. Report whatever is left in the pool as unmet.
//!
//! A term with no admissions does not stop the walk; a stuck course may
//! be offered again in a later term. The planner never fails — it
//! degrades to a partial plan plus an unmet report.
//!
//! # Complexity
//! O(t * p log p) where t = terms in the horizon, p = pool size.
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks" (the counter
//! scheme is Kahn's in-degree bookkeeping over the prerequisite graph).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pool::CoursePool;
use super::prereq::PrereqLedger;
use crate::models::{
    Catalog, Course, Plan, Requirement, ScheduledCourse, Term, TermSlot, UnmetRequirement,
};
use crate::selection::{rules, RuleEngine, TermContext};

/// Default per-term credit cap.
pub const DEFAULT_MAX_TERM_CREDITS: u32 = 16;
/// Default number of planned years.
pub const DEFAULT_PLAN_YEARS: u32 = 4;

fn default_years() -> u32 {
    DEFAULT_PLAN_YEARS
}

fn default_term_cycle() -> Vec<Term> {
    Term::ACADEMIC_YEAR.to_vec()
}

fn default_max_term_credits() -> u32 {
    DEFAULT_MAX_TERM_CREDITS
}

/// Planner configuration.
///
/// Serializable so deployments can carry it in config files; omitted
/// fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Number of academic years to fill.
    #[serde(default = "default_years")]
    pub years: u32,
    /// Terms walked per year, in order.
    #[serde(default = "default_term_cycle")]
    pub term_cycle: Vec<Term>,
    /// Credit cap per term.
    #[serde(default = "default_max_term_credits")]
    pub max_term_credits: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            years: default_years(),
            term_cycle: default_term_cycle(),
            max_term_credits: default_max_term_credits(),
        }
    }
}

impl PlannerConfig {
    /// Creates the default configuration (4 years, Fall/Spring, cap 16).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of years.
    pub fn with_years(mut self, years: u32) -> Self {
        self.years = years;
        self
    }

    /// Sets the per-year term cycle.
    pub fn with_term_cycle(mut self, terms: Vec<Term>) -> Self {
        self.term_cycle = terms;
        self
    }

    /// Sets the per-term credit cap.
    pub fn with_max_term_credits(mut self, credits: u32) -> Self {
        self.max_term_credits = credits;
        self
    }
}

/// Input container for one planning run.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Degree requirements to satisfy.
    pub requirements: Vec<Requirement>,
    /// The full course catalog.
    pub catalog: Catalog,
    /// Course ids the student already completed.
    pub completed: Vec<String>,
    /// First calendar year of the plan.
    pub start_year: i32,
}

impl PlanRequest {
    /// Creates a new plan request.
    pub fn new(requirements: Vec<Requirement>, catalog: Catalog) -> Self {
        Self {
            requirements,
            catalog,
            completed: Vec::new(),
            start_year: 0,
        }
    }

    /// Sets the completed-course list.
    pub fn with_completed(mut self, completed: Vec<String>) -> Self {
        self.completed = completed;
        self
    }

    /// Sets the start year.
    pub fn with_start_year(mut self, year: i32) -> Self {
        self.start_year = year;
        self
    }
}

/// Greedy multi-term course planner.
///
/// Walks a fixed sequence of terms and admits eligible courses (offered
/// this term, prerequisites satisfied, fits the remaining credit budget)
/// in rule order until the budget is exhausted. Deterministic and
/// best-effort: required courses that never fit are reported, not raised.
///
/// Both terms of an academic year carry the same year number; the year
/// advances once per term cycle.
///
/// # Example
///
/// ```
/// use degree_plan::models::{Catalog, Course, Requirement, Term};
/// use degree_plan::planner::TermPlanner;
///
/// let catalog = Catalog::from_courses(vec![
///     Course::new("CSCI-1100", "Computer Science I", 4).with_offering(Term::Fall),
/// ]);
/// let requirements = vec![Requirement::courses(1, "Intro", ["CSCI-1100"])];
///
/// let planner = TermPlanner::new();
/// let plan = planner.generate_plan(&requirements, &catalog, &[], 2024);
/// assert_eq!(plan.schedule[0].courses[0].id, "CSCI-1100");
/// assert!(plan.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct TermPlanner {
    config: PlannerConfig,
    rules: RuleEngine,
}

impl TermPlanner {
    /// Creates a planner with the default config and scarcity-first
    /// ranking.
    pub fn new() -> Self {
        Self {
            config: PlannerConfig::default(),
            rules: RuleEngine::new().with_rule(rules::ScarcityFirst),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the ranking engine.
    ///
    /// The default engine ranks by offering scarcity alone, keeping pool
    /// order on ties.
    pub fn with_rule_engine(mut self, rules: RuleEngine) -> Self {
        self.rules = rules;
        self
    }

    /// Generates a plan.
    ///
    /// Always returns a full horizon of term slots; unplaceable required
    /// courses are reported in `unmet_requirements`.
    pub fn generate_plan(
        &self,
        requirements: &[Requirement],
        catalog: &Catalog,
        completed: &[String],
        start_year: i32,
    ) -> Plan {
        let mut pool = CoursePool::from_requirements(requirements, catalog, completed);
        let mut ledger = PrereqLedger::from_catalog(catalog);
        ledger.satisfy_completed(catalog, completed);
        let dependents = ledger.dependent_counts();

        debug!(
            required = pool.len(),
            completed = completed.len(),
            start_year,
            "starting plan generation"
        );

        let mut plan = Plan::new();
        for year_offset in 0..self.config.years {
            let year = start_year + year_offset as i32;
            for &term in &self.config.term_cycle {
                let context = TermContext::for_term(year, term)
                    .with_max_term_credits(self.config.max_term_credits)
                    .with_dependents(dependents.clone());
                let slot = self.fill_term(&context, catalog, &mut pool, &mut ledger);
                plan.push_slot(slot);
            }
        }

        for course_id in pool.into_remaining() {
            plan.add_unmet(UnmetRequirement::unplaced(course_id));
        }
        plan.message = summary_message(plan.unmet_requirements.len());
        plan
    }

    /// Generates a plan from a request.
    pub fn plan_request(&self, request: &PlanRequest) -> Plan {
        self.generate_plan(
            &request.requirements,
            &request.catalog,
            &request.completed,
            request.start_year,
        )
    }

    fn fill_term(
        &self,
        context: &TermContext,
        catalog: &Catalog,
        pool: &mut CoursePool,
        ledger: &mut PrereqLedger,
    ) -> TermSlot {
        // Eligible: pooled, offered this term, every prerequisite satisfied.
        let eligible: Vec<&Course> = pool
            .iter()
            .filter_map(|id| catalog.get(id))
            .filter(|course| course.is_offered_in(context.term) && ledger.is_ready(&course.course_id))
            .collect();

        let order = self.rules.rank_indices(&eligible, context);

        let mut slot = TermSlot::new(context.year, context.term);
        let mut admitted: Vec<String> = Vec::new();
        for index in order {
            let course = eligible[index];
            // An overflowing course is skipped, not a stop signal: a
            // smaller course later in the ranking may still fit.
            if !slot.can_fit(course.credits, self.config.max_term_credits) {
                continue;
            }
            slot.push(ScheduledCourse::from(course));
            admitted.push(course.course_id.clone());
        }

        for course_id in &admitted {
            pool.remove(course_id);
            ledger.mark_satisfied(course_id);
        }

        debug!(
            year = context.year,
            term = %context.term,
            admitted = slot.course_count(),
            credits = slot.credits,
            remaining = pool.len(),
            "term filled"
        );
        slot
    }
}

impl Default for TermPlanner {
    fn default() -> Self {
        Self::new()
    }
}

fn summary_message(unmet: usize) -> String {
    match unmet {
        0 => "All required courses were scheduled.".to_string(),
        1 => "1 required course could not be scheduled.".to_string(),
        n => format!("{n} required courses could not be scheduled."),
    }
}
