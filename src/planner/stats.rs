//! Plan quality metrics.
//!
//! Computes summary indicators from a generated plan.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Credits | Sum of slot credit totals |
//! | Terms Used | Slots with at least one course |
//! | Mean Term Credits | total_credits / terms_used |
//! | Peak Term Credits | Largest single slot total |
//! | Credit Utilization | mean_term_credits / cap |
//! | Completion Rate | scheduled / (scheduled + unmet) |

use crate::models::Plan;

/// Plan performance indicators.
#[derive(Debug, Clone)]
pub struct PlanStats {
    /// Sum of credits across all slots.
    pub total_credits: u32,
    /// Number of placed courses.
    pub courses_scheduled: usize,
    /// Number of required courses left unplaced.
    pub unmet_count: usize,
    /// Slots with at least one course.
    pub terms_used: usize,
    /// Mean credits over the used terms.
    pub mean_term_credits: f64,
    /// Largest single-term credit total.
    pub peak_term_credits: u32,
    /// Mean term credits as a fraction of the cap (0.0..1.0).
    pub credit_utilization: f64,
    /// Fraction of required courses that were placed (0.0..1.0).
    pub completion_rate: f64,
}

impl PlanStats {
    /// Computes statistics from a plan and the credit cap it was built
    /// with.
    pub fn calculate(plan: &Plan, max_term_credits: u32) -> Self {
        let total_credits = plan.total_credits();
        let courses_scheduled = plan.scheduled_count();
        let unmet_count = plan.unmet_requirements.len();
        let terms_used = plan.schedule.iter().filter(|s| !s.is_empty()).count();
        let peak_term_credits = plan.schedule.iter().map(|s| s.credits).max().unwrap_or(0);

        let mean_term_credits = if terms_used == 0 {
            0.0
        } else {
            total_credits as f64 / terms_used as f64
        };

        let credit_utilization = if max_term_credits == 0 {
            0.0
        } else {
            mean_term_credits / max_term_credits as f64
        };

        let required = courses_scheduled + unmet_count;
        let completion_rate = if required == 0 {
            1.0
        } else {
            courses_scheduled as f64 / required as f64
        };

        Self {
            total_credits,
            courses_scheduled,
            unmet_count,
            terms_used,
            mean_term_credits,
            peak_term_credits,
            credit_utilization,
            completion_rate,
        }
    }

    /// Whether at least `min_rate` of the required courses were placed.
    pub fn meets_completion(&self, min_rate: f64) -> bool {
        self.completion_rate >= min_rate
    }
}
