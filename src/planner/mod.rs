//! Greedy term planning and plan quality metrics.
//!
//! Provides the multi-term course planner and summary statistics.
//!
//! # Algorithm
//!
//! `TermPlanner` is a deterministic greedy forward-scheduler: it walks the
//! configured terms chronologically and fills each from the eligible slice
//! of the required-course pool. It never backtracks and never fails — the
//! output is always a full horizon of term slots plus the required courses
//! it could not place.
//!
//! # Stats
//!
//! `PlanStats` computes summary metrics: total credits, peak and mean term
//! load, credit utilization, and completion rate.

mod greedy;
mod pool;
mod prereq;
mod stats;

pub use greedy::{
    PlanRequest, PlannerConfig, TermPlanner, DEFAULT_MAX_TERM_CREDITS, DEFAULT_PLAN_YEARS,
};
pub use pool::CoursePool;
pub use prereq::PrereqLedger;
pub use stats::PlanStats;
