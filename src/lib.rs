//! Multi-term academic course planning engine.
//!
//! Given a student's declared programs, a course catalog with prerequisite
//! and term-offering metadata, and the courses already completed, produces
//! a term-by-term plan over a fixed horizon: prerequisites ordered,
//! per-term credit caps respected, offering terms honored, and anything
//! unplaceable reported rather than raised.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Term`, `Catalog`, `Program`,
//!   `Requirement`, `Plan`, `TermSlot`, `UnmetRequirement`
//! - **`store`**: Data-access contract (`CurriculumStore`) and an
//!   in-memory implementation
//! - **`resolver`**: Program-selection resolution into requirements and
//!   catalog
//! - **`selection`**: Course ranking — `SelectionRule`, `RuleEngine`,
//!   built-in rules (scarcity first, most dependents, load-based)
//! - **`planner`**: The greedy term scheduler, its configuration, and
//!   plan statistics
//! - **`validation`**: Catalog integrity checks (duplicate ids, unknown
//!   or cyclic prerequisites)
//!
//! # Architecture
//!
//! Data flows one way: store → resolver → planner → plan. The planner is
//! a pure synchronous computation over in-memory data; each run owns its
//! own working state (course pool, prerequisite counters), so independent
//! runs can proceed concurrently against the same catalog.
//!
//! It is a deterministic greedy forward-scheduler, not a solver: no
//! backtracking, no global optimization. Best-effort partial plans are
//! the contract — see `Plan::unmet_requirements`.
//!
//! # References
//!
//! - Kahn (1962), "Topological sorting of large networks"
//! - Heileman et al. (2018), "Curricular Analytics: A Framework for
//!   Quantifying the Impact of Curricular Reforms"

pub mod models;
pub mod planner;
pub mod resolver;
pub mod selection;
pub mod store;
pub mod validation;
