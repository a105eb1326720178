//! Selection rules and rule engine for non-preemptive dispatch.
//!
//! A dispatching rule scores a ready process; the rule engine chains a
//! primary rule with tie-breakers and, when every rule ties, falls back to
//! caller input order so that every decision is deterministic.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, RuleEngine};
//!
//! // Shortest-Job-First: burst time, then arrival, then input order.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::EarliestArrival);
//! assert_eq!(engine.rule_names(), vec!["SB", "EA"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Scores are integers so
/// ties are exact.
pub type RuleScore = i64;

/// A dispatching rule that scores a ready process.
///
/// # Score Convention
/// **Lower score = dispatched first.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Short rule name (e.g., "SB", "HP").
    fn name(&self) -> &'static str;

    /// Scores a process; lower wins.
    fn evaluate(&self, record: &ProcessRecord) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
