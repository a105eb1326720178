//! Rule engine for lexicographic multi-rule dispatch.
//!
//! Rules are applied in sequence; a later rule is consulted only when every
//! earlier rule ties. When all rules tie, the process that came first in the
//! caller's input wins.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule};
use crate::models::ProcessRecord;

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{rules, RuleEngine};
/// use cpu_schedule::models::{Process, ProcessRecord};
///
/// let records = ProcessRecord::fresh_records(&[
///     Process::new("long", 0, 8),
///     Process::new("short", 0, 3),
/// ]);
/// let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
/// assert_eq!(engine.select_best(&records, 0..records.len()), Some(1));
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty rule engine (pure input order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Shortest-Job-First: burst time, then arrival time.
    pub fn shortest_job_first() -> Self {
        Self::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::EarliestArrival)
    }

    /// Priority: priority value, then arrival time.
    pub fn priority_first() -> Self {
        Self::new()
            .with_rule(rules::HighestPriority)
            .with_tie_breaker(rules::EarliestArrival)
    }

    /// First-Come-First-Served: arrival time only.
    pub fn arrival_order() -> Self {
        Self::new().with_rule(rules::EarliestArrival)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Returns record indices sorted by rule evaluation (stable).
    pub fn sort_indices(&self, records: &[ProcessRecord]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..records.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&records[a], &records[b]));
        indices
    }

    /// Returns the index of the best record among `candidates`.
    ///
    /// `None` when `candidates` is empty.
    pub fn select_best<I>(&self, records: &[ProcessRecord], candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates.into_iter().fold(None, |best, idx| match best {
            Some(b) if self.compare(&records[idx], &records[b]) != Ordering::Less => Some(b),
            _ => Some(idx),
        })
    }

    /// Lexicographic comparison over the rule chain, then input order.
    pub fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.input_index.cmp(&b.input_index)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
