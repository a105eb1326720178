//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::ProcessRecord;

/// Shortest Burst.
///
/// Prioritizes processes needing the least total CPU time. Minimizes
/// average waiting time among non-preemptive policies.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SB"
    }

    fn evaluate(&self, record: &ProcessRecord) -> RuleScore {
        record.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Burst Time"
    }
}

/// Highest Priority.
///
/// Lower numeric priority = more important. Processes without a priority
/// rank after every process that has one.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "HP"
    }

    fn evaluate(&self, record: &ProcessRecord) -> RuleScore {
        record.priority.unwrap_or(RuleScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest value)"
    }
}

/// Earliest Arrival.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl DispatchingRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "EA"
    }

    fn evaluate(&self, record: &ProcessRecord) -> RuleScore {
        record.arrival_time
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival Time"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn record(pid: &str, arrival: i64, burst: i64, priority: Option<i64>) -> ProcessRecord {
        let mut p = Process::new(pid, arrival, burst);
        p.priority = priority;
        ProcessRecord::from_process(&p, 0)
    }

    #[test]
    fn test_shortest_burst() {
        let short = record("short", 5, 2, None);
        let long = record("long", 0, 9, None);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_highest_priority() {
        let high = record("high", 0, 5, Some(1));
        let low = record("low", 0, 5, Some(7));
        let none = record("none", 0, 5, None);
        assert!(HighestPriority.evaluate(&high) < HighestPriority.evaluate(&low));
        assert!(HighestPriority.evaluate(&low) < HighestPriority.evaluate(&none));
    }

    #[test]
    fn test_highest_priority_negative_values() {
        let urgent = record("urgent", 0, 5, Some(-3));
        let normal = record("normal", 0, 5, Some(0));
        assert!(HighestPriority.evaluate(&urgent) < HighestPriority.evaluate(&normal));
    }

    #[test]
    fn test_earliest_arrival() {
        let first = record("first", 1, 5, None);
        let second = record("second", 4, 1, None);
        assert!(EarliestArrival.evaluate(&first) < EarliestArrival.evaluate(&second));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(ShortestBurst.description(), "Shortest Burst Time");
        assert_eq!(HighestPriority.name(), "HP");
        assert_eq!(EarliestArrival.description(), "Earliest Arrival Time");
    }
}
