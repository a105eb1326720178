//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (equal arrivals keep input order).
//! 2. For each process: idle until it arrives if the CPU is ahead of it,
//!    then run it to completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for dispatch.

use log::debug;

use super::ensure_schedulable;
use crate::dispatching::RuleEngine;
use crate::error::Result;
use crate::models::{Process, ProcessRecord, Schedule, TimelineBuilder};

/// Schedules `processes` in arrival order.
///
/// # Errors
/// [`SimulationError::EmptyInput`](crate::SimulationError::EmptyInput) if
/// `processes` is empty.
pub fn schedule(processes: &[Process]) -> Result<Schedule> {
    ensure_schedulable(processes)?;

    let mut records = ProcessRecord::fresh_records(processes);
    let order = RuleEngine::arrival_order().sort_indices(&records);
    let mut timeline = TimelineBuilder::new();

    for idx in order {
        let record = &mut records[idx];
        timeline.idle_until(record.arrival_time);
        let (start, end) = timeline.run(&record.pid, record.burst_time);
        record.run_to_completion(start);
        debug!("FCFS: {} runs [{start}, {end})", record.pid);
    }

    Ok(Schedule::new(records, timeline.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;
    use crate::SimulationError;

    #[test]
    fn test_textbook_workload() {
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
            Process::new("P4", 3, 6),
        ];
        let s = schedule(&processes).unwrap();

        assert_eq!(s.completion_times(), vec![5, 8, 16, 22]);
        assert_eq!(s.waiting_times(), vec![0, 4, 6, 13]);
        assert_eq!(s.timeline.dispatch_order(), vec!["P1", "P2", "P3", "P4"]);
    }

    #[test]
    fn test_sorts_by_arrival() {
        let processes = vec![Process::new("late", 4, 2), Process::new("early", 0, 3)];
        let s = schedule(&processes).unwrap();

        assert_eq!(s.timeline.dispatch_order(), vec!["early", "late"]);
        // Output stays in input order.
        assert_eq!(s.processes[0].pid, "late");
        assert_eq!(s.processes[0].start_time, 4);
        assert_eq!(s.processes[0].completion_time, 6);
    }

    #[test]
    fn test_equal_arrivals_keep_input_order() {
        let processes = vec![
            Process::new("B", 0, 1),
            Process::new("A", 0, 1),
            Process::new("C", 0, 1),
        ];
        let s = schedule(&processes).unwrap();
        assert_eq!(s.timeline.dispatch_order(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_idle_gaps() {
        let processes = vec![Process::new("P1", 2, 3), Process::new("P2", 10, 2)];
        let s = schedule(&processes).unwrap();

        assert_eq!(
            s.timeline.segments(),
            &[
                Segment::idle(0, 2),
                Segment::process("P1", 2, 5),
                Segment::idle(5, 10),
                Segment::process("P2", 10, 12),
            ]
        );
        assert_eq!(s.processes[1].waiting_time, 0);
    }

    #[test]
    fn test_caller_input_untouched() {
        let processes = vec![Process::new("P1", 0, 4)];
        let before = processes.clone();
        let _ = schedule(&processes).unwrap();
        assert_eq!(processes, before);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(schedule(&[]), Err(SimulationError::EmptyInput));
    }
}
