//! Round-Robin.
//!
//! # Algorithm
//!
//! Processes are admitted to a FIFO ready queue in arrival order
//! (equal arrivals keep input order). Repeat until all finish:
//!
//! 1. Admit every pending process with `arrival_time <= now`.
//! 2. If the queue is empty, idle until the next arrival (or stop).
//! 3. Pop the head and run it for `min(remaining, quantum)` ticks. Its
//!    `start_time` is set on the first dispatch only.
//! 4. Admit processes that arrived during the slice.
//! 5. Re-enqueue the process at the back if it still has work.
//!
//! Step 4 precedes step 5: a process arriving exactly when a slice ends is
//! queued ahead of the process that was just preempted.
//!
//! Consecutive slices of the same process stay separate timeline segments,
//! so no process segment is ever longer than the quantum.

use std::collections::VecDeque;

use log::{debug, trace};

use super::ensure_schedulable;
use crate::dispatching::RuleEngine;
use crate::error::{Result, SimulationError};
use crate::models::{Process, ProcessRecord, Schedule, TimelineBuilder};

/// FIFO ready queue fed from an arrival-ordered admission list.
#[derive(Debug)]
struct ReadyQueue {
    queue: VecDeque<usize>,
    arrivals: Vec<usize>,
    admitted: usize,
}

impl ReadyQueue {
    fn new(records: &[ProcessRecord]) -> Self {
        Self {
            queue: VecDeque::with_capacity(records.len()),
            arrivals: RuleEngine::arrival_order().sort_indices(records),
            admitted: 0,
        }
    }

    /// Enqueues every not-yet-admitted process that has arrived by `now`.
    fn admit(&mut self, records: &[ProcessRecord], now: i64) {
        while let Some(&idx) = self.arrivals.get(self.admitted) {
            if !records[idx].has_arrived(now) {
                break;
            }
            trace!("admit {} at {now}", records[idx].pid);
            self.queue.push_back(idx);
            self.admitted += 1;
        }
    }

    /// Arrival tick of the next process not yet admitted.
    fn next_arrival(&self, records: &[ProcessRecord]) -> Option<i64> {
        self.arrivals
            .get(self.admitted)
            .map(|&idx| records[idx].arrival_time)
    }

    fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    fn requeue(&mut self, idx: usize) {
        self.queue.push_back(idx);
    }
}

/// Schedules `processes` round-robin with the given time quantum.
///
/// # Errors
/// - [`SimulationError::EmptyInput`] if `processes` is empty.
/// - [`SimulationError::Configuration`] if `quantum <= 0`.
pub fn schedule(processes: &[Process], quantum: i64) -> Result<Schedule> {
    ensure_schedulable(processes)?;
    if quantum <= 0 {
        return Err(SimulationError::configuration(format!(
            "round-robin quantum must be a positive integer, got {quantum}"
        )));
    }

    let mut records = ProcessRecord::fresh_records(processes);
    let mut dispatched = vec![false; records.len()];
    let mut ready = ReadyQueue::new(&records);
    let mut timeline = TimelineBuilder::new();
    let mut unfinished = records.len();

    while unfinished > 0 {
        ready.admit(&records, timeline.now());

        let Some(idx) = ready.pop() else {
            match ready.next_arrival(&records) {
                Some(t) => {
                    timeline.idle_until(t);
                    continue;
                }
                None => break,
            }
        };

        let record = &mut records[idx];
        if !dispatched[idx] {
            record.start_time = timeline.now();
            dispatched[idx] = true;
        }

        let slice = record.remaining_time.min(quantum);
        let (start, end) = timeline.run(&record.pid, slice);
        record.remaining_time -= slice;

        let finished = record.is_finished();
        if finished {
            record.completion_time = end;
            record.finalize();
            unfinished -= 1;
            debug!("RR: {} runs [{start}, {end}) and completes", record.pid);
        } else {
            debug!(
                "RR: {} runs [{start}, {end}), {} left, preempted",
                record.pid, record.remaining_time
            );
        }

        ready.admit(&records, end);
        if !finished {
            ready.requeue(idx);
        }
    }

    Ok(Schedule::new(records, timeline.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    fn textbook() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 8),
            Process::new("P4", 3, 6),
        ]
    }

    #[test]
    fn test_textbook_quantum_4() {
        let s = schedule(&textbook(), 4).unwrap();

        assert_eq!(
            s.timeline.segments(),
            &[
                Segment::process("P1", 0, 4),
                Segment::process("P2", 4, 7),
                Segment::process("P3", 7, 11),
                Segment::process("P4", 11, 15),
                Segment::process("P1", 15, 16),
                Segment::process("P3", 16, 20),
                Segment::process("P4", 20, 22),
            ]
        );
        assert_eq!(s.completion_times(), vec![16, 7, 20, 22]);
        assert_eq!(s.waiting_times(), vec![11, 3, 10, 13]);
        assert_eq!(s.waiting_times().iter().sum::<i64>(), 37);
    }

    #[test]
    fn test_start_time_is_first_dispatch() {
        let s = schedule(&textbook(), 4).unwrap();
        let starts: Vec<i64> = s.processes.iter().map(|p| p.start_time).collect();
        assert_eq!(starts, vec![0, 4, 7, 11]);
    }

    #[test]
    fn test_arrival_at_slice_end_queued_before_preempted() {
        // P2 arrives exactly when P1's first slice ends.
        let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)];
        let s = schedule(&processes, 2).unwrap();

        assert_eq!(
            s.timeline.segments(),
            &[
                Segment::process("P1", 0, 2),
                Segment::process("P2", 2, 4),
                Segment::process("P1", 4, 6),
            ]
        );
    }

    #[test]
    fn test_lone_process_slices_stay_separate() {
        let processes = vec![Process::new("P1", 0, 2), Process::new("P2", 5, 3)];
        let s = schedule(&processes, 2).unwrap();

        assert_eq!(
            s.timeline.segments(),
            &[
                Segment::process("P1", 0, 2),
                Segment::idle(2, 5),
                Segment::process("P2", 5, 7),
                Segment::process("P2", 7, 8),
            ]
        );
        assert_eq!(s.processes[1].start_time, 5);
        assert_eq!(s.processes[1].waiting_time, 0);
    }

    #[test]
    fn test_large_quantum_matches_fcfs() {
        let rr = schedule(&textbook(), 100).unwrap();
        let fcfs = crate::scheduler::fcfs::schedule(&textbook()).unwrap();
        assert_eq!(rr.timeline, fcfs.timeline);
        assert_eq!(rr.processes, fcfs.processes);
    }

    #[test]
    fn test_quantum_one() {
        let processes = vec![Process::new("A", 0, 2), Process::new("B", 0, 2)];
        let s = schedule(&processes, 1).unwrap();
        let labels: Vec<&str> = s.timeline.iter().filter_map(|seg| seg.pid()).collect();
        assert_eq!(labels, vec!["A", "B", "A", "B"]);
        assert_eq!(s.completion_times(), vec![3, 4]);
    }

    #[test]
    fn test_invalid_quantum() {
        for q in [0, -1] {
            assert!(matches!(
                schedule(&textbook(), q),
                Err(SimulationError::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(schedule(&[], 4), Err(SimulationError::EmptyInput));
    }
}
