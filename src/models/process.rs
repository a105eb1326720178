//! Process models.
//!
//! A [`Process`] describes one CPU-bound workload as supplied by the caller.
//! A [`ProcessRecord`] is the per-run working copy a policy engine fills in.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled (caller input).
///
/// Never mutated by a simulation run; every run builds fresh
/// [`ProcessRecord`]s from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (display and timeline labels only).
    pub pid: String,
    /// Tick at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important). Only the priority
    /// policy reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl Process {
    /// Creates a process arriving at `arrival_time` needing `burst_time` ticks.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether a priority was supplied.
    pub fn has_priority(&self) -> bool {
        self.priority.is_some()
    }
}

/// Per-run process record.
///
/// Holds a value snapshot of the caller's [`Process`] plus the timing block
/// a policy engine fills in. Timing fields start zeroed; `remaining_time`
/// starts at `burst_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier.
    pub pid: String,
    /// Position in the caller's input list. Final tie-breaker for every policy.
    pub input_index: usize,
    /// Arrival tick.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority (lower = more important).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// Ticks of work still owed (round-robin bookkeeping).
    pub remaining_time: i64,
    /// Tick of first dispatch.
    pub start_time: i64,
    /// Tick at which the last unit of work finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
}

impl ProcessRecord {
    /// Creates a fresh record for `process` at position `input_index`.
    pub fn from_process(process: &Process, input_index: usize) -> Self {
        Self {
            pid: process.pid.clone(),
            input_index,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            remaining_time: process.burst_time,
            start_time: 0,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Builds fresh records for a whole input list, preserving input order.
    pub fn fresh_records(processes: &[Process]) -> Vec<Self> {
        processes
            .iter()
            .enumerate()
            .map(|(i, p)| Self::from_process(p, i))
            .collect()
    }

    /// Records a run-to-completion dispatch starting at `start`.
    ///
    /// Returns the completion tick.
    pub fn run_to_completion(&mut self, start: i64) -> i64 {
        self.start_time = start;
        self.remaining_time = 0;
        self.completion_time = start + self.burst_time;
        self.finalize();
        self.completion_time
    }

    /// Derives turnaround and waiting time from `completion_time`.
    pub fn finalize(&mut self) {
        self.turnaround_time = self.completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Ticks between arrival and first dispatch.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.start_time - self.arrival_time
    }

    /// Whether all work has been done.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Whether the process is ready at tick `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival_time <= now
    }
}
