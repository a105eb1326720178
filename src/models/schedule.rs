//! Schedule (result of one policy run).
//!
//! Pairs the completed process records with the timeline that produced them.

use serde::{Deserialize, Serialize};

use super::{ProcessRecord, Timeline};

/// A completed schedule.
///
/// `processes` are in caller input order with every timing field set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Completed process records.
    pub processes: Vec<ProcessRecord>,
    /// Execution timeline from t=0 to the last completion.
    pub timeline: Timeline,
}

impl Schedule {
    /// Assembles a schedule, restoring caller input order.
    pub fn new(mut processes: Vec<ProcessRecord>, timeline: Timeline) -> Self {
        processes.sort_by_key(|p| p.input_index);
        Self {
            processes,
            timeline,
        }
    }

    /// Finds the record for a pid.
    pub fn record(&self, pid: &str) -> Option<&ProcessRecord> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    /// Latest completion time across all processes.
    pub fn makespan(&self) -> i64 {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Completion times in input order.
    pub fn completion_times(&self) -> Vec<i64> {
        self.processes.iter().map(|p| p.completion_time).collect()
    }

    /// Waiting times in input order.
    pub fn waiting_times(&self) -> Vec<i64> {
        self.processes.iter().map(|p| p.waiting_time).collect()
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
