//! Schedule performance metrics.
//!
//! Computes standard CPU-scheduling indicators from completed process
//! records and their timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Response | mean(first dispatch - arrival) |
//! | Max Waiting | largest single waiting time |
//! | Makespan | latest completion time |
//! | Idle Time | ticks with nothing to run |
//! | CPU Utilization | busy ticks / makespan |
//! | Throughput | processes completed per tick |
//! | Context Switches | CPU handed to a different process |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{ProcessRecord, Schedule, Timeline};

/// Schedule performance indicators.
///
/// All times are in ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Mean response time (arrival to first dispatch).
    pub average_response_time: f64,
    /// Largest waiting time of any single process.
    pub max_waiting_time: i64,
    /// Latest completion time.
    pub makespan: i64,
    /// Total idle ticks in the timeline.
    pub idle_time: i64,
    /// Busy fraction of the makespan (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Processes completed per tick of makespan.
    pub throughput: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl ScheduleMetrics {
    /// Computes metrics from completed records and their timeline.
    ///
    /// # Errors
    /// [`SimulationError::EmptyInput`] if `records` is empty.
    pub fn calculate(records: &[ProcessRecord], timeline: &Timeline) -> Result<Self> {
        let average_waiting_time = average_waiting_time(records)?;
        let average_turnaround_time = average_turnaround_time(records)?;
        let average_response_time = mean(records, ProcessRecord::response_time)?;

        let max_waiting_time = records.iter().map(|r| r.waiting_time).max().unwrap_or(0);
        let makespan = records
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0);
        let idle_time = timeline.idle_time();

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                (makespan - idle_time) as f64 / makespan as f64,
                records.len() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            average_waiting_time,
            average_turnaround_time,
            average_response_time,
            max_waiting_time,
            makespan,
            idle_time,
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
        })
    }

    /// Computes metrics for a whole schedule.
    pub fn from_schedule(schedule: &Schedule) -> Result<Self> {
        Self::calculate(&schedule.processes, &schedule.timeline)
    }
}

/// Mean waiting time over completed records.
///
/// # Errors
/// [`SimulationError::EmptyInput`] if `records` is empty.
pub fn average_waiting_time(records: &[ProcessRecord]) -> Result<f64> {
    mean(records, |r| r.waiting_time)
}

/// Mean turnaround time over completed records.
///
/// # Errors
/// [`SimulationError::EmptyInput`] if `records` is empty.
pub fn average_turnaround_time(records: &[ProcessRecord]) -> Result<f64> {
    mean(records, |r| r.turnaround_time)
}

fn mean<F>(records: &[ProcessRecord], field: F) -> Result<f64>
where
    F: Fn(&ProcessRecord) -> i64,
{
    if records.is_empty() {
        return Err(SimulationError::EmptyInput);
    }
    // Each value fits in i64; their sum may not.
    let total: i128 = records.iter().map(|r| i128::from(field(r))).sum();
    Ok(total as f64 / records.len() as f64)
}
