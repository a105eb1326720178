//! Simulation requests and reports.
//!
//! The entry point a presentation layer calls: take a request (processes,
//! policy label, optional quantum), validate it, run exactly one policy on
//! fresh records, and attach metrics.
//!
//! # Check Order
//!
//! 1. Empty process list → [`SimulationError::EmptyInput`]
//! 2. Process validation → [`SimulationError::Validation`]
//! 3. Policy parameters → [`SimulationError::Configuration`]

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::models::{Process, ProcessRecord, Timeline};
use crate::scheduler::{Policy, PolicyKind, ScheduleMetrics};
use crate::validation::{validate_processes, ValidationError, ValidationErrorKind};

/// Input for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule, in caller order.
    pub processes: Vec<Process>,
    /// Which policy to run.
    pub policy: PolicyKind,
    /// Round-Robin time quantum. Ignored by other policies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request.
    pub fn new(processes: Vec<Process>, policy: PolicyKind) -> Self {
        Self {
            processes,
            policy,
            quantum: None,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Parses a request from JSON.
    ///
    /// Decoding failures (missing fields, non-integer times, unknown policy
    /// labels) become a [`ValidationErrorKind::Malformed`] error.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            SimulationError::Validation(vec![ValidationError::new(
                ValidationErrorKind::Malformed,
                format!("Malformed simulation request: {e}"),
            )])
        })
    }

    /// Serializes the request as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// The policy that produced this report.
    pub policy: Policy,
    /// Completed records in caller input order.
    pub scheduled_processes: Vec<ProcessRecord>,
    /// Execution timeline.
    pub timeline: Timeline,
    /// Mean waiting time.
    pub average_waiting_time: f64,
    /// Mean turnaround time.
    pub average_turnaround_time: f64,
    /// Full metric set.
    pub metrics: ScheduleMetrics,
}

impl SimulationReport {
    /// Finds the record for a pid.
    pub fn process(&self, pid: &str) -> Option<&ProcessRecord> {
        self.scheduled_processes.iter().find(|p| p.pid == pid)
    }
}

/// Runs one simulation request.
///
/// # Errors
/// See the module-level check order.
pub fn simulate(request: &SimulationRequest) -> Result<SimulationReport> {
    if request.processes.is_empty() {
        return Err(SimulationError::EmptyInput);
    }
    validate_processes(&request.processes, request.policy)?;
    let policy = request.policy.with_quantum(request.quantum)?;
    run_policy(policy, &request.processes)
}

/// Runs every applicable policy over the same input, each on fresh records.
///
/// The priority policy is skipped unless every process has a priority.
/// Round-Robin uses `quantum`.
///
/// # Errors
/// Same as [`simulate`]; the first failing policy aborts the comparison.
pub fn compare_policies(processes: &[Process], quantum: i64) -> Result<Vec<SimulationReport>> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyInput);
    }
    let all_prioritized = processes.iter().all(Process::has_priority);

    PolicyKind::ALL
        .into_iter()
        .filter(|&kind| kind != PolicyKind::PriorityNonPreemptive || all_prioritized)
        .map(|kind| {
            let request = SimulationRequest::new(processes.to_vec(), kind).with_quantum(quantum);
            simulate(&request)
        })
        .collect()
}

fn run_policy(policy: Policy, processes: &[Process]) -> Result<SimulationReport> {
    debug!("running {policy} over {} processes", processes.len());
    let schedule = policy.run(processes)?;
    let metrics = ScheduleMetrics::from_schedule(&schedule)?;
    debug!(
        "{policy}: makespan {}, avg waiting {:.2}, avg turnaround {:.2}",
        metrics.makespan, metrics.average_waiting_time, metrics.average_turnaround_time
    );

    Ok(SimulationReport {
        policy,
        average_waiting_time: metrics.average_waiting_time,
        average_turnaround_time: metrics.average_turnaround_time,
        scheduled_processes: schedule.processes,
        timeline: schedule.timeline,
        metrics,
    })
}
