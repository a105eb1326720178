//! Uniprocessor policy engines and schedule metrics.
//!
//! Four classical policies share one contract: take the caller's process
//! list, build fresh per-run records, and return a [`Schedule`] with every
//! timing field filled in plus a contiguous [`Timeline`](crate::models::Timeline).
//!
//! | Policy | Preemptive | Selection key |
//! |--------|-----------|---------------|
//! | FCFS | no | arrival time |
//! | SJF-NP | no | burst time → arrival → input order |
//! | Priority-NP | no | priority (lower first) → arrival → input order |
//! | Round-Robin | yes (quantum) | FIFO ready queue |
//!
//! [`Policy`] is a closed set; [`Policy::run`] matches it exhaustively.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod fcfs;
mod metrics;
pub mod non_preemptive;
pub mod round_robin;

pub use metrics::{average_turnaround_time, average_waiting_time, ScheduleMetrics};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SimulationError};
use crate::models::{Process, Schedule};
use crate::validation::check_time_horizon;

/// Policy selector without parameters.
///
/// This is what a presentation layer picks from a list; it parses from the
/// usual labels and becomes a runnable [`Policy`] via
/// [`with_quantum`](Self::with_quantum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "SJF_NONPREEMPTIVE", alias = "SJF")]
    SjfNonPreemptive,
    /// Priority, non-preemptive.
    #[serde(rename = "PRIORITY_NONPREEMPTIVE", alias = "PRIORITY")]
    PriorityNonPreemptive,
    /// Round-Robin with a time quantum.
    #[serde(rename = "ROUND_ROBIN", alias = "RR")]
    RoundRobin,
}

impl PolicyKind {
    /// Every policy, in presentation order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fcfs,
        PolicyKind::SjfNonPreemptive,
        PolicyKind::PriorityNonPreemptive,
        PolicyKind::RoundRobin,
    ];

    /// Canonical label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::SjfNonPreemptive => "SJF_NONPREEMPTIVE",
            Self::PriorityNonPreemptive => "PRIORITY_NONPREEMPTIVE",
            Self::RoundRobin => "ROUND_ROBIN",
        }
    }

    /// Human-readable name.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come-First-Served",
            Self::SjfNonPreemptive => "Shortest-Job-First (non-preemptive)",
            Self::PriorityNonPreemptive => "Priority (non-preemptive)",
            Self::RoundRobin => "Round-Robin",
        }
    }

    /// Whether the policy needs a quantum.
    pub fn needs_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Resolves a runnable policy.
    ///
    /// The quantum is required (and must be positive) for Round-Robin and
    /// ignored otherwise.
    pub fn with_quantum(self, quantum: Option<i64>) -> Result<Policy> {
        match self {
            Self::Fcfs => Ok(Policy::Fcfs),
            Self::SjfNonPreemptive => Ok(Policy::SjfNonPreemptive),
            Self::PriorityNonPreemptive => Ok(Policy::PriorityNonPreemptive),
            Self::RoundRobin => match quantum {
                Some(q) => Policy::round_robin(q),
                None => Err(SimulationError::configuration(
                    "round-robin requires a time quantum",
                )),
            },
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PolicyKind {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "FCFS" | "FIFO" => Ok(Self::Fcfs),
            "SJF" | "SJF_NP" | "SJF_NONPREEMPTIVE" => Ok(Self::SjfNonPreemptive),
            "PRIORITY" | "PRIORITY_NP" | "PRIORITY_NONPREEMPTIVE" => {
                Ok(Self::PriorityNonPreemptive)
            }
            "RR" | "ROUND_ROBIN" => Ok(Self::RoundRobin),
            _ => Err(SimulationError::configuration(format!(
                "unknown scheduling policy '{s}'"
            ))),
        }
    }
}

/// A runnable scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Policy {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "SJF_NONPREEMPTIVE")]
    SjfNonPreemptive,
    /// Priority, non-preemptive.
    #[serde(rename = "PRIORITY_NONPREEMPTIVE")]
    PriorityNonPreemptive,
    /// Round-Robin with a positive time quantum.
    #[serde(rename = "ROUND_ROBIN")]
    RoundRobin {
        /// Maximum ticks per dispatch.
        quantum: i64,
    },
}

impl Policy {
    /// Creates a Round-Robin policy, rejecting non-positive quanta.
    pub fn round_robin(quantum: i64) -> Result<Self> {
        if quantum <= 0 {
            return Err(SimulationError::configuration(format!(
                "round-robin quantum must be a positive integer, got {quantum}"
            )));
        }
        Ok(Self::RoundRobin { quantum })
    }

    /// The parameterless selector.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Fcfs => PolicyKind::Fcfs,
            Self::SjfNonPreemptive => PolicyKind::SjfNonPreemptive,
            Self::PriorityNonPreemptive => PolicyKind::PriorityNonPreemptive,
            Self::RoundRobin { .. } => PolicyKind::RoundRobin,
        }
    }

    /// The Round-Robin quantum, if any.
    pub fn quantum(&self) -> Option<i64> {
        match self {
            Self::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }
    }

    /// Runs this policy over fresh records built from `processes`.
    ///
    /// `processes` should already have passed
    /// [`validate_processes`](crate::validation::validate_processes).
    ///
    /// # Errors
    /// - [`SimulationError::EmptyInput`] if `processes` is empty.
    /// - [`SimulationError::Validation`] if completion times would overflow.
    /// - [`SimulationError::Configuration`] for a non-positive quantum.
    pub fn run(&self, processes: &[Process]) -> Result<Schedule> {
        match *self {
            Self::Fcfs => fcfs::schedule(processes),
            Self::SjfNonPreemptive => non_preemptive::shortest_job_first(processes),
            Self::PriorityNonPreemptive => non_preemptive::priority(processes),
            Self::RoundRobin { quantum } => round_robin::schedule(processes, quantum),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "ROUND_ROBIN(q={quantum})"),
            other => f.write_str(other.kind().label()),
        }
    }
}

/// Rejects inputs no engine can schedule: empty lists and workloads whose
/// completion times would overflow.
pub(crate) fn ensure_schedulable(processes: &[Process]) -> Result<()> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyInput);
    }
    check_time_horizon(processes).map_err(|e| SimulationError::Validation(vec![e]))?;
    Ok(())
}
