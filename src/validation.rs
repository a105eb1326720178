//! Input validation for simulation requests.
//!
//! Checks process lists before any policy engine runs. Detects:
//! - Empty or reserved process IDs
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Missing priorities when the priority policy is requested
//! - Workloads whose latest possible completion does not fit in `i64`
//!
//! All problems are collected so the caller can report them together.

use std::collections::HashSet;

use crate::models::{Process, IDLE_LABEL};
use crate::scheduler::PolicyKind;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has an empty (or whitespace-only) ID.
    EmptyId,
    /// A process ID collides with the idle marker.
    ReservedId,
    /// Two processes share the same ID.
    DuplicateId,
    /// Arrival time is below zero.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// The priority policy was requested but a process has no priority.
    MissingPriority,
    /// The input could not be decoded (missing field, wrong type).
    Malformed,
    /// Latest arrival plus total burst exceeds the representable time range.
    TimeOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list for the given policy.
///
/// Checks:
/// 1. Every pid is non-empty and not the reserved idle label
/// 2. No duplicate pids
/// 3. `arrival_time >= 0`
/// 4. `burst_time > 0`
/// 5. Every process has a priority if `policy` is the priority policy
/// 6. The time horizon (see [`check_time_horizon`]) fits in `i64`
///
/// An empty list passes; emptiness is reported separately as
/// [`SimulationError::EmptyInput`](crate::SimulationError::EmptyInput).
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process], policy: PolicyKind) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for (i, p) in processes.iter().enumerate() {
        let label = describe(p, i);

        if p.pid.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process #{} has an empty ID", i + 1),
            ));
        } else if p.pid == IDLE_LABEL {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedId,
                format!("Process ID '{IDLE_LABEL}' is reserved for idle time"),
            ));
        } else if !pids.insert(p.pid.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("{label} has negative arrival time {}", p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("{label} has non-positive burst time {}", p.burst_time),
            ));
        }

        if policy == PolicyKind::PriorityNonPreemptive && p.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("{label} has no priority"),
            ));
        }
    }

    if let Err(e) = check_time_horizon(processes) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every time a schedule of `processes` can reach.
///
/// No policy idles while work is ready, so every segment ends by the latest
/// arrival plus the total burst. Negative fields count as zero here; they are
/// reported by [`validate_processes`].
///
/// # Errors
/// A [`ValidationErrorKind::TimeOverflow`] error if the bound exceeds `i64`.
pub fn check_time_horizon(processes: &[Process]) -> Result<i64, ValidationError> {
    let latest_arrival = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);

    processes
        .iter()
        .map(|p| p.burst_time.max(0))
        .try_fold(latest_arrival, i64::checked_add)
        .ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::TimeOverflow,
                "Latest arrival plus total burst time overflows the time range",
            )
        })
}

fn describe(p: &Process, index: usize) -> String {
    if p.pid.trim().is_empty() {
        format!("Process #{}", index + 1)
    } else {
        format!("Process '{}'", p.pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
            Process::new("P3", 2, 8).with_priority(4),
        ]
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input() {
        let processes = sample_processes();
        for policy in PolicyKind::ALL {
            assert!(validate_processes(&processes, policy).is_ok());
        }
    }

    #[test]
    fn test_empty_list_passes() {
        assert!(validate_processes(&[], PolicyKind::Fcfs).is_ok());
    }

    #[test]
    fn test_duplicate_pid() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P1", 2, 3)];
        let errors = validate_processes(&processes, PolicyKind::Fcfs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("P1"));
    }

    #[test]
    fn test_empty_and_reserved_pid() {
        let processes = vec![Process::new("  ", 0, 5), Process::new("IDLE", 0, 1)];
        assert_eq!(
            kinds(validate_processes(&processes, PolicyKind::Fcfs)),
            vec![ValidationErrorKind::EmptyId, ValidationErrorKind::ReservedId]
        );
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![Process::new("P1", -1, 5)];
        assert_eq!(
            kinds(validate_processes(&processes, PolicyKind::SjfNonPreemptive)),
            vec![ValidationErrorKind::NegativeArrival]
        );
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![Process::new("P1", 0, 0), Process::new("P2", 0, -4)];
        assert_eq!(
            kinds(validate_processes(&processes, PolicyKind::RoundRobin)),
            vec![
                ValidationErrorKind::NonPositiveBurst,
                ValidationErrorKind::NonPositiveBurst
            ]
        );
    }

    #[test]
    fn test_missing_priority_only_for_priority_policy() {
        let processes = vec![Process::new("P1", 0, 5).with_priority(1), Process::new("P2", 0, 3)];
        assert!(validate_processes(&processes, PolicyKind::Fcfs).is_ok());

        let errors = validate_processes(&processes, PolicyKind::PriorityNonPreemptive).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingPriority);
        assert!(errors[0].message.contains("P2"));
    }

    #[test]
    fn test_time_overflow() {
        let huge_bursts = vec![Process::new("P1", 0, i64::MAX), Process::new("P2", 0, 1)];
        let late_arrival = vec![Process::new("P1", i64::MAX - 1, 5)];

        for processes in [huge_bursts, late_arrival] {
            for policy in [PolicyKind::Fcfs, PolicyKind::RoundRobin] {
                assert_eq!(
                    kinds(validate_processes(&processes, policy)),
                    vec![ValidationErrorKind::TimeOverflow]
                );
            }
        }
    }

    #[test]
    fn test_time_horizon_at_limit() {
        let processes = vec![Process::new("P1", 0, i64::MAX)];
        assert!(validate_processes(&processes, PolicyKind::Fcfs).is_ok());
        assert_eq!(check_time_horizon(&processes), Ok(i64::MAX));
        assert_eq!(check_time_horizon(&sample_processes()), Ok(2 + 16));
        assert_eq!(check_time_horizon(&[]), Ok(0));
    }

    #[test]
    fn test_multiple_errors() {
        // Duplicate + negative arrival + zero burst on one list
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P1", -3, 0),
        ];
        let errors = validate_processes(&processes, PolicyKind::Fcfs).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
