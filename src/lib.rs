//! CPU scheduling simulator.
//!
//! Computes, for a finite set of CPU-bound processes, the schedule produced
//! by one of four classical uniprocessor policies, the resulting execution
//! timeline (Gantt sequence), and standard performance metrics. Nothing is
//! executed; only hypothetical timing is computed.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessRecord`, `Timeline`,
//!   `Segment`, `Schedule`
//! - **`dispatching`**: Selection rules and the rule engine used by the
//!   non-preemptive policies
//! - **`scheduler`**: `Policy` and the FCFS, SJF, Priority and Round-Robin
//!   engines, plus `ScheduleMetrics`
//! - **`validation`**: Input integrity checks (duplicate pids, bad times)
//! - **`simulation`**: Request/report facade
//! - **`workload`**: Random workload generation
//!
//! # Example
//!
//! ```
//! use cpu_schedule::{simulate, PolicyKind, Process, SimulationRequest};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//!     Process::new("P3", 2, 8),
//!     Process::new("P4", 3, 6),
//! ];
//! let request = SimulationRequest::new(processes, PolicyKind::Fcfs);
//! let report = simulate(&request).unwrap();
//! assert_eq!(report.average_waiting_time, 5.75);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
pub use models::{Process, ProcessRecord, Schedule, Segment, SegmentLabel, Timeline};
pub use scheduler::{Policy, PolicyKind, ScheduleMetrics};
pub use simulation::{compare_policies, simulate, SimulationReport, SimulationRequest};
