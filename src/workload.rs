//! Random workload generation.
//!
//! Produces valid process lists for demos and stress runs. Pass a seeded
//! RNG (e.g. `StdRng::seed_from_u64`) for reproducible workloads.

use rand::Rng;

use crate::models::Process;

/// Shape of a generated workload. Ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadShape {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival tick.
    pub max_arrival: i64,
    /// Smallest burst time (clamped to at least 1).
    pub min_burst: i64,
    /// Largest burst time.
    pub max_burst: i64,
    /// Priority range; `None` leaves priorities unset.
    pub priority_range: Option<(i64, i64)>,
}

impl WorkloadShape {
    /// `count` processes arriving within `[0, 2*count]` with bursts 1..=10
    /// and priorities 1..=5.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 2 * count as i64,
            min_burst: 1,
            max_burst: 10,
            priority_range: Some((1, 5)),
        }
    }

    /// Sets the latest arrival tick.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets or clears the priority range.
    pub fn with_priority_range(mut self, range: Option<(i64, i64)>) -> Self {
        self.priority_range = range;
        self
    }
}

/// Generates processes `P1..Pn` matching `shape`.
///
/// Degenerate ranges are normalized: negative bounds are clamped, bursts
/// are at least 1, and inverted ranges collapse to their lower bound.
pub fn random_workload<R: Rng>(rng: &mut R, shape: &WorkloadShape) -> Vec<Process> {
    let max_arrival = shape.max_arrival.max(0);
    let min_burst = shape.min_burst.max(1);
    let max_burst = shape.max_burst.max(min_burst);

    (1..=shape.count)
        .map(|i| {
            let arrival = rng.random_range(0..=max_arrival);
            let burst = rng.random_range(min_burst..=max_burst);
            let mut process = Process::new(format!("P{i}"), arrival, burst);
            if let Some((lo, hi)) = shape.priority_range {
                process.priority = Some(rng.random_range(lo..=hi.max(lo)));
            }
            process
        })
        .collect()
}
