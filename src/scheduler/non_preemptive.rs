//! Non-preemptive selection-key scheduling (SJF and Priority).
//!
//! Both policies share one skeleton and differ only in the [`RuleEngine`]
//! that picks among ready processes.
//!
//! # Algorithm
//!
//! Until every process is dispatched:
//! 1. Collect processes with `arrival_time <= now` not yet dispatched.
//! 2. If none, idle until the earliest pending arrival.
//! 3. Otherwise dispatch the best one per the rule chain and run it to
//!    completion. Arrivals during its burst never interrupt it.
//!
//! # Complexity
//! O(n²): every decision rescans all pending processes.

use log::{debug, trace};

use super::ensure_schedulable;
use crate::dispatching::RuleEngine;
use crate::error::Result;
use crate::models::{Process, ProcessRecord, Schedule, TimelineBuilder};

/// Shortest-Job-First, non-preemptive.
///
/// Ties on burst time go to the earliest arrival, then to input order.
pub fn shortest_job_first(processes: &[Process]) -> Result<Schedule> {
    schedule_with(processes, &RuleEngine::shortest_job_first())
}

/// Priority, non-preemptive. Lower `priority` value runs first.
///
/// Ties on priority go to the earliest arrival, then to input order.
pub fn priority(processes: &[Process]) -> Result<Schedule> {
    schedule_with(processes, &RuleEngine::priority_first())
}

/// Runs the non-preemptive skeleton with an arbitrary rule chain.
///
/// # Errors
/// [`SimulationError::EmptyInput`](crate::SimulationError::EmptyInput) if
/// `processes` is empty.
pub fn schedule_with(processes: &[Process], engine: &RuleEngine) -> Result<Schedule> {
    ensure_schedulable(processes)?;

    let mut records = ProcessRecord::fresh_records(processes);
    let mut dispatched = vec![false; records.len()];
    let mut pending = records.len();
    let mut timeline = TimelineBuilder::new();

    while pending > 0 {
        let now = timeline.now();
        let ready = (0..records.len()).filter(|&i| !dispatched[i] && records[i].has_arrived(now));

        let Some(idx) = engine.select_best(&records, ready) else {
            let next_arrival = (0..records.len())
                .filter(|&i| !dispatched[i])
                .map(|i| records[i].arrival_time)
                .min();
            match next_arrival {
                Some(t) => {
                    trace!("nothing ready at {now}, idling until {t}");
                    timeline.idle_until(t);
                    continue;
                }
                None => break,
            }
        };

        let record = &mut records[idx];
        let (start, end) = timeline.run(&record.pid, record.burst_time);
        record.run_to_completion(start);
        dispatched[idx] = true;
        pending -= 1;
        debug!("{engine:?}: {} runs [{start}, {end})", record.pid);
    }

    Ok(Schedule::new(records, timeline.finish()))
}
