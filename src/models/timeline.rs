//! Execution timeline (Gantt sequence).
//!
//! A timeline is an ordered, contiguous sequence of [`Segment`]s starting at
//! t=0: each segment's `end` is the next segment's `start`. A segment is
//! labeled either with the pid of the process on the CPU or with
//! [`SegmentLabel::Idle`].
//!
//! Timelines are only built through [`TimelineBuilder`], which owns the
//! simulation clock and so cannot produce gaps or overlaps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved label text for idle CPU time.
pub const IDLE_LABEL: &str = "IDLE";

/// What occupied the CPU during a segment.
///
/// Serialized as a plain string: the pid, or `"IDLE"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SegmentLabel {
    /// The named process was executing.
    Process(String),
    /// Nothing was ready to run.
    Idle,
}

impl SegmentLabel {
    /// The pid, if this is a process segment.
    pub fn pid(&self) -> Option<&str> {
        match self {
            Self::Process(pid) => Some(pid),
            Self::Idle => None,
        }
    }
}

impl From<String> for SegmentLabel {
    fn from(s: String) -> Self {
        if s == IDLE_LABEL {
            Self::Idle
        } else {
            Self::Process(s)
        }
    }
}

impl From<SegmentLabel> for String {
    fn from(label: SegmentLabel) -> Self {
        match label {
            SegmentLabel::Process(pid) => pid,
            SegmentLabel::Idle => IDLE_LABEL.to_string(),
        }
    }
}

impl fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process(pid) => f.write_str(pid),
            Self::Idle => f.write_str(IDLE_LABEL),
        }
    }
}

/// One interval `[start, end)` of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Process or idle marker.
    pub label: SegmentLabel,
    /// First tick (inclusive).
    pub start: i64,
    /// Last tick (exclusive).
    pub end: i64,
}

impl Segment {
    /// Creates a process segment.
    pub fn process(pid: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            label: SegmentLabel::Process(pid.into()),
            start,
            end,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start: i64, end: i64) -> Self {
        Self {
            label: SegmentLabel::Idle,
            start,
            end,
        }
    }

    /// Length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether this is an idle segment.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.label == SegmentLabel::Idle
    }

    /// The pid, if this is a process segment.
    #[inline]
    pub fn pid(&self) -> Option<&str> {
        self.label.pid()
    }
}

/// A completed timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    /// All segments in time order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterates segments in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.segments.last().map(|s| s.end).unwrap_or(0)
    }

    /// Segments during which `pid` was executing.
    pub fn segments_for(&self, pid: &str) -> Vec<&Segment> {
        self.segments
            .iter()
            .filter(|s| s.pid() == Some(pid))
            .collect()
    }

    /// Total ticks `pid` spent on the CPU.
    pub fn busy_time(&self, pid: &str) -> i64 {
        self.segments_for(pid).iter().map(|s| s.duration()).sum()
    }

    /// Total ticks the CPU spent idle.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(Segment::duration)
            .sum()
    }

    /// Pids in order of first dispatch.
    pub fn dispatch_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = Vec::new();
        for pid in self.segments.iter().filter_map(Segment::pid) {
            if !order.contains(&pid) {
                order.push(pid);
            }
        }
        order
    }

    /// Number of times the CPU moved from one process to a different one.
    ///
    /// Idle gaps are skipped: `P1, IDLE, P2` counts one switch, while two
    /// consecutive slices of the same process count none.
    pub fn context_switches(&self) -> usize {
        let pids: Vec<&str> = self.segments.iter().filter_map(Segment::pid).collect();
        pids.windows(2).filter(|w| w[0] != w[1]).count()
    }

    /// Whether segments start at 0, have positive length, and abut exactly.
    pub fn is_contiguous(&self) -> bool {
        let mut cursor = 0;
        for s in &self.segments {
            if s.start != cursor || s.end <= s.start {
                return false;
            }
            cursor = s.end;
        }
        true
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.segments {
            write!(f, "| {} {}-{} ", s.label, s.start, s.end)?;
        }
        if !self.segments.is_empty() {
            f.write_str("|")?;
        }
        Ok(())
    }
}

/// Accumulates a contiguous timeline while a policy engine runs.
///
/// The builder's cursor is the simulation clock: engines read it with
/// [`now`](Self::now) and advance it only through [`idle_until`](Self::idle_until)
/// and [`run`](Self::run).
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    segments: Vec<Segment>,
    cursor: i64,
}

impl TimelineBuilder {
    /// Creates a builder with the clock at t=0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> i64 {
        self.cursor
    }

    /// Emits an idle segment up to `until` and jumps the clock there.
    ///
    /// No-op if `until` is not in the future.
    pub fn idle_until(&mut self, until: i64) {
        if until <= self.cursor {
            return;
        }
        log::trace!("idle [{}, {})", self.cursor, until);
        self.segments.push(Segment::idle(self.cursor, until));
        self.cursor = until;
    }

    /// Emits a segment of `ticks` for `pid` starting now and advances the clock.
    ///
    /// Returns the `(start, end)` of the emitted segment. Non-positive
    /// `ticks` emit nothing.
    pub fn run(&mut self, pid: &str, ticks: i64) -> (i64, i64) {
        let start = self.cursor;
        if ticks <= 0 {
            return (start, start);
        }
        let end = start + ticks;
        self.segments.push(Segment::process(pid, start, end));
        self.cursor = end;
        (start, end)
    }

    /// Number of segments emitted so far.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether nothing has been emitted.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Finishes the timeline.
    pub fn finish(self) -> Timeline {
        Timeline {
            segments: self.segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut b = TimelineBuilder::new();
        b.idle_until(2);
        b.run("P1", 3);
        b.run("P2", 2);
        b.run("P2", 1);
        b.idle_until(10);
        b.run("P1", 4);
        b.finish()
    }

    #[test]
    fn test_builder_is_contiguous() {
        let t = sample_timeline();
        assert!(t.is_contiguous());
        assert_eq!(t.len(), 6);
        assert_eq!(t.makespan(), 14);
        assert_eq!(t.segments()[0], Segment::idle(0, 2));
        assert_eq!(t.segments()[1], Segment::process("P1", 2, 5));
    }

    #[test]
    fn test_idle_until_past_is_noop() {
        let mut b = TimelineBuilder::new();
        b.run("P1", 5);
        b.idle_until(3);
        b.idle_until(5);
        assert_eq!(b.len(), 1);
        assert_eq!(b.now(), 5);
    }

    #[test]
    fn test_run_zero_ticks_emits_nothing() {
        let mut b = TimelineBuilder::new();
        assert_eq!(b.run("P1", 0), (0, 0));
        assert!(b.is_empty());
    }

    #[test]
    fn test_busy_and_idle_time() {
        let t = sample_timeline();
        assert_eq!(t.busy_time("P1"), 7);
        assert_eq!(t.busy_time("P2"), 3);
        assert_eq!(t.busy_time("P9"), 0);
        assert_eq!(t.idle_time(), 4);
        assert_eq!(t.segments_for("P2").len(), 2);
    }

    #[test]
    fn test_dispatch_order_and_switches() {
        let t = sample_timeline();
        assert_eq!(t.dispatch_order(), vec!["P1", "P2"]);
        // P1 -> P2, (P2 -> P2 not counted), P2 -> P1 across the idle gap
        assert_eq!(t.context_switches(), 2);
    }

    #[test]
    fn test_contiguity_detects_gaps() {
        let gap = Timeline {
            segments: vec![Segment::process("P1", 0, 2), Segment::process("P2", 3, 4)],
        };
        assert!(!gap.is_contiguous());

        let late_start = Timeline {
            segments: vec![Segment::process("P1", 1, 2)],
        };
        assert!(!late_start.is_contiguous());
        assert!(Timeline::default().is_contiguous());
    }

    #[test]
    fn test_display() {
        let mut b = TimelineBuilder::new();
        b.run("P1", 2);
        b.idle_until(4);
        assert_eq!(b.finish().to_string(), "| P1 0-2 | IDLE 2-4 |");
        assert_eq!(Timeline::default().to_string(), "");
    }

    #[test]
    fn test_label_serializes_as_string() {
        let t = sample_timeline();
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.starts_with(r#"[{"label":"IDLE","start":0,"end":2}"#));

        let back: Timeline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
