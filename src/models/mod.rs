//! CPU scheduling domain models.
//!
//! Provides the data types shared by every policy engine: the caller's
//! process description, the per-run record a policy fills in, the
//! execution timeline, and the schedule that bundles them.
//!
//! # Lifecycle
//!
//! | Type | Created by | Mutated by |
//! |------|-----------|------------|
//! | Process | caller | never |
//! | ProcessRecord | engine, fresh per run | the running engine only |
//! | Timeline | TimelineBuilder | never (rebuilt per run) |
//! | Schedule | engine | never |

mod process;
mod schedule;
mod timeline;

pub use process::{Process, ProcessRecord};
pub use schedule::Schedule;
pub use timeline::{Segment, SegmentLabel, Timeline, TimelineBuilder, IDLE_LABEL};
