//! Simulation domain models.
//!
//! Provides the core data types for describing a batch of jobs, tracking
//! parallel processing units during a run, and reporting the resulting
//! schedule. Jobs are immutable once submitted; all per-run mutable state
//! lives in [`UnitPool`], which is owned by a single scheduling call.

mod job;
mod summary;
mod unit;

pub use job::Job;
pub use summary::{ScheduleEntry, SimulationSummary};
pub use unit::UnitPool;

/// Discrete simulation time (ticks from the scheduling epoch t=0).
pub type TimeStep = u64;

/// Stable job identifier, assigned by the input layer.
pub type JobId = u32;
