//! Scheduling disciplines and KPI evaluation.
//!
//! Provides the two non-preemptive disciplines and the metrics derived
//! from a completed run.
//!
//! # Disciplines
//!
//! `FcfsScheduler` dispatches in arrival order; `SjfScheduler` picks the
//! shortest ready job at each decision point. Both share the same
//! contract: a job list plus a unit count in, a [`SimulationSummary`]
//! out, validation errors before anything is scheduled.
//!
//! # KPI
//!
//! `SimulationKpi` computes makespan, timing totals/averages, and
//! per-unit utilization from a completed summary.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//!
//! [`SimulationSummary`]: crate::models::SimulationSummary

mod fcfs;
mod metrics;
mod sjf;

pub use fcfs::FcfsScheduler;
pub use metrics::{summarize, SimulationKpi};
pub use sjf::SjfScheduler;

use crate::models::{ScheduleEntry, SimulationSummary};

/// Builds a summary from dispatched entries, attaching the averages.
///
/// Shared tail of both disciplines; averages are absent for an empty
/// entry set rather than dividing by zero.
fn finish_run(entries: Vec<ScheduleEntry>) -> SimulationSummary {
    let (average_turnaround_time, average_waiting_time) = metrics::summarize(&entries);
    SimulationSummary {
        entries,
        average_turnaround_time,
        average_waiting_time,
    }
}
