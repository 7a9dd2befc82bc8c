//! First-Come-First-Served discipline.
//!
//! # Algorithm
//!
//! 1. Sort jobs by arrival time (stable: equal arrivals keep submission
//!    order).
//! 2. For each job, pick the unit that becomes free earliest.
//! 3. Start at `max(arrival, unit free time)`, run the full burst.
//!
//! A single deterministic pass: O(n log n) for the sort plus
//! O(n * num_units) for unit selection.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use crate::models::{Job, ScheduleEntry, SimulationSummary, UnitPool};
use crate::validation::{validate_input, ValidationError};

use super::finish_run;

/// First-Come-First-Served scheduler for identical parallel units.
///
/// Dispatches jobs strictly in arrival order; with several units, each
/// job goes to the unit that frees up first. Stateless — one instance
/// can serve any number of independent runs.
///
/// # Example
///
/// ```
/// use schedsim::models::Job;
/// use schedsim::scheduler::FcfsScheduler;
///
/// let jobs = vec![
///     Job::new(1, "A").with_burst(5),
///     Job::new(2, "B").with_burst(3),
/// ];
///
/// let summary = FcfsScheduler::new().schedule(&jobs, 1).unwrap();
/// assert_eq!(summary.entries[0].job.name, "A");
/// assert_eq!(summary.entries[1].start_time, 5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs one FCFS simulation.
    ///
    /// Jobs must be passed in submission order; equal arrival times are
    /// resolved in favor of the earlier-submitted job. Returns every
    /// validation problem up front, before any unit state exists.
    pub fn schedule(
        &self,
        jobs: &[Job],
        num_units: usize,
    ) -> Result<SimulationSummary, Vec<ValidationError>> {
        validate_input(jobs, num_units)?;

        // Stable sort: submission order survives arrival-time ties.
        let mut order: Vec<&Job> = jobs.iter().collect();
        order.sort_by_key(|job| job.arrival_time);

        let mut pool = UnitPool::new(num_units);
        let mut entries = Vec::with_capacity(jobs.len());

        for job in order {
            let (unit, free_at) = pool.idlest();
            let start_time = job.arrival_time.max(free_at);
            let entry = ScheduleEntry::dispatch(job.clone(), unit, start_time);
            pool.commit(unit, entry.end_time);
            entries.push(entry);
        }

        Ok(finish_run(entries))
    }
}
