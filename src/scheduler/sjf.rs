//! Shortest-Job-First discipline (non-preemptive, arrival-aware).
//!
//! # Algorithm
//!
//! A discrete-event greedy loop. Sorting the whole batch by burst time up
//! front is only correct when every job has already arrived at t=0; with
//! staggered arrivals it would start jobs before they exist. Instead, one
//! job is dispatched per iteration:
//!
//! 1. Take the idlest unit; its free time is the decision time `t`.
//! 2. Admit every pending job with `arrival <= t` into the ready queue.
//! 3. Dispatch the shortest ready job (ties: earliest arrival, then
//!    submission order) on that unit.
//! 4. If nothing is ready, idle the unit forward to the next arrival and
//!    re-evaluate.
//!
//! O(n^2) worst case over the ready scan; small interactive batches make
//! a heap unnecessary.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2
//! - Pinedo (2016), "Scheduling", Ch. 4: SPT dispatching

use crate::models::{Job, ScheduleEntry, SimulationSummary, UnitPool};
use crate::validation::{validate_input, ValidationError};

use super::finish_run;

/// Shortest-Job-First scheduler for identical parallel units.
///
/// At every point where a unit becomes free, the shortest job that has
/// already arrived is dispatched to it. Non-preemptive: a dispatched job
/// always runs its full burst. Stateless across runs.
///
/// # Example
///
/// ```
/// use schedsim::models::Job;
/// use schedsim::scheduler::SjfScheduler;
///
/// let jobs = vec![
///     Job::new(1, "A").with_burst(5),
///     Job::new(2, "B").with_burst(3),
///     Job::new(3, "C").with_burst(8),
/// ];
///
/// // B runs first despite being submitted second.
/// let summary = SjfScheduler::new().schedule(&jobs, 1).unwrap();
/// assert_eq!(summary.entries[0].job.name, "B");
/// assert_eq!(summary.average_turnaround_time, Some(9.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfScheduler;

/// A job waiting to be dispatched, tagged with its submission position.
struct QueuedJob<'a> {
    submission: usize,
    job: &'a Job,
}

impl SjfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs one SJF simulation.
    ///
    /// Jobs must be passed in submission order; both the arrival
    /// admission order and the burst-time tie-break fall back to it.
    /// Returns every validation problem up front, before any unit state
    /// exists.
    pub fn schedule(
        &self,
        jobs: &[Job],
        num_units: usize,
    ) -> Result<SimulationSummary, Vec<ValidationError>> {
        validate_input(jobs, num_units)?;

        // Not-yet-arrived jobs, stable-sorted by arrival time.
        let mut pending: Vec<QueuedJob> = jobs
            .iter()
            .enumerate()
            .map(|(submission, job)| QueuedJob { submission, job })
            .collect();
        pending.sort_by_key(|q| q.job.arrival_time);

        let mut pool = UnitPool::new(num_units);
        let mut ready: Vec<QueuedJob> = Vec::new();
        let mut entries = Vec::with_capacity(jobs.len());
        let mut next_pending = 0;

        while entries.len() < jobs.len() {
            // Decision time: when the idlest unit frees up.
            let (unit, t) = pool.idlest();

            while next_pending < pending.len() && pending[next_pending].job.arrival_time <= t {
                ready.push(QueuedJob {
                    submission: pending[next_pending].submission,
                    job: pending[next_pending].job,
                });
                next_pending += 1;
            }

            if ready.is_empty() {
                // Nothing has arrived yet: idle this unit forward to the
                // next arrival, then re-evaluate.
                let next_arrival = pending[next_pending].job.arrival_time;
                pool.advance(unit, next_arrival);
                continue;
            }

            let chosen = Self::shortest_ready(&ready);
            let picked = ready.remove(chosen);

            let start_time = picked.job.arrival_time.max(t);
            let entry = ScheduleEntry::dispatch(picked.job.clone(), unit, start_time);
            pool.commit(unit, entry.end_time);
            entries.push(entry);
        }

        Ok(finish_run(entries))
    }

    /// Index of the shortest ready job.
    ///
    /// Ties break by earliest arrival, then submission order, keeping the
    /// run deterministic.
    fn shortest_ready(ready: &[QueuedJob]) -> usize {
        let mut best = 0;
        for (index, candidate) in ready.iter().enumerate().skip(1) {
            let candidate_key = (
                candidate.job.burst_time,
                candidate.job.arrival_time,
                candidate.submission,
            );
            let best_key = (
                ready[best].job.burst_time,
                ready[best].job.arrival_time,
                ready[best].submission,
            );
            if candidate_key < best_key {
                best = index;
            }
        }
        best
    }
}
