//! Schedule result model.
//!
//! A simulation summary is the complete outcome of one scheduling run:
//! one entry per input job with its derived times, plus the aggregate
//! averages. Entries appear in dispatch order, which for SJF is not
//! generally the arrival order.

use serde::{Deserialize, Serialize};

use super::{Job, JobId, TimeStep};

/// One job's placement in a completed schedule.
///
/// Derived fields are fixed by construction:
/// `end_time = start_time + burst_time`,
/// `turnaround_time = end_time - arrival_time`,
/// `waiting_time = turnaround_time - burst_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// The scheduled job.
    pub job: Job,
    /// Index of the unit the job ran on.
    pub unit: usize,
    /// Time the job started executing.
    pub start_time: TimeStep,
    /// Time the job completed.
    pub end_time: TimeStep,
    /// Completion minus arrival.
    pub turnaround_time: TimeStep,
    /// Time spent ready but not running.
    pub waiting_time: TimeStep,
}

impl ScheduleEntry {
    /// Creates an entry for `job` starting on `unit` at `start_time`,
    /// deriving the completion and timing fields.
    ///
    /// `start_time` must not precede the job's arrival (enforced by the
    /// schedulers; waiting time would otherwise underflow).
    pub fn dispatch(job: Job, unit: usize, start_time: TimeStep) -> Self {
        let end_time = start_time + job.burst_time;
        let turnaround_time = end_time - job.arrival_time;
        let waiting_time = turnaround_time - job.burst_time;
        Self {
            job,
            unit,
            start_time,
            end_time,
            turnaround_time,
            waiting_time,
        }
    }

    /// Busy interval length on the unit (always the job's burst time).
    #[inline]
    pub fn duration(&self) -> TimeStep {
        self.end_time - self.start_time
    }
}

/// A complete simulation result.
///
/// Averages are `None` when the job set was empty; an empty input is a
/// valid simulation, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// One entry per input job, in dispatch order.
    pub entries: Vec<ScheduleEntry>,
    /// Mean turnaround time, absent for an empty job set.
    pub average_turnaround_time: Option<f64>,
    /// Mean waiting time, absent for an empty job set.
    pub average_waiting_time: Option<f64>,
}

impl SimulationSummary {
    /// Creates an empty summary (no jobs, absent averages).
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the summary contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry for a given job.
    pub fn entry_for_job(&self, job_id: JobId) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.job.id == job_id)
    }

    /// Returns all entries dispatched to a given unit, in dispatch order.
    pub fn entries_for_unit(&self, unit: usize) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.unit == unit).collect()
    }

    /// Makespan: latest completion time across all entries.
    pub fn makespan(&self) -> TimeStep {
        self.entries.iter().map(|e| e.end_time).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> SimulationSummary {
        let entries = vec![
            ScheduleEntry::dispatch(Job::new(1, "J1").with_burst(5), 0, 0),
            ScheduleEntry::dispatch(Job::new(2, "J2").with_arrival(1).with_burst(3), 1, 1),
            ScheduleEntry::dispatch(Job::new(3, "J3").with_arrival(2).with_burst(4), 0, 5),
        ];
        SimulationSummary {
            entries,
            average_turnaround_time: Some(5.0),
            average_waiting_time: Some(1.0),
        }
    }

    #[test]
    fn test_dispatch_derives_times() {
        let job = Job::new(1, "J1").with_arrival(2).with_burst(6);
        let entry = ScheduleEntry::dispatch(job, 0, 4);
        assert_eq!(entry.end_time, 10);
        assert_eq!(entry.turnaround_time, 8); // 10 - 2
        assert_eq!(entry.waiting_time, 2); // 8 - 6
        assert_eq!(entry.duration(), 6);
    }

    #[test]
    fn test_dispatch_at_arrival_waits_zero() {
        let job = Job::new(1, "J1").with_arrival(3).with_burst(4);
        let entry = ScheduleEntry::dispatch(job, 2, 3);
        assert_eq!(entry.waiting_time, 0);
        assert_eq!(entry.turnaround_time, 4);
    }

    #[test]
    fn test_entry_for_job() {
        let s = sample_summary();
        assert_eq!(s.entry_for_job(2).unwrap().unit, 1);
        assert!(s.entry_for_job(99).is_none());
    }

    #[test]
    fn test_entries_for_unit() {
        let s = sample_summary();
        let unit0 = s.entries_for_unit(0);
        assert_eq!(unit0.len(), 2);
        assert_eq!(unit0[0].job.id, 1);
        assert_eq!(unit0[1].job.id, 3);
        assert_eq!(s.entries_for_unit(1).len(), 1);
    }

    #[test]
    fn test_makespan() {
        let s = sample_summary();
        assert_eq!(s.makespan(), 9); // J3: 5 + 4
    }

    #[test]
    fn test_empty_summary() {
        let s = SimulationSummary::new();
        assert!(s.is_empty());
        assert_eq!(s.job_count(), 0);
        assert_eq!(s.makespan(), 0);
        assert_eq!(s.average_turnaround_time, None);
        assert_eq!(s.average_waiting_time, None);
    }

    #[test]
    fn test_summary_serde_roundtrip() {
        let s = sample_summary();
        let json = serde_json::to_string(&s).unwrap();
        let back: SimulationSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
