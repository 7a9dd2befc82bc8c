//! Per-unit timeline projection.
//!
//! Reshapes a completed schedule into ordered per-unit interval lists for
//! Gantt-style rendering (x = time, y = unit index). Pure reshaping: the
//! no-overlap guarantee of the schedule passes through untouched, nothing
//! is recomputed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ScheduleEntry, TimeStep};

/// One busy interval on a unit's timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSpan {
    /// Name of the job occupying the interval.
    pub job_name: String,
    /// Interval start.
    pub start_time: TimeStep,
    /// Interval end (exclusive).
    pub end_time: TimeStep,
}

/// Projects schedule entries onto per-unit timelines.
///
/// Returns a map from unit index to that unit's intervals, sorted by
/// start time. Units that ran no jobs do not appear. The map is ordered
/// by unit index so iteration matches the y-axis of a chart.
///
/// # Example
/// ```
/// use schedsim::models::Job;
/// use schedsim::scheduler::FcfsScheduler;
/// use schedsim::timeline;
///
/// let jobs = vec![
///     Job::new(1, "A").with_burst(5),
///     Job::new(2, "B").with_burst(3),
/// ];
/// let summary = FcfsScheduler::new().schedule(&jobs, 2).unwrap();
///
/// let lanes = timeline::project(&summary.entries);
/// assert_eq!(lanes.len(), 2);
/// assert_eq!(lanes[&0][0].job_name, "A");
/// ```
pub fn project(entries: &[ScheduleEntry]) -> BTreeMap<usize, Vec<TimelineSpan>> {
    let mut lanes: BTreeMap<usize, Vec<TimelineSpan>> = BTreeMap::new();

    for entry in entries {
        lanes.entry(entry.unit).or_default().push(TimelineSpan {
            job_name: entry.job.name.clone(),
            start_time: entry.start_time,
            end_time: entry.end_time,
        });
    }

    for spans in lanes.values_mut() {
        spans.sort_by_key(|span| span.start_time);
    }

    lanes
}
