//! Simulation quality metrics.
//!
//! Pure reductions over a completed run. [`summarize`] computes the two
//! averages every summary carries; [`SimulationKpi`] derives the fuller
//! picture (makespan, totals, per-unit utilization) on demand.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Avg Turnaround | mean(completion - arrival) |
//! | Avg Waiting | mean(turnaround - burst) |
//! | Utilization | Unit busy time / makespan |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::HashMap;

use crate::models::{ScheduleEntry, SimulationSummary, TimeStep};

/// Computes average turnaround and waiting time for a set of entries.
///
/// Returns `(None, None)` for an empty set — an empty simulation has no
/// averages, not a division by zero.
pub fn summarize(entries: &[ScheduleEntry]) -> (Option<f64>, Option<f64>) {
    if entries.is_empty() {
        return (None, None);
    }

    let count = entries.len() as f64;
    let total_turnaround: TimeStep = entries.iter().map(|e| e.turnaround_time).sum();
    let total_waiting: TimeStep = entries.iter().map(|e| e.waiting_time).sum();

    (
        Some(total_turnaround as f64 / count),
        Some(total_waiting as f64 / count),
    )
}

/// Simulation performance indicators.
///
/// All times are in ticks from the simulation epoch.
#[derive(Debug, Clone)]
pub struct SimulationKpi {
    /// Makespan: latest completion time across all units.
    pub makespan: TimeStep,
    /// Sum of turnaround times across all jobs.
    pub total_turnaround_time: TimeStep,
    /// Sum of waiting times across all jobs.
    pub total_waiting_time: TimeStep,
    /// Mean turnaround time, absent for an empty run.
    pub average_turnaround_time: Option<f64>,
    /// Mean waiting time, absent for an empty run.
    pub average_waiting_time: Option<f64>,
    /// Per-unit utilization: busy time over the makespan horizon.
    /// Only units that ran at least one job appear.
    pub utilization_by_unit: HashMap<usize, f64>,
    /// Mean utilization across units that ran jobs (0.0 for an empty run).
    pub average_utilization: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a completed summary.
    pub fn calculate(summary: &SimulationSummary) -> Self {
        let makespan = summary.makespan();
        let total_turnaround_time = summary.entries.iter().map(|e| e.turnaround_time).sum();
        let total_waiting_time = summary.entries.iter().map(|e| e.waiting_time).sum();
        let (average_turnaround_time, average_waiting_time) = summarize(&summary.entries);

        let mut unit_busy: HashMap<usize, TimeStep> = HashMap::new();
        for entry in &summary.entries {
            *unit_busy.entry(entry.unit).or_insert(0) += entry.duration();
        }

        let utilization_by_unit: HashMap<usize, f64> = if makespan == 0 {
            HashMap::new()
        } else {
            unit_busy
                .into_iter()
                .map(|(unit, busy)| (unit, busy as f64 / makespan as f64))
                .collect()
        };

        let average_utilization = if utilization_by_unit.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_unit.values().sum();
            sum / utilization_by_unit.len() as f64
        };

        Self {
            makespan,
            total_turnaround_time,
            total_waiting_time,
            average_turnaround_time,
            average_waiting_time,
            utilization_by_unit,
            average_utilization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;

    fn entry(id: u32, unit: usize, arrival: u64, burst: u64, start: u64) -> ScheduleEntry {
        let job = Job::new(id, format!("J{id}"))
            .with_arrival(arrival)
            .with_burst(burst);
        ScheduleEntry::dispatch(job, unit, start)
    }

    #[test]
    fn test_summarize_averages() {
        // Turnarounds 5, 8, 16 → avg 29/3; waits 0, 5, 8 → avg 13/3.
        let entries = vec![
            entry(1, 0, 0, 5, 0),
            entry(2, 0, 0, 3, 5),
            entry(3, 0, 0, 8, 8),
        ];
        let (turnaround, waiting) = summarize(&entries);
        assert!((turnaround.unwrap() - 29.0 / 3.0).abs() < 1e-10);
        assert!((waiting.unwrap() - 13.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), (None, None));
    }

    #[test]
    fn test_kpi_basic() {
        let summary = SimulationSummary {
            entries: vec![entry(1, 0, 0, 5, 0), entry(2, 1, 0, 3, 0)],
            average_turnaround_time: Some(4.0),
            average_waiting_time: Some(0.0),
        };
        let kpi = SimulationKpi::calculate(&summary);
        assert_eq!(kpi.makespan, 5);
        assert_eq!(kpi.total_turnaround_time, 8);
        assert_eq!(kpi.total_waiting_time, 0);
        assert_eq!(kpi.average_turnaround_time, Some(4.0));
    }

    #[test]
    fn test_kpi_utilization() {
        // Unit 0 busy 5/5 = 1.0, unit 1 busy 3/5 = 0.6.
        let summary = SimulationSummary {
            entries: vec![entry(1, 0, 0, 5, 0), entry(2, 1, 0, 3, 0)],
            average_turnaround_time: Some(4.0),
            average_waiting_time: Some(0.0),
        };
        let kpi = SimulationKpi::calculate(&summary);
        assert!((kpi.utilization_by_unit[&0] - 1.0).abs() < 1e-10);
        assert!((kpi.utilization_by_unit[&1] - 0.6).abs() < 1e-10);
        assert!((kpi.average_utilization - 0.8).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_split_busy_interval() {
        // Two jobs on one unit with an idle gap: busy 4 of makespan 10.
        let summary = SimulationSummary {
            entries: vec![entry(1, 0, 0, 2, 0), entry(2, 0, 8, 2, 8)],
            average_turnaround_time: Some(2.0),
            average_waiting_time: Some(0.0),
        };
        let kpi = SimulationKpi::calculate(&summary);
        assert_eq!(kpi.makespan, 10);
        assert!((kpi.utilization_by_unit[&0] - 0.4).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty_run() {
        let kpi = SimulationKpi::calculate(&SimulationSummary::new());
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.average_turnaround_time, None);
        assert_eq!(kpi.average_waiting_time, None);
        assert!(kpi.utilization_by_unit.is_empty());
        assert!((kpi.average_utilization - 0.0).abs() < 1e-10);
    }
}
