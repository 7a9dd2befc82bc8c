//! Non-preemptive scheduling simulator for identical parallel units.
//!
//! Simulates how a batch of jobs, each with a known arrival time and burst
//! time, is executed across a fixed number of identical processing units
//! under two classic disciplines: First-Come-First-Served (FCFS) and
//! Shortest-Job-First (SJF). The engine deterministically computes each
//! job's start, completion, turnaround, and waiting time, plus aggregate
//! averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `UnitPool`, `ScheduleEntry`,
//!   `SimulationSummary`
//! - **`scheduler`**: The two disciplines (`FcfsScheduler`, `SjfScheduler`)
//!   and KPI derivation (`SimulationKpi`)
//! - **`timeline`**: Per-unit interval projection for Gantt-style rendering
//! - **`validation`**: Input integrity checks (burst times, unit count)
//!
//! # Architecture
//!
//! The engine is a pure, synchronous computation: one simulation run is one
//! function call, all mutable state (unit trackers, ready queues) is local
//! to the run, and identical input always yields identical output. Input
//! collection and result rendering are the consumer's concern — everything
//! here is plain serializable data.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

pub mod models;
pub mod scheduler;
pub mod timeline;
pub mod validation;
