//! Job model.
//!
//! A job is one unit of work with a known arrival time and burst time.
//! It is created by the input layer and never mutated by the engine.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.1

use serde::{Deserialize, Serialize};

use super::{JobId, TimeStep};

/// A job to be scheduled.
///
/// Submission order of jobs matters: both disciplines break ties by the
/// position a job holds in the submitted slice, so the input layer must
/// pass jobs through in the order the user entered them.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
/// The consumer defines what one tick means (ms, seconds, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique, stable identifier.
    pub id: JobId,
    /// Human-readable name (shown in tables and charts).
    pub name: String,
    /// Time at which the job becomes available to run.
    pub arrival_time: TimeStep,
    /// Uninterrupted processing time the job needs once started.
    /// Must be > 0; validated before scheduling.
    pub burst_time: TimeStep,
}

impl Job {
    /// Creates a new job arriving at t=0 with zero burst time.
    ///
    /// A zero burst time is rejected by validation, so callers are
    /// expected to follow up with [`Job::with_burst`].
    pub fn new(id: JobId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            arrival_time: 0,
            burst_time: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: TimeStep) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst_time: TimeStep) -> Self {
        self.burst_time = burst_time;
        self
    }
}
