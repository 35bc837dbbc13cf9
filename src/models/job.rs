//! Job model.
//!
//! A job is a single unit of work bound to exactly one machine. The search
//! only decides the order of jobs on their machine, never the machine itself.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

/// Default priority when the caller does not supply one.
pub const DEFAULT_PRIORITY: i32 = 1;

/// A job to be sequenced on its target machine.
///
/// `start_time` and `end_time` stay `None` on caller-built records. The
/// formatter returns fresh copies with both fields filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Caller-supplied identifier. Used as the output key; not required unique.
    pub id: String,
    /// Processing duration (must be positive).
    pub processing_time: i64,
    /// Advisory priority. Carried through but not consumed by the search.
    pub priority: i32,
    /// Target machine identifier (1-based).
    pub machine_id: u32,
    /// Start time, set by the formatter.
    pub start_time: Option<i64>,
    /// End time, set by the formatter.
    pub end_time: Option<i64>,
}

impl Job {
    /// Creates a job with default priority.
    pub fn new(id: impl Into<String>, processing_time: i64, machine_id: u32) -> Self {
        Self {
            id: id.into(),
            processing_time,
            priority: DEFAULT_PRIORITY,
            machine_id,
            start_time: None,
            end_time: None,
        }
    }

    /// Sets the advisory priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Returns a copy of this job placed at `start_time`.
    pub fn placed_at(&self, start_time: i64) -> Self {
        Self {
            start_time: Some(start_time),
            end_time: Some(start_time + self.processing_time),
            ..self.clone()
        }
    }

    /// Whether start and end times have been assigned.
    pub fn is_placed(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }
}

/// Sum of processing times over a job slice, saturating at the `i64`
/// bounds. Validated input never saturates.
pub fn total_processing_time(jobs: &[Job]) -> i64 {
    jobs.iter().fold(0_i64, |sum, j| sum.saturating_add(j.processing_time))
}
