//! Schedule (solution) model.
//!
//! A schedule is a complete placement of jobs onto their machines and
//! time slots, as produced by the search formatter or the exact scheduler.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete schedule (solution to a sequencing problem).
///
/// Assignments are kept in the order they were added. Producers in this
/// crate add them sorted by start time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Job placements.
    pub assignments: Vec<Assignment>,
}

/// A job-machine-time placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Position of the job in the input slice. Disambiguates repeated ids.
    pub job_index: usize,
    /// Caller-supplied job identifier.
    pub job_id: String,
    /// Machine identifier (1-based).
    pub machine_id: u32,
    /// Start time.
    pub start_time: i64,
    /// End time.
    pub end_time: i64,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        job_index: usize,
        job_id: impl Into<String>,
        machine_id: u32,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            job_index,
            job_id: job_id.into(),
            machine_id,
            start_time,
            end_time,
        }
    }

    /// Duration (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether two placements on the same machine share any time.
    pub fn overlaps(&self, other: &Assignment) -> bool {
        self.machine_id == other.machine_id
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }

    /// Wire form: `(job_id, start_time, end_time, machine_id)`.
    pub fn as_tuple(&self) -> (String, i64, i64, u32) {
        (
            self.job_id.clone(),
            self.start_time,
            self.end_time,
            self.machine_id,
        )
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Stable sort by start time. Ties keep their insertion order.
    pub fn sort_by_start(&mut self) {
        self.assignments.sort_by_key(|a| a.start_time);
    }

    /// Makespan: latest end time across all assignments.
    pub fn makespan(&self) -> i64 {
        self.assignments.iter().map(|a| a.end_time).max().unwrap_or(0)
    }

    /// Returns all assignments carrying a given job id.
    pub fn assignments_for_job(&self, job_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.job_id == job_id)
            .collect()
    }

    /// Returns all assignments on a machine, in schedule order.
    pub fn assignments_for_machine(&self, machine_id: u32) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.machine_id == machine_id)
            .collect()
    }

    /// Total busy time per machine.
    pub fn busy_time_by_machine(&self) -> BTreeMap<u32, i64> {
        let mut busy = BTreeMap::new();
        for a in &self.assignments {
            *busy.entry(a.machine_id).or_insert(0) += a.duration();
        }
        busy
    }

    /// Pairs of assignment positions that overlap on the same machine.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for i in 0..self.assignments.len() {
            for j in (i + 1)..self.assignments.len() {
                if self.assignments[i].overlaps(&self.assignments[j]) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Whether no two jobs share a machine at the same time.
    pub fn is_feasible(&self) -> bool {
        self.overlapping_pairs().is_empty()
    }

    /// Wire form of every assignment, in schedule order.
    pub fn to_tuples(&self) -> Vec<(String, i64, i64, u32)> {
        self.assignments.iter().map(Assignment::as_tuple).collect()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}
