//! Constraint model for exact scheduling.
//!
//! A model holds fixed-duration interval variables and disjunctive
//! (no-overlap) constraints. The objective is always the latest interval
//! end. Solvers consume it through [`CpSolver`](super::CpSolver).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A fixed-duration interval to be placed in `[start_min, end_max]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalVar {
    pub name: String,
    pub start_min: i64,
    pub start_max: i64,
    pub duration: i64,
    pub end_max: i64,
}

impl IntervalVar {
    pub fn new(
        name: impl Into<String>,
        start_min: i64,
        start_max: i64,
        duration: i64,
        end_max: i64,
    ) -> Self {
        Self {
            name: name.into(),
            start_min,
            start_max,
            duration,
            end_max,
        }
    }

    /// An interval free to start anywhere that lets it end by `horizon`.
    pub fn within_horizon(name: impl Into<String>, duration: i64, horizon: i64) -> Self {
        Self::new(name, 0, horizon - duration, duration, horizon)
    }
}

/// Model constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CpConstraint {
    /// Named intervals pairwise disjoint in time.
    NoOverlap { intervals: Vec<String> },
}

/// A constraint model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpModel {
    name: String,
    horizon: i64,
    intervals: Vec<IntervalVar>,
    constraints: Vec<CpConstraint>,
}

impl CpModel {
    pub fn new(name: impl Into<String>, horizon: i64) -> Self {
        Self {
            name: name.into(),
            horizon,
            intervals: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn add_interval(&mut self, interval: IntervalVar) {
        self.intervals.push(interval);
    }

    pub fn add_no_overlap(&mut self, intervals: Vec<String>) {
        self.constraints.push(CpConstraint::NoOverlap { intervals });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn horizon(&self) -> i64 {
        self.horizon
    }

    pub fn intervals(&self) -> &[IntervalVar] {
        &self.intervals
    }

    pub fn constraints(&self) -> &[CpConstraint] {
        &self.constraints
    }

    pub fn interval(&self, name: &str) -> Option<&IntervalVar> {
        self.intervals.iter().find(|i| i.name == name)
    }

    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

/// Solver outcome classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverStatus {
    /// Proven minimal latest end.
    Optimal,
    /// A valid placement without an optimality proof, as returned by
    /// heuristic or time-limited [`CpSolver`](super::CpSolver)
    /// implementations.
    Feasible,
}

/// Placement of one interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalSolution {
    pub start: i64,
    pub end: i64,
}

/// Values assigned by a solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpSolution {
    pub status: SolverStatus,
    /// Interval placements keyed by interval name.
    pub intervals: HashMap<String, IntervalSolution>,
    /// Latest end over all intervals.
    pub objective_value: i64,
}

impl CpSolution {
    pub fn is_optimal(&self) -> bool {
        self.status == SolverStatus::Optimal
    }
}
