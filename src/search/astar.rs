//! A* search.
//!
//! `f = g + h` where `g` is the processing time already committed and `h`
//! is the largest per-machine completion bound:
//!
//! ```text
//! h = max over m of (free_time[m] + Σ processing of unscheduled jobs on m)
//! ```
//!
//! No completion of the state can finish machine `m` before its free time
//! plus all work still bound to it, and the makespan is the maximum over
//! machines, so `h` never overestimates the final makespan.
//!
//! # Reference
//! Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//! Determination of Minimum Cost Paths"

use super::state::{SearchNode, SearchProblem};
use super::strategy::{DuplicatePolicy, Evaluation, SearchStrategy};

/// A* strategy with the per-machine completion bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar;

impl AStar {
    /// Lower bound on the final makespan reachable from `node`.
    ///
    /// Zero at a terminal state.
    pub fn heuristic(node: &SearchNode, problem: &SearchProblem<'_>) -> i64 {
        if node.is_terminal() {
            return 0;
        }

        let mut completion = node.machine_free_times(problem);
        for &job in &node.unscheduled {
            completion[problem.machine_of(job)] += problem.duration(job);
        }
        completion.into_iter().max().unwrap_or(0)
    }
}

impl SearchStrategy for AStar {
    fn name(&self) -> &'static str {
        "A* Search"
    }

    fn evaluate(&self, node: &SearchNode, problem: &SearchProblem<'_>) -> Evaluation {
        let h = Self::heuristic(node, problem);
        Evaluation {
            priority: node.cost as f64 + h as f64,
            g: node.cost,
            h: h as f64,
        }
    }

    fn duplicate_policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::ImproveBestCost
    }

    fn description(&self) -> &'static str {
        "AI search algorithm that uses both path cost and heuristic to find the optimal solution."
    }

    fn reports_path_cost(&self) -> bool {
        true
    }
}
