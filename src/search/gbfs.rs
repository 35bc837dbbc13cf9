//! Greedy best-first search.
//!
//! Orders the frontier by a weighted estimate of how much the schedule
//! still has to grow, ignoring accumulated cost. The estimate is neither
//! admissible nor consistent: it trades optimality for a fast descent.

use super::state::{SearchNode, SearchProblem};
use super::strategy::{DuplicatePolicy, Evaluation, SearchStrategy};

/// Weight of the current makespan.
pub const MAKESPAN_WEIGHT: f64 = 0.5;
/// Weight of the remaining work averaged over machines.
pub const MEAN_REMAINING_WEIGHT: f64 = 0.3;
/// Weight of the longest remaining job.
pub const LONGEST_REMAINING_WEIGHT: f64 = 0.2;
/// Weight of the spread of machine free times.
pub const IMBALANCE_WEIGHT: f64 = 0.1;

/// Greedy best-first strategy.
///
/// `h = 0.5·makespan + 0.3·(remaining work / machines)
///    + 0.2·(longest remaining job) + 0.1·σ(machine free times)`,
/// and `h = 0` at a terminal state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gbfs;

impl Gbfs {
    /// Heuristic value of a state.
    pub fn heuristic(node: &SearchNode, problem: &SearchProblem<'_>) -> f64 {
        if node.is_terminal() {
            return 0.0;
        }

        let makespan = node.makespan(problem) as f64;

        let remaining: i64 = node.unscheduled.iter().map(|&j| problem.duration(j)).sum();
        let mean_remaining = remaining as f64 / problem.machine_count() as f64;

        let longest = node
            .unscheduled
            .iter()
            .map(|&j| problem.duration(j))
            .max()
            .unwrap_or(0) as f64;

        let free = node.machine_free_times(problem);
        let imbalance = if free.len() > 1 {
            population_std_dev(&free)
        } else {
            0.0
        };

        MAKESPAN_WEIGHT * makespan
            + MEAN_REMAINING_WEIGHT * mean_remaining
            + LONGEST_REMAINING_WEIGHT * longest
            + IMBALANCE_WEIGHT * imbalance
    }
}

impl SearchStrategy for Gbfs {
    fn name(&self) -> &'static str {
        "Greedy Best-First Search (GBFS)"
    }

    fn evaluate(&self, node: &SearchNode, problem: &SearchProblem<'_>) -> Evaluation {
        let h = Self::heuristic(node, problem);
        Evaluation {
            priority: h,
            g: node.cost,
            h,
        }
    }

    fn duplicate_policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::NeverReopen
    }

    fn description(&self) -> &'static str {
        "AI search algorithm that uses a heuristic to determine the next best node to explore."
    }
}

fn population_std_dev(values: &[i64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<i64>() as f64 / n;
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    variance.sqrt()
}
