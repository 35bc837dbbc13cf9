//! Best-first search over partial schedules.
//!
//! A state is a partial schedule: the jobs placed so far (each at its
//! machine's current free time) and the jobs still waiting. Expanding a
//! state places one waiting job. A state is terminal when nothing waits.
//!
//! # Strategies
//!
//! | Strategy | Priority | Duplicate handling | Optimal |
//! |----------|----------|--------------------|---------|
//! | [`Gbfs`] | `h` (weighted estimate) | signature never re-admitted | no |
//! | [`AStar`] | `g + h` (completion bound) | admit on strictly lower `g` | yes |
//!
//! # Components
//!
//! - [`SearchProblem`]: validated jobs and machines with resolved indices
//! - [`SearchTree`]: arena of [`SearchNode`]s addressed by [`NodeId`]
//! - [`Frontier`]: min-heap keyed by `(priority, insertion counter)`
//! - [`BestFirstSearch`]: the loop
//! - [`TraceRecorder`]: passive statistics
//!
//! # Reference
//! Russell & Norvig (2021), "Artificial Intelligence: A Modern Approach", Ch. 3.5

mod astar;
mod engine;
mod format;
mod frontier;
mod gbfs;
mod state;
mod strategy;
mod trace;

pub use astar::AStar;
pub use engine::{BestFirstSearch, SearchOutcome};
pub use format::{format_schedule, FormattedSchedule};
pub use frontier::{Frontier, FrontierEntry};
pub use gbfs::{
    Gbfs, IMBALANCE_WEIGHT, LONGEST_REMAINING_WEIGHT, MAKESPAN_WEIGHT, MEAN_REMAINING_WEIGHT,
};
pub use state::{NodeId, Placement, SearchNode, SearchProblem, SearchTree, Signature};
pub use strategy::{DuplicatePolicy, Evaluation, SearchStrategy};
pub use trace::{SearchTrace, TraceEntry, TraceRecorder};

use crate::config::{Algorithm, SearchConfig};
use crate::error::SearchError;

/// Runs the algorithm selected by `config`.
pub fn search(
    problem: &SearchProblem<'_>,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    match config.strategy {
        Algorithm::Gbfs => run_with(Gbfs, problem, config),
        Algorithm::AStar => run_with(AStar, problem, config),
    }
}

fn run_with<S: SearchStrategy>(
    strategy: S,
    problem: &SearchProblem<'_>,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    BestFirstSearch::new(strategy)
        .with_max_expansions(config.max_expansions)
        .with_trace_entries(config.record_trace)
        .run(problem)
}
