//! Best-first search loop shared by every strategy.
//!
//! # Algorithm
//!
//! 1. Push the empty schedule.
//! 2. Pop the lowest `(priority, insertion counter)` entry. Drop it if the
//!    strategy's duplicate table marks it stale.
//! 3. If the state is terminal, format it and stop.
//! 4. Otherwise check the expansion budget, expand the state and push every
//!    successor the duplicate table admits.
//!
//! The state space is a finite tree of depth `n` (every expansion removes
//! one job), so the loop always terminates; its frontier is bounded by the
//! `2ⁿ` distinct signatures. Intended for small job counts.

use tracing::{debug, error, info, trace, warn};

use crate::error::SearchError;
use crate::models::{Job, Schedule};

use super::format::format_schedule;
use super::frontier::Frontier;
use super::state::{SearchNode, SearchProblem, SearchTree};
use super::strategy::{DuplicateTable, Evaluation, SearchStrategy};
use super::trace::{SearchTrace, TraceRecorder};

/// Result of a successful search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Placements sorted by start time.
    pub schedule: Schedule,
    /// Timed copies of the input jobs, in input order.
    pub jobs: Vec<Job>,
    pub trace: SearchTrace,
}

impl SearchOutcome {
    pub fn makespan(&self) -> i64 {
        self.schedule.makespan()
    }
}

/// Best-first search driven by a [`SearchStrategy`].
///
/// # Example
///
/// ```
/// use u_jobseq::models::{Job, Machine};
/// use u_jobseq::search::{AStar, BestFirstSearch, SearchProblem};
///
/// let jobs = vec![Job::new("1", 5, 1), Job::new("2", 3, 2), Job::new("3", 2, 1)];
/// let machines = Machine::numbered(2);
/// let problem = SearchProblem::new(&jobs, &machines).unwrap();
///
/// let outcome = BestFirstSearch::new(AStar).run(&problem).unwrap();
/// assert_eq!(outcome.makespan(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct BestFirstSearch<S> {
    strategy: S,
    max_expansions: Option<usize>,
    record_entries: bool,
}

impl<S: SearchStrategy> BestFirstSearch<S> {
    /// Creates a search with no expansion budget and full trace entries.
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            max_expansions: None,
            record_entries: true,
        }
    }

    /// Fails the run when a non-terminal state is popped after this many
    /// expansions. Reaching a terminal state never counts against it.
    pub fn with_max_expansions(mut self, limit: Option<usize>) -> Self {
        self.max_expansions = limit;
        self
    }

    /// Turns per-expansion trace entries on or off. Counters are always kept.
    pub fn with_trace_entries(mut self, enabled: bool) -> Self {
        self.record_entries = enabled;
        self
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Runs the search to the first terminal state.
    pub fn run(&self, problem: &SearchProblem<'_>) -> Result<SearchOutcome, SearchError> {
        let span = tracing::debug_span!(
            "best_first_search",
            algorithm = self.strategy.name(),
            jobs = problem.job_count(),
            machines = problem.machine_count(),
        );
        let _enter = span.enter();

        let mut tree = SearchTree::new();
        let mut evaluations: Vec<Evaluation> = Vec::new();
        let mut frontier = Frontier::new();
        let mut duplicates = DuplicateTable::for_policy(self.strategy.duplicate_policy());
        let mut recorder = TraceRecorder::start(
            self.strategy.name(),
            self.record_entries,
            self.strategy.reports_path_cost(),
        );

        let root = SearchNode::root(problem.job_count());
        let root_eval = self.strategy.evaluate(&root, problem);
        duplicates.admit(root.signature(), root.cost);
        let root_id = tree.insert(root);
        evaluations.push(root_eval);
        frontier.push(root_eval.priority, root_id);

        info!(algorithm = self.strategy.name(), "search started");

        while let Some(entry) = frontier.pop() {
            let node = tree.get(entry.node);

            if duplicates.is_stale(&node.signature(), node.cost) {
                trace!(node = entry.node.0, g = node.cost, "discarding stale entry");
                recorder.record_stale();
                continue;
            }

            let evaluation = evaluations[entry.node.0];
            let makespan = node.makespan(problem);
            recorder.record_pop(node.depth(), &evaluation, makespan);
            debug!(
                level = node.depth(),
                priority = evaluation.priority,
                g = evaluation.g,
                h = evaluation.h,
                makespan,
                "expanding"
            );

            if node.is_terminal() {
                let formatted = format_schedule(problem, node);
                let path = tree.path(entry.node);
                let trace = recorder.finish(path, tree.len(), frontier.peak_len());
                info!(
                    algorithm = self.strategy.name(),
                    makespan = formatted.schedule.makespan(),
                    nodes_expanded = trace.nodes_expanded,
                    signatures = duplicates.len(),
                    "search finished"
                );
                return Ok(SearchOutcome {
                    schedule: formatted.schedule,
                    jobs: formatted.jobs,
                    trace,
                });
            }

            if let Some(limit) = self.max_expansions {
                if recorder.search_iterations() >= limit {
                    warn!(limit, frontier = frontier.len(), "expansion budget exhausted");
                    return Err(SearchError::BudgetExhausted { limit });
                }
            }

            for successor in tree.expand(entry.node, problem) {
                if !duplicates.admit(successor.signature(), successor.cost) {
                    continue;
                }
                let successor_eval = self.strategy.evaluate(&successor, problem);
                let id = tree.insert(successor);
                evaluations.push(successor_eval);
                frontier.push(successor_eval.priority, id);
            }

            recorder.record_iteration();
        }

        let nodes_expanded = recorder.nodes_expanded();
        error!(
            algorithm = self.strategy.name(),
            nodes_expanded, "frontier exhausted without reaching a complete schedule"
        );
        Err(SearchError::FrontierExhausted { nodes_expanded })
    }
}
