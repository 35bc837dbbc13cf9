//! Search instrumentation.
//!
//! The recorder is write-only from the loop's point of view: nothing it
//! stores is ever read back by the search, so recording cannot change the
//! outcome.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use super::state::Placement;
use super::strategy::Evaluation;

/// One popped-and-accepted state.
///
/// Cost-aware strategies report `f`, `g` and `h`; greedy ones report the
/// single heuristic they order by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraceEntry {
    Cost {
        /// Depth: number of jobs already scheduled.
        level: usize,
        f_value: f64,
        g_value: i64,
        h_value: f64,
        /// Makespan of the partial schedule.
        makespan: i64,
    },
    Greedy {
        level: usize,
        heuristic: f64,
        makespan: i64,
    },
}

impl TraceEntry {
    pub fn level(&self) -> usize {
        match *self {
            TraceEntry::Cost { level, .. } | TraceEntry::Greedy { level, .. } => level,
        }
    }

    /// Frontier key the entry was popped with.
    pub fn priority(&self) -> f64 {
        match *self {
            TraceEntry::Cost { f_value, .. } => f_value,
            TraceEntry::Greedy { heuristic, .. } => heuristic,
        }
    }

    pub fn makespan(&self) -> i64 {
        match *self {
            TraceEntry::Cost { makespan, .. } | TraceEntry::Greedy { makespan, .. } => makespan,
        }
    }
}

/// Statistics of one search run.
///
/// Keys serialize in snake_case, the shape the visualization front-end
/// reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchTrace {
    pub algorithm_name: String,
    /// Loop iterations that ended in an expansion.
    pub search_iterations: usize,
    /// States popped and accepted (stale entries excluded).
    pub nodes_expanded: usize,
    /// States stored in the arena, root included.
    pub nodes_generated: usize,
    /// Stale frontier entries discarded at pop time.
    pub stale_discarded: usize,
    /// Largest frontier size during the run.
    pub peak_frontier: usize,
    /// `[job, start, machine]` placements from the root to the returned state.
    pub solution_path: Vec<Placement>,
    /// Wall-clock duration of the run, in seconds.
    pub execution_time: f64,
    /// Per-expansion entries; empty when entry recording is off.
    pub heuristic_values: Vec<TraceEntry>,
    /// Expansions per depth.
    pub exploration_by_level: BTreeMap<usize, usize>,
}

/// Collects a [`SearchTrace`] while the loop runs.
#[derive(Debug)]
pub struct TraceRecorder {
    trace: SearchTrace,
    started: Instant,
    record_entries: bool,
    with_cost: bool,
}

impl TraceRecorder {
    /// Starts the clock. `with_cost` selects `f`/`g`/`h` entries over a
    /// bare heuristic.
    pub fn start(algorithm_name: &str, record_entries: bool, with_cost: bool) -> Self {
        Self {
            trace: SearchTrace {
                algorithm_name: algorithm_name.to_string(),
                ..SearchTrace::default()
            },
            started: Instant::now(),
            record_entries,
            with_cost,
        }
    }

    /// A state was popped and accepted.
    pub fn record_pop(&mut self, level: usize, evaluation: &Evaluation, makespan: i64) {
        self.trace.nodes_expanded += 1;
        *self.trace.exploration_by_level.entry(level).or_insert(0) += 1;

        if self.record_entries {
            let entry = if self.with_cost {
                TraceEntry::Cost {
                    level,
                    f_value: evaluation.priority,
                    g_value: evaluation.g,
                    h_value: evaluation.h,
                    makespan,
                }
            } else {
                TraceEntry::Greedy {
                    level,
                    heuristic: evaluation.priority,
                    makespan,
                }
            };
            self.trace.heuristic_values.push(entry);
        }
    }

    /// A popped entry was discarded as stale.
    pub fn record_stale(&mut self) {
        self.trace.stale_discarded += 1;
    }

    /// A popped state was expanded.
    pub fn record_iteration(&mut self) {
        self.trace.search_iterations += 1;
    }

    pub fn nodes_expanded(&self) -> usize {
        self.trace.nodes_expanded
    }

    pub fn search_iterations(&self) -> usize {
        self.trace.search_iterations
    }

    /// Stops the clock and returns the trace.
    pub fn finish(
        mut self,
        solution_path: Vec<Placement>,
        nodes_generated: usize,
        peak_frontier: usize,
    ) -> SearchTrace {
        self.trace.execution_time = self.started.elapsed().as_secs_f64();
        self.trace.solution_path = solution_path;
        self.trace.nodes_generated = nodes_generated;
        self.trace.peak_frontier = peak_frontier;
        self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(priority: f64) -> Evaluation {
        Evaluation {
            priority,
            g: 2,
            h: priority - 2.0,
        }
    }

    #[test]
    fn test_counters_and_histogram() {
        let mut recorder = TraceRecorder::start("A* Search", true, true);
        recorder.record_pop(0, &eval(9.0), 0);
        recorder.record_iteration();
        recorder.record_pop(1, &eval(10.0), 5);
        recorder.record_stale();
        recorder.record_pop(1, &eval(11.0), 3);
        recorder.record_iteration();

        let trace = recorder.finish(Vec::new(), 7, 4);
        assert_eq!(trace.algorithm_name, "A* Search");
        assert_eq!(trace.nodes_expanded, 3);
        assert_eq!(trace.search_iterations, 2);
        assert_eq!(trace.stale_discarded, 1);
        assert_eq!(trace.nodes_generated, 7);
        assert_eq!(trace.peak_frontier, 4);
        assert_eq!(trace.exploration_by_level[&0], 1);
        assert_eq!(trace.exploration_by_level[&1], 2);
        assert_eq!(trace.heuristic_values.len(), 3);
        assert_eq!(trace.heuristic_values[1].makespan(), 5);
        assert_eq!(trace.heuristic_values[2].priority(), 11.0);
        assert!(trace.execution_time >= 0.0);
    }

    #[test]
    fn test_entries_can_be_disabled() {
        let mut recorder = TraceRecorder::start("GBFS", false, false);
        recorder.record_pop(0, &eval(3.0), 0);

        let trace = recorder.finish(Vec::new(), 1, 1);
        assert_eq!(trace.nodes_expanded, 1);
        assert!(trace.heuristic_values.is_empty());
        assert_eq!(trace.exploration_by_level[&0], 1);
    }

    #[test]
    fn test_serializes_snake_case() {
        let path = vec![Placement {
            job: 2,
            start: 5,
            machine: 0,
        }];
        let trace = TraceRecorder::start("GBFS", true, false).finish(path, 1, 1);
        let json = serde_json::to_value(&trace).unwrap();

        assert_eq!(json["algorithm_name"], "GBFS");
        assert_eq!(json["nodes_expanded"], 0);
        assert_eq!(json["search_iterations"], 0);
        assert!(json["execution_time"].is_number());
        assert!(json["exploration_by_level"].is_object());
        assert_eq!(json["solution_path"][0], serde_json::json!([2, 5, 0]));
        assert!(json.get("algorithmName").is_none());
    }

    #[test]
    fn test_entry_shapes() {
        let mut greedy = TraceRecorder::start("GBFS", true, false);
        greedy.record_pop(0, &eval(3.5), 0);
        let json = serde_json::to_value(&greedy.finish(Vec::new(), 1, 1)).unwrap();
        let entry = &json["heuristic_values"][0];
        assert_eq!(entry["heuristic"], 3.5);
        assert_eq!(entry["level"], 0);
        assert!(entry.get("f_value").is_none());

        let mut cost = TraceRecorder::start("A* Search", true, true);
        cost.record_pop(1, &eval(9.0), 5);
        let json = serde_json::to_value(&cost.finish(Vec::new(), 1, 1)).unwrap();
        let entry = &json["heuristic_values"][0];
        assert_eq!(entry["f_value"], 9.0);
        assert_eq!(entry["g_value"], 2);
        assert_eq!(entry["h_value"], 7.0);
        assert_eq!(entry["makespan"], 5);
        assert!(entry.get("heuristic").is_none());
    }
}
