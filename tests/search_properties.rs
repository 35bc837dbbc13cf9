//! End-to-end properties of the best-first search.

mod common;

use common::fixtures::{assert_valid_schedule, scenario};
use common::{brute_force_optimum, init_tracing};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use u_jobseq::exact::{DisjunctivePackingSolver, ExactScheduler};
use u_jobseq::generator::random_instance;
use u_jobseq::models::{Job, Machine};
use u_jobseq::scheduler::SearchScheduler;
use u_jobseq::search::{
    AStar, BestFirstSearch, DuplicatePolicy, Evaluation, Gbfs, SearchNode, SearchProblem,
    SearchStrategy,
};
use u_jobseq::{Algorithm, SearchConfig};

fn scheduler(algorithm: Algorithm) -> SearchScheduler {
    SearchScheduler::with_config(SearchConfig::new().with_strategy(algorithm))
}

#[test]
fn scenario_makespan_is_nine_under_both_strategies() {
    init_tracing();
    let (jobs, machines) = scenario();

    for algorithm in Algorithm::ALL {
        let outcome = scheduler(algorithm).schedule(&jobs, &machines).unwrap();
        assert_eq!(outcome.makespan(), 9, "{algorithm}");
        assert_valid_schedule(&outcome.schedule, &jobs, &machines);
    }
}

#[test]
fn single_job_starts_at_zero() {
    let jobs = vec![Job::new("solo", 7, 2)];
    let machines = Machine::numbered(2);

    for algorithm in Algorithm::ALL {
        let outcome = scheduler(algorithm).schedule(&jobs, &machines).unwrap();
        assert_eq!(
            outcome.schedule.to_tuples(),
            vec![("solo".to_string(), 0, 7, 2)]
        );
    }
}

#[test]
fn astar_matches_brute_force_on_random_instances() {
    init_tracing();
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..40 {
        let job_count = rng.random_range(1..=8usize);
        let machine_count = rng.random_range(1..=3u32);
        let (jobs, machines) = random_instance(&mut rng, job_count, machine_count);
        let optimum = brute_force_optimum(&jobs, &machines);

        let astar = scheduler(Algorithm::AStar).schedule(&jobs, &machines).unwrap();
        let gbfs = scheduler(Algorithm::Gbfs).schedule(&jobs, &machines).unwrap();

        assert_valid_schedule(&astar.schedule, &jobs, &machines);
        assert_valid_schedule(&gbfs.schedule, &jobs, &machines);
        assert_eq!(astar.makespan(), optimum);
        assert!(astar.makespan() <= gbfs.makespan());
    }
}

/// Constant priority with never-reopen admission. FIFO tie-breaking turns
/// the loop into a breadth-first sweep over signatures.
#[derive(Debug)]
struct Level;

impl SearchStrategy for Level {
    fn name(&self) -> &'static str {
        "level"
    }

    fn evaluate(&self, node: &SearchNode, _problem: &SearchProblem<'_>) -> Evaluation {
        Evaluation {
            priority: 0.0,
            g: node.cost,
            h: 0.0,
        }
    }

    fn duplicate_policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::NeverReopen
    }
}

fn binomial(n: usize, k: usize) -> usize {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[test]
fn never_reopen_expands_each_signature_once() {
    let mut rng = SmallRng::seed_from_u64(9);
    let (jobs, machines) = random_instance(&mut rng, 6, 2);
    let problem = SearchProblem::new(&jobs, &machines).unwrap();
    let n = jobs.len();

    // Every signature of size n - k is reached; a repeat would push a level
    // past the number of distinct job subsets of that size.
    let outcome = BestFirstSearch::new(Level).run(&problem).unwrap();
    for k in 0..n {
        assert_eq!(
            outcome.trace.exploration_by_level.get(&k).copied(),
            Some(binomial(n, k)),
            "level {k}"
        );
    }
    assert_eq!(outcome.trace.exploration_by_level.get(&n).copied(), Some(1));
    assert_eq!(outcome.trace.nodes_generated, 1 << n);

    let gbfs = BestFirstSearch::new(Gbfs).run(&problem).unwrap();
    for (&k, &count) in &gbfs.trace.exploration_by_level {
        assert!(count <= binomial(n, k), "gbfs level {k}: {count}");
    }
    assert_eq!(gbfs.trace.stale_discarded, 0);
}

#[test]
fn same_input_gives_identical_schedule() {
    let mut rng = SmallRng::seed_from_u64(5);
    let (jobs, machines) = random_instance(&mut rng, 6, 3);

    for algorithm in Algorithm::ALL {
        let first = scheduler(algorithm).schedule(&jobs, &machines).unwrap();
        let second = scheduler(algorithm).schedule(&jobs, &machines).unwrap();
        assert_eq!(first.schedule, second.schedule);
        assert_eq!(first.jobs, second.jobs);
        assert_eq!(first.trace.solution_path, second.trace.solution_path);
        assert_eq!(first.trace.nodes_expanded, second.trace.nodes_expanded);
    }
}

#[test]
fn identical_jobs_keep_input_order_on_ties() {
    let jobs = vec![Job::new("a", 2, 1), Job::new("b", 2, 1), Job::new("c", 2, 1)];
    let machines = Machine::numbered(1);
    let problem = SearchProblem::new(&jobs, &machines).unwrap();

    let outcome = BestFirstSearch::new(AStar).run(&problem).unwrap();
    let ids: Vec<&str> = outcome
        .schedule
        .assignments
        .iter()
        .map(|a| a.job_id.as_str())
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn exact_scheduler_agrees_with_astar() {
    let mut rng = SmallRng::seed_from_u64(17);

    for _ in 0..20 {
        let job_count = rng.random_range(0..=8usize);
        let (jobs, machines) = random_instance(&mut rng, job_count, 3);

        let astar = scheduler(Algorithm::AStar).schedule(&jobs, &machines).unwrap();
        let (exact, solution) = ExactScheduler::new(&jobs, &machines)
            .solve(&DisjunctivePackingSolver)
            .unwrap();

        assert_valid_schedule(&exact, &jobs, &machines);
        assert_eq!(exact.makespan(), astar.makespan());
        assert_eq!(solution.objective_value, astar.makespan());
    }
}

#[test]
fn formatted_jobs_carry_times() {
    let (jobs, machines) = scenario();
    let outcome = scheduler(Algorithm::AStar).schedule(&jobs, &machines).unwrap();

    for job in &outcome.jobs {
        let placed = outcome.schedule.assignments_for_job(&job.id);
        assert_eq!(placed.len(), 1, "job {}", job.id);
        assert_eq!(job.start_time, Some(placed[0].start_time));
        assert_eq!(job.end_time, Some(placed[0].end_time));
    }
    assert!(jobs.iter().all(|j| !j.is_placed()));
}
