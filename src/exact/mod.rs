//! Exact scheduling through a constraint model.
//!
//! Builds a [`CpModel`] from jobs and machines, solves it with any
//! [`CpSolver`], and decodes the solution back into a [`Schedule`].
//!
//! # Formulation
//!
//! - One fixed-duration interval per job in `[0, horizon]`, where the
//!   horizon is the sum of all processing times
//! - One no-overlap group per machine holding that machine's jobs
//! - Objective: minimize the latest interval end (makespan)
//!
//! # Reference
//! - Laborie et al. (2018), "IBM ILOG CP Optimizer for Scheduling"
//! - Baptiste et al. (2001), "Constraint-Based Scheduling"

mod model;
mod solver;

pub use model::{CpConstraint, CpModel, CpSolution, IntervalSolution, IntervalVar, SolverStatus};
pub use solver::{CpSolver, DisjunctivePackingSolver};

use tracing::info;

use crate::error::{ExactError, SchedulerError};
use crate::models::{total_processing_time, Assignment, Job, Machine, Schedule};
use crate::validation::validate_input;

/// Builds, solves and decodes the constraint model for a job set.
///
/// # Example
/// ```
/// use u_jobseq::exact::{DisjunctivePackingSolver, ExactScheduler};
/// use u_jobseq::models::{Job, Machine};
///
/// let jobs = vec![Job::new("1", 5, 1), Job::new("2", 3, 2), Job::new("3", 2, 1)];
/// let machines = Machine::numbered(2);
///
/// let (schedule, solution) = ExactScheduler::new(&jobs, &machines)
///     .solve(&DisjunctivePackingSolver)
///     .unwrap();
/// assert_eq!(schedule.makespan(), 7);
/// assert!(solution.is_optimal());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ExactScheduler<'a> {
    jobs: &'a [Job],
    machines: &'a [Machine],
}

impl<'a> ExactScheduler<'a> {
    pub fn new(jobs: &'a [Job], machines: &'a [Machine]) -> Self {
        Self { jobs, machines }
    }

    /// Interval name of the job at `index`. Job ids may repeat, positions
    /// may not.
    pub fn interval_name(index: usize) -> String {
        format!("job_{index}")
    }

    /// Builds the constraint model.
    ///
    /// Machines without jobs get no group.
    pub fn build(&self) -> CpModel {
        let horizon = total_processing_time(self.jobs);
        let mut model = CpModel::new("job sequencing", horizon);

        for (index, job) in self.jobs.iter().enumerate() {
            model.add_interval(IntervalVar::within_horizon(
                Self::interval_name(index),
                job.processing_time,
                horizon,
            ));
        }

        for machine in self.machines {
            let on_machine: Vec<String> = self
                .jobs
                .iter()
                .enumerate()
                .filter(|(_, job)| job.machine_id == machine.id)
                .map(|(index, _)| Self::interval_name(index))
                .collect();
            if !on_machine.is_empty() {
                model.add_no_overlap(on_machine);
            }
        }

        model
    }

    /// Validates the input, solves the model and decodes the result.
    pub fn solve<S: CpSolver>(&self, solver: &S) -> Result<(Schedule, CpSolution), SchedulerError> {
        validate_input(self.jobs, self.machines)?;

        let model = self.build();
        let solution = solver.solve(&model)?;
        let schedule = self.decode_solution(&solution)?;

        info!(
            solver = solver.name(),
            makespan = schedule.makespan(),
            optimal = solution.is_optimal(),
            "exact schedule built"
        );
        Ok((schedule, solution))
    }

    /// Decodes a solution into a schedule sorted by start time.
    fn decode_solution(&self, solution: &CpSolution) -> Result<Schedule, ExactError> {
        let mut schedule = Schedule::new();

        for (index, job) in self.jobs.iter().enumerate() {
            let name = Self::interval_name(index);
            let placed = solution.intervals.get(&name).ok_or_else(|| {
                ExactError::NoSolution(format!("solver left interval '{name}' unassigned"))
            })?;
            schedule.add_assignment(Assignment::new(
                index,
                job.id.clone(),
                job.machine_id,
                placed.start,
                placed.end,
            ));
        }

        schedule.sort_by_start();
        Ok(schedule)
    }
}
