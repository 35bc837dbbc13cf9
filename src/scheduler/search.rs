//! Validated entry point around the search engine.
//!
//! # Algorithm
//!
//! 1. Validate jobs and machines; reject with every problem found.
//! 2. Resolve machine indices and build the root state.
//! 3. Run the configured strategy to the first terminal state.
//! 4. Return the formatted schedule with its trace.

use tracing::warn;

use crate::config::{Algorithm, SearchConfig};
use crate::error::SchedulerError;
use crate::models::{Job, Machine};
use crate::search::{self, SearchOutcome, SearchProblem};
use crate::validation::ValidationError;

use super::request::{ScheduleRequest, ScheduleResponse};

/// Best-first search scheduler.
///
/// # Example
///
/// ```
/// use u_jobseq::config::{Algorithm, SearchConfig};
/// use u_jobseq::models::{Job, Machine};
/// use u_jobseq::scheduler::SearchScheduler;
///
/// let jobs = vec![
///     Job::new("1", 5, 1),
///     Job::new("2", 3, 2),
///     Job::new("3", 2, 1),
///     Job::new("4", 6, 2),
/// ];
/// let machines = Machine::numbered(2);
///
/// let scheduler = SearchScheduler::with_config(
///     SearchConfig::new().with_strategy(Algorithm::AStar),
/// );
/// let outcome = scheduler.schedule(&jobs, &machines).unwrap();
/// assert_eq!(outcome.makespan(), 9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchScheduler {
    config: SearchConfig,
}

impl SearchScheduler {
    /// Creates a GBFS scheduler with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Schedules `jobs` on `machines` with the configured strategy.
    pub fn schedule(
        &self,
        jobs: &[Job],
        machines: &[Machine],
    ) -> Result<SearchOutcome, SchedulerError> {
        self.schedule_with(self.config.strategy, jobs, machines)
    }

    /// Schedules a wire request. The request's `schedulerType` picks the
    /// strategy; budget and trace settings come from this scheduler.
    pub fn schedule_request(
        &self,
        request: &ScheduleRequest,
    ) -> Result<ScheduleResponse, SchedulerError> {
        let jobs = request.to_jobs().map_err(reject)?;
        let machines = request.to_machines();
        let outcome = self.schedule_with(request.scheduler_type, &jobs, &machines)?;
        Ok(ScheduleResponse::from_outcome(outcome, &jobs, &machines))
    }

    fn schedule_with(
        &self,
        strategy: Algorithm,
        jobs: &[Job],
        machines: &[Machine],
    ) -> Result<SearchOutcome, SchedulerError> {
        let problem = SearchProblem::new(jobs, machines).map_err(reject)?;

        let config = SearchConfig {
            strategy,
            ..self.config.clone()
        };
        Ok(search::search(&problem, &config)?)
    }
}

fn reject(errors: Vec<ValidationError>) -> SchedulerError {
    warn!(problems = errors.len(), "rejecting invalid scheduling input");
    SchedulerError::from(errors)
}
