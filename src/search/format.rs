//! Conversion of a terminal search state into a caller-facing schedule.

use crate::models::{Assignment, Job, Schedule};

use super::state::{SearchNode, SearchProblem};

/// A schedule plus timed copies of the input jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSchedule {
    /// Placements sorted by start time.
    pub schedule: Schedule,
    /// Input jobs in input order, with start and end times filled in.
    pub jobs: Vec<Job>,
}

/// Formats the placements of `node`.
///
/// Entries are sorted ascending by start time; ties keep the order the
/// search placed them in. The caller's jobs are copied, never mutated.
pub fn format_schedule(problem: &SearchProblem<'_>, node: &SearchNode) -> FormattedSchedule {
    let mut jobs: Vec<Job> = problem.jobs().to_vec();
    let mut schedule = Schedule::new();

    for p in &node.scheduled {
        let job = &problem.jobs()[p.job];
        let end = p.start + job.processing_time;
        jobs[p.job] = job.placed_at(p.start);
        schedule.add_assignment(Assignment::new(
            p.job,
            job.id.clone(),
            problem.machine_id(p.machine),
            p.start,
            end,
        ));
    }

    schedule.sort_by_start();
    FormattedSchedule { schedule, jobs }
}
