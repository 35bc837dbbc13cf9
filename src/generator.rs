//! Random problem instances.
//!
//! Draws job sets the way the interactive front-end seeds its demo tables:
//! processing times in `2..=20`, priorities in `1..=10`, and a uniformly
//! chosen target machine.

use rand::Rng;

use crate::models::{Job, Machine};

/// Shortest generated processing time.
pub const MIN_PROCESSING_TIME: i64 = 2;
/// Longest generated processing time.
pub const MAX_PROCESSING_TIME: i64 = 20;
/// Highest generated priority (lowest is 1).
pub const MAX_PRIORITY: i32 = 10;

/// Generates `job_count` jobs with ids `"1"..="job_count"` spread over
/// machines `1..=machine_count`.
///
/// Returns no jobs when `machine_count` is zero.
pub fn random_jobs<R: Rng>(rng: &mut R, job_count: usize, machine_count: u32) -> Vec<Job> {
    if machine_count == 0 {
        return Vec::new();
    }

    (1..=job_count)
        .map(|id| {
            Job::new(
                id.to_string(),
                rng.random_range(MIN_PROCESSING_TIME..=MAX_PROCESSING_TIME),
                rng.random_range(1..=machine_count),
            )
            .with_priority(rng.random_range(1..=MAX_PRIORITY))
        })
        .collect()
}

/// Random jobs together with machines `1..=machine_count`.
pub fn random_instance<R: Rng>(
    rng: &mut R,
    job_count: usize,
    machine_count: u32,
) -> (Vec<Job>, Vec<Machine>) {
    (
        random_jobs(rng, job_count, machine_count),
        Machine::numbered(machine_count),
    )
}
