//! Test instances and schedule checks.

use std::collections::HashMap;

use u_jobseq::models::{Job, Machine, Schedule};

/// Four jobs on two machines with an optimal makespan of 9.
pub fn scenario() -> (Vec<Job>, Vec<Machine>) {
    (
        vec![
            Job::new("1", 5, 1),
            Job::new("2", 3, 2),
            Job::new("3", 2, 1),
            Job::new("4", 6, 2),
        ],
        Machine::numbered(2),
    )
}

/// Asserts the structural properties every returned schedule must have.
pub fn assert_valid_schedule(schedule: &Schedule, jobs: &[Job], machines: &[Machine]) {
    assert_eq!(schedule.assignment_count(), jobs.len());

    let mut seen: HashMap<usize, usize> = HashMap::new();
    for a in &schedule.assignments {
        *seen.entry(a.job_index).or_insert(0) += 1;
        let job = &jobs[a.job_index];
        assert_eq!(a.job_id, job.id);
        assert_eq!(a.machine_id, job.machine_id);
        assert_eq!(a.duration(), job.processing_time);
    }
    assert!(seen.values().all(|&count| count == 1), "a job was placed twice");
    assert_eq!(seen.len(), jobs.len());

    for m in machines {
        let mut on_machine = schedule.assignments_for_machine(m.id);
        on_machine.sort_by_key(|a| a.start_time);
        let mut previous_end = 0;
        for a in on_machine {
            assert!(
                a.start_time >= previous_end,
                "overlap on machine {}: {} starts at {} before {}",
                m.id,
                a.job_id,
                a.start_time,
                previous_end
            );
            previous_end = a.end_time;
        }
    }

    let max_end = schedule
        .assignments
        .iter()
        .map(|a| a.end_time)
        .max()
        .unwrap_or(0);
    assert_eq!(schedule.makespan(), max_end);
    assert!(schedule
        .assignments
        .windows(2)
        .all(|w| w[0].start_time <= w[1].start_time));
}
