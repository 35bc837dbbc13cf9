//! Shared helpers for the integration suites.

#![allow(dead_code)]

pub mod fixtures;

use std::collections::HashMap;

use tracing_subscriber::EnvFilter;
use u_jobseq::models::{Job, Machine};

/// Routes library events to the test harness. `RUST_LOG=u_jobseq=debug`
/// shows every expansion.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Makespan of placing jobs back-to-back in the given global order.
pub fn makespan_of_order(jobs: &[Job], order: &[usize]) -> i64 {
    let mut free: HashMap<u32, i64> = HashMap::new();
    let mut makespan: i64 = 0;
    for &j in order {
        let slot = free.entry(jobs[j].machine_id).or_insert(0);
        *slot += jobs[j].processing_time;
        makespan = makespan.max(*slot);
    }
    makespan
}

/// Smallest makespan over every global job order.
pub fn brute_force_optimum(jobs: &[Job], _machines: &[Machine]) -> i64 {
    let mut order: Vec<usize> = (0..jobs.len()).collect();
    let mut best = makespan_of_order(jobs, &order);
    permute(&mut order, 0, &mut |perm| {
        best = best.min(makespan_of_order(jobs, perm));
    });
    best
}

fn permute(items: &mut [usize], k: usize, visit: &mut dyn FnMut(&[usize])) {
    if k == items.len() {
        visit(items);
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, visit);
        items.swap(k, i);
    }
}
