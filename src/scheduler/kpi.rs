//! Schedule quality metrics (KPIs).
//!
//! Summarizes a completed schedule against its input jobs and machines.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Total processing | Sum of job processing times |
//! | Busy time | Scheduled processing per machine |
//! | Utilization | Busy time / makespan, per machine |
//! | Avg Utilization | Mean over configured machines |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{total_processing_time, Job, Machine, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleKpi {
    pub makespan: i64,
    /// Sum of processing times of the input jobs.
    pub total_processing_time: i64,
    pub num_jobs: usize,
    pub num_machines: usize,
    /// Scheduled processing time per machine id. Idle machines map to 0.
    pub busy_time_by_machine: BTreeMap<u32, i64>,
    /// Busy time over makespan per machine id (0.0..=1.0).
    pub utilization_by_machine: BTreeMap<u32, f64>,
    /// Mean utilization over all configured machines.
    pub avg_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its inputs.
    ///
    /// Machines without any assignment count as fully idle.
    pub fn calculate(schedule: &Schedule, jobs: &[Job], machines: &[Machine]) -> Self {
        let makespan = schedule.makespan();
        let scheduled = schedule.busy_time_by_machine();

        let mut busy_time_by_machine = BTreeMap::new();
        let mut utilization_by_machine = BTreeMap::new();
        for m in machines {
            let busy = scheduled.get(&m.id).copied().unwrap_or(0);
            let utilization = if makespan > 0 {
                busy as f64 / makespan as f64
            } else {
                0.0
            };
            busy_time_by_machine.insert(m.id, busy);
            utilization_by_machine.insert(m.id, utilization);
        }

        let avg_utilization = if utilization_by_machine.is_empty() {
            0.0
        } else {
            utilization_by_machine.values().sum::<f64>() / utilization_by_machine.len() as f64
        };

        Self {
            makespan,
            total_processing_time: total_processing_time(jobs),
            num_jobs: jobs.len(),
            num_machines: machines.len(),
            busy_time_by_machine,
            utilization_by_machine,
            avg_utilization,
        }
    }

    /// Whether every machine is at least `min_utilization` busy.
    pub fn meets_utilization(&self, min_utilization: f64) -> bool {
        self.utilization_by_machine
            .values()
            .all(|&u| u >= min_utilization)
    }
}
