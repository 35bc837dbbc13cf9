//! Validated scheduling entry points, wire types and KPI evaluation.
//!
//! # Flow
//!
//! `ScheduleRequest` (JSON) → jobs + machines → validation → best-first
//! search → `ScheduleResponse` (JSON) with the search trace attached.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes a finished schedule: makespan, total
//! processing, per-machine busy time and utilization.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod kpi;
mod request;
mod search;

pub use kpi::ScheduleKpi;
pub use request::{
    JobKey, JobSpec, ScheduleEntry, ScheduleRequest, ScheduleResponse, DEFAULT_MACHINE_COUNT,
};
pub use search::SearchScheduler;
