//! Sequencing domain models.
//!
//! Provides the plain data types for describing a sequencing problem
//! (jobs bound to machines) and its solution (a schedule of placements).
//!
//! # Domain Mappings
//!
//! | u-jobseq | Manufacturing | Computing | Logistics |
//! |----------|--------------|-----------|-----------|
//! | Job | Order | Batch task | Shipment |
//! | Machine | Workstation | Worker node | Loading dock |
//! | Schedule | Production Plan | Run plan | Dock plan |

mod job;
mod machine;
mod schedule;

pub use job::{total_processing_time, Job, DEFAULT_PRIORITY};
pub use machine::Machine;
pub use schedule::{Assignment, Schedule};
