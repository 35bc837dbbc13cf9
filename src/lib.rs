//! Job-to-machine sequencing by best-first search.
//!
//! Each job has a fixed processing time and a fixed target machine; the
//! search decides the order in which every machine runs its jobs, placing
//! each job back-to-back at its machine's current free time. Two strategies
//! share one search loop: greedy best-first (GBFS, fast, not optimal) and
//! A* (admissible completion bound, optimal makespan).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Machine`, `Schedule`, `Assignment`
//! - **`validation`**: Input integrity checks (ids, processing times, machine refs)
//! - **`search`**: Search state, frontier, strategies, loop, trace
//! - **`scheduler`**: Validated entry point, JSON request/response, KPIs
//! - **`exact`**: Constraint model, solver trait, exact disjunctive solver
//! - **`generator`**: Random instances
//! - **`config`**: Search settings and algorithm catalog
//! - **`error`**: Error types
//!
//! # Example
//!
//! ```
//! use u_jobseq::models::{Job, Machine};
//! use u_jobseq::scheduler::SearchScheduler;
//!
//! let jobs = vec![Job::new("1", 5, 1), Job::new("2", 3, 2)];
//! let outcome = SearchScheduler::new()
//!     .schedule(&jobs, &Machine::numbered(2))
//!     .unwrap();
//! assert_eq!(outcome.makespan(), 5);
//! ```
//!
//! # Logging
//!
//! Emits `tracing` events: one `info` per run start and finish, `debug` per
//! expansion, `error` when the frontier runs dry. No subscriber is
//! installed here.
//!
//! # References
//!
//! - Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//!   Determination of Minimum Cost Paths"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod exact;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod search;
pub mod validation;

pub use config::{Algorithm, SearchConfig};
pub use error::{ExactError, SchedulerError, SearchError};
