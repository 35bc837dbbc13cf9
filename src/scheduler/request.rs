//! JSON request and response shapes.
//!
//! Field names are camelCase, except inside `visualization`, which keeps
//! the snake_case keys of [`SearchTrace`]. A schedule entry is serialized
//! as a `[jobId, start, end, machine]` array.

use serde::{Deserialize, Serialize};

use crate::config::Algorithm;
use crate::models::{total_processing_time, Job, Machine, Schedule, DEFAULT_PRIORITY};
use crate::search::{SearchOutcome, SearchTrace};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Machine count used when a request names neither a count nor a list.
pub const DEFAULT_MACHINE_COUNT: u32 = 2;

/// Job identifier as it appears on the wire: a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobKey {
    Text(String),
    Number(i64),
}

impl JobKey {
    pub fn into_id(self) -> String {
        match self {
            JobKey::Text(s) => s,
            JobKey::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for JobKey {
    fn from(s: &str) -> Self {
        JobKey::Text(s.to_string())
    }
}

impl From<i64> for JobKey {
    fn from(n: i64) -> Self {
        JobKey::Number(n)
    }
}

/// One job in a request.
///
/// The id is optional and the machine signed so that a missing id or a
/// negative machine surfaces as a validation error rather than a parse
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    #[serde(default)]
    pub job_id: Option<JobKey>,
    pub processing_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// 1-based target machine.
    pub machine: i64,
}

impl JobSpec {
    pub fn new(job_id: impl Into<JobKey>, processing_time: i64, machine: u32) -> Self {
        Self {
            job_id: Some(job_id.into()),
            processing_time,
            priority: None,
            machine: i64::from(machine),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Converts to a [`Job`]. A missing id becomes an empty one, which
    /// validation reports. A machine outside the `u32` range is rejected
    /// here.
    pub fn to_job(&self) -> Result<Job, ValidationError> {
        let id = self
            .job_id
            .clone()
            .map(JobKey::into_id)
            .unwrap_or_default();
        let machine = u32::try_from(self.machine).map_err(|_| {
            ValidationError::new(
                ValidationErrorKind::InvalidMachineReference,
                format!("Job '{}' references unknown machine {}", id, self.machine),
            )
        })?;

        Ok(Job::new(id, self.processing_time, machine)
            .with_priority(self.priority.unwrap_or(DEFAULT_PRIORITY)))
    }
}

/// Scheduling request.
///
/// # Example
///
/// ```
/// use u_jobseq::config::Algorithm;
/// use u_jobseq::scheduler::ScheduleRequest;
///
/// let request = ScheduleRequest::from_json(
///     r#"{"jobs": [{"jobId": 1, "processingTime": 5, "machine": 1}],
///         "schedulerType": "astar"}"#,
/// ).unwrap();
/// assert_eq!(request.scheduler_type, Algorithm::AStar);
/// assert_eq!(request.to_machines().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub jobs: Vec<JobSpec>,
    #[serde(default = "default_machine_count")]
    pub num_machines: u32,
    /// Explicit machine ids; overrides `num_machines` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub machines: Option<Vec<u32>>,
    #[serde(default)]
    pub scheduler_type: Algorithm,
}

fn default_machine_count() -> u32 {
    DEFAULT_MACHINE_COUNT
}

impl ScheduleRequest {
    pub fn new(jobs: Vec<JobSpec>) -> Self {
        Self {
            jobs,
            num_machines: DEFAULT_MACHINE_COUNT,
            machines: None,
            scheduler_type: Algorithm::default(),
        }
    }

    pub fn with_num_machines(mut self, count: u32) -> Self {
        self.num_machines = count;
        self
    }

    pub fn with_machines(mut self, ids: Vec<u32>) -> Self {
        self.machines = Some(ids);
        self
    }

    pub fn with_scheduler_type(mut self, algorithm: Algorithm) -> Self {
        self.scheduler_type = algorithm;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Jobs in request order, or every job whose machine cannot exist.
    pub fn to_jobs(&self) -> Result<Vec<Job>, Vec<ValidationError>> {
        let mut jobs = Vec::with_capacity(self.jobs.len());
        let mut errors = Vec::new();
        for spec in &self.jobs {
            match spec.to_job() {
                Ok(job) => jobs.push(job),
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            Ok(jobs)
        } else {
            Err(errors)
        }
    }

    /// The explicit machine list, or machines `1..=num_machines`.
    pub fn to_machines(&self) -> Vec<Machine> {
        match &self.machines {
            Some(ids) => ids.iter().copied().map(Machine::new).collect(),
            None => Machine::numbered(self.num_machines),
        }
    }
}

/// One `[jobId, start, end, machine]` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry(pub String, pub i64, pub i64, pub u32);

/// Scheduling response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    /// Rows sorted by start time.
    pub schedule: Vec<ScheduleEntry>,
    pub makespan: i64,
    pub total_processing_time: i64,
    pub num_jobs: usize,
    pub num_machines: usize,
    pub visualization: SearchTrace,
}

impl ScheduleResponse {
    pub fn from_outcome(outcome: SearchOutcome, jobs: &[Job], machines: &[Machine]) -> Self {
        Self {
            schedule: entries(&outcome.schedule),
            makespan: outcome.makespan(),
            total_processing_time: total_processing_time(jobs),
            num_jobs: jobs.len(),
            num_machines: machines.len(),
            visualization: outcome.trace,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn entries(schedule: &Schedule) -> Vec<ScheduleEntry> {
    schedule
        .to_tuples()
        .into_iter()
        .map(|(id, start, end, machine)| ScheduleEntry(id, start, end, machine))
        .collect()
}
