//! Partial-schedule search states and their arena.
//!
//! Every node of the search tree is stored once in a [`SearchTree`] and
//! referred to by [`NodeId`]. Parents are indices, so many children can share
//! an ancestor and frontier entries stay `Copy`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Job, Machine};
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};

/// Validated, index-based view of a sequencing problem.
///
/// Jobs and machines are addressed by position. Each job's machine is
/// resolved to a machine index once, up front.
#[derive(Debug, Clone)]
pub struct SearchProblem<'a> {
    jobs: &'a [Job],
    machines: &'a [Machine],
    job_machine: Vec<usize>,
}

impl<'a> SearchProblem<'a> {
    /// Validates the input and builds the index view.
    pub fn new(jobs: &'a [Job], machines: &'a [Machine]) -> Result<Self, Vec<ValidationError>> {
        validate_input(jobs, machines)?;

        let index_of: HashMap<u32, usize> = machines
            .iter()
            .enumerate()
            .map(|(index, m)| (m.id, index))
            .collect();

        let job_machine = jobs
            .iter()
            .map(|job| {
                index_of.get(&job.machine_id).copied().ok_or_else(|| {
                    ValidationError::new(
                        ValidationErrorKind::InvalidMachineReference,
                        format!("Job '{}' references unknown machine {}", job.id, job.machine_id),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| vec![e])?;

        Ok(Self {
            jobs,
            machines,
            job_machine,
        })
    }

    /// Input jobs, by index.
    pub fn jobs(&self) -> &'a [Job] {
        self.jobs
    }

    /// Configured machines, by index.
    pub fn machines(&self) -> &'a [Machine] {
        self.machines
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }

    /// Processing time of a job.
    #[inline]
    pub fn duration(&self, job: usize) -> i64 {
        self.jobs[job].processing_time
    }

    /// Machine index a job is bound to.
    #[inline]
    pub fn machine_of(&self, job: usize) -> usize {
        self.job_machine[job]
    }

    /// External identifier of a machine index.
    #[inline]
    pub fn machine_id(&self, machine: usize) -> u32 {
        self.machines[machine].id
    }
}

/// Arena index of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One scheduling decision: `job` starts at `start` on `machine`.
///
/// Serialized as a `[job, start, machine]` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, i64, usize)", into = "(usize, i64, usize)")]
pub struct Placement {
    /// Job index.
    pub job: usize,
    /// Start time.
    pub start: i64,
    /// Machine index.
    pub machine: usize,
}

impl From<(usize, i64, usize)> for Placement {
    fn from((job, start, machine): (usize, i64, usize)) -> Self {
        Self {
            job,
            start,
            machine,
        }
    }
}

impl From<Placement> for (usize, i64, usize) {
    fn from(p: Placement) -> Self {
        (p.job, p.start, p.machine)
    }
}

/// Duplicate-detection key: the set of jobs still to be scheduled.
///
/// With fixed machines and back-to-back placement, the remaining work (and
/// so every reachable outcome) depends only on which jobs remain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<usize>);

impl Signature {
    /// Remaining job indices, ascending.
    pub fn jobs(&self) -> &[usize] {
        &self.0
    }
}

/// Immutable partial schedule.
///
/// Invariant: `unscheduled` and the jobs in `scheduled` partition the job
/// index set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Placements in the order the search made them.
    pub scheduled: Vec<Placement>,
    /// Jobs not yet placed, ascending.
    pub unscheduled: Vec<usize>,
    pub parent: Option<NodeId>,
    /// Sum of processing times of scheduled jobs (`g`).
    pub cost: i64,
    /// Placement that produced this node from its parent.
    pub action: Option<Placement>,
}

impl SearchNode {
    /// The empty schedule over all jobs.
    pub fn root(job_count: usize) -> Self {
        Self {
            scheduled: Vec::new(),
            unscheduled: (0..job_count).collect(),
            parent: None,
            cost: 0,
            action: None,
        }
    }

    /// Time each machine becomes free, indexed by machine.
    pub fn machine_free_times(&self, problem: &SearchProblem<'_>) -> Vec<i64> {
        let mut free = vec![0_i64; problem.machine_count()];
        for p in &self.scheduled {
            let end = p.start + problem.duration(p.job);
            free[p.machine] = free[p.machine].max(end);
        }
        free
    }

    /// Latest end time among scheduled jobs, 0 if none.
    pub fn makespan(&self, problem: &SearchProblem<'_>) -> i64 {
        self.scheduled
            .iter()
            .map(|p| p.start + problem.duration(p.job))
            .max()
            .unwrap_or(0)
    }

    pub fn is_terminal(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// Number of placements made so far.
    pub fn depth(&self) -> usize {
        self.scheduled.len()
    }

    pub fn signature(&self) -> Signature {
        Signature(self.unscheduled.clone())
    }

    /// One successor per unscheduled job, in ascending job order.
    ///
    /// Each job starts at its machine's current free time, so every
    /// successor is feasible.
    pub fn successors(&self, id: NodeId, problem: &SearchProblem<'_>) -> Vec<SearchNode> {
        let free = self.machine_free_times(problem);

        self.unscheduled
            .iter()
            .map(|&job| {
                let machine = problem.machine_of(job);
                let action = Placement {
                    job,
                    start: free[machine],
                    machine,
                };

                let mut scheduled = Vec::with_capacity(self.scheduled.len() + 1);
                scheduled.extend_from_slice(&self.scheduled);
                scheduled.push(action);

                SearchNode {
                    scheduled,
                    unscheduled: self
                        .unscheduled
                        .iter()
                        .copied()
                        .filter(|&j| j != job)
                        .collect(),
                    parent: Some(id),
                    cost: self.cost + problem.duration(job),
                    action: Some(action),
                }
            })
            .collect()
    }
}

/// Arena owning every node created during one search run.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a node and returns its index.
    pub fn insert(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Successors of a stored node. They are not stored until admitted.
    pub fn expand(&self, id: NodeId, problem: &SearchProblem<'_>) -> Vec<SearchNode> {
        self.get(id).successors(id, problem)
    }

    /// Actions from the root down to `id`.
    pub fn path(&self, id: NodeId) -> Vec<Placement> {
        let mut actions = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id);
            if let Some(action) = node.action {
                actions.push(action);
            }
            current = node.parent;
        }
        actions.reverse();
        actions
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
