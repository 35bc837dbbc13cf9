//! Strategy interface for best-first search.
//!
//! A strategy decides two things: the priority of a state on the frontier,
//! and whether a state whose signature was already seen may be admitted
//! again.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use super::state::{SearchNode, SearchProblem, Signature};

/// Priority of a state together with the values that produced it.
///
/// Lower `priority` = expanded sooner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Frontier key.
    pub priority: f64,
    /// Accumulated cost of the state.
    pub g: i64,
    /// Heuristic estimate.
    pub h: f64,
}

/// How repeated signatures are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// A signature is admitted at most once per run.
    NeverReopen,
    /// A signature is admitted again only with a strictly lower `g`; popped
    /// entries beaten by a later admission are dropped as stale.
    ImproveBestCost,
}

/// A best-first search strategy.
pub trait SearchStrategy: Debug {
    /// Display name, reported as the trace's `algorithm_name`.
    fn name(&self) -> &'static str;

    /// Evaluates a state. Must not depend on anything but the state and
    /// the problem.
    fn evaluate(&self, node: &SearchNode, problem: &SearchProblem<'_>) -> Evaluation;

    /// Duplicate-admission policy.
    fn duplicate_policy(&self) -> DuplicatePolicy;

    fn description(&self) -> &'static str {
        self.name()
    }

    /// Whether the priority is `g + h`. Trace entries then carry all three
    /// values instead of a single heuristic.
    fn reports_path_cost(&self) -> bool {
        false
    }
}

/// Per-run bookkeeping behind a [`DuplicatePolicy`].
#[derive(Debug)]
pub(crate) enum DuplicateTable {
    Seen(HashSet<Signature>),
    BestCost(HashMap<Signature, i64>),
}

impl DuplicateTable {
    pub(crate) fn for_policy(policy: DuplicatePolicy) -> Self {
        match policy {
            DuplicatePolicy::NeverReopen => Self::Seen(HashSet::new()),
            DuplicatePolicy::ImproveBestCost => Self::BestCost(HashMap::new()),
        }
    }

    /// Records `signature` at cost `g` if the policy admits it.
    pub(crate) fn admit(&mut self, signature: Signature, g: i64) -> bool {
        match self {
            Self::Seen(seen) => seen.insert(signature),
            Self::BestCost(best) => match best.get(&signature) {
                Some(&known) if known <= g => false,
                _ => {
                    best.insert(signature, g);
                    true
                }
            },
        }
    }

    /// Whether a popped entry has been superseded by a cheaper one.
    pub(crate) fn is_stale(&self, signature: &Signature, g: i64) -> bool {
        match self {
            Self::Seen(_) => false,
            Self::BestCost(best) => best.get(signature).is_some_and(|&known| known < g),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Seen(seen) => seen.len(),
            Self::BestCost(best) => best.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(jobs: &[usize]) -> Signature {
        let mut node = SearchNode::root(0);
        node.unscheduled = jobs.to_vec();
        node.signature()
    }

    #[test]
    fn test_never_reopen() {
        let mut table = DuplicateTable::for_policy(DuplicatePolicy::NeverReopen);
        assert!(table.admit(sig(&[1, 2]), 10));
        assert!(!table.admit(sig(&[1, 2]), 1));
        assert!(table.admit(sig(&[2]), 10));
        assert!(!table.is_stale(&sig(&[1, 2]), 100));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_improve_best_cost_requires_strict_improvement() {
        let mut table = DuplicateTable::for_policy(DuplicatePolicy::ImproveBestCost);
        assert!(table.admit(sig(&[1]), 10));
        assert!(!table.admit(sig(&[1]), 10));
        assert!(!table.admit(sig(&[1]), 12));
        assert!(table.admit(sig(&[1]), 7));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_stale_detection() {
        let mut table = DuplicateTable::for_policy(DuplicatePolicy::ImproveBestCost);
        table.admit(sig(&[3]), 9);
        table.admit(sig(&[3]), 4);

        assert!(table.is_stale(&sig(&[3]), 9));
        assert!(!table.is_stale(&sig(&[3]), 4));
        assert!(!table.is_stale(&sig(&[5]), 4));
    }
}
