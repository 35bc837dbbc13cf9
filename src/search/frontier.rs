//! Priority frontier with deterministic tie-breaking.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::state::NodeId;

/// A frontier entry: lower `priority` pops first, then lower `sequence`.
///
/// `sequence` is the insertion counter, so entries with equal priority pop
/// in FIFO order.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub priority: f64,
    pub sequence: u64,
    pub node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    // Reversed: `BinaryHeap` is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue of search nodes.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
    peak_len: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a node and returns the insertion counter it was given.
    pub fn push(&mut self, priority: f64, node: NodeId) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            priority,
            sequence,
            node,
        });
        self.peak_len = self.peak_len.max(self.heap.len());
        sequence
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier reached.
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}
