//! Machine model.
//!
//! Machines carry no mutable state: occupancy is tracked by the search
//! state, not here.

use serde::{Deserialize, Serialize};

/// A machine that processes the jobs bound to it, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Machine {
    /// Machine identifier (1-based).
    pub id: u32,
}

impl Machine {
    /// Creates a machine with the given identifier.
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    /// Creates machines `1..=count`.
    pub fn numbered(count: u32) -> Vec<Self> {
        (1..=count).map(Self::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered() {
        let machines = Machine::numbered(3);
        assert_eq!(machines.len(), 3);
        assert_eq!(machines[0].id, 1);
        assert_eq!(machines[2].id, 3);
    }

    #[test]
    fn test_numbered_zero() {
        assert!(Machine::numbered(0).is_empty());
    }
}
