//! Search configuration.
//!
//! Deserializable from the same JSON the request carries, so callers can
//! keep run settings next to their job lists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::search::{AStar, Gbfs, SearchStrategy};

/// Available search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Greedy best-first search.
    #[default]
    Gbfs,
    /// A* with the per-machine completion bound.
    #[serde(rename = "astar")]
    AStar,
}

/// Catalog entry describing an algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Gbfs, Algorithm::AStar];

    /// Wire identifier (`"gbfs"` or `"astar"`).
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Gbfs => "gbfs",
            Algorithm::AStar => "astar",
        }
    }

    /// Catalog name.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Gbfs => "Greedy Best-First Search (GBFS)",
            Algorithm::AStar => "A* Search Algorithm",
        }
    }

    pub fn info(self) -> AlgorithmInfo {
        let description = match self {
            Algorithm::Gbfs => Gbfs.description(),
            Algorithm::AStar => AStar.description(),
        };
        let name = self.display_name();
        AlgorithmInfo {
            id: self.id(),
            name,
            description,
        }
    }

    /// Every algorithm, in listing order.
    pub fn catalog() -> Vec<AlgorithmInfo> {
        Self::ALL.iter().map(|a| a.info()).collect()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown algorithm identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm '{0}' (expected 'gbfs' or 'astar')")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gbfs" => Ok(Algorithm::Gbfs),
            "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Settings for one search run.
///
/// # Example
///
/// ```
/// use u_jobseq::config::{Algorithm, SearchConfig};
///
/// let config = SearchConfig::new()
///     .with_strategy(Algorithm::AStar)
///     .with_max_expansions(10_000);
/// assert_eq!(config.max_expansions, Some(10_000));
/// assert!(config.record_trace);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    pub strategy: Algorithm,
    /// Expansion budget; `None` is unlimited.
    pub max_expansions: Option<usize>,
    /// Keep one trace entry per expansion. Counters are kept regardless.
    pub record_trace: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Algorithm::Gbfs,
            max_expansions: None,
            record_trace: true,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: Algorithm) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_record_trace(mut self, enabled: bool) -> Self {
        self.record_trace = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_serde_ids() {
        assert_eq!(serde_json::to_string(&Algorithm::Gbfs).unwrap(), "\"gbfs\"");
        assert_eq!(serde_json::to_string(&Algorithm::AStar).unwrap(), "\"astar\"");
        let parsed: Algorithm = serde_json::from_str("\"astar\"").unwrap();
        assert_eq!(parsed, Algorithm::AStar);
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("GBFS".parse::<Algorithm>(), Ok(Algorithm::Gbfs));
        assert_eq!("a*".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!(
            "dfs".parse::<Algorithm>(),
            Err(UnknownAlgorithm("dfs".to_string()))
        );
    }

    #[test]
    fn test_catalog() {
        let catalog = Algorithm::catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id, "gbfs");
        assert_eq!(catalog[0].name, "Greedy Best-First Search (GBFS)");
        assert_eq!(catalog[1].id, "astar");
        assert_eq!(catalog[1].name, "A* Search Algorithm");
        assert!(catalog[1].description.contains("path cost"));
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: SearchConfig = serde_json::from_str(r#"{"maxExpansions": 50}"#).unwrap();
        assert_eq!(config.strategy, Algorithm::Gbfs);
        assert_eq!(config.max_expansions, Some(50));
        assert!(config.record_trace);
    }

    #[test]
    fn test_builder() {
        let config = SearchConfig::new()
            .with_strategy(Algorithm::AStar)
            .with_record_trace(false);
        assert_eq!(config.strategy, Algorithm::AStar);
        assert!(!config.record_trace);
        assert_eq!(config.max_expansions, None);
    }
}
