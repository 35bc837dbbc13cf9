//! Crate-level error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failures of the best-first search loop.
///
/// Both variants indicate that no complete schedule was produced. A partial
/// schedule is never returned in their place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier emptied before a terminal state was popped.
    #[error("frontier exhausted after {nodes_expanded} expansions without a complete schedule")]
    FrontierExhausted { nodes_expanded: usize },

    /// The caller-imposed expansion budget ran out.
    #[error("expansion budget of {limit} nodes exhausted")]
    BudgetExhausted { limit: usize },
}

/// Failures of the exact (constraint model) scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExactError {
    /// The solver reported no feasible assignment.
    #[error("solver found no solution: {0}")]
    NoSolution(String),

    /// The model uses a construct the solver cannot handle.
    #[error("unsupported model: {0}")]
    UnsupportedModel(String),
}

/// Top-level error returned by the scheduling entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    /// Input rejected before any search state was built.
    #[error("invalid input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Exact(#[from] ExactError),
}

impl From<Vec<ValidationError>> for SchedulerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

impl SchedulerError {
    /// Validation errors, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
