//! Validation utilities for adjacency lists.
//!
//! Dangling neighbors make an adjacency list invalid. Cycles do not, the
//! sorter linearizes them, so they are only reported.

use crate::{AdjacencyList, Error};
use petgraph::algo::is_cyclic_directed;

/// Result of adjacency list validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the graph can be sorted (no dangling neighbors).
    pub is_valid: bool,
    /// Whether the graph contains at least one cycle.
    pub has_cycles: bool,
    /// List of validation errors, if any.
    pub errors: Vec<Error>,
}

impl ValidationResult {
    /// Create a valid result.
    #[must_use]
    pub fn valid(has_cycles: bool) -> Self {
        Self {
            is_valid: true,
            has_cycles,
            errors: vec![],
        }
    }

    /// Create an invalid result with errors.
    #[must_use]
    pub fn invalid(errors: Vec<Error>) -> Self {
        Self {
            is_valid: false,
            has_cycles: false,
            errors,
        }
    }
}

/// Validate the structure of an adjacency list.
///
/// Checks for:
/// - Neighbors that are not registered as keys
/// - Cycles (informational only)
#[must_use]
pub fn validate(adjacency: &AdjacencyList) -> ValidationResult {
    let errors: Vec<Error> = adjacency
        .dangling_neighbors()
        .into_iter()
        .map(|node| Error::DanglingNode { node })
        .collect();

    if !errors.is_empty() {
        return ValidationResult::invalid(errors);
    }

    match adjacency.to_digraph() {
        Ok(graph) => ValidationResult::valid(is_cyclic_directed(&graph)),
        Err(err) => ValidationResult::invalid(vec![err]),
    }
}
