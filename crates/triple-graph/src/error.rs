//! Error types for triple ordering.

use crate::NodeId;
use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Result type for triple ordering operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which fixed-size buffer overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowKind {
    /// The sorted node buffer, sized to the adjacency list's key count.
    Nodes,
    /// The reassembled triple buffer, sized to the input triple count.
    Triples,
}

impl fmt::Display for OverflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nodes => f.write_str("nodes"),
            Self::Triples => f.write_str("triples"),
        }
    }
}

/// Errors that can occur while ordering triples.
#[derive(Error, Debug, Clone, Diagnostic)]
pub enum Error {
    /// A node is referenced as a neighbor but has no key in the adjacency list.
    #[error("node {node} doesn't exist in the graph")]
    #[diagnostic(
        code(rdfsort::triple_graph::dangling_node),
        help("Build the adjacency list with `build_adjacency` so every object is registered as a key")
    )]
    DanglingNode {
        /// The unregistered node.
        node: NodeId,
    },

    /// More entries were written than the result buffer declared.
    #[error("found more {what} than the {capacity} declared for the result buffer")]
    #[diagnostic(
        code(rdfsort::triple_graph::overflow),
        help("The adjacency list or recovery index is inconsistent with its input triples")
    )]
    Overflow {
        /// The buffer that overflowed.
        what: OverflowKind,
        /// Declared buffer size.
        capacity: usize,
    },

    /// Strict mode found a cycle.
    #[error("cycle detected in triple graph: {message}")]
    #[diagnostic(
        code(rdfsort::triple_graph::cycle_detected),
        help("Disable strict mode to linearize cyclic graphs")
    )]
    CycleDetected {
        /// Human-readable description of the cycle.
        message: String,
    },

    /// Node sorting failed while reassembling triples.
    #[error("error sorting the triples: {source}")]
    #[diagnostic(code(rdfsort::triple_graph::sort_failed))]
    SortFailed {
        /// The sorter error.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap a sorter error raised during triple reassembly.
    #[must_use]
    pub fn sort_failed(source: Self) -> Self {
        Self::SortFailed {
            source: Box::new(source),
        }
    }

    /// The innermost error, unwrapping any [`Error::SortFailed`] layers.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::SortFailed { source } => source.root_cause(),
            other => other,
        }
    }
}
