//! Sorter configuration.

use serde::{Deserialize, Serialize};

/// How the depth-first traversal is executed.
///
/// Both modes visit nodes in the same order and produce the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Traversal {
    /// Recurse on the call stack. Depth is bounded by the longest simple path.
    Recursive,
    /// Walk an explicit work stack of `(node, next neighbor)` frames.
    #[default]
    Iterative,
}

/// Options for [`TripleSorter`](crate::TripleSorter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortOptions {
    /// Traversal execution mode.
    pub traversal: Traversal,
    /// Reject cyclic graphs instead of linearizing them.
    pub strict: bool,
}

impl SortOptions {
    /// Default options: iterative traversal, cycles tolerated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the traversal mode.
    #[must_use]
    pub const fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Enable or disable strict (cycle-rejecting) mode.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
