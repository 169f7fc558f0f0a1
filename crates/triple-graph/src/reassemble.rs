//! Rebuild an ordered triple sequence from sorted nodes.
//!
//! Triples are grouped by subject. Subject groups follow the node order
//! produced by the sorter, and each group keeps its input order.

use crate::{
    AdjacencyList, Error, NodeId, OverflowKind, RecoveryIndex, Result, SortFailure, SortOptions,
    SortedOrder, Triple, build_adjacency, ensure_acyclic, topological_sort_with,
};
use tracing::{debug, instrument};

/// Emit the triples of each node in `order`, using `recovery` to find them.
///
/// `triples` is the original input and only bounds the output size.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the recovery index yields more triples than
/// `triples` holds.
pub fn reassemble(
    triples: &[Triple],
    order: &[NodeId],
    recovery: &RecoveryIndex,
) -> Result<Vec<Triple>> {
    let capacity = triples.len();
    let mut sorted = Vec::with_capacity(capacity);

    for &subject in order {
        for triple in recovery.triples_for(subject) {
            if sorted.len() >= capacity {
                return Err(Error::Overflow {
                    what: OverflowKind::Triples,
                    capacity,
                });
            }
            sorted.push(*triple);
        }
    }

    Ok(sorted)
}

/// Order triples with default options.
///
/// # Errors
///
/// See [`TripleSorter::sort_triples`].
pub fn sort_triples(triples: &[Triple]) -> Result<Vec<Triple>> {
    TripleSorter::default().sort_triples(triples)
}

/// Orders triples so that nodes are described before they are referenced.
#[derive(Debug, Clone, Copy, Default)]
pub struct TripleSorter {
    options: SortOptions,
}

impl TripleSorter {
    /// Create a sorter with the given options.
    #[must_use]
    pub const fn new(options: SortOptions) -> Self {
        Self { options }
    }

    /// The options in use.
    #[must_use]
    pub const fn options(&self) -> &SortOptions {
        &self.options
    }

    /// Sort the nodes of an adjacency list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] in strict mode for cyclic graphs, and
    /// otherwise any error from [`topological_sort_with`].
    pub fn sort_nodes(&self, adjacency: &AdjacencyList) -> Result<SortedOrder> {
        if self.options.strict {
            ensure_acyclic(adjacency)?;
        }
        topological_sort_with(adjacency, self.options.traversal).map_err(SortFailure::into_error)
    }

    /// Reorder triples by reverse-postorder of their subjects.
    ///
    /// The output holds exactly the input triples, duplicates included.
    ///
    /// # Errors
    ///
    /// Sorter errors are wrapped in [`Error::SortFailed`].
    #[instrument(skip_all, fields(triples = triples.len(), strict = self.options.strict))]
    pub fn sort_triples(&self, triples: &[Triple]) -> Result<Vec<Triple>> {
        let (adjacency, recovery) = build_adjacency(triples);
        let order = self.sort_nodes(&adjacency).map_err(Error::sort_failed)?;
        let sorted = reassemble(triples, &order, &recovery)?;

        debug!(
            triples = sorted.len(),
            subjects = order.len(),
            "Reassembled sorted triples"
        );
        Ok(sorted)
    }
}
