//! Cycle-tolerant topological sort over an [`AdjacencyList`].
//!
//! Nodes are emitted in reverse-postorder: a node is written only after every
//! node newly reached from it has been written, so sinks come first and the
//! nodes pointing at them later. A node is marked visited on entry, which means
//! a back edge into a node still being visited is skipped. Cycles therefore
//! yield some total order instead of an error.

use crate::{AdjacencyList, Error, NodeId, OverflowKind, Result, Traversal};
use petgraph::algo::is_cyclic_directed;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, instrument, trace};

/// Nodes in reverse-postorder, dependencies before dependents.
pub type SortedOrder = Vec<NodeId>;

/// A failed sort, carrying the nodes ordered before the failure.
#[derive(Debug, Clone, Error)]
#[error("{error} (after ordering {} nodes)", .partial.len())]
pub struct SortFailure {
    /// What went wrong.
    pub error: Error,
    /// The filled prefix of the result buffer.
    pub partial: SortedOrder,
}

impl SortFailure {
    /// Discard the partial order and keep the error.
    #[must_use]
    pub fn into_error(self) -> Error {
        self.error
    }
}

impl From<SortFailure> for Error {
    fn from(failure: SortFailure) -> Self {
        failure.error
    }
}

/// Work stack frame for the iterative traversal.
struct Frame<'a> {
    node: NodeId,
    neighbors: &'a [NodeId],
    next: usize,
}

/// Traversal state for a single sort: visited set, write cursor and result buffer.
///
/// The buffer holds at most as many nodes as the adjacency list has keys.
pub struct TraversalContext<'a> {
    adjacency: &'a AdjacencyList,
    visited: HashSet<NodeId>,
    declared: usize,
    order: SortedOrder,
}

impl<'a> TraversalContext<'a> {
    /// Create a context sized to the adjacency list's key count.
    #[must_use]
    pub fn new(adjacency: &'a AdjacencyList) -> Self {
        Self::with_declared(adjacency, adjacency.len())
    }

    pub(crate) fn with_declared(adjacency: &'a AdjacencyList, declared: usize) -> Self {
        Self {
            adjacency,
            visited: HashSet::with_capacity(declared),
            declared,
            order: Vec::with_capacity(declared),
        }
    }

    /// Position where the next finished node will be written.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.order.len()
    }

    /// Nodes written so far.
    #[must_use]
    pub fn ordered(&self) -> &[NodeId] {
        &self.order
    }

    /// Check if a node has been visited.
    #[must_use]
    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.contains(&node)
    }

    /// Consume the context and return the nodes written so far.
    #[must_use]
    pub fn into_order(self) -> SortedOrder {
        self.order
    }

    fn neighbors_of(&self, node: NodeId) -> Result<&'a [NodeId]> {
        let adjacency: &'a AdjacencyList = self.adjacency;
        adjacency
            .neighbors(node)
            .ok_or(Error::DanglingNode { node })
    }

    fn emit(&mut self, node: NodeId) -> Result<()> {
        if self.order.len() >= self.declared {
            return Err(Error::Overflow {
                what: OverflowKind::Nodes,
                capacity: self.declared,
            });
        }
        trace!(%node, position = self.order.len(), "Node finished");
        self.order.push(node);
        Ok(())
    }

    /// Depth-first visit from `node` using the call stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DanglingNode`] if `node` or a node reached from it is
    /// not a key, and [`Error::Overflow`] if more nodes finish than declared.
    pub fn visit(&mut self, node: NodeId) -> Result<()> {
        let neighbors = self.neighbors_of(node)?;
        if !self.visited.insert(node) {
            return Ok(());
        }

        for &neighbor in neighbors {
            if !self.visited.contains(&neighbor) {
                self.visit(neighbor)?;
            }
        }

        self.emit(node)
    }

    /// Depth-first visit from `start` using an explicit work stack.
    ///
    /// Produces the same order and errors as [`TraversalContext::visit`]
    /// without growing the call stack.
    ///
    /// # Errors
    ///
    /// Same as [`TraversalContext::visit`].
    pub fn visit_iterative(&mut self, start: NodeId) -> Result<()> {
        let neighbors = self.neighbors_of(start)?;
        if !self.visited.insert(start) {
            return Ok(());
        }

        let mut stack = vec![Frame {
            node: start,
            neighbors,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if let Some(&neighbor) = frame.neighbors.get(frame.next) {
                frame.next += 1;
                if self.visited.contains(&neighbor) {
                    continue;
                }
                let neighbors = self.neighbors_of(neighbor)?;
                self.visited.insert(neighbor);
                stack.push(Frame {
                    node: neighbor,
                    neighbors,
                    next: 0,
                });
            } else {
                let node = frame.node;
                stack.pop();
                self.emit(node)?;
            }
        }

        Ok(())
    }

    /// Visit `node` with the given traversal mode.
    ///
    /// # Errors
    ///
    /// Same as [`TraversalContext::visit`].
    pub fn visit_with(&mut self, node: NodeId, traversal: Traversal) -> Result<()> {
        match traversal {
            Traversal::Recursive => self.visit(node),
            Traversal::Iterative => self.visit_iterative(node),
        }
    }
}

/// Sort all nodes of an adjacency list with the default traversal.
///
/// # Errors
///
/// See [`topological_sort_with`].
pub fn topological_sort(adjacency: &AdjacencyList) -> std::result::Result<SortedOrder, SortFailure> {
    topological_sort_with(adjacency, Traversal::default())
}

/// Sort all nodes of an adjacency list.
///
/// Every unvisited key, in registration order, starts a new depth-first
/// visit. Cycles are tolerated.
///
/// # Errors
///
/// Fails on the first dangling neighbor or buffer overflow. The nodes ordered
/// before the failure are returned in [`SortFailure::partial`].
#[instrument(skip_all, fields(nodes = adjacency.len(), traversal = ?traversal))]
pub fn topological_sort_with(
    adjacency: &AdjacencyList,
    traversal: Traversal,
) -> std::result::Result<SortedOrder, SortFailure> {
    let mut context = TraversalContext::new(adjacency);

    for node in adjacency.nodes() {
        if context.is_visited(node) {
            continue;
        }
        if let Err(error) = context.visit_with(node, traversal) {
            debug!(%error, ordered = context.cursor(), "Topological sort failed");
            return Err(SortFailure {
                error,
                partial: context.into_order(),
            });
        }
    }

    debug!(ordered = context.cursor(), "Sorted nodes");
    Ok(context.into_order())
}

/// Reject cyclic graphs.
///
/// # Errors
///
/// Returns [`Error::DanglingNode`] for a neighbor that is not a key, or
/// [`Error::CycleDetected`] if the graph contains a cycle.
pub fn ensure_acyclic(adjacency: &AdjacencyList) -> Result<()> {
    let graph = adjacency.to_digraph()?;
    if is_cyclic_directed(&graph) {
        return Err(Error::CycleDetected {
            message: "triple graph contains cycles".to_string(),
        });
    }
    Ok(())
}
