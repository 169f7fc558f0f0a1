//! Graph builder for triple sets.
//!
//! Triples are the edges of a directed graph: a `(subject, predicate, object)`
//! statement is an edge from subject to object. This module builds the
//! adjacency list the sorter walks, plus a recovery index used to turn the
//! sorted nodes back into triples.

use crate::{Error, NodeId, Result, Triple};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use tracing::debug;

/// Mapping from each node to the objects it points to.
///
/// Every node present as a key is part of the graph. A neighbor that is not
/// itself a key is dangling and makes the sorter fail. Keys remember the order
/// in which they were first registered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    neighbors: HashMap<NodeId, Vec<NodeId>>,
    order: Vec<NodeId>,
}

impl AdjacencyList {
    /// Create an empty adjacency list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node as a key with no outgoing edges.
    ///
    /// Does nothing if the node is already registered.
    pub fn insert_node(&mut self, node: NodeId) {
        if !self.neighbors.contains_key(&node) {
            self.neighbors.insert(node, Vec::new());
            self.order.push(node);
        }
    }

    /// Append `to` to the neighbors of `from`, registering `from` if needed.
    ///
    /// `to` is not registered. Use [`AdjacencyList::insert_node`] for that.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.insert_node(from);
        if let Some(list) = self.neighbors.get_mut(&from) {
            list.push(to);
        }
    }

    /// Neighbors of a node, or `None` if the node is not a key.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> Option<&[NodeId]> {
        self.neighbors.get(&node).map(Vec::as_slice)
    }

    /// Check if a node is registered as a key.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.neighbors.contains_key(&node)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.values().map(Vec::len).sum()
    }

    /// Iterate over keys in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }

    /// Iterate over `(node, neighbors)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> {
        self.order
            .iter()
            .map(|node| (*node, self.neighbors.get(node).map_or(&[][..], Vec::as_slice)))
    }

    /// Neighbors that are not registered as keys, in edge order.
    #[must_use]
    pub fn dangling_neighbors(&self) -> Vec<NodeId> {
        let mut dangling = Vec::new();
        for (_, neighbors) in self.iter() {
            for &neighbor in neighbors {
                if !self.contains(neighbor) && !dangling.contains(&neighbor) {
                    dangling.push(neighbor);
                }
            }
        }
        dangling
    }

    /// Convert to a petgraph directed graph weighted by node handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DanglingNode`] for the first neighbor that is not a key.
    pub fn to_digraph(&self) -> Result<DiGraph<NodeId, ()>> {
        let mut graph = DiGraph::with_capacity(self.len(), self.edge_count());
        let mut index_of: HashMap<NodeId, NodeIndex> = HashMap::with_capacity(self.len());

        for node in self.nodes() {
            index_of.insert(node, graph.add_node(node));
        }

        for (node, neighbors) in self.iter() {
            let from = index_of[&node];
            for neighbor in neighbors {
                let to = index_of
                    .get(neighbor)
                    .copied()
                    .ok_or(Error::DanglingNode { node: *neighbor })?;
                graph.add_edge(from, to, ());
            }
        }

        Ok(graph)
    }
}

impl FromIterator<(NodeId, Vec<NodeId>)> for AdjacencyList {
    /// Collect `(node, neighbors)` entries. Neighbors are not registered.
    fn from_iter<I: IntoIterator<Item = (NodeId, Vec<NodeId>)>>(iter: I) -> Self {
        let mut adjacency = Self::new();
        for (node, neighbors) in iter {
            adjacency.insert_node(node);
            for neighbor in neighbors {
                adjacency.add_edge(node, neighbor);
            }
        }
        adjacency
    }
}

/// Mapping from each subject to the triples it is the subject of, in input order.
///
/// Built once alongside the [`AdjacencyList`] and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryIndex {
    by_subject: HashMap<NodeId, Vec<Triple>>,
}

impl RecoveryIndex {
    /// Triples with `subject` as their subject. Empty for sinks and unknown nodes.
    #[must_use]
    pub fn triples_for(&self, subject: NodeId) -> &[Triple] {
        self.by_subject.get(&subject).map_or(&[][..], Vec::as_slice)
    }

    /// Check if a node has an entry.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.by_subject.contains_key(&node)
    }

    /// Number of entries, including empty ones for sink nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_subject.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_subject.is_empty()
    }

    /// Total number of triples indexed.
    #[must_use]
    pub fn triple_count(&self) -> usize {
        self.by_subject.values().map(Vec::len).sum()
    }
}

/// Build the adjacency list and recovery index for a triple sequence.
///
/// For each triple the object is appended to the subject's neighbors and the
/// triple to the subject's recovery entry. Objects get an empty entry in both
/// structures so sink nodes are keys too. Duplicates are kept.
#[must_use]
pub fn build_adjacency(triples: &[Triple]) -> (AdjacencyList, RecoveryIndex) {
    let mut adjacency = AdjacencyList::new();
    let mut recovery = RecoveryIndex::default();

    for triple in triples {
        adjacency.add_edge(triple.subject, triple.object);
        recovery
            .by_subject
            .entry(triple.subject)
            .or_default()
            .push(*triple);

        adjacency.insert_node(triple.object);
        recovery.by_subject.entry(triple.object).or_default();
    }

    debug!(
        triples = triples.len(),
        nodes = adjacency.len(),
        "Built adjacency list"
    );

    (adjacency, recovery)
}
