//! Single-hop parent lookup over a triple set.

use crate::{NodeId, Triple};
use std::collections::HashMap;

/// Maps every node to the subject that last pointed at it.
///
/// Subjects nobody points at are recorded with no parent. There is no union by
/// rank, no path compression and no cycle detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentMap {
    parents: HashMap<NodeId, Option<NodeId>>,
}

impl ParentMap {
    /// Build the parent map. Later triples overwrite earlier parents.
    #[must_use]
    pub fn from_triples(triples: &[Triple]) -> Self {
        let mut parents = HashMap::new();
        for triple in triples {
            parents.insert(triple.object, Some(triple.subject));
            parents.entry(triple.subject).or_insert(None);
        }
        Self { parents }
    }

    /// Parent of `node`, or `None` if it has no parent or is unknown.
    #[must_use]
    pub fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied().flatten()
    }

    /// Check if a node is recorded.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.parents.contains_key(&node)
    }

    /// Recorded nodes without a parent.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.parents
            .iter()
            .filter(|(_, parent)| parent.is_none())
            .map(|(node, _)| *node)
    }

    /// Number of recorded nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` if no nodes are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Build a [`ParentMap`] for `triples`.
#[must_use]
pub fn disjoint_set(triples: &[Triple]) -> ParentMap {
    ParentMap::from_triples(triples)
}
