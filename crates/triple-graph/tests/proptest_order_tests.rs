//! Property-based tests for triple ordering invariants.
//!
//! These tests verify the behavioral contracts of the sorter:
//! - The reassembled triples are a permutation of the input
//! - Triples sharing a subject stay contiguous and in input order
//! - Objects are ordered before their subjects in acyclic graphs
//! - Cyclic graphs still produce a total order of every node
//! - Recursive and iterative traversals agree

use proptest::prelude::*;
use rdfsort_triple_graph::{
    NodeId, SortOptions, Traversal, Triple, TripleSorter, build_adjacency, sort_triples,
    topological_sort_with,
};
use std::collections::{HashMap, HashSet};

// =============================================================================
// Strategies for generating test data
// =============================================================================

/// Predicates live above this offset so they never collide with graph nodes.
const PREDICATE_BASE: usize = 1_000;

/// Generate arbitrary triples over a small node pool. May contain cycles,
/// self loops and duplicates.
fn triples_strategy(max_nodes: usize, max_triples: usize) -> impl Strategy<Value = Vec<Triple>> {
    (1..=max_nodes).prop_flat_map(move |node_count| {
        proptest::collection::vec(
            (0..node_count, 0..4_usize, 0..node_count),
            0..=max_triples,
        )
        .prop_map(|edges| {
            edges
                .into_iter()
                .map(|(s, p, o)| Triple::new(NodeId(s), NodeId(PREDICATE_BASE + p), NodeId(o)))
                .collect()
        })
    })
}

/// Generate acyclic triples: every edge points from a lower to a higher index.
fn dag_triples_strategy(
    max_nodes: usize,
    max_triples: usize,
) -> impl Strategy<Value = Vec<Triple>> {
    (2..=max_nodes).prop_flat_map(move |node_count| {
        proptest::collection::vec(
            (0..node_count - 1, 1..node_count, 0..4_usize),
            0..=max_triples,
        )
        .prop_map(|edges| {
            edges
                .into_iter()
                .filter(|(s, o, _)| s < o)
                .map(|(s, o, p)| Triple::new(NodeId(s), NodeId(PREDICATE_BASE + p), NodeId(o)))
                .collect()
        })
    })
}

fn multiset(triples: &[Triple]) -> HashMap<Triple, usize> {
    let mut counts = HashMap::new();
    for triple in triples {
        *counts.entry(*triple).or_insert(0) += 1;
    }
    counts
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn sorted_triples_are_a_permutation(triples in triples_strategy(12, 40)) {
        let sorted = sort_triples(&triples).unwrap();
        prop_assert_eq!(sorted.len(), triples.len());
        prop_assert_eq!(multiset(&sorted), multiset(&triples));
    }

    #[test]
    fn subject_groups_are_contiguous_and_stable(triples in triples_strategy(12, 40)) {
        let sorted = sort_triples(&triples).unwrap();

        let mut finished: HashSet<NodeId> = HashSet::new();
        let mut current: Option<NodeId> = None;
        for triple in &sorted {
            if current != Some(triple.subject) {
                if let Some(previous) = current {
                    finished.insert(previous);
                }
                prop_assert!(!finished.contains(&triple.subject), "subject group split");
                current = Some(triple.subject);
            }
        }

        for subject in triples.iter().map(|t| t.subject) {
            let input: Vec<_> = triples.iter().filter(|t| t.subject == subject).collect();
            let output: Vec<_> = sorted.iter().filter(|t| t.subject == subject).collect();
            prop_assert_eq!(input, output);
        }
    }

    #[test]
    fn acyclic_objects_precede_subjects(triples in dag_triples_strategy(12, 40)) {
        let (adjacency, _) = build_adjacency(&triples);
        let order = topological_sort_with(&adjacency, Traversal::Iterative).unwrap();

        let position: HashMap<NodeId, usize> =
            order.iter().enumerate().map(|(i, node)| (*node, i)).collect();
        for triple in &triples {
            prop_assert!(position[&triple.object] < position[&triple.subject]);
        }
    }

    #[test]
    fn every_node_ordered_exactly_once(triples in triples_strategy(12, 40)) {
        let (adjacency, _) = build_adjacency(&triples);
        let order = topological_sort_with(&adjacency, Traversal::Iterative).unwrap();

        prop_assert_eq!(order.len(), adjacency.len());
        let unique: HashSet<NodeId> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());
        for node in adjacency.nodes() {
            prop_assert!(unique.contains(&node));
        }
    }

    #[test]
    fn traversal_modes_agree(triples in triples_strategy(12, 40)) {
        let (adjacency, _) = build_adjacency(&triples);
        let recursive = topological_sort_with(&adjacency, Traversal::Recursive).unwrap();
        let iterative = topological_sort_with(&adjacency, Traversal::Iterative).unwrap();
        prop_assert_eq!(recursive, iterative);
    }

    #[test]
    fn strict_mode_matches_default_on_dags(triples in dag_triples_strategy(12, 40)) {
        let strict = TripleSorter::new(SortOptions::new().strict(true));
        prop_assert_eq!(strict.sort_triples(&triples).unwrap(), sort_triples(&triples).unwrap());
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn cyclic_triples_sort_without_error() {
    let n: Vec<NodeId> = (0..5).map(NodeId).collect();
    let triples = [
        Triple::new(n[0], n[1], n[3]),
        Triple::new(n[0], n[2], n[3]),
        Triple::new(n[3], n[4], n[0]),
    ];

    let sorted = sort_triples(&triples).unwrap();
    assert_eq!(multiset(&sorted), multiset(&triples));
}

#[test]
fn strict_mode_rejects_cycles() {
    let triples = [
        Triple::new(NodeId(0), NodeId(PREDICATE_BASE), NodeId(1)),
        Triple::new(NodeId(1), NodeId(PREDICATE_BASE), NodeId(0)),
    ];

    let strict = TripleSorter::new(SortOptions::new().strict(true));
    assert!(strict.sort_triples(&triples).is_err());
    assert!(TripleSorter::default().sort_triples(&triples).is_ok());
}
