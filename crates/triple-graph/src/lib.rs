//! Cycle-tolerant topological ordering of RDF triples.
//!
//! Tree-shaped serializations such as RDF/XML nest the description of a node
//! inside the statement that references it. Before a writer can stream a
//! triple set it has to be linearized so that nested nodes are described in
//! document order. This crate builds a subject to object graph from the
//! triples, sorts its nodes in reverse-postorder and reassembles the triples
//! grouped by subject in that order.
//!
//! # Key Types
//!
//! - [`NodeArena`]: owns nodes and hands out identity handles ([`NodeId`])
//! - [`AdjacencyList`] and [`RecoveryIndex`]: built by [`build_adjacency`]
//! - [`TraversalContext`]: depth-first traversal state used by [`topological_sort`]
//! - [`TripleSorter`]: end-to-end ordering with [`SortOptions`]
//!
//! Cycles are valid input. A node is marked visited when first entered, so a
//! cyclic graph still yields a total order. Opt into [`SortOptions::strict`]
//! to reject cycles instead.
//!
//! # Example
//!
//! ```
//! use rdfsort_triple_graph::{NodeArena, Triple, sort_triples};
//!
//! let mut arena = NodeArena::new();
//! let doc = arena.iri("http://example.org/doc");
//! let creator = arena.iri("http://purl.org/dc/terms/creator");
//! let name = arena.iri("http://xmlns.com/foaf/0.1/name");
//! let person = arena.blank("person");
//! let alice = arena.literal("Alice");
//!
//! let triples = [
//!     Triple::new(doc, creator, person),
//!     Triple::new(person, name, alice),
//! ];
//!
//! let sorted = sort_triples(&triples)?;
//! assert_eq!(sorted, vec![triples[1], triples[0]]);
//! # Ok::<(), rdfsort_triple_graph::Error>(())
//! ```

mod adjacency;
mod ancestry;
mod error;
mod namespace;
mod node;
mod options;
mod reassemble;
mod sort;
mod validation;

pub use adjacency::{AdjacencyList, RecoveryIndex, build_adjacency};
pub use ancestry::{ParentMap, disjoint_set};
pub use error::{Error, OverflowKind, Result};
pub use namespace::{NamespaceIndex, SchemaDefinition, invert_schema_definition};
pub use node::{Literal, Node, NodeArena, NodeId, Triple};
pub use options::{SortOptions, Traversal};
pub use reassemble::{TripleSorter, reassemble, sort_triples};
pub use sort::{
    SortFailure, SortedOrder, TraversalContext, ensure_acyclic, topological_sort,
    topological_sort_with,
};
pub use validation::{ValidationResult, validate};
