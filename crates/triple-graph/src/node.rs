//! Node arena and triple records.
//!
//! Nodes are identified by handle, never by value: inserting the same IRI
//! twice yields two distinct [`NodeId`]s. Every graph structure in this crate
//! is keyed by [`NodeId`], so edges are plain index pairs.

use std::fmt;
use std::ops::Index;

/// Stable handle to a node stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The arena index behind this handle.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

/// A literal value with optional datatype IRI or language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// Lexical form.
    pub lexical: String,
    /// Datatype IRI, if typed.
    pub datatype: Option<String>,
    /// Language tag, if language-tagged.
    pub language: Option<String>,
}

/// Contents of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Named resource.
    Iri(String),
    /// Anonymous node, labelled only for display.
    Blank(String),
    /// Literal value.
    Literal(Literal),
}

impl Node {
    /// Returns `true` for blank nodes.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        matches!(self, Self::Blank(_))
    }

    /// Returns `true` for literals.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// The IRI of a named resource.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::Blank(label) => write!(f, "_:{label}"),
            Self::Literal(Literal {
                lexical,
                datatype,
                language,
            }) => {
                write!(f, "{lexical:?}")?;
                if let Some(lang) = language {
                    write!(f, "@{lang}")?;
                } else if let Some(dt) = datatype {
                    write!(f, "^^<{dt}>")?;
                }
                Ok(())
            }
        }
    }
}

/// Owner of all nodes referenced by a triple set.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its fresh handle.
    pub fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Store a named resource.
    pub fn iri(&mut self, iri: impl Into<String>) -> NodeId {
        self.insert(Node::Iri(iri.into()))
    }

    /// Store a blank node with the given display label.
    pub fn blank(&mut self, label: impl Into<String>) -> NodeId {
        self.insert(Node::Blank(label.into()))
    }

    /// Store a plain literal.
    pub fn literal(&mut self, lexical: impl Into<String>) -> NodeId {
        self.insert(Node::Literal(Literal {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }))
    }

    /// Store a typed literal.
    pub fn typed_literal(
        &mut self,
        lexical: impl Into<String>,
        datatype: impl Into<String>,
    ) -> NodeId {
        self.insert(Node::Literal(Literal {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
            language: None,
        }))
    }

    /// Store a language-tagged literal.
    pub fn lang_literal(&mut self, lexical: impl Into<String>, language: impl Into<String>) -> NodeId {
        self.insert(Node::Literal(Literal {
            lexical: lexical.into(),
            datatype: None,
            language: Some(language.into()),
        }))
    }

    /// Look up a node by handle.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no nodes are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// A subject-predicate-object statement over arena handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject node.
    pub subject: NodeId,
    /// Predicate node.
    pub predicate: NodeId,
    /// Object node.
    pub object: NodeId,
}

impl Triple {
    /// Create a triple.
    #[must_use]
    pub const fn new(subject: NodeId, predicate: NodeId, object: NodeId) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.subject, self.predicate, self.object)
    }
}
