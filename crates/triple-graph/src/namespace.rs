//! Namespace abbreviation tables.
//!
//! A document root declares abbreviations such as
//! `rdf = "http://www.w3.org/1999/02/22-rdf-syntax-ns#"`. Writers need the
//! reverse direction to turn full IRIs back into compact `prefix:local` tags.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Declared abbreviations, `abbreviation -> namespace URI`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDefinition(BTreeMap<String, String>);

impl SchemaDefinition {
    /// Create an empty definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an abbreviation, replacing any previous URI for it.
    pub fn insert(&mut self, abbreviation: impl Into<String>, uri: impl Into<String>) {
        self.0.insert(abbreviation.into(), uri.into());
    }

    /// URI declared for an abbreviation.
    #[must_use]
    pub fn get(&self, abbreviation: &str) -> Option<&str> {
        self.0.get(abbreviation).map(String::as_str)
    }

    /// Iterate over `(abbreviation, uri)` pairs in abbreviation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(a, u)| (a.as_str(), u.as_str()))
    }

    /// Number of abbreviations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build the reverse lookup for this definition.
    #[must_use]
    pub fn invert(&self) -> NamespaceIndex {
        NamespaceIndex(invert_schema_definition(self))
    }
}

impl<A: Into<String>, U: Into<String>> FromIterator<(A, U)> for SchemaDefinition {
    fn from_iter<I: IntoIterator<Item = (A, U)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(a, u)| (a.into(), u.into()))
                .collect(),
        )
    }
}

/// Invert a schema definition into `namespace URI -> abbreviation`.
///
/// Leading and trailing `#` characters are trimmed from each URI. If two
/// abbreviations share a trimmed URI the later one in abbreviation order wins.
#[must_use]
pub fn invert_schema_definition(definition: &SchemaDefinition) -> HashMap<String, String> {
    definition
        .iter()
        .map(|(abbreviation, uri)| (uri.trim_matches('#').to_string(), abbreviation.to_string()))
        .collect()
}

/// Reverse namespace lookup used to compact IRIs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceIndex(HashMap<String, String>);

impl NamespaceIndex {
    /// Abbreviation for a namespace URI, with or without its trailing `#`.
    #[must_use]
    pub fn abbreviation(&self, namespace: &str) -> Option<&str> {
        self.0.get(namespace.trim_matches('#')).map(String::as_str)
    }

    /// Compact an IRI into `prefix:local`.
    ///
    /// The IRI is split after its last `#` or `/`. Returns `None` if the
    /// namespace is not declared or the local part is empty.
    #[must_use]
    pub fn abbreviate(&self, iri: &str) -> Option<String> {
        let split = iri.rfind(['#', '/'])? + 1;
        let (namespace, local) = iri.split_at(split);
        if local.is_empty() {
            return None;
        }
        let prefix = self.abbreviation(namespace)?;
        Some(format!("{prefix}:{local}"))
    }

    /// Number of namespaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no namespaces are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    const SPDX: &str = "http://spdx.org/rdf/terms#";

    #[test]
    fn test_invert_trims_hash() {
        let definition: SchemaDefinition = [("rdf", RDF), ("spdx", SPDX)].into_iter().collect();

        let inverted = invert_schema_definition(&definition);
        assert_eq!(inverted.len(), 2);
        assert_eq!(
            inverted.get("http://www.w3.org/1999/02/22-rdf-syntax-ns"),
            Some(&"rdf".to_string())
        );
        assert_eq!(
            inverted.get("http://spdx.org/rdf/terms"),
            Some(&"spdx".to_string())
        );
    }

    #[test]
    fn test_invert_empty() {
        assert!(invert_schema_definition(&SchemaDefinition::new()).is_empty());
    }

    #[test]
    fn test_shared_uri_last_abbreviation_wins() {
        let mut definition = SchemaDefinition::new();
        definition.insert("a", "http://example.org/ns#");
        definition.insert("b", "http://example.org/ns");

        let inverted = invert_schema_definition(&definition);
        assert_eq!(inverted.len(), 1);
        assert_eq!(inverted.get("http://example.org/ns"), Some(&"b".to_string()));
    }

    #[test]
    fn test_abbreviate() {
        let definition: SchemaDefinition = [("rdf", RDF), ("ex", "http://example.org/")]
            .into_iter()
            .collect();
        let index = definition.invert();

        assert_eq!(
            index.abbreviate("http://www.w3.org/1999/02/22-rdf-syntax-ns#type"),
            Some("rdf:type".to_string())
        );
        assert_eq!(
            index.abbreviate("http://example.org/Thing"),
            Some("ex:Thing".to_string())
        );
        assert_eq!(index.abbreviate("http://unknown.org/ns#x"), None);
        assert_eq!(index.abbreviate(RDF), None);
        assert_eq!(index.abbreviation(RDF), Some("rdf"));
    }

    #[test]
    fn test_schema_definition_serde() {
        let definition: SchemaDefinition =
            serde_json::from_str(&format!(r#"{{"rdf": "{RDF}"}}"#)).unwrap();
        assert_eq!(definition.get("rdf"), Some(RDF));
        assert_eq!(definition.len(), 1);

        let json = serde_json::to_string(&definition).unwrap();
        assert_eq!(json, format!(r#"{{"rdf":"{RDF}"}}"#));
    }
}
