//! Node types for dashcfg documents.
//!
//! A document is a strict tree of [`Node`]s:
//! - `Mapping` holds `key: value` entries in source order
//! - `Sequence` holds `- item` entries in source order
//! - `Scalar` holds one de-quoted string (no number or boolean typing)
//! - `Empty` means a nested block was expected but nothing was found at
//!   its indentation, which is not the same as an empty mapping

use indexmap::IndexMap;

/// A node in a parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `key: value` entries.
    Mapping(Mapping),
    /// `- item` entries.
    Sequence(Sequence),
    /// A single string value.
    Scalar(String),
    /// No block at the expected indentation.
    Empty,
}

/// An insertion-ordered mapping with unique keys.
///
/// Equality compares entries in order.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    /// Entries in source order. Keys are trimmed, never de-quoted.
    pub entries: IndexMap<String, Node>,
}

/// An ordered list of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    /// Items in source order.
    pub items: Vec<Node>,
}

impl Node {
    /// Create a scalar node.
    pub fn scalar(text: impl Into<String>) -> Self {
        Node::Scalar(text.into())
    }

    /// Create a sequence node from items.
    pub fn seq(items: Vec<Node>) -> Self {
        Node::Sequence(Sequence { items })
    }

    /// Create a sequence of scalars.
    pub fn scalars<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Node::seq(items.into_iter().map(Node::scalar).collect())
    }

    /// Create a mapping node from `(key, value)` pairs.
    ///
    /// Later duplicates replace earlier values.
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Node)>,
        K: Into<String>,
    {
        Node::Mapping(entries.into_iter().collect())
    }

    /// Short name of the variant, for messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Scalar(_) => "scalar",
            Node::Empty => "empty",
        }
    }

    /// Check if this is the `Empty` marker.
    pub fn is_empty_block(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Get as string (scalars only).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Get as mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Get as sequence.
    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Node::Sequence(s) => Some(s),
            _ => None,
        }
    }
}

impl Mapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get entry value by key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.get(key)
    }

    /// Get a scalar value, or `default` when the key is missing or not a scalar.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(Node::as_str).unwrap_or(default)
    }

    /// Get the scalar items of a sequence value.
    ///
    /// Missing keys, non-sequence values and non-scalar items all read as
    /// nothing.
    pub fn str_list(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .and_then(Node::as_sequence)
            .map(|seq| seq.iter().filter_map(Node::as_str).collect())
            .unwrap_or_default()
    }

    /// Get a nested mapping value.
    pub fn mapping(&self, key: &str) -> Option<&Mapping> {
        self.get(key).and_then(Node::as_mapping)
    }

    /// Iterate over entries as (key, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterate over keys in source order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Check if key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or update an entry.
    ///
    /// An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: Node) {
        self.entries.insert(key.into(), value);
    }

    /// Insert every entry of `other`, in order.
    pub fn merge(&mut self, other: Mapping) {
        self.entries.extend(other.entries);
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for Mapping {}

impl<K: Into<String>> FromIterator<(K, Node)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        let mut map = Mapping::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl Sequence {
    /// Get item by index.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.items.iter()
    }

    /// Push an item.
    pub fn push(&mut self, value: Node) {
        self.items.push(value);
    }
}

impl From<Mapping> for Node {
    fn from(map: Mapping) -> Self {
        Node::Mapping(map)
    }
}

impl From<Sequence> for Node {
    fn from(seq: Sequence) -> Self {
        Node::Sequence(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut map = Mapping::new();
        map.insert("a", Node::scalar("1"));
        map.insert("b", Node::scalar("2"));
        map.insert("a", Node::scalar("3"));

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.str_or("a", ""), "3");
    }

    #[test]
    fn test_merge() {
        let mut item: Mapping = [("name", Node::scalar("x"))].into_iter().collect();
        item.merge([("value", Node::scalar("1")), ("name", Node::scalar("y"))].into_iter().collect());

        assert_eq!(item.keys().collect::<Vec<_>>(), vec!["name", "value"]);
        assert_eq!(item.str_or("name", ""), "y");
    }

    #[test]
    fn test_equality_is_ordered() {
        let ab = Node::map([("a", Node::scalar("1")), ("b", Node::scalar("2"))]);
        let ba = Node::map([("b", Node::scalar("2")), ("a", Node::scalar("1"))]);
        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn test_insert_many_keys() {
        let mut map = Mapping::new();
        for i in 0..100_000 {
            map.insert(format!("k{i}"), Node::scalar(i.to_string()));
        }
        map.insert("k0", Node::scalar("last"));

        assert_eq!(map.len(), 100_000);
        assert_eq!(map.keys().next(), Some("k0"));
        assert_eq!(map.str_or("k0", ""), "last");
        assert!(map.contains_key("k99999"));
    }

    #[test]
    fn test_graceful_reads() {
        let map: Mapping = [
            ("title", Node::scalar("Gas")),
            ("authors", Node::scalars(["A", "B"])),
            ("mixed", Node::seq(vec![Node::scalar("x"), Node::map([("k", Node::scalar("v"))])])),
            ("nested", Node::Empty),
        ]
        .into_iter()
        .collect();

        assert_eq!(map.str_or("title", "Dashboard"), "Gas");
        assert_eq!(map.str_or("missing", "Dashboard"), "Dashboard");
        assert_eq!(map.str_or("authors", ""), "");
        assert_eq!(map.str_list("authors"), vec!["A", "B"]);
        assert_eq!(map.str_list("mixed"), vec!["x"]);
        assert!(map.str_list("title").is_empty());
        assert!(map.str_list("nested").is_empty());
        assert!(map.mapping("nested").is_none());
    }

    #[test]
    fn test_empty_is_not_an_empty_mapping() {
        assert_ne!(Node::Empty, Node::Mapping(Mapping::new()));
        assert_ne!(Node::Empty, Node::seq(Vec::new()));
        assert!(Node::Empty.is_empty_block());
        assert_eq!(Node::Empty.kind_name(), "empty");
    }
}
