use std::collections::HashMap;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// The structured form of a declaration's value.
///
/// Serializes untagged: a string, an array of strings, or an array of
/// nested values.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    /// A value with no parenthesized list, kept verbatim.
    Scalar(String),
    /// A flat `(a, b, c)` list.
    List(Vec<String>),
    /// A list whose items are themselves lists.
    NestedList(Vec<ResolvedValue>),
}

impl ResolvedValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            ResolvedValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, ResolvedValue::Scalar(_))
    }
}

impl From<&str> for ResolvedValue {
    fn from(value: &str) -> Self {
        ResolvedValue::Scalar(value.to_string())
    }
}

/// Insertion-ordered mapping from variable name to its resolved value.
///
/// Values are shared: the raw key and its camel-cased alias hold the same
/// `Arc`. Replacing an existing key keeps the key's original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    entries: Vec<(String, Arc<ResolvedValue>)>,
    index: HashMap<String, usize>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces `key`, returning the previous value if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: Arc<ResolvedValue>,
    ) -> Option<Arc<ResolvedValue>> {
        let key = key.into();
        if let Some(&slot) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&ResolvedValue> {
        self.get_shared(key).map(Arc::as_ref)
    }

    /// The shared handle stored under `key`.
    pub fn get_shared(&self, key: &str) -> Option<&Arc<ResolvedValue>> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }
}

impl Serialize for VariableMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value.as_ref())?;
        }
        map.end()
    }
}
