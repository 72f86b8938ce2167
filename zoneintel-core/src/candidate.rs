//! Candidate points of interest as supplied by the geodata collaborator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::geo::Point;

/// OSM-style free-form tags. Explicit key/value lookup: a missing key is
/// `None`, never an error. BTreeMap keeps iteration order deterministic,
/// which anchor tie-breaking depends on.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagMap(BTreeMap<String, String>);

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// True if the value under `key` equals `value`.
    pub fn has(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    /// True if any tag value equals `value`, regardless of key.
    pub fn has_value(&self, value: &str) -> bool {
        self.0.values().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A point of interest considered for anchor selection or texture
/// classification. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub point: Point,
    pub tags: TagMap,
}

impl Candidate {
    pub fn new(id: impl Into<String>, point: Point, tags: TagMap) -> Self {
        Self {
            id: id.into(),
            point,
            tags,
        }
    }

    /// Display name: `name` tag, falling back to the id.
    pub fn name(&self) -> &str {
        self.tags.get("name").unwrap_or(&self.id)
    }
}
