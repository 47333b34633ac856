use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::models::MetadataTag;

/// Tag kind routed to [`DerivedFacts::bundles`] instead of [`TagGroups`]
pub const BUNDLE_TAG_KIND: &str = "bundle";

/// Tag values grouped by kind
///
/// Kinds keep the order of their first occurrence and values keep input
/// order, duplicates included. Small enough that a linear scan beats hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagGroups {
    groups: Vec<(String, Vec<String>)>,
}

impl TagGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the group for `kind`, creating the group if needed
    pub fn push(&mut self, kind: &str, value: &str) {
        match self.groups.iter_mut().find(|(k, _)| k == kind) {
            Some((_, values)) => values.push(value.to_string()),
            None => self
                .groups
                .push((kind.to_string(), vec![value.to_string()])),
        }
    }

    pub fn get(&self, kind: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, values)| values.as_slice())
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(kind, _)| kind.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(kind, values)| (kind.as_str(), values.as_slice()))
    }

    /// Number of distinct kinds
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for TagGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (kind, values) in &self.groups {
            map.serialize_entry(kind, values)?;
        }
        map.end()
    }
}

/// Facts recomputed from `metadata.tags` on every successful parse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedFacts {
    pub bundles: Vec<String>,
    pub tags_by_kind: TagGroups,
}

impl DerivedFacts {
    /// Partition tags into bundles and per-kind groups
    ///
    /// Entries without both a kind and a value are skipped silently.
    pub fn from_tags(tags: &[MetadataTag]) -> Self {
        let mut facts = Self::default();
        for (kind, value) in tags.iter().filter_map(MetadataTag::pair) {
            if kind == BUNDLE_TAG_KIND {
                facts.bundles.push(value.to_string());
            } else {
                facts.tags_by_kind.push(kind, value);
            }
        }
        facts
    }
}
