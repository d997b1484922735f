//! Partial attribute records as stored in the metadata forest.
//!
//! A [`Record`] is untyped on purpose: it mirrors exactly what was written to
//! disk, so the validator can report unknown keys and mistyped values instead
//! of losing them during deserialization.

use std::collections::BTreeMap;
use std::collections::btree_map;

/// A storage value (text, number, boolean, list or nested table).
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Date/time literal, kept in its textual form.
    Datetime(String),
    Array(Vec<AttrValue>),
    Table(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    /// Short type label used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::String(_) => "string",
            AttrValue::Integer(_) => "integer",
            AttrValue::Float(_) => "float",
            AttrValue::Boolean(_) => "boolean",
            AttrValue::Datetime(_) => "datetime",
            AttrValue::Array(_) => "array",
            AttrValue::Table(_) => "table",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&BTreeMap<String, AttrValue>> {
        match self {
            AttrValue::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Boolean(value)
    }
}

/// Flat mapping of attribute keys to storage values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    attributes: BTreeMap<String, AttrValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.attributes.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, AttrValue> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The `name` attribute, when it is present and textual.
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(AttrValue::as_str)
    }

    /// Returns a new record holding `self` overridden by `other`.
    #[must_use]
    pub fn merged_with(&self, other: &Record) -> Record {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged.attributes.insert(key.clone(), value.clone());
        }
        merged
    }

    /// Keys defined in both records, in sorted order.
    pub fn shared_keys<'a>(&'a self, other: &'a Record) -> Vec<&'a str> {
        self.keys().filter(|key| other.contains_key(key)).collect()
    }
}

impl FromIterator<(String, AttrValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, AttrValue)>>(iter: T) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, AttrValue);
    type IntoIter = btree_map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = btree_map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), AttrValue::from(*v)))
            .collect()
    }

    #[test]
    fn merge_overrides_left_with_right() {
        let parent = record(&[("name", "Base"), ("license", "MIT")]);
        let child = record(&[("name", "Variant"), ("model_id", "v1")]);
        let merged = parent.merged_with(&child);
        assert_eq!(merged.name(), Some("Variant"));
        assert_eq!(merged.get("license"), Some(&AttrValue::from("MIT")));
        assert_eq!(merged.len(), 3);
        // Inputs are untouched.
        assert_eq!(parent.name(), Some("Base"));
    }

    #[test]
    fn shared_keys_are_sorted() {
        let left = record(&[("size", "7B"), ("license", "MIT"), ("name", "A")]);
        let right = record(&[("name", "B"), ("size", "1B"), ("license", "x")]);
        assert_eq!(left.shared_keys(&right), vec!["license", "name", "size"]);
    }
}
