//! Registry record: the metadata of one catalogued ontology as a flat field map.
//!
//! A key that is absent, or present with an explicit `null`, reads as `None`.
//! Everything else is present, including the empty string. Booleans read as
//! `True`/`False`, the spelling the registry dashboard prints.

mod load;

pub use load::{collect_paths, load_path, parse_front_matter, split_front_matter};

use anyhow::{bail, Result};
use serde_json::Value;
use std::collections::BTreeMap;

pub const HOMEPAGE: &str = "homepage";
pub const DESCRIPTION: &str = "description";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<String, Option<String>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a present string field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), Some(value.into()));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.fields.insert(key.into(), value);
    }

    /// Field value, or `None` when the key is missing or null.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn homepage(&self) -> Option<&str> {
        self.get(HOMEPAGE)
    }

    pub fn description(&self) -> Option<&str> {
        self.get(DESCRIPTION)
    }

    /// `id` field if the record carries one (used in log lines).
    pub fn id(&self) -> Option<&str> {
        self.get("id")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a record from a parsed JSON/YAML document. The top level must be a mapping.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            bail!("record must be a mapping, got {}", kind_of(&value));
        };
        let fields = map
            .into_iter()
            .map(|(k, v)| (k, field_text(v)))
            .collect();
        Ok(Self { fields })
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let fields = iter
            .into_iter()
            .map(|(k, v)| (k.into(), Some(v.into())))
            .collect();
        Self { fields }
    }
}

fn field_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Number(n) => Some(n.to_string()),
        other @ (Value::Array(_) | Value::Object(_)) => Some(other.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
