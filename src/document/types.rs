//! Document trait and attribute storage

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Allow-listed attribute storage shared by all document types
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFields {
    values: JsonObject,
}

impl DocumentFields {
    /// Keep the allow-listed entries of a raw record
    ///
    /// `_id`, when present, is stored under `id` and takes precedence over a
    /// plain `id` in the same record.
    pub fn from_record(allowed: &[&str], record: &JsonObject) -> Self {
        let mut values: JsonObject = record
            .iter()
            .filter(|(key, _)| allowed.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        if let Some(id) = record.get("_id") {
            values.insert("id".to_string(), id.clone());
        }

        Self { values }
    }

    /// Look up a stored value without allow-list checks
    pub(crate) fn raw(&self, key: &str) -> Option<&JsonValue> {
        self.values.get(key)
    }

    /// Number of stored attributes
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing was stored
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn as_object(&self) -> &JsonObject {
        &self.values
    }
}

/// A record type with a fixed set of readable attributes
pub trait Document: Sized + Clone + Send + Sync {
    /// Attribute names this document exposes
    const ATTRIBUTES: &'static [&'static str];

    /// Wrap already filtered fields
    fn from_fields(fields: DocumentFields) -> Self;

    /// The stored fields
    fn fields(&self) -> &DocumentFields;

    /// Build a document from one raw record
    ///
    /// Non-object records produce an empty document.
    fn from_record(record: &JsonValue) -> Self {
        let fields = match record.as_object() {
            Some(object) => DocumentFields::from_record(Self::ATTRIBUTES, object),
            None => DocumentFields::default(),
        };
        Self::from_fields(fields)
    }

    /// Read an attribute by name
    ///
    /// Fails when `key` is not on the allow-list, even if a value with that
    /// name happens to be stored. Returns `Ok(None)` for allowed attributes
    /// the server did not send.
    fn get(&self, key: &str) -> Result<Option<&JsonValue>> {
        if !Self::ATTRIBUTES.contains(&key) {
            return Err(Error::invalid_attribute(key));
        }
        Ok(self.fields().raw(key))
    }

    /// The allow-listed attributes as a JSON object
    fn as_map(&self) -> JsonObject {
        self.fields()
            .as_object()
            .iter()
            .filter(|(key, _)| Self::ATTRIBUTES.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// The document identifier, if one was returned
    fn id(&self) -> Option<&str> {
        self.fields().raw("id").and_then(JsonValue::as_str)
    }
}
