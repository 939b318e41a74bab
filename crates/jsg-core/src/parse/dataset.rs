use serde_json::{Map, Value};

use crate::error::ParseError;

/// A parsed json-server dataset: collection name to records.
///
/// Collections iterate in the order their keys appear in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    root: Map<String, Value>,
}

impl Dataset {
    /// Wrap an already-parsed value. The root must be a JSON object.
    pub fn from_value(value: Value) -> Result<Self, ParseError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(ParseError::NotAnObject(value_kind(&other))),
        }
    }

    /// Iterate `(collection name, collection)` pairs in input order.
    pub fn collections(&self) -> impl Iterator<Item = (&str, Collection<'_>)> {
        self.root
            .iter()
            .map(|(name, value)| (name.as_str(), Collection::new(value)))
    }

    pub fn get(&self, name: &str) -> Option<Collection<'_>> {
        self.root.get(name).map(Collection::new)
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

/// The value stored under one top-level key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collection<'a> {
    /// An array of example records, exposed as a list resource.
    List(&'a [Value]),
    /// A single record, exposed as a singleton resource.
    Single(&'a Value),
}

impl<'a> Collection<'a> {
    pub fn new(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => Collection::List(items),
            other => Collection::Single(other),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Collection::List(_))
    }

    /// The record whose shape stands for the whole collection: the first
    /// element of a list, or the value itself. `None` for an empty list or a
    /// value that is not an object.
    pub fn exemplar(&self) -> Option<&'a Map<String, Value>> {
        let value = match self {
            Collection::List(items) => items.first()?,
            Collection::Single(value) => value,
        };
        value.as_object()
    }

    /// Kind of the raw exemplar value, for diagnostics.
    pub fn exemplar_kind(&self) -> &'static str {
        match self {
            Collection::List(items) => items.first().map_or("nothing", value_kind),
            Collection::Single(value) => value_kind(value),
        }
    }
}

/// Human-readable name of a JSON value's kind.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
