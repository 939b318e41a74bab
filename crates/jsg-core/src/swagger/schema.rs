use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix shared by every reference into the document's `definitions`.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// A Swagger 2.0 `type` keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// A reference or inline schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

impl SchemaOrRef {
    /// Reference to a named entry in `definitions`.
    pub fn definition(name: &str) -> Self {
        SchemaOrRef::Ref {
            ref_path: format!("{DEFINITIONS_PREFIX}{name}"),
        }
    }

    /// Name of the referenced definition, if this is a local definitions ref.
    pub fn definition_name(&self) -> Option<&str> {
        match self {
            SchemaOrRef::Ref { ref_path } => ref_path.strip_prefix(DEFINITIONS_PREFIX),
            SchemaOrRef::Schema(_) => None,
        }
    }
}

impl From<Schema> for SchemaOrRef {
    fn from(schema: Schema) -> Self {
        SchemaOrRef::Schema(Box::new(schema))
    }
}

/// The subset of the Swagger 2.0 schema object produced by inference.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    // Object properties. `Some(empty)` still serializes as `{}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaOrRef>>,

    // Array items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaOrRef>>,
}

impl Schema {
    /// `{type: object, properties: {}}`
    pub fn object() -> Self {
        Self {
            schema_type: Some(SchemaType::Object),
            properties: Some(IndexMap::new()),
            ..Default::default()
        }
    }

    /// `{type: integer, format: int64}`
    pub fn int64() -> Self {
        Self::primitive(SchemaType::Integer, Some("int64"))
    }

    /// `{type: number, format: double}`
    pub fn double() -> Self {
        Self::primitive(SchemaType::Number, Some("double"))
    }

    /// `{type: string}`
    pub fn string() -> Self {
        Self::primitive(SchemaType::String, None)
    }

    /// `{type: array, items: <items>}`
    pub fn array_of(items: SchemaOrRef) -> Self {
        Self {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    fn primitive(schema_type: SchemaType, format: Option<&str>) -> Self {
        Self {
            schema_type: Some(schema_type),
            format: format.map(str::to_string),
            ..Default::default()
        }
    }

    /// Insert a property, creating the property map on first use.
    pub fn insert_property(&mut self, name: impl Into<String>, property: SchemaOrRef) {
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), property);
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&SchemaOrRef> {
        self.properties.as_ref()?.get(name)
    }
}
