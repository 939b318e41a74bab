use serde::{Deserialize, Serialize};

use super::schema::{SchemaOrRef, SchemaType};

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    FormData,
    Body,
}

/// A Swagger 2.0 parameter. Body parameters carry a `schema`, all others a
/// primitive `type`/`format`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "in")]
    pub location: ParameterLocation,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}

impl Parameter {
    /// A required body parameter holding an instance of `schema`.
    pub fn body(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: SchemaOrRef,
    ) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Body,
            description: Some(description.into()),
            required: true,
            param_type: None,
            format: None,
            schema: Some(schema),
        }
    }

    /// The `{id}` path parameter of an individual resource path.
    pub fn path_id() -> Self {
        Self {
            name: "id".to_string(),
            location: ParameterLocation::Path,
            description: None,
            required: true,
            param_type: Some(SchemaType::Integer),
            format: Some("int64".to_string()),
            schema: None,
        }
    }
}
