use serde::{Deserialize, Serialize};

use super::schema::SchemaOrRef;

/// A response definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaOrRef>,
}

impl Response {
    pub fn new(description: impl Into<String>, schema: SchemaOrRef) -> Self {
        Self {
            description: description.into(),
            schema: Some(schema),
        }
    }
}
