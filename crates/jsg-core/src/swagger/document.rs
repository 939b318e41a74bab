use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::PathItem;
use super::schema::{DEFINITIONS_PREFIX, Schema, SchemaOrRef};

pub const SWAGGER_VERSION: &str = "2.0";
pub const DEFAULT_HOST: &str = "localhost:3000";
pub const DEFAULT_TITLE: &str = "json-server api";
pub const DEFAULT_API_VERSION: &str = "1.0.0";
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
}

/// Top-level Swagger 2.0 document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDocument {
    pub swagger: String,

    pub info: Info,

    pub consumes: Vec<String>,

    pub produces: Vec<String>,

    pub host: String,

    pub schemes: Vec<String>,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default)]
    pub definitions: IndexMap<String, Schema>,
}

impl SwaggerDocument {
    /// The empty skeleton served from `host`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            swagger: SWAGGER_VERSION.to_string(),
            info: Info {
                title: DEFAULT_TITLE.to_string(),
                version: DEFAULT_API_VERSION.to_string(),
            },
            consumes: vec![JSON_MEDIA_TYPE.to_string()],
            produces: vec![JSON_MEDIA_TYPE.to_string()],
            host: host.into(),
            schemes: vec!["http".to_string()],
            paths: IndexMap::new(),
            definitions: IndexMap::new(),
        }
    }

    /// Every `$ref` in `paths` or `definitions` whose target is not a key of
    /// `definitions`, in document order, without duplicates.
    pub fn unresolved_refs(&self) -> Vec<String> {
        let mut refs = Vec::new();

        for item in self.paths.values() {
            for param in &item.parameters {
                if let Some(ref schema) = param.schema {
                    collect_refs(schema, &mut refs);
                }
            }
            for (_method, op) in item.operations() {
                for param in &op.parameters {
                    if let Some(ref schema) = param.schema {
                        collect_refs(schema, &mut refs);
                    }
                }
                for response in op.responses.values() {
                    if let Some(ref schema) = response.schema {
                        collect_refs(schema, &mut refs);
                    }
                }
            }
        }

        for schema in self.definitions.values() {
            collect_schema_refs(schema, &mut refs);
        }

        let mut unresolved: Vec<String> = Vec::new();
        for r in refs {
            let resolved = r
                .strip_prefix(DEFINITIONS_PREFIX)
                .is_some_and(|name| self.definitions.contains_key(name));
            if !resolved && !unresolved.contains(&r) {
                unresolved.push(r);
            }
        }
        unresolved
    }
}

fn collect_refs(schema: &SchemaOrRef, out: &mut Vec<String>) {
    match schema {
        SchemaOrRef::Ref { ref_path } => out.push(ref_path.clone()),
        SchemaOrRef::Schema(inner) => collect_schema_refs(inner, out),
    }
}

fn collect_schema_refs(schema: &Schema, out: &mut Vec<String>) {
    if let Some(ref properties) = schema.properties {
        for prop in properties.values() {
            collect_refs(prop, out);
        }
    }
    if let Some(ref items) = schema.items {
        collect_refs(items, out);
    }
}
