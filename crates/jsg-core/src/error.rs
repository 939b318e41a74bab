use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("dataset root must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

#[derive(Debug, Error)]
pub enum InferError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("collection name must not be empty")]
    EmptyCollectionName,

    #[error("exemplar too deeply nested: {type_name} exceeds the maximum depth of {max_depth}")]
    ExemplarTooDeep { type_name: String, max_depth: usize },
}
