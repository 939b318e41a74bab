use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::infer::DEFAULT_MAX_DEPTH;
use crate::swagger::document::DEFAULT_HOST;

/// Top-level project configuration loaded from `.jsg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JsgConfig {
    /// Host recorded verbatim in the generated document.
    pub host: String,
    /// json-server dataset to read.
    pub input: String,
    /// Where the generated document is written.
    pub output: String,
    pub format: OutputFormat,
    /// Maximum nesting depth of exemplar objects.
    pub max_depth: usize,
}

impl Default for JsgConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            input: "db.json".to_string(),
            output: "swagger.json".to_string(),
            format: OutputFormat::Json,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Serialization format of the generated document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".jsg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<JsgConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: JsgConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# jsg configuration
host: localhost:3000   # recorded as the document's host
input: db.json         # json-server dataset
output: swagger.json
format: json           # json | yaml
max_depth: 32          # maximum nesting of example objects
"#
}
