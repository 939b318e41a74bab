pub mod dataset;

use crate::error::ParseError;
use dataset::Dataset;

/// Parse a json-server dataset from JSON.
pub fn from_json(input: &str) -> Result<Dataset, ParseError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Dataset::from_value(value)
}

/// Parse a dataset from YAML. The document must still be a mapping of
/// collection names to records.
pub fn from_yaml(input: &str) -> Result<Dataset, ParseError> {
    let value: serde_json::Value = serde_yaml_ng::from_str(input)?;
    Dataset::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_keeps_key_order() {
        let dataset = from_json(r#"{"zebras": [], "apples": {}, "mangos": []}"#).unwrap();
        let names: Vec<&str> = dataset.collections().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zebras", "apples", "mangos"]);
    }

    #[test]
    fn test_from_json_malformed() {
        let err = from_json(r#"{"posts": [ {"id": 1 ]}"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }

    #[test]
    fn test_from_json_rejects_array_root() {
        let err = from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ParseError::NotAnObject("array")));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = "posts:\n  - id: 1\n    title: hello\nprofile:\n  name: typicode\n";
        let dataset = from_yaml(yaml).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!(dataset.get("posts").unwrap().is_list());
        assert!(!dataset.get("profile").unwrap().is_list());
    }
}
