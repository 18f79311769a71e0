//! In-memory form of the configuration document.
//!
//! The document is kept as a raw JSON object rather than a typed struct so
//! that top-level keys this crate does not know about survive a
//! read-modify-write cycle untouched.

use super::error::{StoreError, StoreResult};
use serde_json::{Map, Value};
use std::path::Path;

/// Top-level key holding saved variables.
pub const VARIABLES_KEY: &str = "EnvironmentVariables";

/// A parsed configuration document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    root: Map<String, Value>,
}

impl ConfigDocument {
    /// Create an empty document (`{}`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from its JSON text.
    ///
    /// `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> StoreResult<Self> {
        let value: Value = serde_json::from_str(content).map_err(|e| StoreError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let root = match value {
            Value::Object(root) => root,
            other => {
                return Err(StoreError::invalid(
                    path,
                    format!("top level must be an object, found {}", json_kind(&other)),
                ))
            }
        };

        if let Some(section) = root.get(VARIABLES_KEY) {
            if !section.is_object() {
                return Err(StoreError::invalid(
                    path,
                    format!(
                        "'{}' must be an object, found {}",
                        VARIABLES_KEY,
                        json_kind(section)
                    ),
                ));
            }
        }

        Ok(Self { root })
    }

    /// Render the document as pretty-printed JSON with a trailing newline.
    pub fn to_json_string(&self) -> StoreResult<String> {
        let mut content = serde_json::to_string_pretty(&self.root)?;
        content.push('\n');
        Ok(content)
    }

    /// Look up a saved variable.
    ///
    /// Strings are returned as is; other values by their JSON text.
    /// A JSON `null` is a saved empty string, so it still shadows the
    /// environment for string lookups.
    pub fn variable(&self, name: &str) -> Option<String> {
        match self.variables()?.get(name)? {
            Value::Null => Some(String::new()),
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set or overwrite a saved variable, creating the section if needed.
    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables_mut()
            .insert(name.into(), Value::String(value.into()));
    }

    fn variables(&self) -> Option<&Map<String, Value>> {
        self.root.get(VARIABLES_KEY).and_then(Value::as_object)
    }

    fn variables_mut(&mut self) -> &mut Map<String, Value> {
        let section = self
            .root
            .entry(VARIABLES_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !section.is_object() {
            *section = Value::Object(Map::new());
        }
        section
            .as_object_mut()
            .expect("variables section is an object")
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(content: &str) -> StoreResult<ConfigDocument> {
        ConfigDocument::parse(content, Path::new("test.json"))
    }

    #[test]
    fn test_empty_object_has_no_variables() {
        let doc = parse("{}").unwrap();
        assert_eq!(doc.variable("ANY"), None);
        assert_eq!(doc, ConfigDocument::new());
    }

    #[test]
    fn test_reads_string_variable() {
        let doc = parse(r#"{"EnvironmentVariables": {"HOST": "db.local"}}"#).unwrap();
        assert_eq!(doc.variable("HOST"), Some("db.local".to_string()));
        assert_eq!(doc.variable("PORT"), None);
    }

    #[test]
    fn test_non_string_values_use_json_text() {
        let doc = parse(
            r#"{"EnvironmentVariables": {"PORT": 5432, "DEBUG": true, "EMPTY": null, "BLANK": ""}}"#,
        )
        .unwrap();
        assert_eq!(doc.variable("PORT"), Some("5432".to_string()));
        assert_eq!(doc.variable("DEBUG"), Some("true".to_string()));
        assert_eq!(doc.variable("EMPTY"), Some(String::new()));
        assert_eq!(doc.variable("BLANK"), Some(String::new()));
    }

    #[test]
    fn test_rejects_non_object_root() {
        let err = parse("[1, 2]").unwrap_err();
        assert!(matches!(err, StoreError::InvalidDocument { .. }));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_rejects_non_object_section() {
        let err = parse(r#"{"EnvironmentVariables": "oops"}"#).unwrap_err();
        assert!(matches!(err, StoreError::InvalidDocument { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = parse("{ not json").unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn test_set_variable_creates_section_and_keeps_other_keys() {
        let mut doc = parse(r#"{"Logging": {"Level": "Debug"}}"#).unwrap();
        doc.set_variable("HOST", "db.local");
        doc.set_variable("HOST", "db.remote");

        let written: Value = serde_json::from_str(&doc.to_json_string().unwrap()).unwrap();
        assert_eq!(
            written,
            json!({
                "Logging": {"Level": "Debug"},
                "EnvironmentVariables": {"HOST": "db.remote"}
            })
        );
    }

    #[test]
    fn test_serialized_form_ends_with_newline() {
        let content = ConfigDocument::new().to_json_string().unwrap();
        assert_eq!(content, "{}\n");
    }
}
