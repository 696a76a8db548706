//! Vault export documents.
//!
//! An export file is an open-ended JSON object with an `items` array plus
//! arbitrary top-level metadata (encryption parameters, folder definitions,
//! export timestamps). Only `items` is interpreted; every other field passes
//! through into the merged output unmodified and in its original position.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::VaultResult;

/// A record is an open-ended ordered map of field names to JSON values.
pub type Record = Map<String, Value>;

/// A parsed vault export file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaultDocument {
    fields: Map<String, Value>,
}

impl VaultDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> VaultResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document from a file.
    pub fn load(path: impl AsRef<Path>) -> VaultResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the document as pretty-printed JSON (2-space indent).
    pub fn to_json_pretty(&self) -> VaultResult<String> {
        Ok(serde_json::to_string_pretty(&self.fields)?)
    }

    /// Write the document to a file as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> VaultResult<()> {
        fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }

    /// The credential records under the `items` key.
    ///
    /// Extraction is best-effort: a missing or non-array `items` yields an
    /// empty collection, and non-object array entries are skipped.
    pub fn items(&self) -> Vec<Record> {
        self.fields
            .get("items")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of records under `items`.
    pub fn item_count(&self) -> usize {
        self.fields
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Clone the document with only `items` replaced by the given records.
    ///
    /// All other top-level fields survive verbatim, and an existing `items`
    /// key keeps its original position.
    pub fn with_items(&self, items: Vec<Record>) -> Self {
        let mut fields = self.fields.clone();
        let array = items.into_iter().map(Value::Object).collect();
        fields.insert("items".to_string(), Value::Array(array));
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_items_yields_empty() {
        let doc = VaultDocument::from_json(r#"{"encrypted": false}"#).unwrap();
        assert!(doc.items().is_empty());
        assert_eq!(doc.item_count(), 0);
    }

    #[test]
    fn test_items_extracted_in_order() {
        let doc = VaultDocument::from_json(
            r#"{"items": [{"name": "a"}, {"name": "b"}]}"#,
        )
        .unwrap();
        let items = doc.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "a");
        assert_eq!(items[1]["name"], "b");
    }

    #[test]
    fn test_non_object_items_skipped() {
        let doc = VaultDocument::from_json(r#"{"items": [{"name": "a"}, 42, "x"]}"#).unwrap();
        assert_eq!(doc.items().len(), 1);
        assert_eq!(doc.item_count(), 3);
    }

    #[test]
    fn test_with_items_preserves_metadata_and_order() {
        let doc = VaultDocument::from_json(
            r#"{"encrypted": false, "folders": [{"id": "f1"}], "items": [{"name": "a"}], "extra": 7}"#,
        )
        .unwrap();

        let replacement = vec![serde_json::json!({"name": "b"})
            .as_object()
            .cloned()
            .unwrap()];
        let merged = doc.with_items(replacement);

        let json = merged.to_json_pretty().unwrap();
        let folders_pos = json.find("folders").unwrap();
        let items_pos = json.find("items").unwrap();
        let extra_pos = json.find("extra").unwrap();
        // items stays between folders and extra, as in the base document
        assert!(folders_pos < items_pos && items_pos < extra_pos);

        assert_eq!(merged.item_count(), 1);
        assert_eq!(merged.items()[0]["name"], "b");
    }

    #[test]
    fn test_json_round_trip() {
        let source = r#"{"encrypted": false, "items": [{"name": "a", "custom": {"k": [1, 2]}}]}"#;
        let doc = VaultDocument::from_json(source).unwrap();
        let reparsed = VaultDocument::from_json(&doc.to_json_pretty().unwrap()).unwrap();
        assert_eq!(doc, reparsed);
    }
}
