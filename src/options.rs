//! Per-table options carried in `data-andes-options`

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("malformed options JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("options must be a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOptions {
    #[serde(default)]
    pub has_actions: bool,
    /// Leading rows to highlight; absent, zero or negative disables it
    #[serde(default)]
    pub highlight_top_rows: Option<i64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
    #[serde(default)]
    pub total_rows: Option<u64>,
}

impl TableOptions {
    /// Parse an options object. Unknown keys are ignored and a recognized key
    /// with the wrong type is dropped on its own, leaving the others intact.
    pub fn parse(blob: &str) -> Result<Self, OptionsError> {
        let value: Value = serde_json::from_str(blob)?;
        let Value::Object(map) = value else {
            return Err(OptionsError::NotAnObject);
        };

        let mut options = Self::default();
        if let Some(has_actions) = field(&map, "hasActions", Value::as_bool) {
            options.has_actions = has_actions;
        }
        options.highlight_top_rows = field(&map, "highlightTopRows", Value::as_i64);
        options.page = field(&map, "page", Value::as_u64);
        options.page_size = field(&map, "pageSize", Value::as_u64);
        options.total_rows = field(&map, "totalRows", Value::as_u64);
        Ok(options)
    }

    /// Read the attribute value, falling back to defaults on any failure
    pub fn from_attribute(blob: Option<&str>) -> Self {
        let Some(blob) = blob else {
            return Self::default();
        };
        match Self::parse(blob) {
            Ok(options) => options,
            Err(e) => {
                warn!(error = %e, "ignoring table options");
                Self::default()
            }
        }
    }

    /// Number of rows to highlight, with non-positive values meaning none
    pub fn highlight_count(&self) -> usize {
        self.highlight_top_rows
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(0)
    }
}

/// Read `key` with `read`; `null` and absent keys are `None`, wrong types
/// are logged and treated as absent
fn field<T>(map: &Map<String, Value>, key: &str, read: fn(&Value) -> Option<T>) -> Option<T> {
    let value = map.get(key).filter(|v| !v.is_null())?;
    let parsed = read(value);
    if parsed.is_none() {
        warn!(key, %value, "ignoring table option with unexpected type");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recognized_fields() {
        let options = TableOptions::parse(
            r#"{"page":2,"pageSize":25,"totalRows":140,"highlightTopRows":3,"hasActions":true,"extra":"x"}"#,
        )
        .unwrap();

        assert_eq!(
            options,
            TableOptions {
                has_actions: true,
                highlight_top_rows: Some(3),
                page: Some(2),
                page_size: Some(25),
                total_rows: Some(140),
            }
        );
    }

    #[test]
    fn test_null_highlight_is_absent() {
        let options = TableOptions::parse(r#"{"highlightTopRows":null}"#).unwrap();
        assert_eq!(options.highlight_top_rows, None);
        assert_eq!(options.highlight_count(), 0);
    }

    #[test]
    fn test_negative_highlight_is_zero() {
        let options = TableOptions::parse(r#"{"highlightTopRows":-4}"#).unwrap();
        assert_eq!(options.highlight_count(), 0);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        assert!(matches!(TableOptions::parse("{hasActions: true"), Err(OptionsError::Json(_))));
        assert_eq!(TableOptions::from_attribute(Some("{hasActions: true")), TableOptions::default());
    }

    #[test]
    fn test_non_object_falls_back() {
        assert!(matches!(TableOptions::parse("[1,2]"), Err(OptionsError::NotAnObject)));
        assert_eq!(TableOptions::from_attribute(Some("42")), TableOptions::default());
    }

    #[test]
    fn test_wrong_type_drops_only_that_key() {
        let options = TableOptions::from_attribute(Some(r#"{"hasActions":true,"highlightTopRows":1,"page":"2"}"#));

        assert!(options.has_actions);
        assert_eq!(options.highlight_top_rows, Some(1));
        assert_eq!(options.page, None);
    }

    #[test]
    fn test_wrong_typed_flag_keeps_pagination() {
        let options = TableOptions::parse(r#"{"hasActions":"yes","pageSize":-5,"totalRows":30}"#).unwrap();

        assert!(!options.has_actions);
        assert_eq!(options.page_size, None);
        assert_eq!(options.total_rows, Some(30));
    }

    #[test]
    fn test_missing_attribute_is_default() {
        assert_eq!(TableOptions::from_attribute(None), TableOptions::default());
    }
}
