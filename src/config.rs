use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::parse::NumberLocale;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One injected row action button
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RowAction {
    /// Stable identifier written to `data-andes-action`
    pub id: String,
    /// Tooltip, also used as the accessible label
    pub tooltip: String,
    #[serde(default)]
    pub glyph: String,
}

impl RowAction {
    pub fn new(id: &str, tooltip: &str, glyph: &str) -> Self {
        Self { id: id.to_string(), tooltip: tooltip.to_string(), glyph: glyph.to_string() }
    }
}

/// Tooltips written on header sort controls
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SortLabels {
    pub ascending: String,
    pub descending: String,
}

impl Default for SortLabels {
    fn default() -> Self {
        Self { ascending: "ascending sort".to_string(), descending: "descending sort".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    pub locale: NumberLocale,
    /// `data-testid` values the host framework puts on table containers
    pub container_test_ids: Vec<String>,
    /// Header text of the column that receives action buttons
    pub actions_label: String,
    pub actions: Vec<RowAction>,
    pub sort_labels: SortLabels,
    pub scroll_tolerance_px: f64,
    /// Page sizes the host offers; non-positive entries are ignored
    pub page_sizes: Vec<i64>,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            container_test_ids: vec!["stDataFrameResizable".to_string(), "stTable".to_string()],
            actions_label: "Actions".to_string(),
            actions: vec![
                RowAction::new("view", "View", "👁"),
                RowAction::new("edit", "Edit", "✎"),
                RowAction::new("more", "More actions", "⋯"),
            ],
            sort_labels: SortLabels::default(),
            scroll_tolerance_px: 2.0,
            page_sizes: vec![25, 50, 100],
        }
    }
}

impl EnhancerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = EnhancerConfig::default();
        assert_eq!(config.actions_label, "Actions");
        assert_eq!(
            config.actions.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(),
            vec!["view", "edit", "more"]
        );
        assert_eq!(config.scroll_tolerance_px, 2.0);
        assert_eq!(config.locale.decimal_separator, ',');
        assert_eq!(config.page_sizes, vec![25, 50, 100]);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EnhancerConfig::from_toml_str(
            r#"
            actions_label = "Acciones"

            [locale]
            min_grouping_digits = 2
            "#,
        )
        .unwrap();

        assert_eq!(config.actions_label, "Acciones");
        assert_eq!(config.locale.min_grouping_digits, 2);
        assert_eq!(config.locale.grouping_separator, '.');
        assert_eq!(config.container_test_ids.len(), 2);
        assert_eq!(config.sort_labels, SortLabels::default());
    }

    #[test]
    fn test_custom_actions() {
        let config = EnhancerConfig::from_toml_str(
            r#"
            [[actions]]
            id = "open"
            tooltip = "Abrir"
            "#,
        )
        .unwrap();

        assert_eq!(config.actions, vec![RowAction::new("open", "Abrir", "")]);
    }

    #[test]
    fn test_page_sizes_from_toml() {
        let config = EnhancerConfig::from_toml_str("page_sizes = [10, 0, 20]").unwrap();
        assert_eq!(config.page_sizes, vec![10, 0, 20]);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = EnhancerConfig::from_toml_str("scroll_tolerance_px = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "container_test_ids = [\"stTable\"]").unwrap();
        writeln!(file, "scroll_tolerance_px = 4.0").unwrap();

        let config = EnhancerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.container_test_ids, vec!["stTable".to_string()]);
        assert_eq!(config.scroll_tolerance_px, 4.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EnhancerConfig::from_file(Path::new("/nonexistent/andes.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
