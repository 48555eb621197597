//! Editor configuration

#[cfg(feature = "data-loading")]
use serde::Deserialize;

#[cfg(feature = "data-loading")]
use crate::utils::error::EditorResult;
use crate::core::render::StyleToggle;
use crate::data::constants::{
    COPY_FEEDBACK_MS, DEFAULT_COLS, DEFAULT_ROWS, EDIT_DEBOUNCE_MS, MAX_COLS, MAX_SURFACE_ROWS,
    MIN_COLS, MIN_SURFACE_ROWS,
};
#[cfg(feature = "data-loading")]
use crate::utils::error::EditorError;

// =============================================================================
// Editor Options
// =============================================================================

/// Options for an editor session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "data-loading", derive(Deserialize))]
#[cfg_attr(feature = "data-loading", serde(default, deny_unknown_fields))]
pub struct EditorConfig {
    /// Delay before a cell edit regenerates the output
    /// Default: 300
    pub debounce_ms: u64,

    /// How long the copy acknowledgment stays visible
    /// Default: 2000
    pub copy_feedback_ms: u64,

    /// Rows (header included) of the table created on bootstrap
    /// Default: 4
    pub default_rows: usize,

    /// Columns of the table created on bootstrap
    /// Default: 3
    pub default_cols: usize,

    /// Initial state of the bold-first-column toggle
    /// Default: false
    pub bold_first_column: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: EDIT_DEBOUNCE_MS,
            copy_feedback_ms: COPY_FEEDBACK_MS,
            default_rows: DEFAULT_ROWS,
            default_cols: DEFAULT_COLS,
            bold_first_column: false,
        }
    }
}

impl EditorConfig {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Regenerate on every edit without waiting (hosts without timers)
    pub fn immediate() -> Self {
        Self {
            debounce_ms: 0,
            ..Self::default()
        }
    }

    pub fn toggle(&self) -> StyleToggle {
        StyleToggle {
            bold_first_column: self.bold_first_column,
        }
    }

    /// Whether the bootstrap table fits the surface limits as given
    pub fn dimensions_in_range(&self) -> bool {
        (MIN_SURFACE_ROWS..=MAX_SURFACE_ROWS).contains(&self.default_rows)
            && (MIN_COLS..=MAX_COLS).contains(&self.default_cols)
    }

    /// Parse a TOML document; missing keys keep their defaults
    ///
    /// A bootstrap size outside the surface limits is rejected rather than
    /// silently clamped.
    #[cfg(feature = "data-loading")]
    pub fn from_toml_str(text: &str) -> EditorResult<Self> {
        let config: Self = toml::from_str(text)?;
        if !config.dimensions_in_range() {
            return Err(EditorError::config(format!(
                "default table {} x {} is outside {}..={} rows and {}..={} columns",
                config.default_rows,
                config.default_cols,
                MIN_SURFACE_ROWS,
                MAX_SURFACE_ROWS,
                MIN_COLS,
                MAX_COLS
            )));
        }
        Ok(config)
    }

    #[cfg(feature = "data-loading")]
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> EditorResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.copy_feedback_ms, 2000);
        assert_eq!((config.default_rows, config.default_cols), (4, 3));
        assert_eq!(config.toggle(), StyleToggle::default());
    }

    #[test]
    fn test_immediate_preset() {
        let config = EditorConfig::immediate();
        assert_eq!(config.debounce_ms, 0);
        assert_eq!(config.copy_feedback_ms, 2000);
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_from_toml_partial() {
        let config = EditorConfig::from_toml_str("debounce_ms = 120\nbold_first_column = true\n")
            .unwrap();
        assert_eq!(config.debounce_ms, 120);
        assert!(config.toggle().bold_first_column);
        assert_eq!(config.default_cols, 3);
    }

    #[test]
    fn test_default_dimensions_in_range() {
        assert!(EditorConfig::default().dimensions_in_range());
        let wide = EditorConfig {
            default_cols: 21,
            ..EditorConfig::default()
        };
        assert!(!wide.dimensions_in_range());
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_from_toml_rejects_oversized_table() {
        let err = EditorConfig::from_toml_str("default_rows = 80").unwrap_err();
        assert!(matches!(err, EditorError::Config { .. }));
        assert!(err.to_string().contains("80 x 3"));

        let err = EditorConfig::from_toml_str("default_cols = 0").unwrap_err();
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[cfg(feature = "data-loading")]
    #[test]
    fn test_from_toml_rejects_unknown_keys() {
        let err = EditorConfig::from_toml_str("debounce = 1").unwrap_err();
        assert!(err.to_string().contains("Config error"));
    }
}
