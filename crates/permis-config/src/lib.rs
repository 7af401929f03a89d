//! Permit designer configuration system
//!
//! This crate provides centralized configuration management for the permit
//! layout tools, loading settings from `permis.toml` as an alternative to
//! environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

use permis_layout::{Direction, TableElement, TextElement};

/// Main configuration structure for the permit layout tools
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PermisConfig {
    /// Text element defaults
    pub text: TextDefaults,
    /// Table element defaults
    pub table: TableDefaults,
}

/// Default styling applied to text elements that leave fields unset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextDefaults {
    /// Base font family for document text
    pub font_family: Option<String>,
    /// Base font size in pixels
    pub font_size: Option<f32>,
    /// Line height multiplier
    pub line_height: Option<f32>,
    /// Lay text out right-to-left by default
    pub rtl: bool,
}

/// Default styling applied to table elements that leave fields unset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDefaults {
    /// Uniform row height in pixels
    pub row_height: Option<f32>,
    /// Data rows per block when paginating horizontally
    pub rows_per_block: Option<usize>,
    /// Fill color of banded (zebra) rows
    pub alt_row_fill: Option<String>,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            font_family: None,
            font_size: None,
            line_height: None,
            rtl: true, // Permit documents are Arabic-first
        }
    }
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            row_height: None,
            rows_per_block: None,
            alt_row_fill: None,
        }
    }
}

impl PermisConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the permis.toml configuration file
    ///
    /// # Returns
    /// * `Ok(PermisConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (permis.toml in the
    /// current directory) or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("permis.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(family) = std::env::var("PERMIS_FONT_FAMILY") {
            self.text.font_family = Some(family);
        }
        if let Ok(val) = std::env::var("PERMIS_FONT_SIZE") {
            if let Ok(size) = val.parse::<f32>() {
                self.text.font_size = Some(size);
            }
        }
        if let Ok(val) = std::env::var("PERMIS_LINE_HEIGHT") {
            if let Ok(lh) = val.parse::<f32>() {
                self.text.line_height = Some(lh);
            }
        }
        if let Ok(val) = std::env::var("PERMIS_RTL") {
            self.text.rtl = val == "1" || val.eq_ignore_ascii_case("true");
        }

        if let Ok(val) = std::env::var("PERMIS_ROW_HEIGHT") {
            if let Ok(h) = val.parse::<f32>() {
                self.table.row_height = Some(h);
            }
        }
        if let Ok(val) = std::env::var("PERMIS_ROWS_PER_BLOCK") {
            if let Ok(n) = val.parse::<usize>() {
                self.table.rows_per_block = Some(n);
            }
        }
        if let Ok(fill) = std::env::var("PERMIS_ALT_ROW_FILL") {
            self.table.alt_row_fill = Some(fill);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from permis.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }

    /// Apply the configured text defaults to an element built with the
    /// crate-level defaults. Fields the element already customized (relative
    /// to [`TextElement::default`]) are left alone.
    pub fn apply_text_defaults(&self, mut element: TextElement) -> TextElement {
        let base = TextElement::default();
        if element.font_family == base.font_family {
            if let Some(family) = &self.text.font_family {
                element.font_family = family.clone();
            }
        }
        if element.font_size == base.font_size {
            if let Some(size) = self.text.font_size {
                element.font_size = size;
            }
        }
        if element.line_height == base.line_height {
            if let Some(lh) = self.text.line_height {
                element.line_height = lh;
            }
        }
        if element.direction == base.direction && self.text.rtl {
            element.direction = Direction::Rtl;
        }
        element
    }

    /// Apply the configured table defaults, same rules as
    /// [`apply_text_defaults`](Self::apply_text_defaults).
    pub fn apply_table_defaults(&self, mut element: TableElement) -> TableElement {
        let base = TableElement::default();
        if element.row_height == base.row_height {
            if let Some(h) = self.table.row_height {
                element.row_height = h;
            }
        }
        if element.rows_per_block == base.rows_per_block {
            if let Some(n) = self.table.rows_per_block {
                element.rows_per_block = n;
            }
        }
        if element.alt_row_fill == base.alt_row_fill {
            if let Some(fill) = &self.table.alt_row_fill {
                element.alt_row_fill = fill.clone();
            }
        }
        element
    }
}
