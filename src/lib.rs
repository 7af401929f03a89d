//! Permit document layout toolkit.
//!
//! Facade over the workspace crates: [`permis_layout`] computes positioned
//! geometry for rich-text and table elements, [`permis_config`] supplies
//! document-wide defaults, and [`articles`] turns predefined permit articles
//! into placeable text elements.

pub mod articles;

pub use permis_config::{PermisConfig, TableDefaults, TextDefaults};
pub use permis_layout::{
    CellHit, Column, Direction, FontMetrics, FontWeight, HeuristicMetrics, LayoutCache,
    LayoutEngine, LayoutError, Point, Rect, StyleRange, TableElement, TableHeader, TableLayout,
    TableRow, TextAlign, TextElement, TextLayout, WrapMode, content_hash, derive_table_layout,
    layout_text,
};

/// Engine wired to the deterministic fallback metrics.
///
/// Suitable for servers and tests where no real measurement backend exists;
/// interactive callers construct [`LayoutEngine`] around their own
/// [`FontMetrics`] implementation instead.
pub fn default_engine() -> LayoutEngine<HeuristicMetrics> {
    LayoutEngine::new(HeuristicMetrics)
}
