//! permis-layout: document layout engine for permit designer documents.
//!
//! Turns abstract rich-text and table element descriptions into positioned
//! geometry (text segments, table cell rectangles) that a renderer can draw
//! and a hit-tester can resolve pointer events against. The engine is a pure,
//! synchronous computation: identical inputs always produce identical
//! geometry, and nothing here performs I/O.
//!
//! Text measurement is injected through the [`FontMetrics`] capability so the
//! engine can run against a real measurement backend or the deterministic
//! heuristic fallback used in tests.

pub mod duration;
pub mod element;
pub mod engine;
pub mod geometry;
pub mod layout;
pub mod metrics;

pub use element::{
    Column, Direction, FontWeight, StyleRange, TableElement, TableHeader, TableRow, TextAlign,
    TextElement, WrapMode,
};

pub use engine::{LayoutCache, LayoutEngine, content_hash};

pub use geometry::{Point, Rect};

pub use layout::{
    CellHit, Line, LineSegment, Segment, StyleRun, TableBlock, TableLayout, TextLayout, Token,
    TokenKind, derive_table_layout, layout_text,
};

pub use metrics::{AscentDescent, CachedMetrics, FontMetrics, HeuristicMetrics};

use core::fmt;

/// Errors that can occur while deriving layout geometry.
///
/// Malformed style ranges, widths and column definitions are corrected
/// locally (clamped, skipped or defaulted) and never surface here; the only
/// fatal input is a block capacity of zero, which would otherwise partition
/// a table into infinitely many blocks.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutError {
    /// Table block capacity must hold at least one row.
    #[error("rows_per_block must be at least 1 (got {0})")]
    InvalidRowsPerBlock(usize),
}

/// Convenient result alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

impl LayoutError {
    /// Stable machine-readable code, useful for FFI callers.
    pub fn code(&self) -> &'static str {
        match self {
            LayoutError::InvalidRowsPerBlock(_) => "invalid_rows_per_block",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ltr => write!(f, "ltr"),
            Direction::Rtl => write!(f, "rtl"),
        }
    }
}
