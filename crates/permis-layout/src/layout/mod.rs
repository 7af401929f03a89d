//! Layout pipeline: style runs → tokens → lines → positioned geometry.
//!
//! A rich-text element flows through [`style_run`], [`token`],
//! [`line_breaker`] and [`text_layout`] in that order; a table element goes
//! straight to [`table`]. Everything is a pure function of its inputs.

pub mod hit_test;
pub mod line_breaker;
pub mod style_run;
pub mod table;
pub mod text_layout;
pub mod token;

pub use hit_test::CellHit;
pub use line_breaker::{Line, LineSegment, break_lines};
pub use style_run::{StyleRun, resolve_style_runs};
pub use table::{
    CellGeom, HeaderBand, HeaderCell, RowGeom, RuleSegment, TableBlock, TableLayout,
    derive_table_layout,
};
pub use text_layout::{LineInfo, Segment, TextLayout, layout_text};
pub use token::{Token, TokenKind, tokenize};
