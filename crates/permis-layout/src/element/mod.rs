//! Element model for permit documents.
//!
//! Elements are plain value objects describing what to lay out; the engine
//! never mutates them. Serde derives use the camelCase field names of the
//! designer's document JSON so persisted documents deserialize directly.

pub mod table;
pub mod text;

pub use table::{Column, TableElement, TableHeader, TableRow};
pub use text::{StyleRange, TextElement};

use serde::{Deserialize, Serialize};

/// Writing direction of an element.
///
/// Directionality is a per-element flag; the engine does not perform
/// per-character bidi resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }
}

/// Horizontal alignment of text lines inside their container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Font weight for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Line wrapping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    /// Wrap at token boundaries inside the width budget, splitting
    /// over-wide tokens at grapheme boundaries.
    #[default]
    Word,
    /// No automatic wrapping; only explicit newlines break lines.
    None,
}
