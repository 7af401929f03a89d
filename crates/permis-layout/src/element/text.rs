//! Rich-text element description.

use serde::{Deserialize, Serialize};

use crate::element::{Direction, FontWeight, TextAlign, WrapMode};

/// An inline style override over a character range of the element text.
///
/// `start`/`end` are character indices (end exclusive). Ranges may overlap
/// arbitrarily and arrive unsorted; the run resolver clamps out-of-bounds
/// ranges and skips inverted ones instead of erroring.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleRange {
    pub start: usize,
    pub end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
}

impl StyleRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            ..Default::default()
        }
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn with_font_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = Some(font_weight);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }
}

/// A rich-text block to be laid out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextElement {
    /// Source text, possibly containing explicit newlines.
    pub text: String,
    /// Wrap budget in pixels. Unset or non-positive means unconstrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Explicit element height; layout height grows past it if needed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Base font size in pixels.
    pub font_size: f32,
    /// Base font family name.
    pub font_family: String,
    /// Base font weight.
    pub font_weight: FontWeight,
    /// Base text color (CSS-style string, opaque to the engine).
    pub color: String,
    /// Writing direction.
    pub direction: Direction,
    /// Alignment; when unset it follows the direction (right for RTL).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    /// Line height multiplier (>= 1).
    pub line_height: f32,
    /// Wrapping mode.
    pub wrap: WrapMode,
    /// Inline style overrides, possibly overlapping and unsorted.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style_ranges: Vec<StyleRange>,
}

impl Default for TextElement {
    fn default() -> Self {
        Self {
            text: String::new(),
            width: None,
            height: None,
            font_size: 20.0,
            font_family: "Arial".to_string(),
            font_weight: FontWeight::Normal,
            color: "#000000".to_string(),
            direction: Direction::Ltr,
            text_align: None,
            line_height: 1.2,
            wrap: WrapMode::Word,
            style_ranges: Vec::new(),
        }
    }
}

impl TextElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_style_ranges(mut self, ranges: Vec<StyleRange>) -> Self {
        self.style_ranges = ranges;
        self
    }

    /// Alignment actually used for positioning: the explicit value when set,
    /// otherwise right for RTL elements and left for LTR ones.
    pub fn effective_text_align(&self) -> TextAlign {
        self.text_align.unwrap_or(match self.direction {
            Direction::Rtl => TextAlign::Right,
            Direction::Ltr => TextAlign::Left,
        })
    }

    /// Number of characters in the element text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Wrap budget for the line breaker.
    ///
    /// Finite only when word wrapping is requested and a positive width is
    /// set; tiny positive widths are floored at 10px so a degenerate
    /// container still fits at least one narrow glyph per line.
    pub fn wrap_budget(&self) -> Option<f32> {
        match (self.wrap, self.width) {
            (WrapMode::Word, Some(w)) if w > 0.0 => Some(w.max(10.0)),
            _ => None,
        }
    }
}
