//! Absolute positioning of packed lines into drawable segments.

use core::ops::Range;

use crate::element::{Direction, FontWeight, TextAlign, TextElement};
use crate::layout::line_breaker::{Line, break_lines};
use crate::layout::style_run::resolve_style_runs;
use crate::layout::token::tokenize;
use crate::metrics::FontMetrics;

/// One positioned, single-style piece of text.
///
/// Within a line every segment shares the baseline: `y + ascent` is equal
/// across the line.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub width: f32,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub color: String,
    pub underline: bool,
    pub ascent: f32,
    pub descent: f32,
}

impl Segment {
    /// Baseline Y of this segment.
    pub fn baseline_y(&self) -> f32 {
        self.y + self.ascent
    }
}

/// Per-line summary retained alongside the flat segment list.
#[derive(Debug, Clone, PartialEq)]
pub struct LineInfo {
    /// Top Y of the line band.
    pub y: f32,
    /// Natural width of the line's content.
    pub width: f32,
    pub height: f32,
    pub ascent: f32,
    pub descent: f32,
    /// Indices into [`TextLayout::segments`] belonging to this line, in
    /// logical order.
    pub segments: Range<usize>,
}

/// Complete positioned layout for one text element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLayout {
    pub segments: Vec<Segment>,
    pub lines: Vec<LineInfo>,
    /// Container width all alignment was computed against.
    pub width: f32,
    /// Sum of line heights, or the element's explicit height if larger.
    pub height: f32,
}

impl TextLayout {
    /// Index of the line whose vertical band contains `y`.
    pub fn line_at_y(&self, y: f32) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| y >= line.y && y < line.y + line.height)
    }

    /// Segments of one line, in logical order.
    pub fn line_segments(&self, line_index: usize) -> &[Segment] {
        match self.lines.get(line_index) {
            Some(info) => &self.segments[info.segments.clone()],
            None => &[],
        }
    }

    /// Source text a line represents, reassembled in logical order.
    pub fn line_text(&self, line_index: usize) -> String {
        self.line_segments(line_index)
            .iter()
            .map(|s| s.text.as_str())
            .collect()
    }
}

/// Lay out a rich-text element into positioned segments.
///
/// Pure function of the element and the metrics provider; the element is
/// never mutated and repeated calls return identical geometry.
pub fn layout_text(element: &TextElement, metrics: &dyn FontMetrics) -> TextLayout {
    let runs = resolve_style_runs(element);
    let tokens = tokenize(&element.text, &runs, &element.font_family, metrics);
    let lines = break_lines(
        &tokens,
        element.wrap_budget(),
        element.font_size,
        &element.font_family,
        element.line_height,
        metrics,
    );
    position_lines(element, &lines)
}

fn position_lines(element: &TextElement, lines: &[Line]) -> TextLayout {
    let align = element.effective_text_align();
    let explicit_width = element.width.filter(|w| *w > 0.0);

    let container_width = match explicit_width {
        Some(w) => w,
        None if lines.is_empty() => 0.0,
        None => lines.iter().map(|l| l.width).fold(1.0, f32::max),
    };

    let mut segments = Vec::new();
    let mut infos = Vec::with_capacity(lines.len());
    let mut y = 0.0f32;

    for line in lines {
        let line_width = line.width.min(container_width);
        let start_x = match align {
            TextAlign::Left => 0.0,
            TextAlign::Center => ((container_width - line_width) / 2.0).max(0.0),
            TextAlign::Right => (container_width - line_width).max(0.0),
        };

        let first_segment = segments.len();
        let mut acc = 0.0f32;
        for seg in &line.segments {
            let x = match element.direction {
                // Logical order, placed right to left: the first logical
                // segment ends up rightmost.
                Direction::Rtl => start_x + (line_width - (acc + seg.width)),
                Direction::Ltr => start_x + acc,
            };
            segments.push(Segment {
                x,
                y: y + (line.ascent - seg.ascent),
                text: seg.text.clone(),
                width: seg.width,
                font_size: seg.font_size,
                font_weight: seg.font_weight,
                color: seg.color.clone(),
                underline: seg.underline,
                ascent: seg.ascent,
                descent: seg.descent,
            });
            acc += seg.width;
        }

        infos.push(LineInfo {
            y,
            width: line.width,
            height: line.height,
            ascent: line.ascent,
            descent: line.descent,
            segments: first_segment..segments.len(),
        });
        y += line.height;
    }

    TextLayout {
        segments,
        lines: infos,
        width: container_width,
        height: y.max(element.height.unwrap_or(0.0)),
    }
}
