//! Width-constrained line breaking with grapheme-level fallback.

use unicode_segmentation::UnicodeSegmentation;

use crate::element::FontWeight;
use crate::layout::token::{Token, TokenKind};
use crate::metrics::{AscentDescent, FontMetrics};

/// One unpositioned piece of a line, carrying its resolved style and the
/// metrics of that style.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub text: String,
    pub width: f32,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub color: String,
    pub underline: bool,
    pub ascent: f32,
    pub descent: f32,
    pub is_whitespace: bool,
}

/// A packed line: segments in logical order plus aggregate metrics.
///
/// `ascent`/`descent` are the maxima over all segments, floored at the base
/// style's metrics so empty lines keep the element's natural height;
/// `height = ceil((ascent + descent) * line_height)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub width: f32,
    pub height: f32,
    pub ascent: f32,
    pub descent: f32,
    pub segments: Vec<LineSegment>,
}

impl Line {
    /// Source text this line represents, in logical order.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

struct LineAccum {
    segments: Vec<LineSegment>,
    width: f32,
}

impl LineAccum {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
            width: 0.0,
        }
    }

    fn push(&mut self, seg: LineSegment) {
        self.width += seg.width;
        self.segments.push(seg);
    }

    /// Close the accumulated line. A wrap-forced close trims trailing
    /// whitespace segments so a break between words swallows the space.
    fn close(&mut self, trim_trailing_ws: bool, base: AscentDescent, line_height: f32) -> Line {
        let mut segments = std::mem::take(&mut self.segments);
        if trim_trailing_ws {
            while segments.last().is_some_and(|s| s.is_whitespace) {
                segments.pop();
            }
        }
        self.width = 0.0;

        let width = segments.iter().map(|s| s.width).sum();
        let ascent = segments
            .iter()
            .map(|s| s.ascent)
            .fold(base.ascent, f32::max);
        let descent = segments
            .iter()
            .map(|s| s.descent)
            .fold(base.descent, f32::max);
        Line {
            width,
            height: ((ascent + descent) * line_height).ceil(),
            ascent,
            descent,
            segments,
        }
    }
}

fn segment_from(token: &Token, text: String, width: f32, metrics: AscentDescent) -> LineSegment {
    LineSegment {
        text,
        width,
        font_size: token.font_size,
        font_weight: token.font_weight,
        color: token.color.clone(),
        underline: token.underline,
        ascent: metrics.ascent,
        descent: metrics.descent,
        is_whitespace: token.kind == TokenKind::Space,
    }
}

/// Pack tokens into lines under an optional width budget.
///
/// Rules, token by token:
/// - a newline closes the current line unconditionally, even when empty;
/// - a token that would overflow a non-empty line closes it first, and a
///   whitespace token is dropped instead of starting the continuation line;
/// - a token wider than the whole budget is split at grapheme boundaries,
///   never discarding characters;
/// - anything else is appended and the running width grows.
///
/// Empty input yields zero lines; a trailing unterminated line is closed
/// only when it holds segments.
pub fn break_lines(
    tokens: &[Token],
    budget: Option<f32>,
    base_font_size: f32,
    font_family: &str,
    line_height: f32,
    metrics: &dyn FontMetrics,
) -> Vec<Line> {
    let base = metrics.ascent_descent(base_font_size, font_family, FontWeight::Normal);
    let mut lines = Vec::new();
    let mut current = LineAccum::new();

    for token in tokens {
        if token.kind == TokenKind::Newline {
            lines.push(current.close(false, base, line_height));
            continue;
        }

        if let Some(limit) = budget {
            if current.width > 0.0 && current.width + token.width > limit {
                log::trace!("wrap break before {:?} at width {}", token.text, current.width);
                lines.push(current.close(true, base, line_height));
                if token.is_space() {
                    // The break consumed this separator.
                    continue;
                }
            }

            if token.width > limit {
                split_over_wide_token(
                    token,
                    limit,
                    font_family,
                    metrics,
                    &mut current,
                    &mut lines,
                    base,
                    line_height,
                );
                continue;
            }
        }

        let seg_metrics =
            metrics.ascent_descent(token.font_size, font_family, token.font_weight);
        current.push(segment_from(token, token.text.clone(), token.width, seg_metrics));
    }

    if !current.segments.is_empty() {
        lines.push(current.close(false, base, line_height));
    }

    lines
}

/// Grapheme-by-grapheme split of a token that cannot fit on any line.
///
/// Pieces are grown while they fit; when the next grapheme would overflow a
/// non-empty piece, the piece becomes a segment, the line is closed, and the
/// grapheme starts the next piece. The final piece stays on the open line.
#[allow(clippy::too_many_arguments)]
fn split_over_wide_token(
    token: &Token,
    limit: f32,
    font_family: &str,
    metrics: &dyn FontMetrics,
    current: &mut LineAccum,
    lines: &mut Vec<Line>,
    base: AscentDescent,
    line_height: f32,
) {
    let seg_metrics = metrics.ascent_descent(token.font_size, font_family, token.font_weight);
    let mut piece = String::new();
    let mut piece_width = 0.0f32;

    for grapheme in token.text.graphemes(true) {
        let w = metrics.measure_width(grapheme, token.font_size, font_family, token.font_weight);
        if piece_width + w > limit && !piece.is_empty() {
            current.push(segment_from(
                token,
                std::mem::take(&mut piece),
                piece_width,
                seg_metrics,
            ));
            lines.push(current.close(false, base, line_height));
            piece.push_str(grapheme);
            piece_width = w;
        } else {
            piece.push_str(grapheme);
            piece_width += w;
        }
    }

    if !piece.is_empty() {
        current.push(segment_from(token, piece, piece_width, seg_metrics));
    }
}
