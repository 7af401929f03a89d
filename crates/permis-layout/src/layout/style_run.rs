//! Style range overlay.
//!
//! Flattens a set of possibly overlapping, unsorted [`StyleRange`] overrides
//! onto the element's base style, producing an ordered set of non-overlapping
//! runs that tiles `[0, len)` exactly. Interval splitting is O(ranges × runs);
//! fine for the handful of ranges a document element carries, degrades for
//! very large range counts.

use crate::element::{FontWeight, StyleRange, TextElement};

/// A maximal contiguous span of text sharing one resolved style.
///
/// `start`/`end` are character indices into the element text, end exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRun {
    pub start: usize,
    pub end: usize,
    pub font_size: f32,
    pub font_weight: FontWeight,
    pub color: String,
    pub underline: bool,
}

impl StyleRun {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Resolve an element's style ranges into a run list covering its text.
pub fn resolve_style_runs(element: &TextElement) -> Vec<StyleRun> {
    resolve(
        element.char_len(),
        element.font_size,
        element.font_weight,
        &element.color,
        &element.style_ranges,
    )
}

fn resolve(
    len: usize,
    base_font_size: f32,
    base_font_weight: FontWeight,
    base_color: &str,
    ranges: &[StyleRange],
) -> Vec<StyleRun> {
    if len == 0 {
        return Vec::new();
    }

    let mut runs = vec![StyleRun {
        start: 0,
        end: len,
        font_size: base_font_size,
        font_weight: base_font_weight,
        color: base_color.to_string(),
        underline: false,
    }];

    // Stable sort by start: among same-start ranges the later one in input
    // order is applied last and therefore wins on the overlap.
    let mut sorted: Vec<&StyleRange> = ranges.iter().collect();
    sorted.sort_by_key(|r| r.start);

    for range in sorted {
        let start = range.start.min(len);
        let end = range.end.min(len);
        if end <= start {
            log::trace!("skipping empty or out-of-bounds style range {}..{}", range.start, range.end);
            continue;
        }

        let mut next = Vec::with_capacity(runs.len() + 2);
        for run in runs {
            if end <= run.start || start >= run.end {
                next.push(run);
                continue;
            }
            if run.start < start {
                next.push(StyleRun {
                    end: start,
                    ..run.clone()
                });
            }
            next.push(StyleRun {
                start: run.start.max(start),
                end: run.end.min(end),
                font_size: range.font_size.unwrap_or(run.font_size),
                font_weight: range.font_weight.unwrap_or(run.font_weight),
                color: range.color.clone().unwrap_or_else(|| run.color.clone()),
                underline: range.underline.unwrap_or(run.underline),
            });
            if end < run.end {
                next.push(StyleRun { start: end, ..run });
            }
        }
        runs = next;
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{StyleRange, TextElement};

    fn runs_for(text: &str, ranges: Vec<StyleRange>) -> Vec<StyleRun> {
        resolve_style_runs(&TextElement::new(text).with_style_ranges(ranges))
    }

    fn assert_tiles(runs: &[StyleRun], len: usize) {
        let mut cursor = 0;
        for run in runs {
            assert_eq!(run.start, cursor, "gap or overlap at {}", cursor);
            assert!(run.end > run.start, "degenerate run at {}", run.start);
            cursor = run.end;
        }
        assert_eq!(cursor, len, "runs do not cover the full text");
    }

    #[test]
    fn test_no_ranges_single_run() {
        let runs = runs_for("Hello", vec![]);
        assert_eq!(runs.len(), 1);
        assert_eq!((runs[0].start, runs[0].end), (0, 5));
        assert_eq!(runs[0].font_weight, FontWeight::Normal);
        assert!(!runs[0].underline);
    }

    #[test]
    fn test_title_prefix_split() {
        // "Title : body" with a bold+underline prefix resolves into exactly
        // two runs: [0,5) styled and [5,12) base.
        let runs = runs_for(
            "Title : body",
            vec![StyleRange::new(0, 5)
                .with_font_weight(FontWeight::Bold)
                .with_underline(true)],
        );
        assert_eq!(runs.len(), 2);
        assert_eq!((runs[0].start, runs[0].end), (0, 5));
        assert_eq!(runs[0].font_weight, FontWeight::Bold);
        assert!(runs[0].underline);
        assert_eq!((runs[1].start, runs[1].end), (5, 12));
        assert_eq!(runs[1].font_weight, FontWeight::Normal);
        assert!(!runs[1].underline);
        assert_tiles(&runs, 12);
    }

    #[test]
    fn test_overlapping_later_range_wins() {
        let runs = runs_for(
            "abcdefghij",
            vec![
                StyleRange::new(0, 6).with_color("#ff0000"),
                StyleRange::new(4, 8).with_color("#0000ff"),
            ],
        );
        assert_tiles(&runs, 10);
        // [0,4) red, [4,8) blue, [8,10) base.
        assert_eq!(runs[0].color, "#ff0000");
        assert_eq!((runs[0].start, runs[0].end), (0, 4));
        assert_eq!(runs[1].color, "#0000ff");
        assert_eq!((runs[1].start, runs[1].end), (4, 8));
        assert_eq!(runs[2].color, "#000000");
    }

    #[test]
    fn test_unset_fields_inherit() {
        let runs = runs_for(
            "abcdef",
            vec![
                StyleRange::new(0, 6).with_font_size(30.0),
                StyleRange::new(2, 4).with_font_weight(FontWeight::Bold),
            ],
        );
        assert_tiles(&runs, 6);
        // The bold range keeps the enlarged size from the earlier range.
        assert_eq!(runs[1].font_size, 30.0);
        assert_eq!(runs[1].font_weight, FontWeight::Bold);
    }

    #[test]
    fn test_same_start_last_wins() {
        let runs = runs_for(
            "abcd",
            vec![
                StyleRange::new(0, 4).with_color("#111111"),
                StyleRange::new(0, 2).with_color("#222222"),
            ],
        );
        assert_tiles(&runs, 4);
        assert_eq!(runs[0].color, "#222222");
        assert_eq!(runs[1].color, "#111111");
    }

    #[test]
    fn test_out_of_bounds_clamped_and_inverted_skipped() {
        let runs = runs_for(
            "abcde",
            vec![
                StyleRange::new(3, 99).with_font_weight(FontWeight::Bold),
                StyleRange::new(4, 2).with_color("#ff0000"), // inverted: skipped
                StyleRange::new(50, 60).with_color("#ff0000"), // fully outside: skipped
            ],
        );
        assert_tiles(&runs, 5);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].font_weight, FontWeight::Bold);
        assert!(runs.iter().all(|r| r.color == "#000000"));
    }

    #[test]
    fn test_empty_text_no_runs() {
        assert!(runs_for("", vec![StyleRange::new(0, 3)]).is_empty());
    }

    #[test]
    fn test_coverage_with_many_random_ish_ranges() {
        let ranges = vec![
            StyleRange::new(1, 9).with_underline(true),
            StyleRange::new(0, 3).with_font_size(10.0),
            StyleRange::new(5, 5), // empty: skipped
            StyleRange::new(2, 7).with_font_weight(FontWeight::Bold),
            StyleRange::new(6, 12).with_color("#00ff00"),
        ];
        let runs = runs_for("abcdefghijkl", ranges);
        assert_tiles(&runs, 12);
    }
}
