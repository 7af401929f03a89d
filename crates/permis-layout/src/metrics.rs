//! Font measurement capability consumed by the layout engine.
//!
//! The engine never touches fonts directly; it asks a [`FontMetrics`]
//! implementation for token widths and ascent/descent and trusts the answers
//! to be deterministic. [`HeuristicMetrics`] is the backend-free fallback and
//! the reference for test parity; real backends (a canvas context, a shaper)
//! live outside this crate.

use std::cell::RefCell;

use hashbrown::HashMap;

use crate::element::FontWeight;

/// Ascent and descent of a font at a given size, both positive, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AscentDescent {
    pub ascent: f32,
    pub descent: f32,
}

impl AscentDescent {
    /// Natural (unmultiplied) line height.
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Deterministic text measurement capability.
///
/// Implementations must return the same values for the same arguments within
/// one layout pass; the engine relies on this for idempotent geometry.
pub trait FontMetrics {
    /// Advance width of `text` in pixels.
    fn measure_width(
        &self,
        text: &str,
        font_size: f32,
        font_family: &str,
        font_weight: FontWeight,
    ) -> f32;

    /// Ascent/descent for the given style.
    fn ascent_descent(
        &self,
        font_size: f32,
        font_family: &str,
        font_weight: FontWeight,
    ) -> AscentDescent;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn measure_width(
        &self,
        text: &str,
        font_size: f32,
        font_family: &str,
        font_weight: FontWeight,
    ) -> f32 {
        (**self).measure_width(text, font_size, font_family, font_weight)
    }

    fn ascent_descent(
        &self,
        font_size: f32,
        font_family: &str,
        font_weight: FontWeight,
    ) -> AscentDescent {
        (**self).ascent_descent(font_size, font_family, font_weight)
    }
}

/// Backend-free fallback metrics.
///
/// Widths scale with character count (`ceil(chars * size * 0.48)`), ascent is
/// 78% of the font size and descent 22%. Any implementation standing in for
/// an unavailable measurement backend must reproduce these numbers exactly so
/// layouts computed on different machines agree.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMetrics;

impl HeuristicMetrics {
    pub const WIDTH_FACTOR: f32 = 0.48;
    pub const ASCENT_FACTOR: f32 = 0.78;
    pub const DESCENT_FACTOR: f32 = 0.22;
}

impl FontMetrics for HeuristicMetrics {
    fn measure_width(
        &self,
        text: &str,
        font_size: f32,
        _font_family: &str,
        _font_weight: FontWeight,
    ) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        (text.chars().count() as f32 * font_size * Self::WIDTH_FACTOR).ceil()
    }

    fn ascent_descent(
        &self,
        font_size: f32,
        _font_family: &str,
        _font_weight: FontWeight,
    ) -> AscentDescent {
        AscentDescent {
            ascent: font_size * Self::ASCENT_FACTOR,
            descent: font_size * Self::DESCENT_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct WidthKey {
    text: String,
    font_size_bits: u32,
    font_family: String,
    font_weight: FontWeight,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct MetricsKey {
    font_size_bits: u32,
    font_family: String,
    font_weight: FontWeight,
}

/// Memoizing wrapper around a [`FontMetrics`] implementation.
///
/// Worth it when the underlying backend does real shaping; pointless around
/// [`HeuristicMetrics`]. The caches live behind `RefCell` because the engine
/// contract is single-threaded re-entrant invocation; callers that share a
/// provider across threads must wrap it themselves.
#[derive(Debug, Default)]
pub struct CachedMetrics<M> {
    inner: M,
    widths: RefCell<HashMap<WidthKey, f32>>,
    metrics: RefCell<HashMap<MetricsKey, AscentDescent>>,
}

impl<M: FontMetrics> CachedMetrics<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            widths: RefCell::new(HashMap::new()),
            metrics: RefCell::new(HashMap::new()),
        }
    }

    /// Number of memoized width measurements.
    pub fn cached_widths(&self) -> usize {
        self.widths.borrow().len()
    }

    /// Drop all memoized measurements (e.g. after a font reload).
    pub fn clear(&self) {
        self.widths.borrow_mut().clear();
        self.metrics.borrow_mut().clear();
    }

    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M: FontMetrics> FontMetrics for CachedMetrics<M> {
    fn measure_width(
        &self,
        text: &str,
        font_size: f32,
        font_family: &str,
        font_weight: FontWeight,
    ) -> f32 {
        let key = WidthKey {
            text: text.to_string(),
            font_size_bits: font_size.to_bits(),
            font_family: font_family.to_string(),
            font_weight,
        };
        if let Some(&w) = self.widths.borrow().get(&key) {
            return w;
        }
        let w = self.inner.measure_width(text, font_size, font_family, font_weight);
        self.widths.borrow_mut().insert(key, w);
        w
    }

    fn ascent_descent(
        &self,
        font_size: f32,
        font_family: &str,
        font_weight: FontWeight,
    ) -> AscentDescent {
        let key = MetricsKey {
            font_size_bits: font_size.to_bits(),
            font_family: font_family.to_string(),
            font_weight,
        };
        if let Some(&m) = self.metrics.borrow().get(&key) {
            return m;
        }
        let m = self.inner.ascent_descent(font_size, font_family, font_weight);
        self.metrics.borrow_mut().insert(key, m);
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_width() {
        let m = HeuristicMetrics;
        // 5 chars at size 20: ceil(5 * 20 * 0.48) = 48.
        assert_eq!(m.measure_width("Hello", 20.0, "Arial", FontWeight::Normal), 48.0);
        // A single space still has width: ceil(9.6) = 10.
        assert_eq!(m.measure_width(" ", 20.0, "Arial", FontWeight::Normal), 10.0);
        assert_eq!(m.measure_width("", 20.0, "Arial", FontWeight::Normal), 0.0);
        // Width counts characters, not bytes.
        assert_eq!(m.measure_width("مم", 20.0, "Arial", FontWeight::Normal), 20.0);
    }

    #[test]
    fn test_heuristic_ascent_descent() {
        let m = HeuristicMetrics.ascent_descent(20.0, "Arial", FontWeight::Normal);
        assert!((m.ascent - 15.6).abs() < 1e-4);
        assert!((m.descent - 4.4).abs() < 1e-4);
        assert!((m.line_height() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_cached_metrics_memoizes() {
        let m = CachedMetrics::new(HeuristicMetrics);
        let a = m.measure_width("abc", 14.0, "Arial", FontWeight::Bold);
        let b = m.measure_width("abc", 14.0, "Arial", FontWeight::Bold);
        assert_eq!(a, b);
        assert_eq!(m.cached_widths(), 1);

        // Different weight is a different key.
        m.measure_width("abc", 14.0, "Arial", FontWeight::Normal);
        assert_eq!(m.cached_widths(), 2);

        m.clear();
        assert_eq!(m.cached_widths(), 0);
    }
}
