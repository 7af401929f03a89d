//! Caching layout engine facade.
//!
//! Wraps the pure layout functions with a content-addressed cache so
//! re-laying-out an unchanged element is a hash lookup. The cache key is a
//! hash of every input that influences geometry; anything not hashed (e.g.
//! element ids) must not affect layout.

use std::hash::{DefaultHasher, Hash, Hasher};

use hashbrown::HashMap;

use crate::Result;
use crate::element::{TableElement, TextElement};
use crate::layout::table::{TableLayout, derive_table_layout};
use crate::layout::text_layout::{self, TextLayout};
use crate::metrics::FontMetrics;

/// Hash of all layout-relevant fields of a text element.
///
/// Two elements with equal hashes lay out identically under the same metrics
/// provider. Float fields hash by bit pattern, so `0.0` and `-0.0` are
/// distinct keys; both still produce the same geometry, the cache just holds
/// two entries.
pub fn content_hash(element: &TextElement) -> u64 {
    let mut hasher = DefaultHasher::new();
    element.text.hash(&mut hasher);
    element.width.map(f32::to_bits).hash(&mut hasher);
    element.height.map(f32::to_bits).hash(&mut hasher);
    element.font_size.to_bits().hash(&mut hasher);
    element.font_family.hash(&mut hasher);
    element.font_weight.hash(&mut hasher);
    element.color.hash(&mut hasher);
    element.direction.hash(&mut hasher);
    element.text_align.hash(&mut hasher);
    element.line_height.to_bits().hash(&mut hasher);
    element.wrap.hash(&mut hasher);
    for range in &element.style_ranges {
        range.start.hash(&mut hasher);
        range.end.hash(&mut hasher);
        range.font_size.map(f32::to_bits).hash(&mut hasher);
        range.font_weight.hash(&mut hasher);
        range.color.hash(&mut hasher);
        range.underline.hash(&mut hasher);
    }
    hasher.finish()
}

/// Content-addressed store of computed text layouts.
#[derive(Debug, Default)]
pub struct LayoutCache {
    entries: HashMap<u64, TextLayout>,
}

impl LayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Layout engine owning a metrics provider and a layout cache.
///
/// Table layouts are pure arithmetic over the element and are derived on
/// every call; only text layouts, which walk tokens through the measurement
/// backend, are cached.
#[derive(Debug, Default)]
pub struct LayoutEngine<M> {
    metrics: M,
    cache: LayoutCache,
}

impl<M: FontMetrics> LayoutEngine<M> {
    pub fn new(metrics: M) -> Self {
        Self {
            metrics,
            cache: LayoutCache::new(),
        }
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    pub fn cache(&self) -> &LayoutCache {
        &self.cache
    }

    /// Invalidate all cached layouts, e.g. after the metrics backend changed
    /// which fonts are loaded.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Lay out a text element, reusing the cached geometry when the element
    /// content-hashes to a known entry.
    pub fn layout_text(&mut self, element: &TextElement) -> &TextLayout {
        let key = content_hash(element);
        let metrics = &self.metrics;
        self.cache
            .entries
            .entry(key)
            .or_insert_with(|| {
                log::debug!("layout cache miss for text element (key {key:#018x})");
                text_layout::layout_text(element, metrics)
            })
    }

    /// Derive table geometry. Uncached; see the type-level note.
    pub fn layout_table(&self, element: &TableElement) -> Result<TableLayout> {
        derive_table_layout(element)
    }
}
