//! Duration phrase resolution for permit validity periods.
//!
//! Permit documents render a validity duration as a spelled-out phrase, e.g.
//! a year count written in words next to the numeral. The word table is
//! locale data owned by the integrating application, not this crate, so the
//! engine only defines the capability and two generic providers: one backed
//! by a supplied phrase table and a numeric fallback that never fails.

use hashbrown::HashMap;

/// Maps a duration in years to its display phrase.
pub trait DurationPhraseResolver {
    /// Phrase for `years`, or `None` when the provider has no entry.
    fn phrase(&self, years: u32) -> Option<String>;
}

/// Resolver backed by an application-supplied phrase table.
#[derive(Debug, Clone, Default)]
pub struct SuppliedPhrases {
    phrases: HashMap<u32, String>,
}

impl SuppliedPhrases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, years: u32, phrase: impl Into<String>) {
        self.phrases.insert(years, phrase.into());
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl FromIterator<(u32, String)> for SuppliedPhrases {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            phrases: iter.into_iter().collect(),
        }
    }
}

impl DurationPhraseResolver for SuppliedPhrases {
    fn phrase(&self, years: u32) -> Option<String> {
        self.phrases.get(&years).cloned()
    }
}

/// Fallback resolver rendering the numeral itself, zero-padded in
/// parentheses: `(05)` for five years. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericPhrases;

impl DurationPhraseResolver for NumericPhrases {
    fn phrase(&self, years: u32) -> Option<String> {
        Some(format!("({years:02})"))
    }
}

/// Resolve through the supplied table first, falling back to the numeric
/// form so a document never renders an empty duration.
pub fn resolve_with_fallback(table: &SuppliedPhrases, years: u32) -> String {
    table
        .phrase(years)
        .or_else(|| NumericPhrases.phrase(years))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplied_table_lookup() {
        let mut table = SuppliedPhrases::new();
        table.insert(1, "سنة واحدة");
        table.insert(5, "خمس سنوات");
        assert_eq!(table.phrase(5).as_deref(), Some("خمس سنوات"));
        assert_eq!(table.phrase(7), None);
    }

    #[test]
    fn test_numeric_fallback_zero_pads() {
        assert_eq!(NumericPhrases.phrase(5).as_deref(), Some("(05)"));
        assert_eq!(NumericPhrases.phrase(30).as_deref(), Some("(30)"));
        assert_eq!(NumericPhrases.phrase(0).as_deref(), Some("(00)"));
    }

    #[test]
    fn test_resolve_with_fallback() {
        let table: SuppliedPhrases = [(10u32, "عشر سنوات".to_string())].into_iter().collect();
        assert_eq!(resolve_with_fallback(&table, 10), "عشر سنوات");
        assert_eq!(resolve_with_fallback(&table, 3), "(03)");
    }
}
