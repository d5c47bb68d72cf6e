//! Keyed cache for translated UI strings
//!
//! The cache is owned by whoever performs translations and is passed by
//! reference; entries live as long as the owner and are never evicted.

use std::collections::HashMap;

use crate::types::Language;

/// Translations keyed by source text and source language
#[derive(Debug, Default, Clone)]
pub struct TranslationCache {
    entries: HashMap<(String, Language), HashMap<Language, String>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a translation
    ///
    /// Same-language lookups return the text itself without touching the cache.
    pub fn get(&self, text: &str, source: Language, target: Language) -> Option<String> {
        if source == target {
            return Some(text.to_string());
        }

        self.entries
            .get(&(text.to_string(), source))
            .and_then(|targets| targets.get(&target))
            .cloned()
    }

    /// Store a translation, replacing any previous one for the same key
    pub fn insert(
        &mut self,
        text: impl Into<String>,
        source: Language,
        target: Language,
        translation: impl Into<String>,
    ) {
        if source == target {
            return;
        }

        self.entries
            .entry((text.into(), source))
            .or_default()
            .insert(target, translation.into());
    }

    /// Number of stored translations across all targets
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_then_hit() {
        let mut cache = TranslationCache::new();
        assert_eq!(cache.get("Water daily", Language::English, Language::Hindi), None);

        cache.insert("Water daily", Language::English, Language::Hindi, "रोज़ पानी दें");

        assert_eq!(
            cache.get("Water daily", Language::English, Language::Hindi).as_deref(),
            Some("रोज़ पानी दें")
        );
        assert_eq!(cache.get("Water daily", Language::English, Language::Telugu), None);
    }

    #[test]
    fn test_targets_share_a_source_entry() {
        let mut cache = TranslationCache::new();
        cache.insert("Shade", Language::English, Language::Hindi, "छाया");
        cache.insert("Shade", Language::English, Language::Telugu, "నీడ");

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.entries.len(), 1);
    }

    #[test]
    fn test_same_language_is_identity() {
        let mut cache = TranslationCache::new();
        cache.insert("Shade", Language::English, Language::English, "ignored");

        assert!(cache.is_empty());
        assert_eq!(
            cache.get("Shade", Language::English, Language::English).as_deref(),
            Some("Shade")
        );
    }

    #[test]
    fn test_insert_replaces_and_clear_empties() {
        let mut cache = TranslationCache::new();
        cache.insert("Soil", Language::English, Language::Hindi, "old");
        cache.insert("Soil", Language::English, Language::Hindi, "मिट्टी");

        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get("Soil", Language::English, Language::Hindi).as_deref(),
            Some("मिट्टी")
        );

        cache.clear();
        assert!(cache.is_empty());
    }
}
