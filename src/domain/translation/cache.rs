//! Translation memoization cache.
//!
//! Maps normalized source text to its translations per target language.
//! Entries are created lazily on first successful translation and live
//! for the lifetime of the owning resolver; there is no eviction and no
//! TTL. Each resolver owns its own cache instance, so tests and parallel
//! sessions stay isolated.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::foundation::LanguageCode;

/// In-memory translation cache keyed by normalized source text.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: Mutex<HashMap<String, HashMap<LanguageCode, String>>>,
}

impl TranslationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes source text for cache lookup.
    fn cache_key(text: &str) -> String {
        text.trim().to_lowercase()
    }

    /// Returns the cached translation of `text` into `target`, if any.
    pub fn get(&self, text: &str, target: LanguageCode) -> Option<String> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(&Self::cache_key(text))
            .and_then(|per_language| per_language.get(&target))
            .cloned()
    }

    /// Stores a translation of `text` into `target`.
    pub fn insert(&self, text: &str, target: LanguageCode, translation: impl Into<String>) {
        let mut entries = self.entries.lock().unwrap();
        entries
            .entry(Self::cache_key(text))
            .or_default()
            .insert(target, translation.into());
    }

    /// Returns the number of distinct source texts cached.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Drops all cached translations.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}
