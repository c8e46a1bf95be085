//! Language resolver - cached, best-effort translation dispatch.
//!
//! Sits between display code and the translation provider. Translation
//! is an enhancement, never a correctness-critical path: any provider
//! failure degrades to the untranslated source text, and the caller
//! cannot observe the difference between a failure and a provider that
//! returned the input unchanged.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::foundation::LanguageCode;
use crate::ports::TextTranslator;

use super::cache::TranslationCache;

/// Cached translation dispatcher.
///
/// Constructed once per process or session and shared by reference; the
/// cache it owns lives exactly as long as the resolver.
pub struct LanguageResolver {
    translator: Arc<dyn TextTranslator>,
    cache: TranslationCache,
    base: LanguageCode,
}

impl LanguageResolver {
    /// Creates a resolver over the given provider with English as the
    /// base language.
    pub fn new(translator: Arc<dyn TextTranslator>) -> Self {
        Self::with_base_language(translator, LanguageCode::En)
    }

    /// Creates a resolver with an explicit base (source) language.
    pub fn with_base_language(translator: Arc<dyn TextTranslator>, base: LanguageCode) -> Self {
        Self {
            translator,
            cache: TranslationCache::new(),
            base,
        }
    }

    /// Returns the base language all authored content is written in.
    pub fn base_language(&self) -> LanguageCode {
        self.base
    }

    /// Returns the resolver's cache, for inspection.
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// Translates a single text into `target`.
    ///
    /// Identity fast path when `target` is the base language (no
    /// provider call); otherwise cache-or-fetch. On provider failure the
    /// source text is returned unchanged.
    pub async fn translate_text(&self, text: &str, target: LanguageCode) -> String {
        if target == self.base {
            return text.to_string();
        }

        if let Some(cached) = self.cache.get(text, target) {
            return cached;
        }
        tracing::debug!(language = %target, "translation cache miss");

        let request = vec![text.to_string()];
        match self.translator.translate(&request, self.base, target).await {
            Ok(translations) if translations.len() == 1 => {
                let translation = translations.into_iter().next().unwrap();
                self.cache.insert(text, target, translation.clone());
                translation
            }
            Ok(translations) => {
                tracing::warn!(
                    expected = 1,
                    got = translations.len(),
                    "translator returned wrong batch size, keeping source text"
                );
                text.to_string()
            }
            Err(err) => {
                tracing::warn!(error = %err, "translation failed, keeping source text");
                text.to_string()
            }
        }
    }

    /// Translates a batch of texts in a single provider call.
    ///
    /// Populates the cache per entry on success. All-or-nothing: any
    /// failure returns every source text unchanged. The cache is not
    /// consulted before the call; only `translate_text` reads it.
    pub async fn translate_batch(&self, texts: &[String], target: LanguageCode) -> Vec<String> {
        if target == self.base || texts.is_empty() {
            return texts.to_vec();
        }

        match self.translator.translate(texts, self.base, target).await {
            Ok(translations) if translations.len() == texts.len() => {
                for (source, translation) in texts.iter().zip(&translations) {
                    self.cache.insert(source, target, translation.clone());
                }
                translations
            }
            Ok(translations) => {
                tracing::warn!(
                    expected = texts.len(),
                    got = translations.len(),
                    "translator returned wrong batch size, keeping source texts"
                );
                texts.to_vec()
            }
            Err(err) => {
                tracing::warn!(error = %err, "batch translation failed, keeping source texts");
                texts.to_vec()
            }
        }
    }

    /// Translates the string leaves of a JSON object tree.
    ///
    /// Walks nested objects collecting non-empty string values, skipping
    /// any field named in `exclude_keys` and passing arrays, numbers,
    /// booleans, and nulls through untouched. All collected strings go
    /// out in one batched provider call; if it fails the entire object
    /// comes back untranslated (no partially translated structures).
    pub async fn translate_object(
        &self,
        value: &Value,
        target: LanguageCode,
        exclude_keys: &[&str],
    ) -> Value {
        if target == self.base {
            return value.clone();
        }

        let mut sources = Vec::new();
        collect_strings(value, exclude_keys, &mut sources);
        if sources.is_empty() {
            return value.clone();
        }

        let translations = self.translate_batch(&sources, target).await;
        let mut replacements = translations.into_iter();
        rebuild(value, exclude_keys, &mut replacements)
    }
}

/// Collects translatable string leaves in deterministic walk order.
fn collect_strings(value: &Value, exclude_keys: &[&str], out: &mut Vec<String>) {
    if let Value::Object(map) = value {
        for (key, field) in map {
            if exclude_keys.contains(&key.as_str()) {
                continue;
            }
            match field {
                Value::String(s) if !s.trim().is_empty() => out.push(s.clone()),
                Value::Object(_) => collect_strings(field, exclude_keys, out),
                _ => {}
            }
        }
    }
}

/// Rebuilds the tree, substituting translations in the same walk order
/// as [`collect_strings`].
fn rebuild(
    value: &Value,
    exclude_keys: &[&str],
    replacements: &mut std::vec::IntoIter<String>,
) -> Value {
    match value {
        Value::Object(map) => {
            let mut rebuilt = serde_json::Map::with_capacity(map.len());
            for (key, field) in map {
                let new_field = if exclude_keys.contains(&key.as_str()) {
                    field.clone()
                } else {
                    match field {
                        Value::String(s) if !s.trim().is_empty() => {
                            Value::String(replacements.next().unwrap_or_else(|| s.clone()))
                        }
                        Value::Object(_) => rebuild(field, exclude_keys, replacements),
                        other => other.clone(),
                    }
                };
                rebuilt.insert(key.clone(), new_field);
            }
            Value::Object(rebuilt)
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::translation::MockTranslator;
    use serde_json::json;

    fn resolver_with(translator: MockTranslator) -> (LanguageResolver, Arc<MockTranslator>) {
        let translator = Arc::new(translator);
        (LanguageResolver::new(translator.clone()), translator)
    }

    #[tokio::test]
    async fn base_language_is_identity_with_zero_calls() {
        let (resolver, translator) = resolver_with(MockTranslator::new());

        let out = resolver.translate_text("Hello", LanguageCode::En).await;
        assert_eq!(out, "Hello");
        assert_eq!(translator.call_count(), 0);
    }

    #[tokio::test]
    async fn repeated_text_issues_exactly_one_call() {
        let (resolver, translator) = resolver_with(MockTranslator::new());

        let first = resolver.translate_text("Hello", LanguageCode::Hi).await;
        let second = resolver.translate_text("Hello", LanguageCode::Hi).await;

        assert_eq!(first, second);
        assert_eq!(translator.call_count(), 1);
    }

    #[tokio::test]
    async fn provider_failure_returns_source_text() {
        let (resolver, translator) = resolver_with(MockTranslator::new().failing());

        let out = resolver.translate_text("Hello", LanguageCode::Hi).await;
        assert_eq!(out, "Hello");
        assert_eq!(translator.call_count(), 1);
        assert!(resolver.cache().is_empty());
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let translator = Arc::new(MockTranslator::new().failing_times(1));
        let resolver = LanguageResolver::new(translator.clone());

        let first = resolver.translate_text("Hello", LanguageCode::Hi).await;
        assert_eq!(first, "Hello");

        // The provider recovered; the earlier failure must not pin the
        // source text in the cache.
        let second = resolver.translate_text("Hello", LanguageCode::Hi).await;
        assert_ne!(second, "Hello");
        assert_eq!(translator.call_count(), 2);
    }

    #[tokio::test]
    async fn batch_translates_in_one_call_and_populates_cache() {
        let (resolver, translator) = resolver_with(MockTranslator::new());

        let texts = vec!["Home".to_string(), "Careers".to_string()];
        let out = resolver.translate_batch(&texts, LanguageCode::Hi).await;

        assert_eq!(out.len(), 2);
        assert_eq!(translator.call_count(), 1);
        assert_eq!(translator.batches()[0].len(), 2);

        // Subsequent single lookups are served from the cache.
        let cached = resolver.translate_text("Home", LanguageCode::Hi).await;
        assert_eq!(cached, out[0]);
        assert_eq!(translator.call_count(), 1);
    }

    #[tokio::test]
    async fn object_translation_respects_exclude_keys() {
        let (resolver, translator) = resolver_with(MockTranslator::new());

        let college = json!({
            "id": "abc123",
            "name": "Hello",
            "fees": 1500
        });
        let translated = resolver
            .translate_object(&college, LanguageCode::Hi, &["id", "fees"])
            .await;

        assert_eq!(translated["id"], "abc123");
        assert_eq!(translated["fees"], 1500);
        assert_ne!(translated["name"], "Hello");
        assert_eq!(translator.call_count(), 1);
    }

    #[tokio::test]
    async fn object_translation_walks_nested_objects_but_not_arrays() {
        let (resolver, translator) = resolver_with(MockTranslator::new());

        let college = json!({
            "name": "Government College",
            "location": { "city": "Delhi", "coordinates": [28.6, 77.2] },
            "facilities": ["Library", "Hostel"],
            "established": 1922
        });
        let translated = resolver
            .translate_object(&college, LanguageCode::Hi, &["coordinates"])
            .await;

        assert_ne!(translated["name"], "Government College");
        assert_ne!(translated["location"]["city"], "Delhi");
        // Arrays and numbers pass through untouched.
        assert_eq!(translated["facilities"], json!(["Library", "Hostel"]));
        assert_eq!(translated["established"], 1922);
        assert_eq!(translated["location"]["coordinates"], json!([28.6, 77.2]));
        // One batched call for the whole object.
        assert_eq!(translator.call_count(), 1);
        assert_eq!(translator.batches()[0].len(), 2);
    }

    #[tokio::test]
    async fn object_translation_is_all_or_nothing_on_failure() {
        let (resolver, _translator) = resolver_with(MockTranslator::new().failing());

        let college = json!({
            "name": "Government College",
            "location": { "city": "Delhi" }
        });
        let translated = resolver
            .translate_object(&college, LanguageCode::Hi, &[])
            .await;

        assert_eq!(translated, college);
    }

    #[tokio::test]
    async fn object_translation_for_base_language_is_identity() {
        let (resolver, translator) = resolver_with(MockTranslator::new());

        let value = json!({ "name": "Hello" });
        let out = resolver
            .translate_object(&value, LanguageCode::En, &[])
            .await;

        assert_eq!(out, value);
        assert_eq!(translator.call_count(), 0);
    }

    #[tokio::test]
    async fn empty_and_whitespace_strings_are_not_sent() {
        let (resolver, translator) = resolver_with(MockTranslator::new());

        let value = json!({ "name": "Hello", "note": "  ", "slug": "" });
        resolver
            .translate_object(&value, LanguageCode::Hi, &[])
            .await;

        assert_eq!(translator.batches()[0], vec!["Hello".to_string()]);
    }
}
