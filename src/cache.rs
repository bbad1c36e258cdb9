//! Translation memoization cache.
//!
//! Every piece of menu text that needs machine translation goes through this
//! cache. A translation is looked up by the full `(text, source, target)`
//! triple, so the same German name requested for two different targets is two
//! independent entries.
//!
//! Semantics:
//!
//! - Entries are write-once. The first resolved translation for a key is the
//!   one every later lookup sees.
//! - Failures are never stored. A failed service call surfaces its error to
//!   the caller, and the next request for that key starts over.
//! - Concurrent requests for the same key are coalesced into a single service
//!   call; all callers share the one result. If that call fails, exactly one
//!   caller sees the error and the remaining callers retry with their own
//!   call instead of inheriting the failure.
//!
//! Same-language requests and empty text are identities and never touch the
//! service or the map.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::i18n::{Language, TranslationValidator};
use crate::metrics::TranslationMetrics;
use crate::translate::{TranslateError, Translator};

/// Composite cache key. Translations are memoized per text AND language pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    text: String,
    source: Language,
    target: Language,
}

/// A stored translation plus its insertion rank.
struct Entry {
    translated: String,
    seq: u64,
}

/// One resolved translation, as reported by [`TranslationCache::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CachedTranslation {
    pub text: String,
    pub source: Language,
    pub target: Language,
    pub translated: String,
}

#[derive(Default)]
struct Inner {
    /// Resolved translations
    entries: HashMap<CacheKey, Entry>,

    /// In-flight service calls, one cell per key being resolved
    pending: HashMap<CacheKey, Arc<OnceCell<String>>>,

    /// Insertion counter for ordered snapshots
    next_seq: u64,
}

/// Memoizing front for a [`Translator`].
///
/// The cache is cheap to share: wrap it in an `Arc` and hand clones to every
/// component that resolves text. The lock guards only map bookkeeping and is
/// never held across an await, so lookups stay synchronous and fast while
/// service calls run unlocked.
pub struct TranslationCache {
    translator: Arc<dyn Translator>,
    inner: Mutex<Inner>,
    metrics: TranslationMetrics,
}

impl TranslationCache {
    /// Create an empty cache in front of the given translator.
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self {
            translator,
            inner: Mutex::new(Inner::default()),
            metrics: TranslationMetrics::new(),
        }
    }

    /// Translate `text` from `source` into `target`, reusing a previous
    /// result when one exists.
    ///
    /// Requesting a text in its own language, or an empty text, returns the
    /// input unchanged without a service call.
    ///
    /// # Errors
    /// Returns the service error when the text is not cached and the
    /// translation call fails. Nothing is stored in that case.
    pub async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        if source == target || text.is_empty() {
            return Ok(text.to_string());
        }

        let key = CacheKey {
            text: text.to_string(),
            source,
            target,
        };

        // Fast path: already resolved. Otherwise join (or start) the
        // in-flight call for this key.
        let cell = {
            let mut inner = self.lock_inner();
            if let Some(entry) = inner.entries.get(&key) {
                self.metrics.record_cache_hit();
                debug!(
                    "Translation cache hit ({} -> {}, {} chars)",
                    source.code(),
                    target.code(),
                    text.len()
                );
                return Ok(entry.translated.clone());
            }
            self.metrics.record_cache_miss();
            Arc::clone(
                inner
                    .pending
                    .entry(key.clone())
                    .or_insert_with(|| Arc::new(OnceCell::new())),
            )
        };

        let result = cell
            .get_or_try_init(|| async {
                self.metrics.record_api_call();
                let translated = match self.translator.translate(text, source, target).await {
                    Ok(translated) => translated,
                    Err(e) => {
                        self.metrics.record_api_failure();
                        return Err(e);
                    }
                };

                let validation = TranslationValidator::validate(text, &translated);
                if !validation.warnings.is_empty() {
                    warn!(
                        "Translation validation warnings for {} -> {}: {:?}",
                        source.code(),
                        target.code(),
                        validation.warnings
                    );
                }
                if !validation.errors.is_empty() {
                    warn!(
                        "Translation validation errors for {} -> {}: {:?}",
                        source.code(),
                        target.code(),
                        validation.errors
                    );
                }

                Ok(translated)
            })
            .await;

        match result {
            Ok(translated) => {
                let translated = translated.clone();
                let mut inner = self.lock_inner();
                inner.pending.remove(&key);
                // First resolution wins; a slower concurrent call must not
                // replace what readers may already have seen.
                if !inner.entries.contains_key(&key) {
                    let seq = inner.next_seq;
                    inner.next_seq += 1;
                    inner.entries.insert(
                        key,
                        Entry {
                            translated: translated.clone(),
                            seq,
                        },
                    );
                }
                Ok(translated)
            }
            Err(e) => {
                // Drop the pending slot so the next caller starts fresh, but
                // only if no concurrent waiter has resolved it meanwhile.
                let mut inner = self.lock_inner();
                if let Some(slot) = inner.pending.get(&key) {
                    if Arc::ptr_eq(slot, &cell) && cell.get().is_none() {
                        inner.pending.remove(&key);
                    }
                }
                Err(e)
            }
        }
    }

    /// Look up a translation without triggering a service call.
    ///
    /// Purely a map peek: it does not count as a hit or miss.
    pub fn get_cached(&self, text: &str, source: Language, target: Language) -> Option<String> {
        let key = CacheKey {
            text: text.to_string(),
            source,
            target,
        };
        self.lock_inner()
            .entries
            .get(&key)
            .map(|entry| entry.translated.clone())
    }

    /// Number of resolved translations in the cache.
    pub fn len(&self) -> usize {
        self.lock_inner().entries.len()
    }

    /// Whether the cache holds no resolved translations.
    pub fn is_empty(&self) -> bool {
        self.lock_inner().entries.is_empty()
    }

    /// All resolved translations in insertion order.
    pub fn snapshot(&self) -> Vec<CachedTranslation> {
        let inner = self.lock_inner();
        let mut items: Vec<_> = inner
            .entries
            .iter()
            .map(|(key, entry)| {
                (
                    entry.seq,
                    CachedTranslation {
                        text: key.text.clone(),
                        source: key.source,
                        target: key.target,
                        translated: entry.translated.clone(),
                    },
                )
            })
            .collect();
        items.sort_by_key(|(seq, _)| *seq);
        items.into_iter().map(|(_, item)| item).collect()
    }

    /// Counters for this cache instance.
    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    fn lock_inner(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("Translation cache lock poisoned; recovering");
                poisoned.into_inner()
            }
        }
    }
}
