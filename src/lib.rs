//! # speisekarte - Bilingual Menu Localization
//!
//! `speisekarte` resolves a restaurant's German-authored menu content into
//! German or English display text. Hand-written translations always win;
//! anything missing is filled in by an external translation service, and
//! every service result is memoized so the same text is never translated
//! twice.
//!
//! ## How a field is resolved
//!
//! 1. An authored field in the requested language is shown as-is.
//! 2. Otherwise the German field (or the primary column) is the source text.
//! 3. If the requested language is German, the source is shown as-is;
//!    otherwise it goes through the translation cache and is marked as
//!    machine translated.
//!
//! ## Cache semantics
//!
//! Translations are keyed by the full `(text, source, target)` triple.
//! Entries are write-once, failures are never stored, and concurrent
//! requests for the same key share a single service call.
//!
//! ```rust,ignore
//! let translator = HttpTranslator::new(url, api_key, timeout)?;
//! let cache = Arc::new(TranslationCache::new(Arc::new(translator)));
//! let localizer = ContentLocalizer::new(cache);
//!
//! let menu = MenuExport::from_file("data/menu.json")?;
//! let localized = localizer.localize_menu(&menu, Language::ENGLISH).await?;
//! ```

/// Translation memoization cache with request coalescing.
pub mod cache;

/// Environment configuration for the preview binary.
pub mod config;

/// Bilingual content records and the JSON export loader.
pub mod content;

/// Languages, localized UI strings, and translation quality checks.
pub mod i18n;

/// Field resolution, language switching, and the reactive menu view.
pub mod localizer;

/// Cache and service counters.
pub mod metrics;

/// The external translation service client and its trait seam.
pub mod translate;
