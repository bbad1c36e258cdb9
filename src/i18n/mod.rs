//! Internationalization (i18n) module for the bilingual site.
//!
//! This module provides a centralized, extensible architecture for managing
//! the site's languages. All language-related logic, localized strings, and
//! translation quality checks are contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `strings`: Centralized localized UI strings
//! - `validator`: Translation quality validation
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Language, LanguageRegistry};
//!
//! // Get canonical language (German)
//! let canonical = Language::canonical();
//!
//! // Create language from code
//! let english = Language::from_code("en")?;
//!
//! // List all enabled languages
//! let languages = LanguageRegistry::get().list_enabled();
//! ```

mod language;
mod registry;
mod strings;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LanguageStrings;
pub use validator::{TranslationValidator, ValidationReport};
