//! Translation service collaborator.
//!
//! The site treats the translation service as an opaque endpoint: a JSON POST
//! of `{text, sourceLang, targetLang}` answered by `{translatedText}`. The
//! `Translator` trait is the seam between the cache and that endpoint, so
//! tests can substitute a scripted implementation.

mod http;

pub use http::HttpTranslator;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;

/// Request body sent to the translation service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest<'a> {
    /// The text to translate
    pub text: &'a str,

    /// ISO 639-1 code of the source language
    pub source_lang: &'static str,

    /// ISO 639-1 code of the target language
    pub target_lang: &'static str,
}

/// Response body returned by the translation service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    /// The translated text
    pub translated_text: String,
}

/// Errors produced while talking to the translation service.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The request never completed or the response body could not be decoded
    #[error("translation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("translation service error ({status}): {body}")]
    Service { status: u16, body: String },

    /// The service answered 200 but the payload carried no usable text
    #[error("translation service returned an empty translation")]
    EmptyResponse,
}

/// A source of translations.
///
/// Implemented by [`HttpTranslator`] for the real service and by scripted
/// fakes in tests. Implementations must be safe to share across tasks.
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` into `target`.
    fn translate<'a>(
        &'a self,
        text: &'a str,
        source: Language,
        target: Language,
    ) -> BoxFuture<'a, Result<String, TranslateError>>;
}
