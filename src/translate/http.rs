//! HTTP client for the external translation service.

use std::time::Duration;

use futures::future::BoxFuture;
use tracing::debug;

use crate::i18n::Language;
use crate::translate::{TranslateError, TranslationRequest, TranslationResponse, Translator};

/// Client for the translation endpoint.
///
/// Holds a pooled `reqwest::Client`, so one instance should be built at
/// startup and shared.
pub struct HttpTranslator {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTranslator {
    /// Build a client for the given endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the translation endpoint
    /// * `api_key` - Optional bearer token, sent as an `Authorization` header
    /// * `timeout` - Per-request timeout
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    async fn request(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, TranslateError> {
        let request = TranslationRequest {
            text,
            source_lang: source.code(),
            target_lang: target.code(),
        };

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("Authorization", format!("Bearer {}", key));
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslateError::Service { status, body });
        }

        let parsed: TranslationResponse = response.json().await?;

        if parsed.translated_text.trim().is_empty() {
            return Err(TranslateError::EmptyResponse);
        }

        debug!(
            "Translated {} chars from {} to {}",
            text.len(),
            source.code(),
            target.code()
        );

        Ok(parsed.translated_text)
    }
}

impl Translator for HttpTranslator {
    fn translate<'a>(
        &'a self,
        text: &'a str,
        source: Language,
        target: Language,
    ) -> BoxFuture<'a, Result<String, TranslateError>> {
        Box::pin(self.request(text, source, target))
    }
}
