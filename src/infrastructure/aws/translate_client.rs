use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_translate::Client;
use aws_sdk_translate::error::DisplayErrorContext;

use crate::application::ports::{TranslationError, Translator};

/// Amazon Translate, one synchronous call per text.
///
/// Texts over the service's size limit are rejected, not split.
pub struct AwsTranslator {
    client: Client,
}

impl AwsTranslator {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl Translator for AwsTranslator {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslationError> {
        tracing::debug!(
            source_lang,
            target_lang,
            chars = text.len(),
            "Sending text to Amazon Translate"
        );

        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source_lang)
            .target_language_code(target_lang)
            .send()
            .await
            .map_err(|e| {
                TranslationError::ApiRequestFailed(DisplayErrorContext(&e).to_string())
            })?;

        Ok(output.translated_text().to_string())
    }
}
