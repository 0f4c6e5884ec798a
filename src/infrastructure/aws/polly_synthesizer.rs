use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_polly::Client;
use aws_sdk_polly::error::{DisplayErrorContext, SdkError};
use aws_sdk_polly::types::{Engine, OutputFormat, VoiceId as PollyVoiceId};

use crate::application::ports::{
    SpeechSynthesizer, SpeechSynthesizerError, SynthesisRequest, SynthesisResponse,
};

/// Amazon Polly speech synthesis.
pub struct PollySynthesizer {
    client: Client,
}

impl PollySynthesizer {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for PollySynthesizer {
    async fn synthesize(
        &self,
        request: SynthesisRequest<'_>,
    ) -> Result<SynthesisResponse, SpeechSynthesizerError> {
        let output = self
            .client
            .synthesize_speech()
            .text(request.text)
            .voice_id(PollyVoiceId::from(request.voice.as_str()))
            .output_format(OutputFormat::from(request.output_format.as_str()))
            .engine(Engine::from(request.engine.as_str()))
            .send()
            .await
            .map_err(|e| match e {
                SdkError::ServiceError(_) => {
                    SpeechSynthesizerError::Service(DisplayErrorContext(&e).to_string())
                }
                _ => SpeechSynthesizerError::Transport(DisplayErrorContext(&e).to_string()),
            })?;

        let audio = output
            .audio_stream
            .collect()
            .await
            .map_err(|e| SpeechSynthesizerError::StreamRead(e.to_string()))?
            .into_bytes();

        Ok(SynthesisResponse {
            audio_stream: (!audio.is_empty()).then_some(audio),
        })
    }
}
