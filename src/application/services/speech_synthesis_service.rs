use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{SpeechSynthesizer, SpeechSynthesizerError, SynthesisRequest};
use crate::domain::{AudioFormat, SynthesisEngine, VoiceId};

/// Synthesis with engine-tier fallback.
pub struct SpeechSynthesisService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl SpeechSynthesisService {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synthesizer }
    }

    /// Tries each engine of `engine_preference.attempt_order()` and returns
    /// the first audio produced.
    ///
    /// Only service-side rejections move on to the next engine. A success
    /// without audio fails immediately.
    pub async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceId,
        engine_preference: &SynthesisEngine,
        output_format: AudioFormat,
    ) -> Result<Bytes, SynthesisError> {
        let mut last_error: Option<SpeechSynthesizerError> = None;

        for engine in engine_preference.attempt_order() {
            let request = SynthesisRequest {
                text,
                voice,
                output_format,
                engine: &engine,
            };

            match self.synthesizer.synthesize(request).await {
                Ok(response) => {
                    let audio = response
                        .audio_stream
                        .ok_or_else(|| SynthesisError::MissingAudioStream {
                            voice: voice.to_string(),
                            engine: engine.to_string(),
                        })?;
                    tracing::debug!(
                        voice = %voice,
                        engine = %engine,
                        bytes = audio.len(),
                        "Speech synthesized"
                    );
                    return Ok(audio);
                }
                Err(e) if e.allows_fallback() => {
                    tracing::warn!(
                        voice = %voice,
                        engine = %engine,
                        error = %e,
                        "Synthesis engine rejected request"
                    );
                    last_error = Some(e);
                }
                Err(e) => {
                    return Err(SynthesisError::Request {
                        voice: voice.to_string(),
                        engine: engine.to_string(),
                        source: e,
                    });
                }
            }
        }

        Err(SynthesisError::Exhausted {
            voice: voice.to_string(),
            last_error: last_error
                .unwrap_or_else(|| SpeechSynthesizerError::Service("no engine attempted".into())),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis response for voice '{voice}' (engine {engine}) did not include an audio stream")]
    MissingAudioStream { voice: String, engine: String },
    #[error("synthesis failed for voice '{voice}'. Last error: {last_error}")]
    Exhausted {
        voice: String,
        #[source]
        last_error: SpeechSynthesizerError,
    },
    #[error("synthesis request for voice '{voice}' (engine {engine}) failed: {source}")]
    Request {
        voice: String,
        engine: String,
        #[source]
        source: SpeechSynthesizerError,
    },
}
