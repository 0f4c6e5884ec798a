use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::{AudioFormat, SynthesisEngine, VoiceId};

#[derive(Debug, Clone, Copy)]
pub struct SynthesisRequest<'a> {
    pub text: &'a str,
    pub voice: &'a VoiceId,
    pub output_format: AudioFormat,
    pub engine: &'a SynthesisEngine,
}

/// A successful call may still come back without audio; `None` signals that.
#[derive(Debug, Clone, Default)]
pub struct SynthesisResponse {
    pub audio_stream: Option<Bytes>,
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        request: SynthesisRequest<'_>,
    ) -> Result<SynthesisResponse, SpeechSynthesizerError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SpeechSynthesizerError {
    /// Rejected by the service; the next engine tier may still succeed.
    #[error("service error: {0}")]
    Service(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("reading audio stream failed: {0}")]
    StreamRead(String),
}

impl SpeechSynthesizerError {
    pub fn allows_fallback(&self) -> bool {
        matches!(self, SpeechSynthesizerError::Service(_))
    }
}
