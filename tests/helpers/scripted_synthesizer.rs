use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use polyvox::application::ports::{
    SpeechSynthesizer, SpeechSynthesizerError, SynthesisRequest, SynthesisResponse,
};

type Outcome = Result<SynthesisResponse, SpeechSynthesizerError>;

/// Returns scripted outcomes in order, then echoes `audio:{voice}:{engine}`.
#[derive(Default)]
pub struct ScriptedSynthesizer {
    outcomes: Mutex<VecDeque<Outcome>>,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl ScriptedSynthesizer {
    pub fn with_outcomes(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn audio(bytes: &'static [u8]) -> Outcome {
        Ok(SynthesisResponse {
            audio_stream: Some(Bytes::from_static(bytes)),
        })
    }

    pub fn no_stream() -> Outcome {
        Ok(SynthesisResponse { audio_stream: None })
    }

    pub fn service_error(message: &str) -> Outcome {
        Err(SpeechSynthesizerError::Service(message.to_string()))
    }

    /// Engines requested, in order.
    pub fn engines(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, _, engine)| engine.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SpeechSynthesizer for ScriptedSynthesizer {
    async fn synthesize(
        &self,
        request: SynthesisRequest<'_>,
    ) -> Result<SynthesisResponse, SpeechSynthesizerError> {
        self.calls.lock().unwrap().push((
            request.text.to_string(),
            request.voice.to_string(),
            request.engine.to_string(),
        ));
        if let Some(outcome) = self.outcomes.lock().unwrap().pop_front() {
            return outcome;
        }
        Ok(SynthesisResponse {
            audio_stream: Some(Bytes::from(format!(
                "audio:{}:{}",
                request.voice, request.engine
            ))),
        })
    }
}
