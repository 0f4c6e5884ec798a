mod artifact_store;
mod clock;
mod speech_synthesizer;
mod transcription_service;
mod translator;

pub use artifact_store::{ArtifactStore, ArtifactStoreError, TEXT_CONTENT_TYPE};
pub use clock::Clock;
pub use speech_synthesizer::{
    SpeechSynthesizer, SpeechSynthesizerError, SynthesisRequest, SynthesisResponse,
};
pub use transcription_service::{StartJobRequest, TranscriptionService, TranscriptionServiceError};
pub use translator::{TranslationError, Translator};
