mod audio_format;
mod audio_input;
mod job_name;
mod job_status;
mod poll_decision;
mod storage_path;
mod synthesis_engine;
mod text_preview;
mod transcript;
mod voice;

pub use audio_format::AudioFormat;
pub use audio_input::{AudioInput, is_supported_audio};
pub use job_name::JobName;
pub use job_status::{JobState, JobStatus};
pub use poll_decision::{PollDecision, decide};
pub use storage_path::{StorageFolder, StoragePath, build_key};
pub use synthesis_engine::SynthesisEngine;
pub use text_preview::preview_text;
pub use transcript::{
    TranscriptAlternative, TranscriptExtractionError, TranscriptionOutput, TranscriptionResults,
    extract_transcript,
};
pub use voice::{UnmappedLanguage, VoiceId, VoiceMap, resolve_voice};
