use crate::application::ports::{ArtifactStoreError, TranslationError};

use super::{SynthesisError, TranscriptionJobError};

/// Fatal failure while processing an audio file, tagged by stage.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("storage ({stage}): {source}")]
    Storage {
        stage: &'static str,
        #[source]
        source: ArtifactStoreError,
    },
    #[error("validation ({stage}): {message}")]
    Validation { stage: &'static str, message: String },
    #[error("transcription: {0}")]
    Transcription(#[source] TranscriptionJobError),
    #[error("timeout: transcription job {job_name} did not finish within {timeout_secs}s")]
    Timeout { job_name: String, timeout_secs: u64 },
    #[error("translation to '{language}': {source}")]
    Translation {
        language: String,
        #[source]
        source: TranslationError,
    },
    #[error("synthesis for '{language}': {source}")]
    Synthesis {
        language: String,
        #[source]
        source: SynthesisError,
    },
    #[error("parse ({path}): {message}")]
    Parse { path: String, message: String },
    #[error("{failed} of {total} audio files failed: {summary}")]
    BatchFailed {
        failed: usize,
        total: usize,
        summary: String,
    },
}

impl PipelineError {
    pub fn storage(stage: &'static str, source: ArtifactStoreError) -> Self {
        match source {
            ArtifactStoreError::Parse { path, message } => PipelineError::Parse { path, message },
            source => PipelineError::Storage { stage, source },
        }
    }

    pub fn synthesis(language: &str, source: SynthesisError) -> Self {
        match source {
            SynthesisError::MissingAudioStream { .. } => PipelineError::Validation {
                stage: "synthesize speech",
                message: format!("{} ({})", source, language),
            },
            source => PipelineError::Synthesis {
                language: language.to_string(),
                source,
            },
        }
    }
}

impl From<TranscriptionJobError> for PipelineError {
    fn from(e: TranscriptionJobError) -> Self {
        match e {
            TranscriptionJobError::TimedOut {
                job_name,
                timeout_secs,
            } => PipelineError::Timeout {
                job_name,
                timeout_secs,
            },
            other => PipelineError::Transcription(other),
        }
    }
}
