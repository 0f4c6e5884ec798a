mod input_discovery;
mod pipeline_driver;
mod pipeline_error;
mod speech_synthesis_service;
mod transcription_orchestrator;

pub use input_discovery::discover_inputs;
pub use pipeline_driver::{
    FailurePolicy, FileArtifacts, FileFailure, PipelineDriver, PipelineOptions, RunReport,
};
pub use pipeline_error::PipelineError;
pub use speech_synthesis_service::{SpeechSynthesisService, SynthesisError};
pub use transcription_orchestrator::{
    DEFAULT_JOB_TIMEOUT, DEFAULT_POLL_INTERVAL, TranscriptionJobError, TranscriptionOrchestrator,
};
