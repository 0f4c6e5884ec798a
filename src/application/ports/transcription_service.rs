use async_trait::async_trait;

use crate::domain::{JobName, JobState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartJobRequest {
    pub job_name: JobName,
    pub media_uri: String,
    pub language_code: String,
    pub output_bucket: String,
    pub output_key: String,
}

/// Asynchronous speech-to-text job API.
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    async fn start_job(&self, request: &StartJobRequest) -> Result<(), TranscriptionServiceError>;

    async fn job_state(&self, job_name: &JobName) -> Result<JobState, TranscriptionServiceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionServiceError {
    #[error("start job request failed: {0}")]
    StartFailed(String),
    #[error("job status request failed: {0}")]
    StatusFailed(String),
    #[error("job record missing from response: {0}")]
    MissingJob(String),
}
