use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_transcribe::Client;
use aws_sdk_transcribe::error::DisplayErrorContext;
use aws_sdk_transcribe::types::{LanguageCode, Media, TranscriptionJobStatus};

use crate::application::ports::{StartJobRequest, TranscriptionService, TranscriptionServiceError};
use crate::domain::{JobName, JobState, JobStatus};

/// Amazon Transcribe batch jobs.
pub struct AwsTranscribeService {
    client: Client,
}

impl AwsTranscribeService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

#[async_trait]
impl TranscriptionService for AwsTranscribeService {
    async fn start_job(&self, request: &StartJobRequest) -> Result<(), TranscriptionServiceError> {
        let media = Media::builder().media_file_uri(&request.media_uri).build();

        self.client
            .start_transcription_job()
            .transcription_job_name(request.job_name.as_str())
            .language_code(LanguageCode::from(request.language_code.as_str()))
            .media(media)
            .output_bucket_name(&request.output_bucket)
            .output_key(&request.output_key)
            .send()
            .await
            .map_err(|e| {
                TranscriptionServiceError::StartFailed(DisplayErrorContext(&e).to_string())
            })?;

        tracing::info!(job_name = %request.job_name, "Transcription job submitted");
        Ok(())
    }

    async fn job_state(&self, job_name: &JobName) -> Result<JobState, TranscriptionServiceError> {
        let output = self
            .client
            .get_transcription_job()
            .transcription_job_name(job_name.as_str())
            .send()
            .await
            .map_err(|e| {
                TranscriptionServiceError::StatusFailed(DisplayErrorContext(&e).to_string())
            })?;

        let job = output
            .transcription_job()
            .ok_or_else(|| TranscriptionServiceError::MissingJob(job_name.to_string()))?;

        let status = match job.transcription_job_status() {
            Some(TranscriptionJobStatus::Completed) => JobStatus::Completed,
            Some(TranscriptionJobStatus::Failed) => JobStatus::Failed,
            _ => JobStatus::InProgress,
        };

        Ok(JobState {
            status,
            failure_reason: job.failure_reason().map(str::to_string),
        })
    }
}
