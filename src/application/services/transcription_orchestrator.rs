use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    Clock, StartJobRequest, TranscriptionService, TranscriptionServiceError,
};
use crate::domain::{JobName, JobState, JobStatus, PollDecision, decide};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_JOB_TIMEOUT: Duration = Duration::from_secs(900);

/// Submits transcription jobs and blocks until they settle.
///
/// Timing out only abandons the local wait; the remote job keeps running.
pub struct TranscriptionOrchestrator {
    service: Arc<dyn TranscriptionService>,
    clock: Arc<dyn Clock>,
    poll_interval: Duration,
    timeout: Duration,
}

impl TranscriptionOrchestrator {
    pub fn new(
        service: Arc<dyn TranscriptionService>,
        clock: Arc<dyn Clock>,
        poll_interval: Duration,
        timeout: Duration,
    ) -> Self {
        Self {
            service,
            clock,
            poll_interval,
            timeout,
        }
    }

    pub async fn start_job(&self, request: &StartJobRequest) -> Result<(), TranscriptionJobError> {
        tracing::debug!(
            job_name = %request.job_name,
            media_uri = %request.media_uri,
            language_code = %request.language_code,
            output_key = %request.output_key,
            "Starting transcription job"
        );
        self.service
            .start_job(request)
            .await
            .map_err(|source| TranscriptionJobError::Service {
                job_name: request.job_name.to_string(),
                source,
            })
    }

    /// Polls until COMPLETED or FAILED; the deadline is measured from the
    /// first poll.
    pub async fn wait_for_job(
        &self,
        job_name: &JobName,
    ) -> Result<JobState, TranscriptionJobError> {
        let started = self.clock.now();
        let mut polls: u32 = 0;

        loop {
            let state = self
                .service
                .job_state(job_name)
                .await
                .map_err(|source| TranscriptionJobError::Service {
                    job_name: job_name.to_string(),
                    source,
                })?;
            polls += 1;

            let elapsed = self.clock.now().saturating_sub(started);
            match decide(state.status, elapsed, self.timeout) {
                PollDecision::Done(status) => {
                    tracing::debug!(
                        job_name = %job_name,
                        status = %status,
                        polls,
                        elapsed_secs = elapsed.as_secs(),
                        "Transcription job settled"
                    );
                    return Ok(state);
                }
                PollDecision::TimedOut => {
                    return Err(TranscriptionJobError::TimedOut {
                        job_name: job_name.to_string(),
                        timeout_secs: self.timeout.as_secs(),
                    });
                }
                PollDecision::Continue => {
                    tracing::trace!(job_name = %job_name, polls, "Transcription job still running");
                    self.clock.sleep(self.poll_interval).await;
                }
            }
        }
    }

    /// Starts the job, waits for it, and fails unless it COMPLETED.
    pub async fn run_job(&self, request: &StartJobRequest) -> Result<(), TranscriptionJobError> {
        self.start_job(request).await?;
        let state = self.wait_for_job(&request.job_name).await?;

        match state.status {
            JobStatus::Completed => Ok(()),
            _ => Err(TranscriptionJobError::Failed {
                job_name: request.job_name.to_string(),
                reason: state
                    .failure_reason
                    .unwrap_or_else(|| "no reason reported".to_string()),
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionJobError {
    #[error("transcription service call for job {job_name} failed: {source}")]
    Service {
        job_name: String,
        #[source]
        source: TranscriptionServiceError,
    },
    #[error("transcription job {job_name} failed: {reason}")]
    Failed { job_name: String, reason: String },
    #[error("transcription job timed out after {timeout_secs}s: {job_name}")]
    TimedOut { job_name: String, timeout_secs: u64 },
}
