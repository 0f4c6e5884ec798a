use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::Instrument;

use crate::application::ports::{ArtifactStore, StartJobRequest, Translator};
use crate::domain::{
    AudioFormat, AudioInput, JobName, StorageFolder, StoragePath, SynthesisEngine, VoiceId,
    VoiceMap, extract_transcript, preview_text,
};

use super::{PipelineError, SpeechSynthesisService, TranscriptionOrchestrator};

/// What happens to the rest of the batch when one file fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    #[default]
    Abort,
    Continue,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Abort => "abort",
            FailurePolicy::Continue => "continue",
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "abort" => Ok(FailurePolicy::Abort),
            "continue" => Ok(FailurePolicy::Continue),
            other => Err(format!(
                "Invalid failure policy: {}. Expected: abort or continue",
                other
            )),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-run parameters, fixed for the whole batch.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub env_prefix: String,
    pub bucket: String,
    pub transcribe_language: String,
    pub translate_source_language: String,
    pub target_languages: Vec<String>,
    pub engine: SynthesisEngine,
    pub output_format: AudioFormat,
    pub voices: VoiceMap,
    pub failure_policy: FailurePolicy,
}

/// Keys written for one input file, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifacts {
    pub file_name: String,
    pub job_name: JobName,
    pub audio_input: StoragePath,
    pub transcription_output: StoragePath,
    pub transcript: StoragePath,
    pub translations: Vec<StoragePath>,
    pub synthesized_audio: Vec<StoragePath>,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub processed: Vec<FileArtifacts>,
    pub failed: Vec<FileFailure>,
}

#[derive(Debug)]
pub struct FileFailure {
    pub file_name: String,
    pub error: PipelineError,
}

/// Runs upload, transcribe, translate, synthesize and publish for each
/// input, strictly one file and one language at a time.
///
/// Nothing is rolled back: artifacts written before a failure stay.
pub struct PipelineDriver {
    store: Arc<dyn ArtifactStore>,
    transcription: TranscriptionOrchestrator,
    translator: Arc<dyn Translator>,
    synthesis: SpeechSynthesisService,
    options: PipelineOptions,
}

impl PipelineDriver {
    pub fn new(
        store: Arc<dyn ArtifactStore>,
        transcription: TranscriptionOrchestrator,
        translator: Arc<dyn Translator>,
        synthesis: SpeechSynthesisService,
        options: PipelineOptions,
    ) -> Self {
        Self {
            store,
            transcription,
            translator,
            synthesis,
            options,
        }
    }

    pub async fn run(&self, inputs: &[AudioInput]) -> Result<RunReport, PipelineError> {
        let mut report = RunReport::default();

        for input in inputs {
            let span = tracing::info_span!(
                "audio_file",
                file = %input.file_name,
                env = %self.options.env_prefix,
            );

            match self.process_file(input).instrument(span).await {
                Ok(artifacts) => report.processed.push(artifacts),
                Err(e) => {
                    tracing::error!(file = %input.file_name, error = %e, "Audio file failed");
                    match self.options.failure_policy {
                        FailurePolicy::Abort => return Err(e),
                        FailurePolicy::Continue => report.failed.push(FileFailure {
                            file_name: input.file_name.clone(),
                            error: e,
                        }),
                    }
                }
            }
        }

        tracing::info!(
            processed = report.processed.len(),
            failed = report.failed.len(),
            "Pipeline run finished"
        );

        if report.failed.is_empty() {
            Ok(report)
        } else {
            let summary = report
                .failed
                .iter()
                .map(|f| format!("{}: {}", f.file_name, f.error))
                .collect::<Vec<_>>()
                .join("; ");
            Err(PipelineError::BatchFailed {
                failed: report.failed.len(),
                total: inputs.len(),
                summary,
            })
        }
    }

    pub async fn process_file(&self, input: &AudioInput) -> Result<FileArtifacts, PipelineError> {
        let env = self.options.env_prefix.as_str();
        let base = input.base_name.as_str();

        let audio_input = StoragePath::in_folder(env, StorageFolder::AudioInputs, &input.file_name);
        let bytes = self
            .store
            .upload_file(&input.path, &audio_input)
            .await
            .map_err(|e| PipelineError::storage("upload audio input", e))?;
        tracing::debug!(key = %audio_input, bytes, "Audio input uploaded");

        let job_name = JobName::generate(env, base);
        let transcription_output = StoragePath::in_folder(
            env,
            StorageFolder::TranscribeJobs,
            &format!("{}.json", job_name),
        );
        let request = StartJobRequest {
            job_name: job_name.clone(),
            media_uri: self.store.object_uri(&audio_input),
            language_code: self.options.transcribe_language.clone(),
            output_bucket: self.options.bucket.clone(),
            output_key: transcription_output.as_str().to_string(),
        };
        self.transcription.run_job(&request).await?;

        let job_output = self
            .store
            .get_json(&transcription_output)
            .await
            .map_err(|e| PipelineError::storage("read transcription output", e))?;
        let text = extract_transcript(&job_output).map_err(|e| PipelineError::Validation {
            stage: "extract transcript",
            message: format!("{} (job {})", e, job_name),
        })?;
        tracing::info!(
            job_name = %job_name,
            preview = %preview_text(&text),
            "Transcript extracted"
        );

        let transcript =
            StoragePath::in_folder(env, StorageFolder::Transcripts, &format!("{}.txt", base));
        self.store
            .put_text(&transcript, &text)
            .await
            .map_err(|e| PipelineError::storage("upload transcript", e))?;

        let voices = self.resolve_voices()?;
        let mut artifacts = FileArtifacts {
            file_name: input.file_name.clone(),
            job_name,
            audio_input,
            transcription_output,
            transcript,
            translations: Vec::with_capacity(voices.len()),
            synthesized_audio: Vec::with_capacity(voices.len()),
        };

        for (language, voice) in &voices {
            let (translation, audio) = self
                .process_language(&text, base, language, voice)
                .instrument(tracing::debug_span!("language", lang = %language))
                .await?;
            artifacts.translations.push(translation);
            artifacts.synthesized_audio.push(audio);
        }

        tracing::info!(languages = voices.len(), "Audio file processed");
        Ok(artifacts)
    }

    async fn process_language(
        &self,
        transcript: &str,
        base: &str,
        language: &str,
        voice: &VoiceId,
    ) -> Result<(StoragePath, StoragePath), PipelineError> {
        let env = self.options.env_prefix.as_str();

        let translated = self
            .translator
            .translate(transcript, &self.options.translate_source_language, language)
            .await
            .map_err(|source| PipelineError::Translation {
                language: language.to_string(),
                source,
            })?;
        tracing::debug!(chars = translated.chars().count(), "Transcript translated");

        let audio = self
            .synthesis
            .synthesize(
                &translated,
                voice,
                &self.options.engine,
                self.options.output_format,
            )
            .await
            .map_err(|e| PipelineError::synthesis(language, e))?;

        let translation = StoragePath::for_language(
            env,
            StorageFolder::Translations,
            language,
            &format!("{}.txt", base),
        );
        self.store
            .put_text(&translation, &translated)
            .await
            .map_err(|e| PipelineError::storage("upload translation", e))?;

        let format = self.options.output_format;
        let synthesized = StoragePath::for_language(
            env,
            StorageFolder::SynthesizedAudio,
            language,
            &format!("{}.{}", base, format.extension()),
        );
        self.store
            .put_bytes(&synthesized, audio, format.mime_type())
            .await
            .map_err(|e| PipelineError::storage("upload synthesized audio", e))?;

        Ok((translation, synthesized))
    }

    // Resolved up front so an unmapped language fails before any
    // translation for this file is written.
    fn resolve_voices(&self) -> Result<Vec<(String, VoiceId)>, PipelineError> {
        self.options
            .target_languages
            .iter()
            .map(|lang| {
                self.options
                    .voices
                    .resolve(lang)
                    .map(|voice| (lang.clone(), voice))
                    .map_err(|e| PipelineError::Configuration(e.to_string()))
            })
            .collect()
    }
}
