use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::{
    DEFAULT_JOB_TIMEOUT, DEFAULT_POLL_INTERVAL, FailurePolicy, PipelineOptions,
};
use crate::domain::{AudioFormat, SynthesisEngine, VoiceMap};

use super::env_reader::{get_env, parse_voice_overrides, split_languages};
use super::environment::DeploymentStage;

/// Run configuration, built once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    pub stage: DeploymentStage,
    pub input_dir: PathBuf,
    pub storage: StorageSettings,
    pub transcription: TranscriptionSettings,
    pub translation: TranslationSettings,
    pub synthesis: SynthesisSettings,
    pub failure_policy: FailurePolicy,
    pub logging: LoggingSettings,
}

/// Transcribe reads its media from and writes its results to this bucket,
/// so every artifact lives there too.
#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub region: Option<String>,
    pub bucket: String,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    pub language_code: String,
    pub poll_interval: Duration,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct TranslationSettings {
    pub source_language: String,
    pub target_languages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SynthesisSettings {
    pub engine: SynthesisEngine,
    pub output_format: AudioFormat,
    pub voice_overrides: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub json_format: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let stage = DeploymentStage::from(get_env(&lookup, "ENV_PREFIX", "beta"));

        let storage = StorageSettings {
            region: non_empty(get_env(&lookup, "AWS_REGION", "")),
            bucket: non_empty(get_env(&lookup, "S3_BUCKET", ""))
                .ok_or(SettingsError::Missing("S3_BUCKET"))?,
        };

        let language_code = get_env(&lookup, "TRANSCRIBE_LANGUAGE", "en-US");
        let transcription = TranscriptionSettings {
            poll_interval: seconds(
                &lookup,
                "TRANSCRIBE_POLL_INTERVAL_SECONDS",
                DEFAULT_POLL_INTERVAL,
            )
            .and_then(|interval| non_zero("TRANSCRIBE_POLL_INTERVAL_SECONDS", interval))?,
            timeout: seconds(&lookup, "TRANSCRIBE_TIMEOUT_SECONDS", DEFAULT_JOB_TIMEOUT)?,
            language_code,
        };

        let default_source = primary_subtag(&transcription.language_code);
        let translation = TranslationSettings {
            source_language: get_env(&lookup, "TRANSLATE_SOURCE_LANGUAGE", &default_source),
            target_languages: split_languages(&get_env(&lookup, "TARGET_LANGUAGES", "es,fr")),
        };

        let synthesis = SynthesisSettings {
            engine: SynthesisEngine::new(get_env(&lookup, "POLLY_ENGINE", "neural")),
            output_format: parse(&lookup, "POLLY_OUTPUT_FORMAT", "mp3")?,
            voice_overrides: parse_voice_overrides(&get_env(&lookup, "VOICE_MAP", "")).map_err(
                |entry| SettingsError::Invalid {
                    name: "VOICE_MAP",
                    reason: format!("expected lang=Voice, got '{}'", entry),
                },
            )?,
        };

        Ok(Self {
            stage,
            input_dir: PathBuf::from(get_env(&lookup, "INPUT_DIR", "audio_inputs")),
            storage,
            transcription,
            translation,
            synthesis,
            failure_policy: parse(&lookup, "FAILURE_POLICY", "abort")?,
            logging: LoggingSettings {
                json_format: get_env(&lookup, "LOG_FORMAT", "text").eq_ignore_ascii_case("json"),
            },
        })
    }

    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            env_prefix: self.stage.as_str().to_string(),
            bucket: self.storage.bucket.clone(),
            transcribe_language: self.transcription.language_code.clone(),
            translate_source_language: self.translation.source_language.clone(),
            target_languages: self.translation.target_languages.clone(),
            engine: self.synthesis.engine.clone(),
            output_format: self.synthesis.output_format,
            voices: VoiceMap::with_overrides(self.synthesis.voice_overrides.clone()),
            failure_policy: self.failure_policy,
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn primary_subtag(code: &str) -> String {
    code.split('-').next().unwrap_or(code).to_string()
}

fn seconds<F>(lookup: &F, name: &'static str, default: Duration) -> Result<Duration, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = get_env(lookup, name, &default.as_secs().to_string());
    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| SettingsError::Invalid {
            name,
            reason: format!("{} ({})", raw, e),
        })
}

fn non_zero(name: &'static str, value: Duration) -> Result<Duration, SettingsError> {
    if value.is_zero() {
        return Err(SettingsError::Invalid {
            name,
            reason: "must be at least 1 second".to_string(),
        });
    }
    Ok(value)
}

fn parse<F, T>(lookup: &F, name: &'static str, default: &str) -> Result<T, SettingsError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr<Err = String>,
{
    get_env(lookup, name, default)
        .parse()
        .map_err(|reason| SettingsError::Invalid { name, reason })
}
