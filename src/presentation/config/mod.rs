mod env_reader;
mod environment;
mod settings;

pub use env_reader::{get_env, parse_voice_overrides, split_languages};
pub use environment::DeploymentStage;
pub use settings::{
    LoggingSettings, Settings, SettingsError, StorageSettings, SynthesisSettings,
    TranscriptionSettings, TranslationSettings,
};
