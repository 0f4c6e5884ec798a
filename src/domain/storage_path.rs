use std::fmt;

/// Top-level folders under a deployment stage prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFolder {
    AudioInputs,
    TranscribeJobs,
    Transcripts,
    Translations,
    SynthesizedAudio,
}

impl StorageFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageFolder::AudioInputs => "audio_inputs",
            StorageFolder::TranscribeJobs => "transcribe_jobs",
            StorageFolder::Transcripts => "transcripts",
            StorageFolder::Translations => "translations",
            StorageFolder::SynthesizedAudio => "synthesized_audio",
        }
    }
}

impl fmt::Display for StorageFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Object key of the form `{env_prefix}/{folder}/{filename}`.
///
/// Components are joined verbatim; callers supply URL-safe parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn new(env_prefix: &str, folder: &str, filename: &str) -> Self {
        Self(build_key(env_prefix, folder, filename))
    }

    pub fn in_folder(env_prefix: &str, folder: StorageFolder, filename: &str) -> Self {
        Self::new(env_prefix, folder.as_str(), filename)
    }

    /// Per-language artifact, e.g. `beta/translations/es/talk.txt`.
    pub fn for_language(
        env_prefix: &str,
        folder: StorageFolder,
        language: &str,
        filename: &str,
    ) -> Self {
        Self::new(
            env_prefix,
            &format!("{}/{}", folder.as_str(), language),
            filename,
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn build_key(env_prefix: &str, folder: &str, filename: &str) -> String {
    format!("{}/{}/{}", env_prefix, folder, filename)
}
