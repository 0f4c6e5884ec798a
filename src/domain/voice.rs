use std::collections::HashMap;
use std::fmt;

const DEFAULT_VOICES: [(&str, &str); 5] = [
    ("es", "Lupe"),
    ("fr", "Lea"),
    ("de", "Vicki"),
    ("it", "Bianca"),
    ("pt", "Camila"),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("no synthesis voice mapped for language '{0}'")]
pub struct UnmappedLanguage(pub String);

/// Language code to synthesis voice table.
///
/// Unmapped languages are an error rather than a guess.
#[derive(Debug, Clone)]
pub struct VoiceMap {
    voices: HashMap<String, VoiceId>,
}

impl VoiceMap {
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::default();
        for (lang, voice) in overrides {
            map.voices
                .insert(lang.into().to_lowercase(), VoiceId::new(voice));
        }
        map
    }

    /// Exact code first, then the primary subtag (`es-MX` falls back to `es`).
    pub fn resolve(&self, lang_code: &str) -> Result<VoiceId, UnmappedLanguage> {
        let normalized = lang_code.trim().to_lowercase();
        if let Some(voice) = self.voices.get(&normalized) {
            return Ok(voice.clone());
        }

        normalized
            .split_once('-')
            .and_then(|(primary, _)| self.voices.get(primary))
            .cloned()
            .ok_or_else(|| UnmappedLanguage(lang_code.to_string()))
    }
}

impl Default for VoiceMap {
    fn default() -> Self {
        let voices = DEFAULT_VOICES
            .iter()
            .map(|(lang, voice)| (lang.to_string(), VoiceId::new(*voice)))
            .collect();
        Self { voices }
    }
}

/// Resolves against the built-in table.
pub fn resolve_voice(lang_code: &str) -> Result<VoiceId, UnmappedLanguage> {
    VoiceMap::default().resolve(lang_code)
}
