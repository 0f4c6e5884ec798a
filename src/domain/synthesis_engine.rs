use std::fmt;

/// Named quality tier for speech synthesis (`standard`, `neural`, ...).
///
/// Kept as a free-form name: an engine unknown to the service fails at
/// request time and then falls back to `standard` like any other
/// service-side rejection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SynthesisEngine(String);

impl SynthesisEngine {
    pub const STANDARD: &'static str = "standard";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().trim().to_lowercase())
    }

    pub fn standard() -> Self {
        Self(Self::STANDARD.to_string())
    }

    pub fn is_standard(&self) -> bool {
        self.0 == Self::STANDARD
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Engines to try in order: the preference, then `standard` unless the
    /// preference already is `standard`.
    pub fn attempt_order(&self) -> Vec<SynthesisEngine> {
        if self.is_standard() {
            vec![Self::standard()]
        } else {
            vec![self.clone(), Self::standard()]
        }
    }
}

impl Default for SynthesisEngine {
    fn default() -> Self {
        Self::new("neural")
    }
}

impl fmt::Display for SynthesisEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
