use std::fmt;

use uuid::Uuid;

const SUFFIX_HEX_LEN: usize = 16;

/// Unique name of one transcription request: `{env}-{base}-{hex}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobName(String);

impl JobName {
    /// Builds a name with an 8-byte random suffix so repeated runs over the
    /// same file never collide.
    pub fn generate(env_prefix: &str, base_name: &str) -> Self {
        let random = Uuid::new_v4().simple().to_string();
        Self::with_suffix(env_prefix, base_name, &random[..SUFFIX_HEX_LEN])
    }

    pub fn with_suffix(env_prefix: &str, base_name: &str, suffix: &str) -> Self {
        Self(format!(
            "{}-{}-{}",
            sanitize(env_prefix),
            sanitize(base_name),
            suffix
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Transcription job names only accept [0-9a-zA-Z._-].
fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
