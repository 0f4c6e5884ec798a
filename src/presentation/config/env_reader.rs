/// Reads `name` through `lookup`, trimming whitespace; absent yields `default`.
pub fn get_env<F>(lookup: &F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| default.to_string())
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
pub fn split_languages(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses `lang=Voice` pairs; malformed entries are reported by name.
pub fn parse_voice_overrides(csv: &str) -> Result<Vec<(String, String)>, String> {
    split_languages(csv)
        .into_iter()
        .map(|entry| match entry.split_once('=') {
            Some((lang, voice)) if !lang.trim().is_empty() && !voice.trim().is_empty() => {
                Ok((lang.trim().to_string(), voice.trim().to_string()))
            }
            _ => Err(entry),
        })
        .collect()
}
