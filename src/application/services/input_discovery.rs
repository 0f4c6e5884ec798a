use std::path::Path;

use crate::domain::AudioInput;

use super::PipelineError;

/// Lists supported audio files directly under `dir`, sorted by file name.
pub async fn discover_inputs(dir: &Path) -> Result<Vec<AudioInput>, PipelineError> {
    let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
        PipelineError::Configuration(format!(
            "cannot read input directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let mut inputs = Vec::new();
    loop {
        let entry = entries.next_entry().await.map_err(|e| {
            PipelineError::Configuration(format!(
                "cannot list input directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        let Some(entry) = entry else { break };

        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }

        match AudioInput::from_path(entry.path()) {
            Some(input) => inputs.push(input),
            None => tracing::debug!(path = %entry.path().display(), "Skipping non-audio file"),
        }
    }

    inputs.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(inputs)
}
