use serde::Deserialize;
use serde_json::Value;

/// Shape of the JSON document a completed transcription job writes.
#[derive(Debug, Default, Deserialize)]
pub struct TranscriptionOutput {
    #[serde(default)]
    pub results: TranscriptionResults,
}

#[derive(Debug, Default, Deserialize)]
pub struct TranscriptionResults {
    #[serde(default)]
    pub transcripts: Vec<TranscriptAlternative>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TranscriptAlternative {
    #[serde(default)]
    pub transcript: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TranscriptExtractionError {
    #[error("no transcripts found in transcription output")]
    NoTranscripts,
    #[error("transcript text was empty in transcription output")]
    EmptyTranscript,
    #[error("transcription output has unexpected shape: {0}")]
    UnexpectedShape(String),
}

/// Returns the trimmed text of the first transcript entry.
///
/// Additional entries (multi-channel output) are ignored.
pub fn extract_transcript(job_output: &Value) -> Result<String, TranscriptExtractionError> {
    let output = TranscriptionOutput::deserialize(job_output)
        .map_err(|e| TranscriptExtractionError::UnexpectedShape(e.to_string()))?;

    let first = output
        .results
        .transcripts
        .first()
        .ok_or(TranscriptExtractionError::NoTranscripts)?;

    let text = first.transcript.trim();
    if text.is_empty() {
        return Err(TranscriptExtractionError::EmptyTranscript);
    }

    Ok(text.to_string())
}
