use serde_json::json;

use polyvox::domain::{TranscriptExtractionError, extract_transcript};

#[test]
fn given_padded_transcript_when_extracting_then_returns_trimmed_text() {
    let output = json!({"results": {"transcripts": [{"transcript": " hi "}]}});

    assert_eq!(extract_transcript(&output).unwrap(), "hi");
}

#[test]
fn given_empty_transcript_list_when_extracting_then_fails() {
    let output = json!({"results": {"transcripts": []}});

    assert_eq!(
        extract_transcript(&output),
        Err(TranscriptExtractionError::NoTranscripts)
    );
}

#[test]
fn given_whitespace_only_transcript_when_extracting_then_fails() {
    let output = json!({"results": {"transcripts": [{"transcript": "  "}]}});

    assert_eq!(
        extract_transcript(&output),
        Err(TranscriptExtractionError::EmptyTranscript)
    );
}

#[test]
fn given_missing_results_when_extracting_then_reports_no_transcripts() {
    let output = json!({"jobName": "x", "status": "COMPLETED"});

    assert_eq!(
        extract_transcript(&output),
        Err(TranscriptExtractionError::NoTranscripts)
    );
}

#[test]
fn given_several_transcripts_when_extracting_then_only_first_is_used() {
    let output = json!({"results": {"transcripts": [
        {"transcript": "first channel"},
        {"transcript": "second channel"}
    ]}});

    assert_eq!(extract_transcript(&output).unwrap(), "first channel");
}

#[test]
fn given_non_string_transcript_when_extracting_then_reports_unexpected_shape() {
    let output = json!({"results": {"transcripts": [{"transcript": 42}]}});

    assert!(matches!(
        extract_transcript(&output),
        Err(TranscriptExtractionError::UnexpectedShape(_))
    ));
}
