mod fake_clock;
mod scripted_synthesizer;

pub use fake_clock::FakeClock;
pub use scripted_synthesizer::ScriptedSynthesizer;
pub use scripted_transcription::ScriptedTranscriptionService;
pub use stub_translator::StubTranslator;

pub fn transcript_json(text: &str) -> String {
    serde_json::json!({
        "jobName": "test-job",
        "results": { "transcripts": [{ "transcript": text }] },
        "status": "COMPLETED"
    })
    .to_string()
}
