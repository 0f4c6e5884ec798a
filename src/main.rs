use std::sync::Arc;

use polyvox::application::services::{
    PipelineDriver, SpeechSynthesisService, TranscriptionOrchestrator, discover_inputs,
};
use polyvox::infrastructure::aws::{
    AwsTranscribeService, AwsTranslator, PollySynthesizer, load_sdk_config,
};
use polyvox::infrastructure::clock::TokioClock;
use polyvox::infrastructure::observability::{TracingConfig, init_tracing};
use polyvox::infrastructure::storage::StoreFactory;
use polyvox::presentation::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env()?;
    init_tracing(&TracingConfig::new(
        settings.stage.as_str(),
        settings.logging.json_format,
    ));

    let inputs = discover_inputs(&settings.input_dir).await?;
    if inputs.is_empty() {
        tracing::warn!(input_dir = %settings.input_dir.display(), "No audio files found");
        return Ok(());
    }
    tracing::info!(
        files = inputs.len(),
        languages = ?settings.translation.target_languages,
        engine = %settings.synthesis.engine,
        failure_policy = %settings.failure_policy,
        "Starting pipeline run"
    );

    let store = StoreFactory::create(&settings.storage)?;
    let sdk_config = load_sdk_config(settings.storage.region.as_deref()).await;

    let transcription = TranscriptionOrchestrator::new(
        Arc::new(AwsTranscribeService::new(&sdk_config)),
        Arc::new(TokioClock::new()),
        settings.transcription.poll_interval,
        settings.transcription.timeout,
    );
    let synthesis = SpeechSynthesisService::new(Arc::new(PollySynthesizer::new(&sdk_config)));

    let driver = PipelineDriver::new(
        store,
        transcription,
        Arc::new(AwsTranslator::new(&sdk_config)),
        synthesis,
        settings.pipeline_options(),
    );

    let report = driver.run(&inputs).await?;
    for artifacts in &report.processed {
        tracing::info!(
            file = %artifacts.file_name,
            job_name = %artifacts.job_name,
            transcript = %artifacts.transcript,
            outputs = artifacts.translations.len() + artifacts.synthesized_audio.len(),
            "Artifacts published"
        );
    }

    Ok(())
}
