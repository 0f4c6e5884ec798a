mod polly_synthesizer;
mod sdk_config;
mod transcribe_service;
mod translate_client;

pub use polly_synthesizer::PollySynthesizer;
pub use sdk_config::load_sdk_config;
pub use transcribe_service::AwsTranscribeService;
pub use translate_client::AwsTranslator;
