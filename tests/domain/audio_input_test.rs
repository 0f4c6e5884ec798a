use std::path::Path;

use polyvox::domain::{AudioInput, is_supported_audio};

#[test]
fn given_mp3_path_when_creating_input_then_file_and_base_names_are_derived() {
    let input = AudioInput::from_path("/data/audio_inputs/hello.mp3").unwrap();

    assert_eq!(input.file_name, "hello.mp3");
    assert_eq!(input.base_name, "hello");
}

#[test]
fn given_uppercase_extension_when_checking_then_is_supported() {
    assert!(is_supported_audio(Path::new("talk.WAV")));
}

#[test]
fn given_non_audio_file_when_creating_input_then_returns_none() {
    assert!(AudioInput::from_path("notes.txt").is_none());
    assert!(AudioInput::from_path("README").is_none());
}
