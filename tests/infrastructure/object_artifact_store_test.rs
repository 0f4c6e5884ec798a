use std::sync::Arc;

use bytes::Bytes;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{Attribute, ObjectStore};

use polyvox::application::ports::{ArtifactStore, ArtifactStoreError};
use polyvox::domain::{StorageFolder, StoragePath};
use polyvox::infrastructure::storage::ObjectArtifactStore;

fn in_memory_store() -> (Arc<dyn ObjectStore>, ObjectArtifactStore) {
    let backend: Arc<dyn ObjectStore> = Arc::new(InMemory::new());
    let store = ObjectArtifactStore::new(backend.clone(), "s3://bucket/");
    (backend, store)
}

#[tokio::test]
async fn given_text_when_putting_then_stored_as_utf8_plain_text() {
    let (backend, store) = in_memory_store();
    let path = StoragePath::in_folder("beta", StorageFolder::Transcripts, "x.txt");

    store.put_text(&path, "¡Hola, señor!").await.unwrap();

    let result = backend.get(&StorePath::from("beta/transcripts/x.txt")).await.unwrap();
    let content_type: Option<&str> = result
        .attributes
        .get(&Attribute::ContentType)
        .map(|v| v.as_ref());
    assert_eq!(content_type, Some("text/plain; charset=utf-8"));
    let bytes = result.bytes().await.unwrap();
    assert_eq!(&bytes[..], "¡Hola, señor!".as_bytes());
}

#[tokio::test]
async fn given_json_object_when_getting_json_then_parses_it() {
    let (backend, store) = in_memory_store();
    backend
        .put(
            &StorePath::from("beta/transcribe_jobs/job.json"),
            Bytes::from_static(br#"{"results":{"transcripts":[{"transcript":"hi"}]}}"#).into(),
        )
        .await
        .unwrap();
    let path = StoragePath::in_folder("beta", StorageFolder::TranscribeJobs, "job.json");

    let value = store.get_json(&path).await.unwrap();

    assert_eq!(value["results"]["transcripts"][0]["transcript"], "hi");
}

#[tokio::test]
async fn given_invalid_json_when_getting_json_then_returns_parse_error() {
    let (backend, store) = in_memory_store();
    backend
        .put(
            &StorePath::from("beta/transcribe_jobs/bad.json"),
            Bytes::from_static(b"not json at all").into(),
        )
        .await
        .unwrap();
    let path = StoragePath::in_folder("beta", StorageFolder::TranscribeJobs, "bad.json");

    let err = store.get_json(&path).await.unwrap_err();

    assert!(matches!(err, ArtifactStoreError::Parse { .. }));
}

#[tokio::test]
async fn given_missing_object_when_getting_json_then_returns_not_found() {
    let (_backend, store) = in_memory_store();
    let path = StoragePath::in_folder("beta", StorageFolder::TranscribeJobs, "missing.json");

    let err = store.get_json(&path).await.unwrap_err();

    assert!(matches!(err, ArtifactStoreError::NotFound(_)));
}

#[tokio::test]
async fn given_local_file_when_uploading_then_bytes_match_original() {
    let (backend, store) = in_memory_store();
    let dir = tempfile::TempDir::new().unwrap();
    let local = dir.path().join("hello.mp3");
    let content: Vec<u8> = (0..3_000_000u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(&local, &content).unwrap();
    let path = StoragePath::in_folder("beta", StorageFolder::AudioInputs, "hello.mp3");

    let size = store.upload_file(&local, &path).await.unwrap();

    assert_eq!(size, content.len() as u64);
    let stored = backend
        .get(&StorePath::from("beta/audio_inputs/hello.mp3"))
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    assert_eq!(stored.len(), content.len());
    assert_eq!(&stored[..], &content[..]);
}

#[tokio::test]
async fn given_missing_local_file_when_uploading_then_returns_io_error() {
    let (_backend, store) = in_memory_store();
    let dir = tempfile::TempDir::new().unwrap();
    let path = StoragePath::in_folder("beta", StorageFolder::AudioInputs, "ghost.mp3");

    let err = store
        .upload_file(&dir.path().join("ghost.mp3"), &path)
        .await
        .unwrap_err();

    assert!(matches!(err, ArtifactStoreError::Io(_)));
}

#[test]
fn given_bucket_uri_base_when_building_object_uri_then_joins_without_double_slash() {
    let (_backend, store) = in_memory_store();
    let path = StoragePath::in_folder("beta", StorageFolder::AudioInputs, "hello.mp3");

    assert_eq!(store.object_uri(&path), "s3://bucket/beta/audio_inputs/hello.mp3");
}

#[tokio::test]
async fn given_audio_bytes_when_putting_then_mime_type_is_stored() {
    let (backend, store) = in_memory_store();
    let path = StoragePath::for_language("prod", StorageFolder::SynthesizedAudio, "es", "a.mp3");

    store
        .put_bytes(&path, Bytes::from_static(b"mp3-bytes"), "audio/mpeg")
        .await
        .unwrap();

    let result = backend
        .get(&StorePath::from("prod/synthesized_audio/es/a.mp3"))
        .await
        .unwrap();
    let content_type: Option<&str> = result
        .attributes
        .get(&Attribute::ContentType)
        .map(|v| v.as_ref());
    assert_eq!(content_type, Some("audio/mpeg"));
    assert_eq!(&result.bytes().await.unwrap()[..], b"mp3-bytes");
}

#[tokio::test]
async fn given_file_larger_than_one_part_when_uploading_then_all_parts_arrive_in_order() {
    let (backend, store) = in_memory_store();
    let dir = tempfile::TempDir::new().unwrap();
    let local = dir.path().join("long_talk.wav");
    let content: Vec<u8> = (0..12 * 1024 * 1024 + 4321u32)
        .map(|i| (i % 253) as u8)
        .collect();
    std::fs::write(&local, &content).unwrap();
    let path = StoragePath::in_folder("beta", StorageFolder::AudioInputs, "long_talk.wav");

    let size = store.upload_file(&local, &path).await.unwrap();

    assert_eq!(size, content.len() as u64);
    let stored = backend
        .get(&StorePath::from("beta/audio_inputs/long_talk.wav"))
        .await
        .unwrap()
        .bytes()
        .await
        .unwrap();
    assert_eq!(stored.len(), content.len());
    assert!(stored[..] == content[..]);
}

#[test]
fn given_s3_settings_when_creating_store_then_object_uris_point_into_the_bucket() {
    use polyvox::infrastructure::storage::StoreFactory;
    use polyvox::presentation::config::StorageSettings;

    let settings = StorageSettings {
        region: Some("us-east-1".to_string()),
        bucket: "media-bucket".to_string(),
    };

    let store = StoreFactory::create(&settings).unwrap();
    let path = StoragePath::in_folder("beta", StorageFolder::AudioInputs, "talk.mp3");

    assert_eq!(store.object_uri(&path), "s3://media-bucket/beta/audio_inputs/talk.mp3");
}

#[test]
fn given_empty_bucket_when_creating_store_then_fails() {
    use polyvox::infrastructure::storage::StoreFactory;
    use polyvox::presentation::config::StorageSettings;

    let settings = StorageSettings {
        region: Some("us-east-1".to_string()),
        bucket: String::new(),
    };

    assert!(matches!(
        StoreFactory::create(&settings),
        Err(ArtifactStoreError::Configuration(_))
    ));
}
