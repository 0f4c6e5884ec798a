use std::path::{Path, PathBuf};

const SUPPORTED_EXTENSIONS: [&str; 8] = ["mp3", "mp4", "wav", "flac", "ogg", "webm", "amr", "m4a"];

/// A local audio file queued for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioInput {
    pub path: PathBuf,
    pub file_name: String,
    pub base_name: String,
}

impl AudioInput {
    /// Returns `None` for paths without a UTF-8 file name or a supported
    /// audio extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        if !is_supported_audio(&path) {
            return None;
        }
        let file_name = path.file_name()?.to_str()?.to_string();
        let base_name = path.file_stem()?.to_str()?.to_string();
        Some(Self {
            path,
            file_name,
            base_name,
        })
    }
}

pub fn is_supported_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
