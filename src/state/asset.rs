use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::utils::local_file_url;

use super::Medium;

/// An imported media file shown in the asset panel. Assets are
/// project-local references; importing never copies the file.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetEntry {
    pub id: Uuid,
    pub name: String,
    pub path: PathBuf,
    /// file:// URL handed to media elements and to timeline clips.
    pub url: String,
    pub medium: Medium,
    /// Probed length in seconds. None while the probe is in flight.
    pub duration: Option<f64>,
}

impl AssetEntry {
    pub fn new(path: PathBuf, medium: Medium) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let url = local_file_url(&path);
        Self {
            id: Uuid::new_v4(),
            name,
            path,
            url,
            medium,
            duration: None,
        }
    }
}

/// Classify a file by its MIME type. Anything that is neither video nor
/// audio is rejected rather than guessed at.
pub fn classify_media(path: &Path) -> Option<Medium> {
    let mime = mime_guess::from_path(path).first()?;
    match mime.type_().as_str() {
        "video" => Some(Medium::Video),
        "audio" => Some(Medium::Audio),
        _ => None,
    }
}
