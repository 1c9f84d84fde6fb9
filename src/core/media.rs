//! Asset probing via ffprobe. The probe is a blocking subprocess, so it
//! runs on the blocking pool and the editor keeps a usable fallback
//! duration when ffprobe is missing or the file is unreadable.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::constants::FALLBACK_ASSET_DURATION_SECONDS;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to launch ffprobe: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("ffprobe exited with an error: {0}")]
    Failed(String),
    #[error("ffprobe reported an unparseable duration: {0:?}")]
    BadDuration(String),
}

/// Ask ffprobe for a file's duration in seconds.
pub fn probe_duration(path: &Path) -> Result<f64, ProbeError> {
    let output = Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ])
        .arg(path)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(ProbeError::Failed(stderr));
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    stdout
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d > 0.0)
        .ok_or(ProbeError::BadDuration(stdout))
}

/// Resolve an asset's duration without blocking the UI. Probe failures
/// degrade to a fixed placeholder so a clip can still be placed and
/// trimmed by hand.
pub async fn resolve_duration(path: PathBuf) -> f64 {
    let result = tokio::task::spawn_blocking(move || probe_duration(&path)).await;
    match result {
        Ok(Ok(duration)) => duration,
        Ok(Err(err)) => {
            log::warn!("media probe failed, using fallback duration: {err}");
            FALLBACK_ASSET_DURATION_SECONDS
        }
        Err(err) => {
            log::warn!("media probe task panicked, using fallback duration: {err}");
            FALLBACK_ASSET_DURATION_SECONDS
        }
    }
}
