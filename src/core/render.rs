//! Remote render service client: manifest assembly, job submission, and
//! result polling. The service renders asynchronously; completion is
//! detected by probing for the output object while a side-channel
//! status file carries progress messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    EXPORT_HEIGHT, EXPORT_WIDTH, RENDER_POLL_INTERVAL_MS, RENDER_POLL_MAX_ATTEMPTS,
};
use crate::state::{Clip, Medium, TrackModel};

/// Preview text renders against a one-third-scale frame, so text metrics
/// are multiplied up for the full-resolution render.
const EXPORT_FONT_SCALE: f64 = 3.0;

pub const DEFAULT_RENDER_URL: &str = "http://localhost:8787";
pub const RENDER_URL_ENV: &str = "SHORTFORM_RENDER_URL";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("render service rejected the job: {0}")]
    Rejected(String),
    #[error("render job failed: {0}")]
    JobFailed(String),
    #[error("timed out waiting for the render to finish")]
    TimedOut,
}

/// Export lifecycle shown in the export modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExportStatus {
    #[default]
    Idle,
    Submitting,
    Processing(Option<String>),
    Finished(String),
    Failed(String),
}

/// The job description posted to the render service. Track arrays are
/// flat clip lists; each clip carries its own `track_index`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderManifest {
    pub video_tracks: Vec<Clip>,
    pub audio_tracks: Vec<Clip>,
    pub text_tracks: Vec<Clip>,
    pub script: String,
    pub output_key: String,
    pub width: u32,
    pub height: u32,
}

/// Assemble a manifest from the current model. Text metrics are scaled
/// from preview to export resolution here so the model itself stays in
/// preview units.
pub fn build_manifest(model: &TrackModel, script: &str, output_key: &str) -> RenderManifest {
    let text_tracks = model
        .clips(Medium::Text)
        .iter()
        .map(|clip| {
            let mut clip = clip.clone();
            if let Some(style) = clip.style.as_mut() {
                style.font_size *= EXPORT_FONT_SCALE;
                style.stroke_width *= EXPORT_FONT_SCALE;
            }
            clip
        })
        .collect();
    RenderManifest {
        video_tracks: model.clips(Medium::Video).to_vec(),
        audio_tracks: model.clips(Medium::Audio).to_vec(),
        text_tracks,
        script: script.to_string(),
        output_key: output_key.to_string(),
        width: EXPORT_WIDTH,
        height: EXPORT_HEIGHT,
    }
}

/// A fresh object key for one export, unique per submission.
pub fn new_output_key() -> String {
    let stamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let nonce = uuid::Uuid::new_v4().simple().to_string();
    format!("render_{stamp}_{}", &nonce[..8])
}

#[derive(Debug, Deserialize)]
struct StatusFile {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<String>,
}

/// One polling pass over the service.
#[derive(Debug, Clone, PartialEq)]
enum PollOutcome {
    Ready(String),
    InProgress(Option<String>),
    Failed(String),
}

pub struct RenderClient {
    http: reqwest::Client,
    base_url: String,
}

impl RenderClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build a client from `SHORTFORM_RENDER_URL`, defaulting to a
    /// local service.
    pub fn from_env() -> Self {
        let base = std::env::var(RENDER_URL_ENV).unwrap_or_else(|_| DEFAULT_RENDER_URL.to_string());
        Self::new(base)
    }

    fn result_url(&self, output_key: &str) -> String {
        format!("{}/outputs/{output_key}.mp4", self.base_url)
    }

    fn status_url(&self, output_key: &str) -> String {
        format!("{}/outputs/{output_key}_status.json", self.base_url)
    }

    /// Submit a render job. Returns once the service has accepted it;
    /// the actual render is awaited via [`RenderClient::await_result`].
    pub async fn submit(&self, manifest: &RenderManifest) -> Result<(), RenderError> {
        log::info!("submitting render job {}", manifest.output_key);
        let response = self
            .http
            .post(format!("{}/render", self.base_url))
            .json(manifest)
            .send()
            .await?;
        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(RenderError::Rejected(format!("{status}: {body}")))
        }
    }

    async fn poll_once(&self, output_key: &str) -> PollOutcome {
        // The finished artifact appearing is the source of truth.
        let result_url = self.result_url(output_key);
        if let Ok(response) = self.http.head(&result_url).send().await {
            if response.status().is_success() {
                return PollOutcome::Ready(result_url);
            }
        }
        // Otherwise consult the progress side channel, if it exists yet.
        let Ok(response) = self.http.get(self.status_url(output_key)).send().await else {
            return PollOutcome::InProgress(None);
        };
        let Ok(status) = response.json::<StatusFile>().await else {
            return PollOutcome::InProgress(None);
        };
        if status.status.eq_ignore_ascii_case("failed") {
            PollOutcome::Failed(status.message.unwrap_or_else(|| "render failed".to_string()))
        } else {
            PollOutcome::InProgress(status.message)
        }
    }

    /// Poll until the output exists, the job reports failure, or the
    /// attempt ceiling (about fifteen minutes) is hit. `on_progress`
    /// receives each status message for the export modal.
    pub async fn await_result(
        &self,
        output_key: &str,
        mut on_progress: impl FnMut(Option<String>),
    ) -> Result<String, RenderError> {
        for attempt in 0..RENDER_POLL_MAX_ATTEMPTS {
            match self.poll_once(output_key).await {
                PollOutcome::Ready(url) => {
                    log::info!("render {output_key} finished after {attempt} polls");
                    return Ok(url);
                }
                PollOutcome::Failed(message) => {
                    log::warn!("render {output_key} failed: {message}");
                    return Err(RenderError::JobFailed(message));
                }
                PollOutcome::InProgress(message) => on_progress(message),
            }
            tokio::time::sleep(std::time::Duration::from_millis(RENDER_POLL_INTERVAL_MS)).await;
        }
        Err(RenderError::TimedOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ClipUpdate;

    #[test]
    fn test_manifest_wire_shape() {
        let mut model = TrackModel::default();
        let video = model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        model.insert_media(Medium::Audio, "b.mp3", 5.0).unwrap();
        model.insert_text("hello", 0.0, 2.0);
        model.update(video, ClipUpdate { track_index: Some(1), ..Default::default() });

        let manifest = build_manifest(&model, "a short script", "render_test");
        let json = serde_json::to_value(&manifest).unwrap();
        assert_eq!(json["width"], 1080);
        assert_eq!(json["height"], 1920);
        assert_eq!(json["output_key"], "render_test");
        assert_eq!(json["script"], "a short script");
        assert_eq!(json["video_tracks"][0]["track_index"], 1);
        assert!(json["video_tracks"][0]["source_duration"].is_number());
        assert_eq!(json["audio_tracks"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_manifest_scales_text_metrics_for_export() {
        let mut model = TrackModel::default();
        model.insert_text("hello", 0.0, 2.0);
        let manifest = build_manifest(&model, "", "k");
        let style = &manifest.text_tracks[0].style.as_ref().unwrap();
        assert_eq!(style.font_size, 48.0 * 3.0);
        assert_eq!(style.stroke_width, 4.0 * 3.0);
        // The model itself keeps preview-scale metrics.
        let original = model.clips(Medium::Text)[0].style.as_ref().unwrap();
        assert_eq!(original.font_size, 48.0);
    }

    #[test]
    fn test_output_keys_are_unique() {
        let a = new_output_key();
        let b = new_output_key();
        assert!(a.starts_with("render_"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = RenderClient::new("http://example.test/");
        assert_eq!(client.result_url("k"), "http://example.test/outputs/k.mp4");
        assert_eq!(
            client.status_url("k"),
            "http://example.test/outputs/k_status.json"
        );
    }
}
