use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MAX_CLIP_GAIN, MAX_VOLUME_DB, MIN_VOLUME_DB};

/// Which kind of lane a clip occupies. A clip never changes medium
/// after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    Video,
    Audio,
    Text,
}

/// Transform controls applied when a video clip is composited.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipTransform {
    /// Horizontal translation in player pixels.
    pub position_x: f64,
    /// Vertical translation in player pixels.
    pub position_y: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation_deg: f64,
}

impl Default for ClipTransform {
    fn default() -> Self {
        Self {
            position_x: 0.0,
            position_y: 0.0,
            scale: 1.0,
            rotation_deg: 0.0,
        }
    }
}

/// Styling for a text clip. Positions are fractions of the frame so the
/// same style works at preview and export resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_size: f64,
    pub color: String,
    pub font_family: String,
    pub font_weight: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 48.0,
            color: "#ffffff".to_string(),
            font_family: "Inter".to_string(),
            font_weight: "800".to_string(),
            stroke: "#000000".to_string(),
            stroke_width: 4.0,
            x: 0.5,
            y: 0.8,
        }
    }
}

/// A clip placed on the timeline.
///
/// `start` and `duration` are timeline seconds; `source_offset` is how
/// far into the underlying media the visible portion begins, so
/// trimming the left edge never restarts the source from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Unique identifier, stable for the clip's lifetime.
    pub id: Uuid,
    /// The medium whose lanes this clip lives on.
    pub medium: Medium,
    /// Playable media reference. Absent for text clips.
    #[serde(default)]
    pub source_url: Option<String>,
    /// Caption content for text clips.
    #[serde(default)]
    pub text: Option<String>,
    /// Position on the logical timeline, seconds.
    pub start: f64,
    /// Visible length, seconds.
    pub duration: f64,
    /// Seconds skipped into the source before visible playback begins.
    #[serde(default)]
    pub source_offset: f64,
    /// Total length of the underlying asset, when known.
    #[serde(default)]
    pub source_duration: Option<f64>,
    /// Which lane of this medium the clip occupies.
    #[serde(default)]
    pub track_index: usize,
    /// Linear gain in [0, 2]. Values above 1.0 are a render-side boost.
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Visual transform for video clips.
    #[serde(default)]
    pub transform: ClipTransform,
    /// Styling for text clips.
    #[serde(default)]
    pub style: Option<TextStyle>,
}

impl Clip {
    /// Create a media clip (video or audio) backed by a source URL.
    pub fn media(medium: Medium, source_url: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            medium,
            source_url: Some(source_url.into()),
            text: None,
            start,
            duration,
            source_offset: 0.0,
            source_duration: Some(duration),
            track_index: 0,
            volume: 1.0,
            transform: ClipTransform::default(),
            style: None,
        }
    }

    /// Create a text clip with the default caption style.
    pub fn text(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            medium: Medium::Text,
            source_url: None,
            text: Some(text.into()),
            start,
            duration,
            source_offset: 0.0,
            source_duration: None,
            track_index: 0,
            volume: 1.0,
            transform: ClipTransform::default(),
            style: Some(TextStyle::default()),
        }
    }

    /// End of this clip on the timeline.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Whether the playhead time falls inside `[start, end)`.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time < self.end()
    }

    /// Whether this clip's interval intersects `[start, end)`.
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        self.start < end && self.end() > start
    }

    /// The longest duration this clip can be resized to without running
    /// past the end of its source media.
    pub fn available_duration(&self) -> Option<f64> {
        self.source_duration
            .filter(|d| *d > 0.0)
            .map(|d| (d - self.source_offset).max(0.0))
    }
}

fn default_volume() -> f32 {
    1.0
}

/// Convert a linear gain to the dB value shown in the inspector.
pub fn volume_to_db(volume: f32) -> f32 {
    if volume <= 0.0 {
        return MIN_VOLUME_DB;
    }
    (20.0 * volume.log10()).clamp(MIN_VOLUME_DB, MAX_VOLUME_DB)
}

/// Convert a dB slider value back to a linear gain in [0, 2].
pub fn db_to_volume(db: f32) -> f32 {
    if db <= MIN_VOLUME_DB {
        return 0.0;
    }
    10.0_f32
        .powf(db.clamp(MIN_VOLUME_DB, MAX_VOLUME_DB) / 20.0)
        .clamp(0.0, MAX_CLIP_GAIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_interval() {
        let clip = Clip::media(Medium::Video, "a.mp4", 5.0, 10.0);
        assert!(clip.contains(5.0));
        assert!(clip.contains(14.9));
        assert!(!clip.contains(15.0)); // half-open interval
        assert!(clip.overlaps(0.0, 6.0));
        assert!(!clip.overlaps(15.0, 20.0));
    }

    #[test]
    fn test_available_duration_respects_offset() {
        let mut clip = Clip::media(Medium::Audio, "a.mp3", 0.0, 8.0);
        clip.source_duration = Some(10.0);
        clip.source_offset = 3.0;
        assert_eq!(clip.available_duration(), Some(7.0));
    }

    #[test]
    fn test_db_round_trip() {
        assert!((db_to_volume(0.0) - 1.0).abs() < 1e-6);
        assert_eq!(db_to_volume(-60.0), 0.0);
        assert_eq!(volume_to_db(0.0), -60.0);
        // +6 dB is roughly a 2x boost, clamped at the gain ceiling.
        assert!((db_to_volume(6.0) - 1.9953).abs() < 1e-3);
        assert_eq!(db_to_volume(10.0), 2.0);
        let v = db_to_volume(-12.5);
        assert!((volume_to_db(v) - -12.5).abs() < 1e-4);
    }

    #[test]
    fn test_clip_serialization_field_names() {
        let clip = Clip::text("hello", 1.0, 2.0);
        let json = serde_json::to_value(&clip).unwrap();
        assert_eq!(json["medium"], "text");
        assert_eq!(json["text"], "hello");
        assert_eq!(json["track_index"], 0);
    }
}
