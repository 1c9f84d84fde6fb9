//! Shared UI constants: colors, panel sizing, and editor tuning values.

pub const BG_BASE: &str = "#131313";
pub const BG_ELEVATED: &str = "#1e1e1e";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#333333";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_VIDEO: &str = "#2dd4bf";
pub const ACCENT_AUDIO: &str = "#818cf8";
pub const ACCENT_TEXT: &str = "#fb923c";
pub const CLIP_VIDEO_BG: &str = "#1e5e5e";
pub const CLIP_VIDEO_BORDER: &str = "#2a7a7a";
pub const CLIP_AUDIO_BG: &str = "#1e3a5e";
pub const CLIP_AUDIO_BORDER: &str = "#2a4a7a";
pub const CLIP_TEXT_BG: &str = "#5e2a1e";
pub const CLIP_TEXT_BORDER: &str = "#7a3a2a";
pub const SNAP_LINE_COLOR: &str = "#facc15";

// Timeline geometry. The zoom level is fixed; all coordinate math goes
// through core::geometry so the mapping lives in one place.
pub const PIXELS_PER_SECOND: f64 = 20.0;
pub const VIDEO_LANE_HEIGHT_PX: f64 = 64.0;
pub const AUDIO_LANE_HEIGHT_PX: f64 = 48.0;
pub const TEXT_LANE_HEIGHT_PX: f64 = 32.0;
pub const RULER_HEIGHT_PX: f64 = 24.0;
pub const LANE_HEADER_WIDTH_PX: f64 = 120.0;

// The timeline always renders some empty tail past the last clip so
// clips can be dragged beyond the current end.
pub const TIMELINE_TAIL_SECONDS: f64 = 300.0;
pub const TIMELINE_MIN_VISUAL_SECONDS: f64 = 600.0;

// Editing rules.
pub const SNAP_THRESHOLD_SECONDS: f64 = 0.3;
pub const MIN_CLIP_DURATION_SECONDS: f64 = 0.1;
pub const SPLIT_EDGE_GUARD_SECONDS: f64 = 0.1;
pub const TOUCH_AXIS_SLOP_PX: f64 = 8.0;
pub const HISTORY_LIMIT: usize = 50;

// Playback.
pub const TIMELINE_FLOOR_SECONDS: f64 = 30.0;
pub const PLAYBACK_TICK_MS: u64 = 100;
pub const PLAYBACK_TICK_SECONDS: f64 = 0.1;
pub const SYNC_DRIFT_THRESHOLD_SECONDS: f64 = 0.2;

// Volume. Gains above 1.0 are stored and handed to the render backend,
// but local playback elements cap at 1.0.
pub const MAX_CLIP_GAIN: f32 = 2.0;
pub const MIN_VOLUME_DB: f32 = -60.0;
pub const MAX_VOLUME_DB: f32 = 10.0;

// Asset ingestion.
pub const FALLBACK_ASSET_DURATION_SECONDS: f64 = 10.0;

// Remote render service.
pub const EXPORT_WIDTH: u32 = 1080;
pub const EXPORT_HEIGHT: u32 = 1920;
pub const RENDER_POLL_INTERVAL_MS: u64 = 3_000;
pub const RENDER_POLL_MAX_ATTEMPTS: usize = 300; // ~15 minutes

/// Webview-side sync loop. Receives one plan per playback tick (or
/// seek) and reconciles every mounted media element against the logical
/// transport clock. Seeks only when drift exceeds the threshold so we
/// do not fight the element's own micro-corrections.
pub const PLAYER_SYNC_SCRIPT: &str = r#"
while (true) {
    const msg = await dioxus.recv();
    if (!msg || !Array.isArray(msg.items)) {
        continue;
    }
    for (const item of msg.items) {
        const el = document.getElementById("player-media-" + item.id);
        if (!el) {
            continue;
        }
        if (Math.abs(el.currentTime - item.local_time) > msg.drift_threshold) {
            el.currentTime = item.local_time;
        }
        if (item.playing && el.paused) {
            el.play().catch(() => {});
        } else if (!item.playing && !el.paused) {
            el.pause();
        }
        el.volume = item.volume;
    }
}
"#;
