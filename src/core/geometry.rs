//! Time/pixel mapping for the timeline. Every coordinate conversion in
//! the editor goes through these functions so the zoom factor and lane
//! metrics are never duplicated in view code.

use crate::constants::{
    AUDIO_LANE_HEIGHT_PX, PIXELS_PER_SECOND, SNAP_THRESHOLD_SECONDS, TEXT_LANE_HEIGHT_PX,
    VIDEO_LANE_HEIGHT_PX,
};
use crate::state::{Clip, Medium, TrackModel};
use uuid::Uuid;

pub fn time_to_pixel(seconds: f64) -> f64 {
    seconds * PIXELS_PER_SECOND
}

pub fn pixel_to_time(px: f64) -> f64 {
    (px / PIXELS_PER_SECOND).max(0.0)
}

pub fn lane_height(medium: Medium) -> f64 {
    match medium {
        Medium::Video => VIDEO_LANE_HEIGHT_PX,
        Medium::Audio => AUDIO_LANE_HEIGHT_PX,
        Medium::Text => TEXT_LANE_HEIGHT_PX,
    }
}

/// Map a vertical drag delta to a destination lane index.
///
/// Video and text lanes stack bottom-up (lane 0 is the lowest row, so
/// compositing order reads upward) and therefore invert the screen
/// axis: dragging down lowers the index. Audio lanes stack top-down and
/// map directly. The result clamps to `max_lane + 1` so a drag can open
/// exactly one new lane but never a detached one.
pub fn resolve_track_index(
    medium: Medium,
    origin_index: usize,
    delta_y_px: f64,
    max_lane: usize,
) -> usize {
    let steps = (delta_y_px / lane_height(medium)).round() as i64;
    let raw = match medium {
        Medium::Video | Medium::Text => origin_index as i64 - steps,
        Medium::Audio => origin_index as i64 + steps,
    };
    raw.clamp(0, max_lane as i64 + 1) as usize
}

/// A snap adjustment: the corrected clip start plus the timeline point
/// that attracted it, for drawing the snap guide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    pub start: f64,
    pub line: f64,
}

/// Snap candidates for a drag: time zero plus the start and end of
/// every clip except the one being dragged.
pub fn snap_points(model: &TrackModel, exclude: Uuid) -> Vec<f64> {
    let mut points = vec![0.0];
    for clip in model.all_clips().filter(|c| c.id != exclude) {
        points.push(clip.start);
        points.push(clip.end());
    }
    points
}

/// Try to snap either edge of a `[start, start + duration)` interval to
/// the nearest candidate point. Returns None when nothing is within the
/// snap threshold; the caller then uses the raw position.
pub fn find_snap(start: f64, duration: f64, points: &[f64]) -> Option<SnapResult> {
    let end = start + duration;
    let mut best: Option<(f64, f64)> = None; // (adjustment, point)
    for &point in points {
        for adjustment in [point - start, point - end] {
            if adjustment.abs() > SNAP_THRESHOLD_SECONDS {
                continue;
            }
            if best.map_or(true, |(b, _)| adjustment.abs() < b.abs()) {
                best = Some((adjustment, point));
            }
        }
    }
    best.map(|(adjustment, point)| SnapResult {
        start: (start + adjustment).max(0.0),
        line: point,
    })
}

/// Position of a clip within its lane row, in CSS pixels.
pub fn clip_rect(clip: &Clip) -> (f64, f64) {
    (time_to_pixel(clip.start), time_to_pixel(clip.duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_time_round_trip() {
        assert_eq!(time_to_pixel(3.0), 60.0);
        assert_eq!(pixel_to_time(60.0), 3.0);
        assert_eq!(pixel_to_time(-10.0), 0.0);
    }

    #[test]
    fn test_video_lanes_invert_vertical_axis() {
        // One lane row downward lowers the video lane index.
        assert_eq!(resolve_track_index(Medium::Video, 1, VIDEO_LANE_HEIGHT_PX, 2), 0);
        assert_eq!(resolve_track_index(Medium::Video, 1, -VIDEO_LANE_HEIGHT_PX, 2), 2);
        assert_eq!(resolve_track_index(Medium::Text, 0, -TEXT_LANE_HEIGHT_PX, 0), 1);
    }

    #[test]
    fn test_audio_lanes_map_directly() {
        assert_eq!(resolve_track_index(Medium::Audio, 0, AUDIO_LANE_HEIGHT_PX, 1), 1);
        assert_eq!(resolve_track_index(Medium::Audio, 1, -AUDIO_LANE_HEIGHT_PX, 1), 0);
    }

    #[test]
    fn test_track_index_clamps_to_one_new_lane() {
        assert_eq!(resolve_track_index(Medium::Video, 0, -500.0, 1), 2);
        assert_eq!(resolve_track_index(Medium::Video, 0, 500.0, 1), 0);
        assert_eq!(resolve_track_index(Medium::Audio, 0, 500.0, 0), 1);
    }

    #[test]
    fn test_half_lane_drag_stays_put() {
        let nudge = VIDEO_LANE_HEIGHT_PX * 0.4;
        assert_eq!(resolve_track_index(Medium::Video, 1, nudge, 2), 1);
        assert_eq!(resolve_track_index(Medium::Video, 1, -nudge, 2), 1);
    }

    #[test]
    fn test_snap_within_threshold_only() {
        let points = [0.0, 10.0, 14.0];
        // Start edge 9.8 is 0.2 s from the point at 10.
        let snapped = find_snap(9.8, 2.0, &points).unwrap();
        assert_eq!(snapped.start, 10.0);
        assert_eq!(snapped.line, 10.0);
        // End edge 13.9 attracts to 14 even though the start edge is far.
        let snapped = find_snap(11.9, 2.0, &points).unwrap();
        assert_eq!(snapped.start, 12.0);
        assert_eq!(snapped.line, 14.0);
        // 0.5 s away from everything: no snap.
        assert_eq!(find_snap(5.0, 2.0, &points), None);
    }

    #[test]
    fn test_snap_is_idempotent() {
        let points = [0.0, 10.0];
        let first = find_snap(9.9, 2.0, &points).unwrap();
        let second = find_snap(first.start, 2.0, &points).unwrap();
        assert_eq!(first.start, second.start);
    }

    #[test]
    fn test_snap_points_exclude_dragged_clip() {
        let mut model = TrackModel::default();
        let a = model.insert_media(Medium::Video, "a.mp4", 8.0).unwrap();
        model.insert_media(Medium::Audio, "b.mp3", 5.0).unwrap();
        let points = snap_points(&model, a);
        assert!(points.contains(&0.0));
        assert!(points.contains(&5.0));
        assert!(!points.contains(&8.0));
    }
}
