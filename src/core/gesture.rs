//! Interaction controller for the timeline. All pointer state lives in
//! one tagged [`Gesture`] value, so starting a drag while another is in
//! flight is unrepresentable and cleanup is a single reset to `Idle`.

use uuid::Uuid;

use crate::constants::{MIN_CLIP_DURATION_SECONDS, PIXELS_PER_SECOND, TOUCH_AXIS_SLOP_PX};
use crate::state::{Clip, Medium};

use super::geometry::{find_snap, resolve_track_index};

/// Active editing tool. Select drags and resizes; Razor splits on click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Select,
    Razor,
}

/// Which clip edge a resize grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Start,
    End,
}

/// Touch drags stay undecided until the pointer travels past the slop
/// radius, then lock to one axis for the rest of the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisLock {
    Undecided,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveGesture {
    pub clip_id: Uuid,
    pub medium: Medium,
    origin_start: f64,
    origin_track: usize,
    duration: f64,
    grab_x: f64,
    grab_y: f64,
    axis: Option<AxisLock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    pub clip_id: Uuid,
    pub medium: Medium,
    pub edge: ResizeEdge,
    origin_start: f64,
    origin_duration: f64,
    origin_offset: f64,
    available: Option<f64>,
    grab_x: f64,
}

/// Result of feeding a pointer position into a move gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovePreview {
    /// Touch pointer still inside the slop radius.
    Pending,
    /// Touch drag locked to the vertical axis: the timeline yields the
    /// gesture to the scroll container and must return to idle.
    YieldToScroll,
    /// Ghost position for the dragged clip.
    Position {
        start: f64,
        track_index: usize,
        snap_line: Option<f64>,
    },
}

/// Geometric preview of a resize, before the model validates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizePreview {
    pub start: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Moving(MoveGesture),
    Resizing(ResizeGesture),
    /// Dragging the playhead along the ruler.
    Scrubbing,
    /// An asset from the panel is hovering over the timeline.
    ExternalDrag {
        medium: Medium,
        source_url: String,
        duration: f64,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// Begin a move drag. Refused unless idle, so a stray mousedown
    /// during another gesture cannot corrupt it.
    pub fn begin_move(&mut self, clip: &Clip, grab_x: f64, grab_y: f64, touch: bool) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Gesture::Moving(MoveGesture {
            clip_id: clip.id,
            medium: clip.medium,
            origin_start: clip.start,
            origin_track: clip.track_index,
            duration: clip.duration,
            grab_x,
            grab_y,
            axis: touch.then_some(AxisLock::Undecided),
        });
        true
    }

    pub fn begin_resize(&mut self, clip: &Clip, edge: ResizeEdge, grab_x: f64) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Gesture::Resizing(ResizeGesture {
            clip_id: clip.id,
            medium: clip.medium,
            edge,
            origin_start: clip.start,
            origin_duration: clip.duration,
            origin_offset: clip.source_offset,
            available: clip.available_duration(),
            grab_x,
        });
        true
    }

    pub fn begin_scrub(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Gesture::Scrubbing;
        true
    }

    pub fn begin_external_drag(&mut self, medium: Medium, source_url: &str, duration: f64) -> bool {
        if !self.is_idle() {
            return false;
        }
        *self = Gesture::ExternalDrag {
            medium,
            source_url: source_url.to_string(),
            duration,
        };
        true
    }

    /// Unconditionally return to idle. Pointer-up and window blur both
    /// route here, whether or not the gesture committed.
    pub fn finish(&mut self) {
        *self = Gesture::Idle;
    }
}

impl MoveGesture {
    /// Compute the ghost position for the current pointer. `snap_points`
    /// comes from [`super::geometry::snap_points`] with this clip
    /// excluded; `max_lane` bounds the destination lane.
    pub fn update(
        &mut self,
        pointer_x: f64,
        pointer_y: f64,
        snap_points: &[f64],
        max_lane: usize,
    ) -> MovePreview {
        let dx = pointer_x - self.grab_x;
        let dy = pointer_y - self.grab_y;

        if let Some(axis) = self.axis {
            match axis {
                AxisLock::Undecided => {
                    if dx.abs() < TOUCH_AXIS_SLOP_PX && dy.abs() < TOUCH_AXIS_SLOP_PX {
                        return MovePreview::Pending;
                    }
                    if dy.abs() > dx.abs() {
                        return MovePreview::YieldToScroll;
                    }
                    self.axis = Some(AxisLock::Horizontal);
                }
                AxisLock::Horizontal => {}
            }
        }

        let raw_start = (self.origin_start + dx / PIXELS_PER_SECOND).max(0.0);
        let (start, snap_line) = match find_snap(raw_start, self.duration, snap_points) {
            Some(snap) => (snap.start, Some(snap.line)),
            None => (raw_start, None),
        };
        // A locked-horizontal touch drag never changes lanes.
        let track_index = if self.axis.is_some() {
            self.origin_track
        } else {
            resolve_track_index(self.medium, self.origin_track, dy, max_lane)
        };
        MovePreview::Position {
            start,
            track_index,
            snap_line,
        }
    }
}

impl ResizeGesture {
    /// Compute the trimmed interval for the current pointer. The left
    /// edge is bounded by source offset zero and the minimum duration;
    /// the right edge by the minimum duration and the remaining source.
    pub fn update(&self, pointer_x: f64) -> ResizePreview {
        let dt = (pointer_x - self.grab_x) / PIXELS_PER_SECOND;
        match self.edge {
            ResizeEdge::Start => {
                let end = self.origin_start + self.origin_duration;
                let min_start = (self.origin_start - self.origin_offset).max(0.0);
                let max_start = end - MIN_CLIP_DURATION_SECONDS;
                let start = (self.origin_start + dt).clamp(min_start, max_start);
                ResizePreview {
                    start,
                    duration: end - start,
                }
            }
            ResizeEdge::End => {
                let mut duration =
                    (self.origin_duration + dt).max(MIN_CLIP_DURATION_SECONDS);
                if let Some(available) = self.available {
                    duration = duration.min(available.max(MIN_CLIP_DURATION_SECONDS));
                }
                ResizePreview {
                    start: self.origin_start,
                    duration,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Clip;

    fn video_clip(start: f64, duration: f64) -> Clip {
        Clip::media(Medium::Video, "a.mp4", start, duration)
    }

    #[test]
    fn test_begin_requires_idle() {
        let clip = video_clip(0.0, 5.0);
        let mut gesture = Gesture::default();
        assert!(gesture.begin_move(&clip, 0.0, 0.0, false));
        assert!(!gesture.begin_resize(&clip, ResizeEdge::End, 0.0));
        assert!(!gesture.begin_scrub());
        gesture.finish();
        assert!(gesture.begin_scrub());
    }

    #[test]
    fn test_mouse_move_maps_pixels_to_seconds() {
        let clip = video_clip(2.0, 5.0);
        let mut gesture = Gesture::default();
        gesture.begin_move(&clip, 100.0, 10.0, false);
        let Gesture::Moving(ref mut mv) = gesture else {
            panic!("expected move gesture");
        };
        // 40 px right at 20 px/s is 2 s.
        let preview = mv.update(140.0, 10.0, &[], 0);
        assert_eq!(
            preview,
            MovePreview::Position { start: 4.0, track_index: 0, snap_line: None }
        );
    }

    #[test]
    fn test_move_never_goes_negative() {
        let clip = video_clip(1.0, 5.0);
        let mut gesture = Gesture::default();
        gesture.begin_move(&clip, 100.0, 0.0, false);
        let Gesture::Moving(ref mut mv) = gesture else {
            panic!("expected move gesture");
        };
        let MovePreview::Position { start, .. } = mv.update(-400.0, 0.0, &[], 0) else {
            panic!("expected position");
        };
        assert_eq!(start, 0.0);
    }

    #[test]
    fn test_move_snaps_and_reports_guide_line() {
        let clip = video_clip(0.0, 2.0);
        let mut gesture = Gesture::default();
        gesture.begin_move(&clip, 0.0, 0.0, false);
        let Gesture::Moving(ref mut mv) = gesture else {
            panic!("expected move gesture");
        };
        // Raw start is 9.9 s; the point at 10 pulls it in.
        let preview = mv.update(9.9 * PIXELS_PER_SECOND, 0.0, &[10.0], 0);
        assert_eq!(
            preview,
            MovePreview::Position { start: 10.0, track_index: 0, snap_line: Some(10.0) }
        );
    }

    #[test]
    fn test_touch_axis_lock() {
        let clip = video_clip(0.0, 5.0);
        let mut gesture = Gesture::default();
        gesture.begin_move(&clip, 0.0, 0.0, true);
        let Gesture::Moving(ref mut mv) = gesture else {
            panic!("expected move gesture");
        };
        // Inside the slop radius nothing happens yet.
        assert_eq!(mv.update(3.0, 3.0, &[], 1), MovePreview::Pending);
        // Mostly-vertical motion hands the gesture to the scroller.
        assert_eq!(mv.update(2.0, 20.0, &[], 1), MovePreview::YieldToScroll);
    }

    #[test]
    fn test_touch_horizontal_lock_keeps_lane() {
        let mut clip = video_clip(0.0, 5.0);
        clip.track_index = 1;
        let mut gesture = Gesture::default();
        gesture.begin_move(&clip, 0.0, 0.0, true);
        let Gesture::Moving(ref mut mv) = gesture else {
            panic!("expected move gesture");
        };
        let MovePreview::Position { track_index, .. } = mv.update(40.0, 2.0, &[], 2) else {
            panic!("expected position");
        };
        assert_eq!(track_index, 1);
        // Once locked, even large vertical motion stays in-lane.
        let MovePreview::Position { track_index, .. } = mv.update(60.0, 300.0, &[], 2) else {
            panic!("expected position");
        };
        assert_eq!(track_index, 1);
    }

    #[test]
    fn test_resize_end_edge_clamps_to_source() {
        let mut clip = video_clip(0.0, 5.0);
        clip.source_duration = Some(8.0);
        let mut gesture = Gesture::default();
        gesture.begin_resize(&clip, ResizeEdge::End, 0.0);
        let Gesture::Resizing(ref rs) = gesture else {
            panic!("expected resize gesture");
        };
        // Dragging far right stops at the 8 s of source media.
        let preview = rs.update(1000.0);
        assert_eq!(preview.start, 0.0);
        assert_eq!(preview.duration, 8.0);
        // Dragging far left stops at the minimum duration.
        let preview = rs.update(-1000.0);
        assert_eq!(preview.duration, MIN_CLIP_DURATION_SECONDS);
    }

    #[test]
    fn test_resize_start_edge_clamps_at_source_offset_zero() {
        let mut clip = video_clip(5.0, 4.0);
        clip.source_offset = 2.0;
        clip.source_duration = Some(10.0);
        let mut gesture = Gesture::default();
        gesture.begin_resize(&clip, ResizeEdge::Start, 0.0);
        let Gesture::Resizing(ref rs) = gesture else {
            panic!("expected resize gesture");
        };
        // Only 2 s of earlier source exists, so the start stops at 3.
        let preview = rs.update(-1000.0);
        assert_eq!(preview.start, 3.0);
        assert_eq!(preview.duration, 6.0);
        // And the start edge can never cross the end edge.
        let preview = rs.update(1000.0);
        assert!((preview.start - (9.0 - MIN_CLIP_DURATION_SECONDS)).abs() < 1e-9);
        assert!((preview.duration - MIN_CLIP_DURATION_SECONDS).abs() < 1e-9);
    }
}
