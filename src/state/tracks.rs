use std::collections::HashMap;

use uuid::Uuid;

use crate::constants::{
    HISTORY_LIMIT, MAX_CLIP_GAIN, MIN_CLIP_DURATION_SECONDS, SPLIT_EDGE_GUARD_SECONDS,
    TIMELINE_FLOOR_SECONDS,
};

use super::{Clip, ClipTransform, Medium, TextStyle};

/// Per-lane flags, keyed by lane index so toggling affects every clip
/// sharing that lane rather than being attached to individual clips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaneState {
    pub muted: bool,
    pub hidden: bool,
}

/// Which lane flag a header toggle flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneToggle {
    Muted,
    Hidden,
}

/// Partial update for a clip. This is the single mutation entry point
/// shared by direct manipulation and the inspector panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipUpdate {
    pub start: Option<f64>,
    pub duration: Option<f64>,
    pub source_offset: Option<f64>,
    pub track_index: Option<usize>,
    pub volume: Option<f32>,
    pub text: Option<String>,
    pub transform: Option<ClipTransform>,
    pub style: Option<TextStyle>,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Snapshot {
    video: Vec<Clip>,
    audio: Vec<Clip>,
    text: Vec<Clip>,
}

/// Canonical in-memory representation of all clips, one array per
/// medium. Every mutation replaces the affected array wholesale, so a
/// concurrent playback tick never observes a half-written clip list.
#[derive(Debug, Clone)]
pub struct TrackModel {
    video: Vec<Clip>,
    audio: Vec<Clip>,
    text: Vec<Clip>,
    video_lanes: HashMap<usize, LaneState>,
    audio_lanes: HashMap<usize, LaneState>,
    text_lanes: HashMap<usize, LaneState>,
    history: Vec<Snapshot>,
    history_index: usize,
}

impl Default for TrackModel {
    fn default() -> Self {
        Self {
            video: Vec::new(),
            audio: Vec::new(),
            text: Vec::new(),
            video_lanes: HashMap::new(),
            audio_lanes: HashMap::new(),
            text_lanes: HashMap::new(),
            history: vec![Snapshot::default()],
            history_index: 0,
        }
    }
}

impl TrackModel {
    /// All clips of one medium, in insertion order.
    pub fn clips(&self, medium: Medium) -> &[Clip] {
        match medium {
            Medium::Video => &self.video,
            Medium::Audio => &self.audio,
            Medium::Text => &self.text,
        }
    }

    /// Every clip across all three media. Lookup order is video, audio,
    /// text, matching the per-id search in [`TrackModel::update`].
    pub fn all_clips(&self) -> impl Iterator<Item = &Clip> {
        self.video.iter().chain(self.audio.iter()).chain(self.text.iter())
    }

    /// Video and audio clips that back a mounted media element.
    pub fn media_clips(&self) -> impl Iterator<Item = &Clip> {
        self.video.iter().chain(self.audio.iter())
    }

    /// Find a clip by id across all media arrays.
    pub fn find(&self, id: Uuid) -> Option<&Clip> {
        self.all_clips().find(|c| c.id == id)
    }

    /// Insert a media clip at the "magnetic" position: immediately
    /// after the last clip already in lane 0 of its medium, or 0 for an
    /// empty lane. The asset's duration must already be resolved.
    pub fn insert_media(&mut self, medium: Medium, source_url: &str, duration: f64) -> Option<Uuid> {
        if medium == Medium::Text {
            return None;
        }
        let start = self
            .clips(medium)
            .iter()
            .filter(|c| c.track_index == 0)
            .map(Clip::end)
            .fold(0.0, f64::max);
        let clip = Clip::media(medium, source_url, start, duration.max(MIN_CLIP_DURATION_SECONDS));
        let id = clip.id;
        self.array_mut(medium).push(clip);
        self.commit();
        Some(id)
    }

    /// Insert a media clip at an explicit timeline position on lane 0,
    /// for a drag out of the asset panel released over the timeline.
    /// Rejected when the interval collides with a clip already there.
    pub fn try_insert_media(
        &mut self,
        medium: Medium,
        source_url: &str,
        duration: f64,
        start: f64,
    ) -> Option<Uuid> {
        if medium == Medium::Text {
            return None;
        }
        let start = start.max(0.0);
        let duration = duration.max(MIN_CLIP_DURATION_SECONDS);
        if self.lane_collides(medium, 0, Uuid::nil(), start, duration) {
            return None;
        }
        let clip = Clip::media(medium, source_url, start, duration);
        let id = clip.id;
        self.array_mut(medium).push(clip);
        self.commit();
        Some(id)
    }

    /// Insert a text clip at an explicit position on lane 0.
    pub fn insert_text(&mut self, text: &str, start: f64, duration: f64) -> Uuid {
        let clip = Clip::text(text, start.max(0.0), duration.max(MIN_CLIP_DURATION_SECONDS));
        let id = clip.id;
        self.text.push(clip);
        self.commit();
        id
    }

    /// Apply a partial update to a clip. Unknown ids are a no-op: the
    /// UI only ever issues ids it owns, so a miss is a stale closure,
    /// not an error.
    pub fn update(&mut self, id: Uuid, update: ClipUpdate) {
        let Some(medium) = self.medium_of(id) else {
            return;
        };
        let next: Vec<Clip> = self
            .clips(medium)
            .iter()
            .map(|clip| {
                if clip.id != id {
                    return clip.clone();
                }
                let mut clip = clip.clone();
                if let Some(start) = update.start {
                    clip.start = start.max(0.0);
                }
                if let Some(duration) = update.duration {
                    clip.duration = duration.max(MIN_CLIP_DURATION_SECONDS);
                }
                if let Some(offset) = update.source_offset {
                    clip.source_offset = offset.max(0.0);
                }
                if let Some(index) = update.track_index {
                    clip.track_index = index;
                }
                if let Some(volume) = update.volume {
                    clip.volume = volume.clamp(0.0, MAX_CLIP_GAIN);
                }
                if let Some(text) = update.text.clone() {
                    clip.text = Some(text);
                }
                if let Some(transform) = update.transform {
                    clip.transform = transform;
                }
                if let Some(style) = update.style.clone() {
                    clip.style = Some(style);
                }
                clip
            })
            .collect();
        *self.array_mut(medium) = next;
        self.commit();
    }

    /// Remove a clip by id. Lane state for now-empty lanes is left in
    /// place rather than garbage-collected.
    pub fn remove(&mut self, id: Uuid) {
        let Some(medium) = self.medium_of(id) else {
            return;
        };
        let next: Vec<Clip> = self
            .clips(medium)
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        *self.array_mut(medium) = next;
        self.commit();
    }

    /// Commit a move to a new start and lane. Returns false (and leaves
    /// the clip at its prior committed position) when the destination
    /// interval collides with another clip in that lane.
    pub fn try_move(&mut self, id: Uuid, new_start: f64, new_track_index: usize) -> bool {
        let Some(medium) = self.medium_of(id) else {
            return false;
        };
        let start = new_start.max(0.0);
        let duration = match self.find(id) {
            Some(clip) => clip.duration,
            None => return false,
        };
        if self.lane_collides(medium, new_track_index, id, start, duration) {
            return false;
        }
        self.update(
            id,
            ClipUpdate {
                start: Some(start),
                track_index: Some(new_track_index),
                ..Default::default()
            },
        );
        true
    }

    /// Commit a resize. Trimming the left edge advances `source_offset`
    /// by the same delta so the source media does not restart from
    /// zero; both edges clamp against the source duration when known.
    pub fn try_resize(&mut self, id: Uuid, new_start: f64, new_duration: f64) -> bool {
        let Some(medium) = self.medium_of(id) else {
            return false;
        };
        let Some(clip) = self.find(id).cloned() else {
            return false;
        };

        let start = new_start.max(0.0);
        let mut duration = new_duration.max(MIN_CLIP_DURATION_SECONDS);
        let mut offset = clip.source_offset;

        let delta = start - clip.start;
        if delta.abs() > f64::EPSILON && clip.source_url.is_some() {
            offset = (offset + delta).max(0.0);
        }
        if let Some(source) = clip.source_duration.filter(|d| *d > 0.0) {
            duration = duration.min((source - offset).max(MIN_CLIP_DURATION_SECONDS));
            let max_offset = (source - duration).max(0.0);
            if offset > max_offset {
                offset = max_offset;
            }
        }

        if self.lane_collides(medium, clip.track_index, id, start, duration) {
            return false;
        }
        self.update(
            id,
            ClipUpdate {
                start: Some(start),
                duration: Some(duration),
                source_offset: Some(offset),
                ..Default::default()
            },
        );
        true
    }

    /// Split a clip in two at `at_time`. Rejected (no-op, returns None)
    /// when the cut falls within the edge guard of either boundary, so
    /// a razor click can never produce a degenerate fragment.
    pub fn split(&mut self, id: Uuid, medium: Medium, at_time: f64) -> Option<(Uuid, Uuid)> {
        let clip = self.clips(medium).iter().find(|c| c.id == id)?.clone();
        if at_time - clip.start < SPLIT_EDGE_GUARD_SECONDS
            || clip.end() - at_time < SPLIT_EDGE_GUARD_SECONDS
        {
            return None;
        }

        let mut left = clip.clone();
        left.id = Uuid::new_v4();
        left.duration = at_time - clip.start;

        let mut right = clip.clone();
        right.id = Uuid::new_v4();
        right.start = at_time;
        right.duration = clip.end() - at_time;
        right.source_offset = left.source_offset + left.duration;

        let ids = (left.id, right.id);
        let next: Vec<Clip> = self
            .clips(medium)
            .iter()
            .flat_map(|c| {
                if c.id == id {
                    vec![left.clone(), right.clone()]
                } else {
                    vec![c.clone()]
                }
            })
            .collect();
        *self.array_mut(medium) = next;
        self.commit();
        Some(ids)
    }

    /// Broadcast one text clip's style to every other text clip. This
    /// is an explicit user action, never automatic.
    pub fn apply_style_to_all(&mut self, source_id: Uuid) {
        let Some(style) = self
            .text
            .iter()
            .find(|c| c.id == source_id)
            .and_then(|c| c.style.clone())
        else {
            return;
        };
        let next: Vec<Clip> = self
            .text
            .iter()
            .map(|c| {
                let mut c = c.clone();
                c.style = Some(style.clone());
                c
            })
            .collect();
        self.text = next;
        self.commit();
    }

    /// Interval-overlap test against every other clip in a lane.
    pub fn lane_collides(
        &self,
        medium: Medium,
        track_index: usize,
        exclude: Uuid,
        start: f64,
        duration: f64,
    ) -> bool {
        self.clips(medium)
            .iter()
            .filter(|c| c.track_index == track_index && c.id != exclude)
            .any(|c| c.overlaps(start, start + duration))
    }

    /// Flip a lane flag for `(medium, index)`.
    pub fn toggle_lane(&mut self, medium: Medium, index: usize, toggle: LaneToggle) {
        let state = self.lanes_mut(medium).entry(index).or_default();
        match toggle {
            LaneToggle::Muted => state.muted = !state.muted,
            LaneToggle::Hidden => state.hidden = !state.hidden,
        }
    }

    pub fn lane_state(&self, medium: Medium, index: usize) -> LaneState {
        self.lanes(medium).get(&index).copied().unwrap_or_default()
    }

    /// Highest lane index currently occupied by any clip of a medium.
    pub fn max_lane(&self, medium: Medium) -> usize {
        self.clips(medium).iter().map(|c| c.track_index).max().unwrap_or(0)
    }

    /// Derived project length: the furthest clip end, floored so an
    /// empty project still has a playable transport range.
    pub fn timeline_duration(&self) -> f64 {
        self.all_clips()
            .map(Clip::end)
            .fold(TIMELINE_FLOOR_SECONDS, f64::max)
    }

    /// Clips of a medium under the playhead, in paint order (ascending
    /// lane index; later-painted is visually on top). Clips on hidden
    /// lanes are excluded from the set entirely. Hidden is not muted:
    /// callers that keep hidden media mounted for audio continuity
    /// should sync from [`TrackModel::media_clips`] instead.
    pub fn active_clips(&self, medium: Medium, time: f64) -> Vec<&Clip> {
        let mut active: Vec<&Clip> = self
            .clips(medium)
            .iter()
            .filter(|c| c.contains(time))
            .filter(|c| !self.lane_state(medium, c.track_index).hidden)
            .collect();
        active.sort_by_key(|c| c.track_index);
        active
    }

    /// Step back one committed mutation.
    pub fn undo(&mut self) {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.restore(self.history_index);
        }
    }

    /// Step forward after an undo.
    pub fn redo(&mut self) {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            self.restore(self.history_index);
        }
    }

    fn restore(&mut self, index: usize) {
        let snapshot = self.history[index].clone();
        self.video = snapshot.video;
        self.audio = snapshot.audio;
        self.text = snapshot.text;
    }

    fn commit(&mut self) {
        self.history.truncate(self.history_index + 1);
        self.history.push(Snapshot {
            video: self.video.clone(),
            audio: self.audio.clone(),
            text: self.text.clone(),
        });
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history_index = self.history.len() - 1;
    }

    fn medium_of(&self, id: Uuid) -> Option<Medium> {
        self.find(id).map(|c| c.medium)
    }

    fn array_mut(&mut self, medium: Medium) -> &mut Vec<Clip> {
        match medium {
            Medium::Video => &mut self.video,
            Medium::Audio => &mut self.audio,
            Medium::Text => &mut self.text,
        }
    }

    fn lanes(&self, medium: Medium) -> &HashMap<usize, LaneState> {
        match medium {
            Medium::Video => &self.video_lanes,
            Medium::Audio => &self.audio_lanes,
            Medium::Text => &self.text_lanes,
        }
    }

    fn lanes_mut(&mut self, medium: Medium) -> &mut HashMap<usize, LaneState> {
        match medium {
            Medium::Video => &mut self.video_lanes,
            Medium::Audio => &mut self.audio_lanes,
            Medium::Text => &mut self.text_lanes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lane_sorted_by_start(model: &TrackModel, medium: Medium, lane: usize) -> Vec<&Clip> {
        let mut clips: Vec<&Clip> = model
            .clips(medium)
            .iter()
            .filter(|c| c.track_index == lane)
            .collect();
        clips.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap());
        clips
    }

    fn assert_no_overlap(model: &TrackModel, medium: Medium, lane: usize) {
        let clips = lane_sorted_by_start(model, medium, lane);
        for pair in clips.windows(2) {
            assert!(
                pair[0].end() <= pair[1].start + 1e-9,
                "clips overlap in lane {}: [{}, {}) vs [{}, {})",
                lane,
                pair[0].start,
                pair[0].end(),
                pair[1].start,
                pair[1].end()
            );
        }
    }

    #[test]
    fn test_magnetic_insert() {
        let mut model = TrackModel::default();
        let a = model.insert_media(Medium::Video, "a.mp4", 8.0).unwrap();
        let b = model.insert_media(Medium::Video, "b.mp4", 5.0).unwrap();
        assert_eq!(model.find(a).unwrap().start, 0.0);
        assert_eq!(model.find(b).unwrap().start, 8.0);
        assert_no_overlap(&model, Medium::Video, 0);
    }

    #[test]
    fn test_magnetic_insert_is_per_medium() {
        let mut model = TrackModel::default();
        model.insert_media(Medium::Video, "a.mp4", 8.0).unwrap();
        let audio = model.insert_media(Medium::Audio, "a.mp3", 4.0).unwrap();
        assert_eq!(model.find(audio).unwrap().start, 0.0);
    }

    #[test]
    fn test_positioned_insert_commits_at_drop_time() {
        let mut model = TrackModel::default();
        let id = model.try_insert_media(Medium::Video, "a.mp4", 5.0, 12.5).unwrap();
        let clip = model.find(id).unwrap();
        assert_eq!(clip.start, 12.5);
        assert_eq!(clip.track_index, 0);
        assert_eq!(clip.source_duration, Some(5.0));
        // Negative drop positions clamp to the timeline origin.
        let id = model.try_insert_media(Medium::Audio, "b.mp3", 4.0, -2.0).unwrap();
        assert_eq!(model.find(id).unwrap().start, 0.0);
    }

    #[test]
    fn test_positioned_insert_rejects_collision() {
        let mut model = TrackModel::default();
        model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        // Dropping onto the occupied [0, 10) interval is a no-op.
        assert!(model.try_insert_media(Medium::Video, "b.mp4", 4.0, 8.0).is_none());
        assert_eq!(model.clips(Medium::Video).len(), 1);
        // Dropping just past it lands exactly where released.
        let id = model.try_insert_media(Medium::Video, "b.mp4", 4.0, 10.0).unwrap();
        assert_eq!(model.find(id).unwrap().start, 10.0);
        assert_no_overlap(&model, Medium::Video, 0);
    }

    #[test]
    fn test_collision_rejection_retains_prior_start() {
        let mut model = TrackModel::default();
        model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        let b = model.insert_media(Medium::Video, "b.mp4", 4.0).unwrap();
        // B sits at [10, 14). Moving it to 8 would overlap A's [0, 10).
        assert!(!model.try_move(b, 8.0, 0));
        assert_eq!(model.find(b).unwrap().start, 10.0);
        assert_no_overlap(&model, Medium::Video, 0);
    }

    #[test]
    fn test_move_to_same_position_is_allowed() {
        // A committed value re-entered in the inspector must not be
        // rejected as a self-collision.
        let mut model = TrackModel::default();
        let a = model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        model.insert_media(Medium::Video, "b.mp4", 4.0).unwrap();
        assert!(model.try_move(a, 0.0, 0));
        assert!(model.try_resize(a, 0.0, 10.0));
        assert_eq!(model.find(a).unwrap().start, 0.0);
    }

    #[test]
    fn test_move_to_other_lane_allows_overlap() {
        let mut model = TrackModel::default();
        model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        let b = model.insert_media(Medium::Video, "b.mp4", 4.0).unwrap();
        // Lanes may overlap freely: that is the point of compositing.
        assert!(model.try_move(b, 2.0, 1));
        let b_clip = model.find(b).unwrap();
        assert_eq!(b_clip.start, 2.0);
        assert_eq!(b_clip.track_index, 1);
    }

    #[test]
    fn test_split_preserves_duration_and_source_offset() {
        let mut model = TrackModel::default();
        let id = model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        let (left, right) = model.split(id, Medium::Video, 4.0).unwrap();
        assert!(model.find(id).is_none());
        let a = model.find(left).unwrap().clone();
        let b = model.find(right).unwrap().clone();
        assert_eq!(a.start, 0.0);
        assert!((a.duration - 4.0).abs() < 1e-9);
        assert_eq!(b.start, 4.0);
        assert!((b.duration - 6.0).abs() < 1e-9);
        assert!((a.duration + b.duration - 10.0).abs() < 1e-9);
        assert!((b.source_offset - (a.source_offset + a.duration)).abs() < 1e-9);
        assert_no_overlap(&model, Medium::Video, 0);
    }

    #[test]
    fn test_split_rejects_near_edge_cuts() {
        let mut model = TrackModel::default();
        let id = model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        let before = model.clips(Medium::Video).to_vec();
        assert!(model.split(id, Medium::Video, 0.05).is_none());
        assert!(model.split(id, Medium::Video, 9.95).is_none());
        assert_eq!(model.clips(Medium::Video), &before[..]);
    }

    #[test]
    fn test_resize_clamps_duration_and_offset() {
        let mut model = TrackModel::default();
        let id = model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        // Shrinking below the minimum clamps at 0.1 s.
        assert!(model.try_resize(id, 0.0, -5.0));
        assert!((model.find(id).unwrap().duration - MIN_CLIP_DURATION_SECONDS).abs() < 1e-9);
        // Growing past the source duration clamps at the source end.
        assert!(model.try_resize(id, 0.0, 500.0));
        let clip = model.find(id).unwrap();
        assert!(clip.source_offset + clip.duration <= clip.source_duration.unwrap() + 1e-9);
    }

    #[test]
    fn test_left_trim_advances_source_offset() {
        let mut model = TrackModel::default();
        let id = model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        assert!(model.try_resize(id, 3.0, 7.0));
        let clip = model.find(id).unwrap();
        assert_eq!(clip.start, 3.0);
        assert!((clip.source_offset - 3.0).abs() < 1e-9);
        assert!((clip.duration - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_resize_rejects_collision() {
        let mut model = TrackModel::default();
        let a = model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        model.insert_media(Medium::Video, "b.mp4", 4.0).unwrap();
        // Growing A into B's [10, 14) interval must be rejected.
        assert!(!model.try_resize(a, 0.0, 12.0));
        assert!((model.find(a).unwrap().duration - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut model = TrackModel::default();
        model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        let before = model.clips(Medium::Video).to_vec();
        model.update(Uuid::new_v4(), ClipUpdate { start: Some(99.0), ..Default::default() });
        model.remove(Uuid::new_v4());
        assert_eq!(model.clips(Medium::Video), &before[..]);
    }

    #[test]
    fn test_lane_state_is_lane_scoped() {
        let mut model = TrackModel::default();
        model.toggle_lane(Medium::Video, 2, LaneToggle::Muted);
        assert!(model.lane_state(Medium::Video, 2).muted);
        assert!(!model.lane_state(Medium::Video, 0).muted);
        assert!(!model.lane_state(Medium::Audio, 2).muted);
        model.toggle_lane(Medium::Video, 2, LaneToggle::Muted);
        assert!(!model.lane_state(Medium::Video, 2).muted);
    }

    #[test]
    fn test_hidden_lane_excluded_from_active_set() {
        let mut model = TrackModel::default();
        let a = model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        let b = model.insert_media(Medium::Video, "b.mp4", 10.0).unwrap();
        model.try_move(b, 0.0, 1).then_some(()).unwrap();
        let active = model.active_clips(Medium::Video, 5.0);
        assert_eq!(active.len(), 2);
        // Paint order: ascending lane index, topmost layer last.
        assert_eq!(active[0].id, a);
        assert_eq!(active[1].id, b);

        model.toggle_lane(Medium::Video, 1, LaneToggle::Hidden);
        let active = model.active_clips(Medium::Video, 5.0);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, a);
    }

    #[test]
    fn test_timeline_duration_floor() {
        let mut model = TrackModel::default();
        assert_eq!(model.timeline_duration(), TIMELINE_FLOOR_SECONDS);
        let id = model.insert_media(Medium::Video, "a.mp4", 50.0).unwrap();
        assert_eq!(model.timeline_duration(), 50.0);
        model.remove(id);
        assert_eq!(model.timeline_duration(), TIMELINE_FLOOR_SECONDS);
    }

    #[test]
    fn test_apply_style_to_all_text_clips() {
        let mut model = TrackModel::default();
        let a = model.insert_text("one", 0.0, 2.0);
        let b = model.insert_text("two", 2.0, 2.0);
        let mut style = TextStyle::default();
        style.color = "#ff0000".to_string();
        model.update(a, ClipUpdate { style: Some(style.clone()), ..Default::default() });
        model.apply_style_to_all(a);
        assert_eq!(model.find(b).unwrap().style.as_ref().unwrap().color, "#ff0000");
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut model = TrackModel::default();
        let id = model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        assert!(model.try_move(id, 20.0, 0));
        model.undo();
        assert_eq!(model.find(id).unwrap().start, 0.0);
        model.redo();
        assert_eq!(model.find(id).unwrap().start, 20.0);
        model.undo();
        model.undo();
        assert!(model.clips(Medium::Video).is_empty());
    }

    #[test]
    fn test_no_overlap_after_mixed_operation_sequence() {
        let mut model = TrackModel::default();
        let a = model.insert_media(Medium::Video, "a.mp4", 8.0).unwrap();
        let b = model.insert_media(Medium::Video, "b.mp4", 5.0).unwrap();
        let c = model.insert_media(Medium::Video, "c.mp4", 3.0).unwrap();
        assert!(!model.try_move(c, 6.0, 0)); // overlaps A and B
        assert!(!model.try_resize(a, 0.0, 9.0)); // grows into B
        assert!(model.try_resize(a, 2.0, 6.0)); // trims the left edge
        assert!(model.split(b, Medium::Video, 10.0).is_some());
        assert!(model.try_resize(c, 13.0, 2.0));
        assert!(model.try_move(c, 0.0, 0)); // fits the gap the trim opened
        assert_no_overlap(&model, Medium::Video, 0);
    }
}
