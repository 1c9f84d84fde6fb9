//! Media element synchronization. Playback is driven by the logical
//! transport clock; each tick produces a [`SyncPlan`] describing what
//! every mounted element should be doing, and a [`PlayerHandle`]
//! reconciles elements against it. The webview applies the same plan
//! through [`crate::constants::PLAYER_SYNC_SCRIPT`].

use serde::Serialize;
use uuid::Uuid;

use crate::constants::SYNC_DRIFT_THRESHOLD_SECONDS;
use crate::state::{Clip, Medium, PlaybackClock, TrackModel};

/// Target state for one mounted media element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncItem {
    pub id: Uuid,
    /// Desired source-relative position, seconds.
    pub local_time: f64,
    pub playing: bool,
    pub volume: f32,
}

/// One tick's worth of reconciliation targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncPlan {
    pub items: Vec<SyncItem>,
    pub drift_threshold: f64,
}

/// Abstraction over whatever actually hosts the media elements. Seeking
/// is left to the reconciler so implementations stay dumb.
pub trait PlayerHandle {
    fn position(&self, id: Uuid) -> Option<f64>;
    fn seek_to(&mut self, id: Uuid, local_time: f64);
    fn set_playing(&mut self, id: Uuid, playing: bool);
    fn set_volume(&mut self, id: Uuid, volume: f32);
}

/// Local monitoring volume for a clip. Lane mute wins over everything;
/// otherwise gains are capped at 1.0 because preview elements cannot
/// boost. Gains above 1.0 still reach the render manifest untouched.
pub fn effective_volume(clip: &Clip, lane_muted: bool) -> f32 {
    if lane_muted {
        0.0
    } else {
        clip.volume.clamp(0.0, 1.0)
    }
}

/// Source-relative time for a clip at transport time `t`. Before the
/// clip starts the element parks at its in-point; past the end it parks
/// at its out-point.
pub fn local_time(clip: &Clip, t: f64) -> f64 {
    clip.source_offset + (t - clip.start).clamp(0.0, clip.duration)
}

/// Build the reconciliation plan for the current transport state.
/// Every mounted media clip gets an item, including clips on hidden
/// lanes: hiding removes a lane from the composite, not from the mix.
pub fn plan(model: &TrackModel, clock: &PlaybackClock) -> SyncPlan {
    let t = clock.current_time;
    let items = model
        .media_clips()
        .map(|clip| {
            let muted = model.lane_state(clip.medium, clip.track_index).muted;
            SyncItem {
                id: clip.id,
                local_time: local_time(clip, t),
                playing: clock.is_playing && clip.contains(t),
                volume: effective_volume(clip, muted),
            }
        })
        .collect();
    SyncPlan {
        items,
        drift_threshold: SYNC_DRIFT_THRESHOLD_SECONDS,
    }
}

/// Push a plan into a player. Seeks only when the element has drifted
/// past the threshold, so steady playback is never interrupted by the
/// tick cadence.
pub fn reconcile<H: PlayerHandle>(plan: &SyncPlan, player: &mut H) {
    for item in &plan.items {
        let drifted = match player.position(item.id) {
            Some(position) => (position - item.local_time).abs() > plan.drift_threshold,
            None => true,
        };
        if drifted {
            player.seek_to(item.id, item.local_time);
        }
        player.set_playing(item.id, item.playing);
        player.set_volume(item.id, item.volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ClipUpdate, LaneToggle};
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockPlayer {
        positions: HashMap<Uuid, f64>,
        seeks: Vec<(Uuid, f64)>,
        playing: HashMap<Uuid, bool>,
        volumes: HashMap<Uuid, f32>,
    }

    impl PlayerHandle for MockPlayer {
        fn position(&self, id: Uuid) -> Option<f64> {
            self.positions.get(&id).copied()
        }
        fn seek_to(&mut self, id: Uuid, local_time: f64) {
            self.seeks.push((id, local_time));
            self.positions.insert(id, local_time);
        }
        fn set_playing(&mut self, id: Uuid, playing: bool) {
            self.playing.insert(id, playing);
        }
        fn set_volume(&mut self, id: Uuid, volume: f32) {
            self.volumes.insert(id, volume);
        }
    }

    fn model_with_two_clips() -> (TrackModel, Uuid, Uuid) {
        let mut model = TrackModel::default();
        let a = model.insert_media(Medium::Video, "a.mp4", 10.0).unwrap();
        let b = model.insert_media(Medium::Audio, "b.mp3", 5.0).unwrap();
        model.try_move(b, 12.0, 0);
        (model, a, b)
    }

    fn item<'a>(plan: &'a SyncPlan, id: Uuid) -> &'a SyncItem {
        plan.items.iter().find(|i| i.id == id).unwrap()
    }

    #[test]
    fn test_plan_marks_only_clips_under_playhead_playing() {
        let (model, a, b) = model_with_two_clips();
        let clock = PlaybackClock { current_time: 4.0, is_playing: true };
        let plan = plan(&model, &clock);
        assert!(item(&plan, a).playing);
        assert!(!item(&plan, b).playing);
        // The audio clip at [12, 17) parks at its in-point meanwhile.
        assert_eq!(item(&plan, b).local_time, 0.0);
    }

    #[test]
    fn test_plan_local_time_includes_source_offset() {
        let (mut model, a, _) = model_with_two_clips();
        model.update(a, ClipUpdate { source_offset: Some(2.0), ..Default::default() });
        let clock = PlaybackClock { current_time: 4.0, is_playing: true };
        let plan = plan(&model, &clock);
        assert!((item(&plan, a).local_time - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_paused_clock_pauses_everything() {
        let (model, a, _) = model_with_two_clips();
        let clock = PlaybackClock { current_time: 4.0, is_playing: false };
        let plan = plan(&model, &clock);
        assert!(plan.items.iter().all(|i| !i.playing));
        assert!((item(&plan, a).local_time - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_muted_lane_silences_its_clips_only() {
        let (mut model, a, b) = model_with_two_clips();
        model.toggle_lane(Medium::Audio, 0, LaneToggle::Muted);
        let clock = PlaybackClock { current_time: 13.0, is_playing: true };
        let plan = plan(&model, &clock);
        assert_eq!(item(&plan, b).volume, 0.0);
        assert_eq!(item(&plan, a).volume, 1.0);
        // Muting does not stop transport-following.
        assert!(item(&plan, b).playing);
    }

    #[test]
    fn test_monitor_volume_caps_boost_at_unity() {
        let (mut model, a, _) = model_with_two_clips();
        model.update(a, ClipUpdate { volume: Some(1.8), ..Default::default() });
        let clock = PlaybackClock::default();
        let plan = plan(&model, &clock);
        assert_eq!(item(&plan, a).volume, 1.0);
        assert_eq!(model.find(a).unwrap().volume, 1.8);
    }

    #[test]
    fn test_hidden_lane_clips_stay_in_plan() {
        let (mut model, a, _) = model_with_two_clips();
        model.toggle_lane(Medium::Video, 0, LaneToggle::Hidden);
        let clock = PlaybackClock { current_time: 4.0, is_playing: true };
        let plan = plan(&model, &clock);
        let entry = item(&plan, a);
        assert!(entry.playing);
        assert_eq!(entry.volume, 1.0);
    }

    #[test]
    fn test_reconcile_seeks_only_on_drift() {
        let (model, a, b) = model_with_two_clips();
        let clock = PlaybackClock { current_time: 4.0, is_playing: true };
        let sync = plan(&model, &clock);

        let mut player = MockPlayer::default();
        player.positions.insert(a, 3.95); // within threshold
        player.positions.insert(b, 3.0); // way off its in-point
        reconcile(&sync, &mut player);

        assert!(player.seeks.iter().all(|(id, _)| *id != a));
        assert!(player.seeks.iter().any(|(id, t)| *id == b && *t == 0.0));
        assert_eq!(player.playing[&a], true);
        assert_eq!(player.playing[&b], false);
    }

    #[test]
    fn test_plan_serializes_for_the_webview_script() {
        let (model, a, _) = model_with_two_clips();
        let clock = PlaybackClock::default();
        let json = serde_json::to_value(plan(&model, &clock)).unwrap();
        assert!(json["drift_threshold"].as_f64().unwrap() > 0.0);
        let ids: Vec<&str> = json["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["id"].as_str().unwrap())
            .collect();
        assert!(ids.contains(&a.to_string().as_str()));
    }
}
