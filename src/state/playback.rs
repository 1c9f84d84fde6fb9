use crate::constants::PLAYBACK_TICK_SECONDS;

/// The logical transport clock. Media elements follow this clock, never
/// the other way around; it advances on a fixed tick while playing and
/// jumps on seek.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackClock {
    pub current_time: f64,
    pub is_playing: bool,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            is_playing: false,
        }
    }
}

impl PlaybackClock {
    /// Advance one tick. Reaching the end of the timeline stops playback
    /// and rewinds to zero, ready for the next play press.
    pub fn tick(&mut self, timeline_duration: f64) {
        if !self.is_playing {
            return;
        }
        let next = self.current_time + PLAYBACK_TICK_SECONDS;
        if next >= timeline_duration {
            self.current_time = 0.0;
            self.is_playing = false;
        } else {
            self.current_time = next;
        }
    }

    pub fn toggle(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Jump to an absolute time, clamped to the playable range. Seeking
    /// never changes the play/pause state.
    pub fn seek(&mut self, time: f64, timeline_duration: f64) {
        self.current_time = time.clamp(0.0, timeline_duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_only_while_playing() {
        let mut clock = PlaybackClock::default();
        clock.tick(30.0);
        assert_eq!(clock.current_time, 0.0);
        clock.is_playing = true;
        clock.tick(30.0);
        assert!((clock.current_time - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_tick_past_end_stops_and_rewinds() {
        let mut clock = PlaybackClock {
            current_time: 11.95,
            is_playing: true,
        };
        clock.tick(12.0);
        assert!(!clock.is_playing);
        assert_eq!(clock.current_time, 0.0);
    }

    #[test]
    fn test_seek_clamps_and_preserves_play_state() {
        let mut clock = PlaybackClock {
            current_time: 5.0,
            is_playing: true,
        };
        clock.seek(-3.0, 30.0);
        assert_eq!(clock.current_time, 0.0);
        assert!(clock.is_playing);
        clock.seek(99.0, 30.0);
        assert_eq!(clock.current_time, 30.0);
    }
}
