//! Editor state: the clip/track data model, transport clock, selection,
//! and the imported asset list.

mod asset;
mod clip;
mod playback;
mod selection;
mod tracks;

pub use asset::{classify_media, AssetEntry};
pub use clip::{db_to_volume, volume_to_db, Clip, ClipTransform, Medium, TextStyle};
pub use playback::PlaybackClock;
pub use selection::Selection;
pub use tracks::{ClipUpdate, LaneState, LaneToggle, TrackModel};
