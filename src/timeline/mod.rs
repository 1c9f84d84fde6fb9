//! Timeline editor UI: transport bar, ruler, lane rows, and clip
//! elements. Pointer gestures are funneled into the single controller
//! in [`crate::core::gesture`].

mod clip_element;
mod lane_row;
mod panel;
mod playback_controls;
mod ruler;
mod track_header;

pub use panel::TimelinePanel;
