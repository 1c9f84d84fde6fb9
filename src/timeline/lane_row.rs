use dioxus::prelude::*;

use crate::constants::{BG_BASE, BORDER_SUBTLE};
use crate::core::geometry::lane_height;
use crate::core::gesture::{ResizeEdge, Tool};
use crate::state::{Clip, LaneState, LaneToggle, Medium};

use super::clip_element::ClipElement;
use super::track_header::TrackHeader;

/// One lane: header plus an absolutely-positioned strip of clips.
/// `clips` arrives already filtered to this lane and already carries
/// any in-flight gesture preview positions.
#[component]
pub(crate) fn LaneRow(
    medium: Medium,
    index: usize,
    state: LaneState,
    clips: Vec<Clip>,
    ghost_id: Option<uuid::Uuid>,
    selected_id: Option<uuid::Uuid>,
    tool: Tool,
    content_width: f64,
    on_toggle: EventHandler<(Medium, usize, LaneToggle)>,
    on_select: EventHandler<uuid::Uuid>,
    on_begin_move: EventHandler<(uuid::Uuid, f64, f64, bool)>,
    on_begin_resize: EventHandler<(uuid::Uuid, ResizeEdge, f64)>,
    on_razor: EventHandler<(uuid::Uuid, f64)>,
) -> Element {
    let height = lane_height(medium);
    let row_opacity = if state.hidden { "0.4" } else { "1.0" };

    rsx! {
        div {
            style: "
                display: flex; height: {height}px;
                border-bottom: 1px solid {BORDER_SUBTLE};
                background-color: {BG_BASE};
                flex-shrink: 0;
            ",
            TrackHeader {
                medium,
                index,
                state,
                on_toggle: move |args| on_toggle.call(args),
            }
            div {
                style: "
                    position: relative; width: {content_width}px; height: 100%;
                    opacity: {row_opacity};
                ",
                for clip in clips {
                    ClipElement {
                        key: "{clip.id}",
                        is_selected: selected_id == Some(clip.id),
                        is_ghost: ghost_id == Some(clip.id),
                        clip,
                        tool,
                        on_select: move |id| on_select.call(id),
                        on_begin_move: move |args| on_begin_move.call(args),
                        on_begin_resize: move |args| on_begin_resize.call(args),
                        on_razor: move |args| on_razor.call(args),
                    }
                }
            }
        }
    }
}
