use dioxus::prelude::*;

use crate::constants::{
    ACCENT_AUDIO, ACCENT_TEXT, ACCENT_VIDEO, BG_HOVER, BORDER_SUBTLE, LANE_HEADER_WIDTH_PX,
    TEXT_MUTED, TEXT_PRIMARY,
};
use crate::state::{LaneState, LaneToggle, Medium};

fn lane_name(medium: Medium, index: usize) -> String {
    let prefix = match medium {
        Medium::Video => "V",
        Medium::Audio => "A",
        Medium::Text => "T",
    };
    format!("{prefix}{}", index + 1)
}

fn lane_accent(medium: Medium) -> &'static str {
    match medium {
        Medium::Video => ACCENT_VIDEO,
        Medium::Audio => ACCENT_AUDIO,
        Medium::Text => ACCENT_TEXT,
    }
}

/// Fixed-width header at the left of each lane row with the lane name
/// and its mute/hide toggles. Toggles apply to the lane, so every clip
/// sharing it is affected at once.
#[component]
pub(crate) fn TrackHeader(
    medium: Medium,
    index: usize,
    state: LaneState,
    on_toggle: EventHandler<(Medium, usize, LaneToggle)>,
) -> Element {
    let name = lane_name(medium, index);
    let accent = lane_accent(medium);
    let mute_bg = if state.muted { BG_HOVER } else { "transparent" };
    let hide_bg = if state.hidden { BG_HOVER } else { "transparent" };
    let mute_label = if state.muted { "muted" } else { "audible" };
    let hide_label = if state.hidden { "hidden" } else { "visible" };

    rsx! {
        div {
            style: "
                display: flex; align-items: center; gap: 6px;
                width: {LANE_HEADER_WIDTH_PX}px; height: 100%;
                padding: 0 8px; box-sizing: border-box;
                border-right: 1px solid {BORDER_SUBTLE};
                flex-shrink: 0; user-select: none;
            ",
            div { style: "width: 3px; height: 16px; border-radius: 2px; background-color: {accent};" }
            span {
                style: "font-size: 11px; color: {TEXT_PRIMARY}; flex: 1;",
                "{name}"
            }
            if medium != Medium::Text {
                button {
                    style: "width: 20px; height: 20px; border: none; border-radius: 3px; background-color: {mute_bg}; color: {TEXT_MUTED}; font-size: 9px; cursor: pointer;",
                    title: "Lane {mute_label}",
                    onclick: move |_| on_toggle.call((medium, index, LaneToggle::Muted)),
                    "M"
                }
            }
            if medium != Medium::Audio {
                button {
                    style: "width: 20px; height: 20px; border: none; border-radius: 3px; background-color: {hide_bg}; color: {TEXT_MUTED}; font-size: 9px; cursor: pointer;",
                    title: "Lane {hide_label}",
                    onclick: move |_| on_toggle.call((medium, index, LaneToggle::Hidden)),
                    "H"
                }
            }
        }
    }
}
