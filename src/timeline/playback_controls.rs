use dioxus::prelude::*;

use crate::constants::{BG_ELEVATED, BG_HOVER, BORDER_DEFAULT, TEXT_MUTED, TEXT_PRIMARY};
use crate::core::gesture::Tool;
use crate::utils::format_timecode;

#[component]
fn ToolbarBtn(
    label: &'static str,
    #[props(default = false)] active: bool,
    #[props(default)] title: String,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let bg = if active { BG_HOVER } else { "transparent" };
    rsx! {
        button {
            style: "height: 24px; padding: 0 8px; border: none; border-radius: 4px; background-color: {bg}; color: {TEXT_MUTED}; font-size: 11px; cursor: pointer;",
            title: "{title}",
            onclick: move |e| on_click.call(e),
            "{label}"
        }
    }
}

/// Transport bar above the lanes: play/pause, the timecode readout,
/// tool switching, undo/redo, and clip/export actions.
#[component]
pub(crate) fn PlaybackControls(
    is_playing: bool,
    current_time: f64,
    duration: f64,
    tool: Tool,
    on_toggle_play: EventHandler<()>,
    on_tool: EventHandler<Tool>,
    on_undo: EventHandler<()>,
    on_redo: EventHandler<()>,
    on_add_text: EventHandler<()>,
    on_export: EventHandler<()>,
) -> Element {
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let current = format_timecode(current_time);
    let total = format_timecode(duration);

    rsx! {
        div {
            style: "
                display: flex; align-items: center; gap: 8px;
                height: 34px; padding: 0 10px;
                background-color: {BG_ELEVATED};
                border-bottom: 1px solid {BORDER_DEFAULT};
                flex-shrink: 0;
            ",
            ToolbarBtn {
                label: play_icon,
                title: "Play/Pause (Space)".to_string(),
                on_click: move |_| on_toggle_play.call(()),
            }
            span {
                style: "font-size: 10px; color: {TEXT_PRIMARY}; font-family: 'SF Mono', Consolas, monospace;",
                "{current} / {total}"
            }
            div { style: "width: 1px; height: 16px; background-color: {BORDER_DEFAULT};" }
            ToolbarBtn {
                label: "Select",
                active: tool == Tool::Select,
                title: "Select tool (V)".to_string(),
                on_click: move |_| on_tool.call(Tool::Select),
            }
            ToolbarBtn {
                label: "Razor",
                active: tool == Tool::Razor,
                title: "Razor tool (C)".to_string(),
                on_click: move |_| on_tool.call(Tool::Razor),
            }
            div { style: "width: 1px; height: 16px; background-color: {BORDER_DEFAULT};" }
            ToolbarBtn {
                label: "Undo",
                title: "Undo (Ctrl+Z)".to_string(),
                on_click: move |_| on_undo.call(()),
            }
            ToolbarBtn {
                label: "Redo",
                title: "Redo (Ctrl+Shift+Z)".to_string(),
                on_click: move |_| on_redo.call(()),
            }
            div { style: "flex: 1;" }
            ToolbarBtn {
                label: "+ Text",
                title: "Add a text clip at the playhead".to_string(),
                on_click: move |_| on_add_text.call(()),
            }
            ToolbarBtn {
                label: "Export",
                on_click: move |_| on_export.call(()),
            }
        }
    }
}
