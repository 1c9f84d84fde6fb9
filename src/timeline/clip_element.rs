use dioxus::prelude::*;

use crate::constants::{
    ACCENT_AUDIO, ACCENT_TEXT, ACCENT_VIDEO, BORDER_ACCENT, CLIP_AUDIO_BG, CLIP_AUDIO_BORDER,
    CLIP_TEXT_BG, CLIP_TEXT_BORDER, CLIP_VIDEO_BG, CLIP_VIDEO_BORDER, TEXT_PRIMARY,
};
use crate::core::geometry::{clip_rect, pixel_to_time};
use crate::core::gesture::{ResizeEdge, Tool};
use crate::state::{Clip, Medium};

fn clip_colors(medium: Medium) -> (&'static str, &'static str, &'static str) {
    match medium {
        Medium::Video => (CLIP_VIDEO_BG, CLIP_VIDEO_BORDER, ACCENT_VIDEO),
        Medium::Audio => (CLIP_AUDIO_BG, CLIP_AUDIO_BORDER, ACCENT_AUDIO),
        Medium::Text => (CLIP_TEXT_BG, CLIP_TEXT_BORDER, ACCENT_TEXT),
    }
}

fn clip_label(clip: &Clip) -> String {
    if let Some(text) = &clip.text {
        return text.clone();
    }
    clip.source_url
        .as_deref()
        .and_then(|url| url.rsplit('/').next())
        .map(|name| urlencoding::decode(name).map(|s| s.into_owned()).unwrap_or_else(|_| name.to_string()))
        .unwrap_or_else(|| "Clip".to_string())
}

/// One clip rectangle inside a lane row. The element itself holds no
/// drag state; pointer-downs are reported upward and the panel's
/// gesture controller takes it from there.
#[component]
pub(crate) fn ClipElement(
    clip: Clip,
    is_selected: bool,
    is_ghost: bool,
    tool: Tool,
    on_select: EventHandler<uuid::Uuid>,
    /// (id, client_x, client_y, touch)
    on_begin_move: EventHandler<(uuid::Uuid, f64, f64, bool)>,
    /// (id, edge, client_x)
    on_begin_resize: EventHandler<(uuid::Uuid, ResizeEdge, f64)>,
    /// (id, timeline_seconds)
    on_razor: EventHandler<(uuid::Uuid, f64)>,
) -> Element {
    let (left, width) = clip_rect(&clip);
    let (bg, border, accent) = clip_colors(clip.medium);
    let label = clip_label(&clip);
    let clip_id = clip.id;
    let clip_start = clip.start;
    let razor = tool == Tool::Razor;

    let selection_ring = if is_selected {
        format!("0 0 0 1px {}", BORDER_ACCENT)
    } else {
        "none".to_string()
    };
    let opacity = if is_ghost { "0.7" } else { "1.0" };
    let cursor = if razor { "crosshair" } else { "grab" };

    rsx! {
        div {
            style: "
                position: absolute;
                left: {left}px;
                top: 2px;
                bottom: 2px;
                width: {width}px;
                background-color: {bg};
                border: 1px solid {border};
                box-shadow: {selection_ring};
                border-radius: 4px;
                display: flex;
                align-items: center;
                overflow: hidden;
                cursor: {cursor};
                user-select: none;
                opacity: {opacity};
            ",
            onmousedown: move |e| {
                if let Some(btn) = e.trigger_button() {
                    if format!("{:?}", btn) == "Primary" {
                        e.prevent_default();
                        e.stop_propagation();
                        if razor {
                            let at = clip_start + pixel_to_time(e.element_coordinates().x);
                            on_razor.call((clip_id, at));
                        } else {
                            on_select.call(clip_id);
                            let coords = e.client_coordinates();
                            on_begin_move.call((clip_id, coords.x, coords.y, false));
                        }
                    }
                }
            },
            ontouchstart: move |e| {
                if razor {
                    return;
                }
                if let Some(touch) = e.touches().first() {
                    on_select.call(clip_id);
                    let coords = touch.client_coordinates();
                    on_begin_move.call((clip_id, coords.x, coords.y, true));
                }
            },

            // Left resize handle
            if !razor {
                div {
                    style: "
                        position: absolute; left: 0; top: 0; bottom: 0; width: 8px;
                        cursor: ew-resize; z-index: 2;
                    ",
                    onmousedown: move |e| {
                        if let Some(btn) = e.trigger_button() {
                            if format!("{:?}", btn) == "Primary" {
                                e.prevent_default();
                                e.stop_propagation();
                                on_select.call(clip_id);
                                on_begin_resize.call((clip_id, ResizeEdge::Start, e.client_coordinates().x));
                            }
                        }
                    },
                }
            }

            // Label
            div {
                style: "
                    display: flex; align-items: center; width: 100%;
                    min-width: 0; padding: 0 8px; pointer-events: none;
                ",
                div {
                    style: "width: 3px; height: 60%; border-radius: 2px; background-color: {accent}; flex-shrink: 0; margin-right: 6px;",
                }
                span {
                    style: "
                        font-size: 10px; color: {TEXT_PRIMARY};
                        white-space: nowrap; overflow: hidden; text-overflow: ellipsis;
                        flex: 1; min-width: 0;
                    ",
                    "{label}"
                }
            }

            // Right resize handle
            if !razor {
                div {
                    style: "
                        position: absolute; right: 0; top: 0; bottom: 0; width: 8px;
                        cursor: ew-resize; z-index: 2;
                    ",
                    onmousedown: move |e| {
                        if let Some(btn) = e.trigger_button() {
                            if format!("{:?}", btn) == "Primary" {
                                e.prevent_default();
                                e.stop_propagation();
                                on_select.call(clip_id);
                                on_begin_resize.call((clip_id, ResizeEdge::End, e.client_coordinates().x));
                            }
                        }
                    },
                }
            }
        }
    }
}
