use dioxus::prelude::*;
use uuid::Uuid;

use crate::constants::{
    ACCENT_VIDEO, BG_BASE, BORDER_DEFAULT, LANE_HEADER_WIDTH_PX, SNAP_LINE_COLOR,
    TIMELINE_MIN_VISUAL_SECONDS, TIMELINE_TAIL_SECONDS,
};
use crate::core::geometry::{find_snap, pixel_to_time, snap_points, time_to_pixel};
use crate::core::gesture::{Gesture, MovePreview, ResizeEdge, Tool};
use crate::state::{Clip, Medium, PlaybackClock, Selection, TrackModel};

use super::lane_row::LaneRow;
use super::playback_controls::PlaybackControls;
use super::ruler::TimeRuler;

fn lane_indexes(count: usize, inverted: bool) -> Vec<usize> {
    if inverted {
        (0..count).rev().collect()
    } else {
        (0..count).collect()
    }
}

/// The timeline editor: transport bar, ruler, and the lane stack.
///
/// All in-flight pointer state lives in the single `gesture` value.
/// While a gesture is active a fixed overlay captures every mouse event
/// in the window; releasing the button always returns to idle, so a
/// mouseup outside the panel can never leave a drag wedged.
#[component]
pub fn TimelinePanel(
    mut model: Signal<TrackModel>,
    mut clock: Signal<PlaybackClock>,
    mut gesture: Signal<Gesture>,
    mut tool: Signal<Tool>,
    mut selection: Signal<Selection>,
    on_export: EventHandler<()>,
) -> Element {
    // Ghost position for the gesture in flight. Committed to the model
    // only on mouseup, and only if the model accepts it.
    let mut move_preview = use_signal(|| None::<(Uuid, f64, usize)>);
    let mut resize_preview = use_signal(|| None::<(Uuid, f64, f64)>);
    let mut snap_line = use_signal(|| None::<f64>);
    let mut razor_guide = use_signal(|| None::<f64>);
    let mut scrub_origin_x = use_signal(|| 0.0);

    let duration = model.read().timeline_duration();
    let visible_seconds = (duration + TIMELINE_TAIL_SECONDS).max(TIMELINE_MIN_VISUAL_SECONDS);
    let content_width = time_to_pixel(visible_seconds);
    let full_width = LANE_HEADER_WIDTH_PX + content_width;

    let moving_medium = match &*gesture.read() {
        Gesture::Moving(mv) => Some(mv.medium),
        _ => None,
    };

    // Clip lists with the gesture preview applied on top of the
    // committed model state.
    let display_clips = |medium: Medium| -> Vec<Clip> {
        model
            .read()
            .clips(medium)
            .iter()
            .cloned()
            .map(|mut clip| {
                if let Some((id, start, track_index)) = move_preview() {
                    if id == clip.id {
                        clip.start = start;
                        clip.track_index = track_index;
                    }
                }
                if let Some((id, start, duration)) = resize_preview() {
                    if id == clip.id {
                        clip.start = start;
                        clip.duration = duration;
                    }
                }
                clip
            })
            .collect()
    };

    // Lane stack, top to bottom. Video and text lanes stack bottom-up;
    // audio stacks top-down. A move gesture opens one extra lane of its
    // medium as a drop target.
    let mut sections: Vec<(Medium, Vec<usize>, Vec<Clip>)> = Vec::new();
    for (medium, inverted) in [(Medium::Text, true), (Medium::Video, true), (Medium::Audio, false)]
    {
        let clips = display_clips(medium);
        let mut count = clips.iter().map(|c| c.track_index + 1).max().unwrap_or(1);
        if moving_medium == Some(medium) {
            count += 1;
        }
        sections.push((medium, lane_indexes(count, inverted), clips));
    }

    let ghost_id = move_preview().map(|(id, _, _)| id);
    let selected_id = selection.read().id();
    let current_tool = tool();
    let playhead_x = LANE_HEADER_WIDTH_PX + time_to_pixel(clock.read().current_time);

    let gesture_active = !gesture.read().is_idle();
    // External drags commit on the lane stack itself so the drop
    // position is known; only pointer-anchored gestures need the
    // fullscreen capture overlay.
    let overlay_active = matches!(
        &*gesture.read(),
        Gesture::Moving(_) | Gesture::Resizing(_) | Gesture::Scrubbing
    );
    let razor_active = current_tool == Tool::Razor;

    let begin_move = move |(id, x, y, touch): (Uuid, f64, f64, bool)| {
        let model = model.read();
        if let Some(clip) = model.find(id) {
            gesture.write().begin_move(clip, x, y, touch);
        }
    };
    let begin_resize = move |(id, edge, x): (Uuid, ResizeEdge, f64)| {
        let model = model.read();
        if let Some(clip) = model.find(id) {
            gesture.write().begin_resize(clip, edge, x);
        }
    };
    let mut select_clip = move |id: Uuid| {
        let medium = model.read().find(id).map(|c| c.medium);
        if let Some(medium) = medium {
            selection.write().select(id, medium);
        }
    };
    // Razor cuts commit at the same snapped position the guide shows.
    let snap_cut = move |at: f64| -> f64 {
        let points = snap_points(&model.read(), Uuid::nil());
        find_snap(at, 0.0, &points).map(|s| s.start).unwrap_or(at)
    };
    let razor_split = move |(id, at): (Uuid, f64)| {
        let medium = model.read().find(id).map(|c| c.medium);
        if let Some(medium) = medium {
            let split = model.write().split(id, medium, snap_cut(at));
            if split.is_some() {
                selection.write().forget(id);
            }
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%; background-color: {BG_BASE}; overflow: hidden;",

            PlaybackControls {
                is_playing: clock.read().is_playing,
                current_time: clock.read().current_time,
                duration,
                tool: current_tool,
                on_toggle_play: move |_| clock.write().toggle(),
                on_tool: move |t| tool.set(t),
                on_undo: move |_| model.write().undo(),
                on_redo: move |_| model.write().redo(),
                on_add_text: move |_| {
                    let at = clock.read().current_time;
                    let id = model.write().insert_text("New Text", at, 3.0);
                    selection.write().select(id, Medium::Text);
                },
                on_export: move |_| on_export.call(()),
            }

            div {
                style: "flex: 1; overflow: auto; position: relative;",

                // Ruler row, offset past the lane headers.
                div {
                    style: "display: flex; width: {full_width}px;",
                    div { style: "width: {LANE_HEADER_WIDTH_PX}px; flex-shrink: 0; border-bottom: 1px solid {BORDER_DEFAULT};" }
                    TimeRuler {
                        visible_seconds,
                        on_scrub_start: move |(time, client_x): (f64, f64)| {
                            if gesture.write().begin_scrub() {
                                scrub_origin_x.set(client_x - time_to_pixel(time));
                                let duration = model.read().timeline_duration();
                                clock.write().seek(time, duration);
                            }
                        },
                    }
                }

                // Lane stack with the playhead and guide lines on top.
                div {
                    style: "position: relative; width: {full_width}px;",
                    // Clips stop propagation, so this only fires on
                    // empty lane space.
                    onmousedown: move |_| selection.write().clear(),
                    // An asset dragged out of the panel lands at the
                    // position it is released; releases outside the
                    // lane stack are handled at the app root and drop
                    // nothing.
                    onmouseup: move |e| {
                        let dropped = match &*gesture.read() {
                            Gesture::ExternalDrag { medium, source_url, duration } => {
                                Some((*medium, source_url.clone(), *duration))
                            }
                            _ => None,
                        };
                        if let Some((medium, source_url, duration)) = dropped {
                            gesture.write().finish();
                            let x = e.element_coordinates().x - LANE_HEADER_WIDTH_PX;
                            if x >= 0.0 {
                                model.write().try_insert_media(
                                    medium,
                                    &source_url,
                                    duration,
                                    pixel_to_time(x),
                                );
                            }
                        }
                    },
                    onmousemove: move |e| {
                        if razor_active && !gesture_active {
                            let x = e.element_coordinates().x - LANE_HEADER_WIDTH_PX;
                            razor_guide.set((x >= 0.0).then(|| snap_cut(pixel_to_time(x))));
                        }
                    },
                    onmouseleave: move |_| razor_guide.set(None),

                    for (medium, indexes, clips) in sections {
                        for index in indexes {
                            LaneRow {
                                key: "{medium:?}-{index}",
                                medium,
                                index,
                                state: model.read().lane_state(medium, index),
                                clips: clips.iter().filter(|c| c.track_index == index).cloned().collect::<Vec<_>>(),
                                ghost_id,
                                selected_id,
                                tool: current_tool,
                                content_width,
                                on_toggle: move |(medium, index, toggle)| {
                                    model.write().toggle_lane(medium, index, toggle);
                                },
                                on_select: move |id| select_clip(id),
                                on_begin_move: begin_move,
                                on_begin_resize: begin_resize,
                                on_razor: razor_split,
                            }
                        }
                    }

                    // Playhead
                    div {
                        style: "
                            position: absolute; left: {playhead_x}px; top: 0; bottom: 0;
                            width: 1px; background-color: {ACCENT_VIDEO};
                            pointer-events: none; z-index: 20;
                        ",
                    }
                    if let Some(line) = snap_line() {
                        {
                            let x = LANE_HEADER_WIDTH_PX + time_to_pixel(line);
                            rsx! {
                                div {
                                    style: "
                                        position: absolute; left: {x}px; top: 0; bottom: 0;
                                        width: 1px; background-color: {SNAP_LINE_COLOR};
                                        pointer-events: none; z-index: 20;
                                    ",
                                }
                            }
                        }
                    }
                    if let Some(guide) = razor_guide() {
                        {
                            let x = LANE_HEADER_WIDTH_PX + time_to_pixel(guide);
                            rsx! {
                                div {
                                    style: "
                                        position: absolute; left: {x}px; top: 0; bottom: 0;
                                        width: 1px; background-color: {SNAP_LINE_COLOR};
                                        opacity: 0.5; pointer-events: none; z-index: 20;
                                    ",
                                }
                            }
                        }
                    }
                }
            }
        }

        // Scoped listener overlay: mounted only while a gesture is in
        // flight, unmounted on mouseup no matter where it lands.
        if overlay_active {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999;",
                oncontextmenu: move |e| e.prevent_default(),
                onmousemove: move |e| {
                    let coords = e.client_coordinates();
                    let mut yielded = false;
                    {
                        let mut active = gesture.write();
                        match &mut *active {
                            Gesture::Moving(mv) => {
                                let (points, max_lane) = {
                                    let model = model.read();
                                    (snap_points(&model, mv.clip_id), model.max_lane(mv.medium))
                                };
                                match mv.update(coords.x, coords.y, &points, max_lane) {
                                    MovePreview::Pending => {}
                                    MovePreview::YieldToScroll => yielded = true,
                                    MovePreview::Position { start, track_index, snap_line: line } => {
                                        move_preview.set(Some((mv.clip_id, start, track_index)));
                                        snap_line.set(line);
                                    }
                                }
                            }
                            Gesture::Resizing(rs) => {
                                let preview = rs.update(coords.x);
                                resize_preview.set(Some((rs.clip_id, preview.start, preview.duration)));
                            }
                            Gesture::Scrubbing => {
                                let time = pixel_to_time(coords.x - scrub_origin_x());
                                let duration = model.read().timeline_duration();
                                clock.write().seek(time, duration);
                            }
                            Gesture::Idle | Gesture::ExternalDrag { .. } => {}
                        }
                    }
                    if yielded {
                        gesture.write().finish();
                        move_preview.set(None);
                        snap_line.set(None);
                    }
                },
                onmouseup: move |_| {
                    let finished = std::mem::take(&mut *gesture.write());
                    match finished {
                        Gesture::Moving(_) => {
                            if let Some((id, start, track_index)) = move_preview() {
                                model.write().try_move(id, start, track_index);
                            }
                        }
                        Gesture::Resizing(_) => {
                            if let Some((id, start, duration)) = resize_preview() {
                                model.write().try_resize(id, start, duration);
                            }
                        }
                        Gesture::Idle | Gesture::Scrubbing | Gesture::ExternalDrag { .. } => {}
                    }
                    move_preview.set(None);
                    resize_preview.set(None);
                    snap_line.set(None);
                },
            }
        }
    }
}
