use dioxus::prelude::*;

use crate::constants::{BG_SURFACE, BORDER_DEFAULT, BORDER_SUBTLE, RULER_HEIGHT_PX, TEXT_DIM};
use crate::core::geometry::{pixel_to_time, time_to_pixel};

const SECONDS_PER_MAJOR_TICK: f64 = 5.0;

/// Time ruler across the top of the timeline. Clicking or dragging on
/// it scrubs the playhead.
#[component]
pub(crate) fn TimeRuler(
    visible_seconds: f64,
    /// (timeline_seconds, client_x) at the initiating mousedown.
    on_scrub_start: EventHandler<(f64, f64)>,
) -> Element {
    let width = time_to_pixel(visible_seconds);
    let num_ticks = (visible_seconds / SECONDS_PER_MAJOR_TICK).ceil() as i32 + 1;

    rsx! {
        div {
            style: "
                position: relative; width: {width}px; height: {RULER_HEIGHT_PX}px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                cursor: ew-resize; user-select: none; flex-shrink: 0;
            ",
            onmousedown: move |e| {
                e.prevent_default();
                let time = pixel_to_time(e.element_coordinates().x);
                on_scrub_start.call((time, e.client_coordinates().x));
            },

            for i in 0..num_ticks {
                {
                    let t = i as f64 * SECONDS_PER_MAJOR_TICK;
                    let x = time_to_pixel(t);
                    let label_x = x + 4.0;
                    let minutes = t as i32 / 60;
                    let seconds = t as i32 % 60;
                    rsx! {
                        div {
                            key: "tick-{i}",
                            div {
                                style: "
                                    position: absolute; left: {x}px; bottom: 0;
                                    width: 1px; height: 8px;
                                    background-color: {BORDER_SUBTLE};
                                    pointer-events: none;
                                ",
                            }
                            span {
                                style: "
                                    position: absolute; left: {label_x}px; top: 3px;
                                    font-size: 9px; color: {TEXT_DIM};
                                    font-family: 'SF Mono', Consolas, monospace;
                                    pointer-events: none;
                                ",
                                "{minutes}:{seconds:02}"
                            }
                        }
                    }
                }
            }
        }
    }
}
