use dioxus::prelude::*;

use crate::constants::{
    BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::state::{
    db_to_volume, volume_to_db, ClipUpdate, Medium, Selection, TrackModel,
};
use crate::utils::{parse_f32_input, parse_f64_input};

#[component]
fn Field(label: &'static str, value: String, on_commit: EventHandler<String>) -> Element {
    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 6px; font-size: 10px; color: {TEXT_MUTED};",
            span { style: "width: 70px; flex-shrink: 0;", "{label}" }
            input {
                style: "
                    flex: 1; min-width: 0; background-color: {BG_SURFACE};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 3px;
                    color: {TEXT_PRIMARY}; font-size: 10px; padding: 3px 6px;
                ",
                value: "{value}",
                onchange: move |e| on_commit.call(e.value()),
            }
        }
    }
}

/// Inspector for the selected clip. Every edit funnels through
/// [`TrackModel::update`], the same entry point drags commit through.
#[component]
pub fn PropertiesPanel(mut model: Signal<TrackModel>, mut selection: Signal<Selection>) -> Element {
    let selected = selection.read().id();
    let clip = selected.and_then(|id| model.read().find(id).cloned());

    let Some(clip) = clip else {
        return rsx! {
            div {
                style: "
                    width: 240px; flex-shrink: 0; padding: 12px;
                    background-color: {BG_ELEVATED}; border-left: 1px solid {BORDER_DEFAULT};
                    display: flex; align-items: center; justify-content: center;
                    color: {TEXT_DIM}; font-size: 11px;
                ",
                "Select a clip to inspect it"
            }
        };
    };

    let id = clip.id;
    let is_media = clip.medium != Medium::Text;
    let db = volume_to_db(clip.volume);
    let style = clip.style.clone().unwrap_or_default();
    let text_value = clip.text.clone().unwrap_or_default();

    rsx! {
        div {
            style: "
                width: 240px; flex-shrink: 0; padding: 12px;
                background-color: {BG_ELEVATED}; border-left: 1px solid {BORDER_DEFAULT};
                display: flex; flex-direction: column; gap: 8px;
                overflow-y: auto; box-sizing: border-box;
            ",

            span { style: "font-size: 11px; color: {TEXT_PRIMARY}; font-weight: 600;", "Clip" }

            // Start and duration commit through the same
            // collision-checked paths drags use, so the inspector can
            // never type a clip on top of another.
            Field {
                label: "Start (s)",
                value: format!("{:.2}", clip.start),
                on_commit: {
                    let start = clip.start;
                    let track_index = clip.track_index;
                    move |v: String| {
                        model.write().try_move(id, parse_f64_input(&v, start), track_index);
                    }
                },
            }
            Field {
                label: "Duration (s)",
                value: format!("{:.2}", clip.duration),
                on_commit: {
                    let start = clip.start;
                    let duration = clip.duration;
                    move |v: String| {
                        model.write().try_resize(id, start, parse_f64_input(&v, duration));
                    }
                },
            }

            if is_media {
                label {
                    style: "display: flex; flex-direction: column; gap: 4px; font-size: 10px; color: {TEXT_MUTED};",
                    span { "Volume: {db:.1} dB" }
                    input {
                        r#type: "range",
                        min: "-60",
                        max: "10",
                        step: "0.5",
                        value: "{db}",
                        oninput: move |e| {
                            let db = parse_f32_input(&e.value(), 0.0);
                            model.write().update(id, ClipUpdate {
                                volume: Some(db_to_volume(db)),
                                ..Default::default()
                            });
                        },
                    }
                }
            }

            if clip.medium == Medium::Video {
                span { style: "font-size: 11px; color: {TEXT_PRIMARY}; font-weight: 600; margin-top: 6px;", "Transform" }
                Field {
                    label: "X (px)",
                    value: format!("{:.0}", clip.transform.position_x),
                    on_commit: {
                        let transform = clip.transform;
                        move |v: String| {
                            let mut transform = transform;
                            transform.position_x = parse_f64_input(&v, transform.position_x);
                            model.write().update(id, ClipUpdate { transform: Some(transform), ..Default::default() });
                        }
                    },
                }
                Field {
                    label: "Y (px)",
                    value: format!("{:.0}", clip.transform.position_y),
                    on_commit: {
                        let transform = clip.transform;
                        move |v: String| {
                            let mut transform = transform;
                            transform.position_y = parse_f64_input(&v, transform.position_y);
                            model.write().update(id, ClipUpdate { transform: Some(transform), ..Default::default() });
                        }
                    },
                }
                Field {
                    label: "Scale",
                    value: format!("{:.2}", clip.transform.scale),
                    on_commit: {
                        let transform = clip.transform;
                        move |v: String| {
                            let mut transform = transform;
                            transform.scale = parse_f64_input(&v, transform.scale).max(0.01);
                            model.write().update(id, ClipUpdate { transform: Some(transform), ..Default::default() });
                        }
                    },
                }
                Field {
                    label: "Rotation",
                    value: format!("{:.1}", clip.transform.rotation_deg),
                    on_commit: {
                        let transform = clip.transform;
                        move |v: String| {
                            let mut transform = transform;
                            transform.rotation_deg = parse_f64_input(&v, transform.rotation_deg);
                            model.write().update(id, ClipUpdate { transform: Some(transform), ..Default::default() });
                        }
                    },
                }
            }

            if clip.medium == Medium::Text {
                span { style: "font-size: 11px; color: {TEXT_PRIMARY}; font-weight: 600; margin-top: 6px;", "Text" }
                textarea {
                    style: "
                        background-color: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT};
                        border-radius: 3px; color: {TEXT_PRIMARY}; font-size: 11px;
                        padding: 4px 6px; min-height: 48px; resize: vertical;
                    ",
                    value: "{text_value}",
                    onchange: move |e| {
                        model.write().update(id, ClipUpdate {
                            text: Some(e.value()),
                            ..Default::default()
                        });
                    },
                }
                Field {
                    label: "Font size",
                    value: format!("{:.0}", style.font_size),
                    on_commit: {
                        let style = style.clone();
                        move |v: String| {
                            let mut style = style.clone();
                            style.font_size = parse_f64_input(&v, style.font_size).max(1.0);
                            model.write().update(id, ClipUpdate { style: Some(style), ..Default::default() });
                        }
                    },
                }
                Field {
                    label: "Color",
                    value: style.color.clone(),
                    on_commit: {
                        let style = style.clone();
                        move |v: String| {
                            let mut style = style.clone();
                            style.color = v;
                            model.write().update(id, ClipUpdate { style: Some(style), ..Default::default() });
                        }
                    },
                }
                Field {
                    label: "Stroke",
                    value: style.stroke.clone(),
                    on_commit: {
                        let style = style.clone();
                        move |v: String| {
                            let mut style = style.clone();
                            style.stroke = v;
                            model.write().update(id, ClipUpdate { style: Some(style), ..Default::default() });
                        }
                    },
                }
                Field {
                    label: "Stroke width",
                    value: format!("{:.1}", style.stroke_width),
                    on_commit: {
                        let style = style.clone();
                        move |v: String| {
                            let mut style = style.clone();
                            style.stroke_width = parse_f64_input(&v, style.stroke_width).max(0.0);
                            model.write().update(id, ClipUpdate { style: Some(style), ..Default::default() });
                        }
                    },
                }
                Field {
                    label: "Position X",
                    value: format!("{:.2}", style.x),
                    on_commit: {
                        let style = style.clone();
                        move |v: String| {
                            let mut style = style.clone();
                            style.x = parse_f64_input(&v, style.x).clamp(0.0, 1.0);
                            model.write().update(id, ClipUpdate { style: Some(style), ..Default::default() });
                        }
                    },
                }
                Field {
                    label: "Position Y",
                    value: format!("{:.2}", style.y),
                    on_commit: {
                        let style = style.clone();
                        move |v: String| {
                            let mut style = style.clone();
                            style.y = parse_f64_input(&v, style.y).clamp(0.0, 1.0);
                            model.write().update(id, ClipUpdate { style: Some(style), ..Default::default() });
                        }
                    },
                }
                button {
                    style: "
                        margin-top: 4px; padding: 5px 8px; border: 1px solid {BORDER_DEFAULT};
                        border-radius: 4px; background-color: transparent;
                        color: {TEXT_MUTED}; font-size: 10px; cursor: pointer;
                    ",
                    onclick: move |_| model.write().apply_style_to_all(id),
                    "Apply style to all text"
                }
            }

            div { style: "flex: 1;" }

            button {
                style: "
                    padding: 6px 8px; border: none; border-radius: 4px;
                    background-color: #7f1d1d; color: {TEXT_PRIMARY};
                    font-size: 11px; cursor: pointer;
                ",
                onclick: move |_| {
                    model.write().remove(id);
                    selection.write().forget(id);
                },
                "Delete clip"
            }
        }
    }
}
