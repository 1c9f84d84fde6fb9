use dioxus::prelude::*;

use crate::constants::{BG_BASE, BORDER_DEFAULT, PLAYER_SYNC_SCRIPT, TEXT_DIM};
use crate::core::sync;
use crate::state::{Medium, PlaybackClock, TrackModel};

/// Preview player. Every media clip keeps a mounted element for the
/// whole time it exists on the timeline, so hiding a lane or moving the
/// playhead never forces a cold reload; painting is just visibility.
/// Element positions are reconciled from Rust each tick through the
/// webview sync script.
#[component]
pub fn PlayerPanel(model: Signal<TrackModel>, clock: Signal<PlaybackClock>) -> Element {
    let mut sync_eval = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        if sync_eval.read().is_some() {
            return;
        }
        sync_eval.set(Some(document::eval(PLAYER_SYNC_SCRIPT)));
    });

    // Re-plan whenever the model or the transport clock changes.
    use_effect(move || {
        let plan = sync::plan(&model.read(), &clock.read());
        let Some(eval) = sync_eval() else {
            return;
        };
        if let Ok(value) = serde_json::to_value(&plan) {
            let _ = eval.send(value);
        }
    });

    let t = clock.read().current_time;
    let model_read = model.read();

    // Paint set: active video clips by ascending lane, topmost last.
    let visible: Vec<uuid::Uuid> = model_read
        .active_clips(Medium::Video, t)
        .iter()
        .map(|c| c.id)
        .collect();
    let video_clips: Vec<_> = model_read.clips(Medium::Video).to_vec();
    let audio_clips: Vec<_> = model_read.clips(Medium::Audio).to_vec();
    let text_clips: Vec<_> = model_read
        .active_clips(Medium::Text, t)
        .into_iter()
        .cloned()
        .collect();
    drop(model_read);

    rsx! {
        div {
            style: "
                flex: 1; display: flex; align-items: center; justify-content: center;
                background-color: {BG_BASE}; min-height: 0; padding: 12px;
            ",
            // 9:16 preview frame
            div {
                style: "
                    position: relative; height: 100%; aspect-ratio: 9 / 16;
                    background-color: #000; border: 1px solid {BORDER_DEFAULT};
                    border-radius: 6px; overflow: hidden;
                ",
                if video_clips.is_empty() && text_clips.is_empty() {
                    div {
                        style: "
                            position: absolute; inset: 0; display: flex;
                            align-items: center; justify-content: center;
                            color: {TEXT_DIM}; font-size: 12px;
                        ",
                        "Drop media on the timeline to preview"
                    }
                }

                for clip in video_clips.iter() {
                    {
                        let layer = visible.iter().position(|id| *id == clip.id);
                        let display = if layer.is_some() { "block" } else { "none" };
                        let z = layer.unwrap_or(0);
                        let tf = &clip.transform;
                        let transform = format!(
                            "translate({}px, {}px) scale({}) rotate({}deg)",
                            tf.position_x, tf.position_y, tf.scale, tf.rotation_deg
                        );
                        let src = clip.source_url.clone().unwrap_or_default();
                        rsx! {
                            video {
                                key: "video-{clip.id}",
                                id: "player-media-{clip.id}",
                                src: "{src}",
                                preload: "auto",
                                style: "
                                    position: absolute; inset: 0; width: 100%; height: 100%;
                                    object-fit: cover; display: {display};
                                    transform: {transform}; z-index: {z};
                                ",
                            }
                        }
                    }
                }

                for clip in audio_clips.iter() {
                    {
                        let src = clip.source_url.clone().unwrap_or_default();
                        rsx! {
                            audio {
                                key: "audio-{clip.id}",
                                id: "player-media-{clip.id}",
                                src: "{src}",
                                preload: "auto",
                            }
                        }
                    }
                }

                for clip in text_clips.iter() {
                    {
                        let style = clip.style.clone().unwrap_or_default();
                        let text = clip.text.clone().unwrap_or_default();
                        let left = style.x * 100.0;
                        let top = style.y * 100.0;
                        rsx! {
                            div {
                                key: "text-{clip.id}",
                                style: "
                                    position: absolute;
                                    left: {left}%; top: {top}%;
                                    transform: translate(-50%, -50%);
                                    font-size: {style.font_size}px;
                                    color: {style.color};
                                    font-family: {style.font_family};
                                    font-weight: {style.font_weight};
                                    -webkit-text-stroke: {style.stroke_width}px {style.stroke};
                                    paint-order: stroke fill;
                                    white-space: pre-wrap; text-align: center;
                                    pointer-events: none; z-index: 50;
                                ",
                                "{text}"
                            }
                        }
                    }
                }
            }
        }
    }
}
