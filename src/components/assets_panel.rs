use dioxus::prelude::*;

use crate::constants::{
    ACCENT_AUDIO, ACCENT_VIDEO, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, TEXT_DIM, TEXT_MUTED,
    TEXT_PRIMARY,
};
use crate::core::gesture::Gesture;
use crate::core::media::resolve_duration;
use crate::state::{classify_media, AssetEntry, Medium, TrackModel};
use crate::utils::format_timecode;

/// Imported media list. Entries are added through the native file
/// dialog; each import kicks off a background duration probe. A clip
/// lands on the timeline either via the add button or by dragging the
/// entry onto the timeline.
#[component]
pub fn AssetsPanel(
    mut assets: Signal<Vec<AssetEntry>>,
    mut model: Signal<TrackModel>,
    mut gesture: Signal<Gesture>,
) -> Element {
    let import = move |_| {
        spawn(async move {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Import media")
                .add_filter("Media", &["mp4", "mov", "webm", "mkv", "mp3", "wav", "m4a", "ogg"])
                .pick_files()
                .await;
            let Some(picked) = picked else {
                return;
            };
            for file in picked {
                let path = file.path().to_path_buf();
                let Some(medium) = classify_media(&path) else {
                    log::warn!("skipping unsupported file {:?}", path);
                    continue;
                };
                let entry = AssetEntry::new(path.clone(), medium);
                let id = entry.id;
                assets.write().push(entry);

                let mut assets = assets;
                spawn(async move {
                    let duration = resolve_duration(path).await;
                    if let Some(entry) = assets.write().iter_mut().find(|a| a.id == id) {
                        entry.duration = Some(duration);
                    }
                });
            }
        });
    };

    rsx! {
        div {
            style: "
                width: 220px; flex-shrink: 0; display: flex; flex-direction: column;
                background-color: {BG_ELEVATED}; border-right: 1px solid {BORDER_DEFAULT};
                box-sizing: border-box;
            ",
            div {
                style: "display: flex; align-items: center; padding: 8px 10px; gap: 8px;",
                span { style: "font-size: 11px; color: {TEXT_PRIMARY}; font-weight: 600; flex: 1;", "Assets" }
                button {
                    style: "
                        padding: 4px 8px; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                        background-color: transparent; color: {TEXT_MUTED};
                        font-size: 10px; cursor: pointer;
                    ",
                    onclick: import,
                    "Import"
                }
            }

            div {
                style: "flex: 1; overflow-y: auto; padding: 0 8px 8px;",
                if assets.read().is_empty() {
                    div {
                        style: "padding: 16px 4px; font-size: 10px; color: {TEXT_DIM}; text-align: center;",
                        "No media imported yet"
                    }
                }
                for asset in assets.read().iter().cloned() {
                    {
                        let accent = match asset.medium {
                            Medium::Audio => ACCENT_AUDIO,
                            _ => ACCENT_VIDEO,
                        };
                        let duration_label = asset
                            .duration
                            .map(format_timecode)
                            .unwrap_or_else(|| "probing...".to_string());
                        let url = asset.url.clone();
                        let add_url = asset.url.clone();
                        let medium = asset.medium;
                        let duration = asset.duration;
                        rsx! {
                            div {
                                key: "{asset.id}",
                                style: "
                                    display: flex; align-items: center; gap: 6px;
                                    padding: 6px; margin-bottom: 4px; border-radius: 4px;
                                    background-color: {BG_SURFACE}; cursor: grab;
                                    user-select: none;
                                ",
                                onmousedown: move |e| {
                                    e.prevent_default();
                                    if let Some(duration) = duration {
                                        gesture.write().begin_external_drag(medium, &url, duration);
                                    }
                                },
                                div { style: "width: 3px; height: 20px; border-radius: 2px; background-color: {accent}; flex-shrink: 0;" }
                                div {
                                    style: "flex: 1; min-width: 0; display: flex; flex-direction: column;",
                                    span {
                                        style: "font-size: 10px; color: {TEXT_PRIMARY}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                                        "{asset.name}"
                                    }
                                    span { style: "font-size: 9px; color: {TEXT_DIM};", "{duration_label}" }
                                }
                                button {
                                    style: "
                                        padding: 2px 6px; border: none; border-radius: 3px;
                                        background-color: transparent; color: {TEXT_MUTED};
                                        font-size: 12px; cursor: pointer;
                                    ",
                                    title: "Add to timeline",
                                    // Keep the button press from starting a drag
                                    // on the row underneath.
                                    onmousedown: move |e| e.stop_propagation(),
                                    onclick: move |e| {
                                        e.stop_propagation();
                                        if let Some(duration) = duration {
                                            model.write().insert_media(medium, &add_url, duration);
                                        }
                                    },
                                    "+"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
