use std::time::Duration;

use dioxus::prelude::*;

use crate::components::{AssetsPanel, ExportModal, PlayerPanel, PropertiesPanel};
use crate::constants::{BG_BASE, BORDER_DEFAULT, PLAYBACK_TICK_MS, TEXT_PRIMARY};
use crate::core::gesture::{Gesture, Tool};
use crate::core::render::{build_manifest, new_output_key, ExportStatus, RenderClient};
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{AssetEntry, PlaybackClock, Selection, TrackModel};
use crate::timeline::TimelinePanel;

/// Root component: owns every piece of editor state and wires the
/// panels together.
#[component]
pub fn App() -> Element {
    let mut model = use_signal(TrackModel::default);
    let mut clock = use_signal(PlaybackClock::default);
    let mut gesture = use_signal(Gesture::default);
    let mut tool = use_signal(Tool::default);
    let mut selection = use_signal(Selection::default);
    let assets = use_signal(Vec::<AssetEntry>::new);
    let mut export_status = use_signal(ExportStatus::default);

    // Transport tick. The clock is the only driver of playback; media
    // elements are reconciled to it from the player panel. The ticker
    // task only exists while playing; a paused editor does no periodic
    // work. The epoch invalidates a stale ticker if play is toggled
    // within one tick interval.
    let mut tick_epoch = use_signal(|| 0u64);
    let playing = use_memo(move || clock.read().is_playing);
    use_effect(move || {
        let epoch = tick_epoch.peek().wrapping_add(1);
        tick_epoch.set(epoch);
        if !playing() {
            return;
        }
        spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(PLAYBACK_TICK_MS)).await;
                if *tick_epoch.peek() != epoch || !clock.peek().is_playing {
                    break;
                }
                let duration = model.peek().timeline_duration();
                clock.write().tick(duration);
            }
        });
    });

    let start_export = move |_| {
        if matches!(*export_status.read(), ExportStatus::Submitting | ExportStatus::Processing(_)) {
            return;
        }
        export_status.set(ExportStatus::Submitting);
        let manifest = build_manifest(&model.read(), "", &new_output_key());
        spawn(async move {
            let client = RenderClient::from_env();
            if let Err(err) = client.submit(&manifest).await {
                log::warn!("render submission failed: {err}");
                export_status.set(ExportStatus::Failed(err.to_string()));
                return;
            }
            export_status.set(ExportStatus::Processing(None));
            let mut export_status = export_status;
            let result = client
                .await_result(&manifest.output_key, |message| {
                    export_status.set(ExportStatus::Processing(message));
                })
                .await;
            match result {
                Ok(url) => export_status.set(ExportStatus::Finished(url)),
                Err(err) => export_status.set(ExportStatus::Failed(err.to_string())),
            }
        });
    };

    rsx! {
        div {
            style: "
                width: 100vw; height: 100vh; display: flex; flex-direction: column;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: Inter, 'Segoe UI', sans-serif; overflow: hidden;
            ",
            oncontextmenu: move |e| e.prevent_default(),
            // An external asset drag released anywhere but the timeline
            // lane stack drops nothing and just clears.
            onmouseup: move |_| {
                if matches!(&*gesture.read(), Gesture::ExternalDrag { .. }) {
                    gesture.write().finish();
                }
            },
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    has_selection: selection.read().id().is_some(),
                    input_focused: false, // TODO: track when input fields have focus
                };
                let modifiers = e.modifiers();
                match handle_hotkey(
                    &e.key(),
                    modifiers.shift(),
                    modifiers.ctrl(),
                    modifiers.alt(),
                    modifiers.meta(),
                    &hotkey_context,
                ) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::PlayPause => clock.write().toggle(),
                            HotkeyAction::DeleteSelection => {
                                let id = selection.read().id();
                                if let Some(id) = id {
                                    model.write().remove(id);
                                    selection.write().forget(id);
                                }
                            }
                            HotkeyAction::SplitAtPlayhead => {
                                let target = {
                                    let selection = selection.read();
                                    selection.id().zip(selection.medium())
                                };
                                if let Some((id, medium)) = target {
                                    let at = clock.read().current_time;
                                    if model.write().split(id, medium, at).is_some() {
                                        selection.write().forget(id);
                                    }
                                }
                            }
                            HotkeyAction::SelectTool => tool.set(Tool::Select),
                            HotkeyAction::RazorTool => tool.set(Tool::Razor),
                            HotkeyAction::Undo => model.write().undo(),
                            HotkeyAction::Redo => model.write().redo(),
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            div {
                style: "display: flex; flex: 1; min-height: 0;",
                AssetsPanel { assets, model, gesture }
                PlayerPanel { model, clock }
                PropertiesPanel { model, selection }
            }

            div {
                style: "height: 42%; min-height: 220px; border-top: 1px solid {BORDER_DEFAULT};",
                TimelinePanel {
                    model,
                    clock,
                    gesture,
                    tool,
                    selection,
                    on_export: start_export,
                }
            }

            ExportModal {
                status: export_status(),
                on_close: move |_| export_status.set(ExportStatus::Idle),
            }
        }
    }
}
