use dioxus::prelude::*;

use crate::constants::{BG_ELEVATED, BORDER_DEFAULT, TEXT_MUTED, TEXT_PRIMARY};
use crate::core::render::ExportStatus;

/// Modal showing the lifecycle of a render job. Stays up while the
/// remote render runs; polling continues in the background even if the
/// user closes it early.
#[component]
pub fn ExportModal(status: ExportStatus, on_close: EventHandler<()>) -> Element {
    let (title, detail) = match &status {
        ExportStatus::Idle => return rsx! {},
        ExportStatus::Submitting => ("Submitting".to_string(), "Uploading the job description...".to_string()),
        ExportStatus::Processing(message) => (
            "Rendering".to_string(),
            message.clone().unwrap_or_else(|| "Waiting for the render service...".to_string()),
        ),
        ExportStatus::Finished(url) => ("Finished".to_string(), url.clone()),
        ExportStatus::Failed(err) => ("Export failed".to_string(), err.clone()),
    };
    let busy = matches!(status, ExportStatus::Submitting | ExportStatus::Processing(_));

    rsx! {
        div {
            style: "
                position: fixed; inset: 0; z-index: 10000;
                background-color: rgba(0, 0, 0, 0.6);
                display: flex; align-items: center; justify-content: center;
            ",
            onclick: move |_| {
                if !busy {
                    on_close.call(());
                }
            },
            div {
                style: "
                    min-width: 320px; max-width: 480px; padding: 20px;
                    background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT};
                    border-radius: 8px; display: flex; flex-direction: column; gap: 10px;
                ",
                onclick: move |e| e.stop_propagation(),
                span { style: "font-size: 13px; color: {TEXT_PRIMARY}; font-weight: 600;", "{title}" }
                if busy {
                    span { style: "font-size: 11px; color: {TEXT_MUTED};", "{detail}" }
                } else if let ExportStatus::Finished(url) = &status {
                    span { style: "font-size: 11px; color: {TEXT_MUTED};", "The render is ready:" }
                    a {
                        style: "font-size: 11px; color: #60a5fa; word-break: break-all;",
                        href: "{url}",
                        "{url}"
                    }
                } else {
                    span { style: "font-size: 11px; color: {TEXT_MUTED}; word-break: break-all;", "{detail}" }
                }
                div {
                    style: "display: flex; justify-content: flex-end;",
                    button {
                        style: "
                            padding: 5px 12px; border: 1px solid {BORDER_DEFAULT};
                            border-radius: 4px; background-color: transparent;
                            color: {TEXT_MUTED}; font-size: 11px; cursor: pointer;
                        ",
                        onclick: move |_| on_close.call(()),
                        if busy { "Hide" } else { "Close" }
                    }
                }
            }
        }
    }
}
