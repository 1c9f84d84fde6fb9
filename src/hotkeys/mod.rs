//! Hotkey system
//!
//! Centralized hotkey management for the editor.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
/// This decouples "what key was pressed" from "what should happen".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Toggle playback.
    PlayPause,
    /// Delete the selected clip.
    DeleteSelection,
    /// Split the selected clip at the playhead.
    SplitAtPlayhead,
    /// Switch to the select tool.
    SelectTool,
    /// Switch to the razor tool.
    RazorTool,
    /// Undo the last committed edit.
    Undo,
    /// Redo a previously undone edit.
    Redo,
}

/// Context information that affects which hotkeys are active.
///
/// Some hotkeys only make sense in certain contexts:
/// - Delete and split require a selection
/// - Everything is suppressed while typing in an input
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether any clip is selected
    pub has_selection: bool,
    /// Whether an input field has focus (should suppress most hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(
    key: &Key,
    shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    let command = ctrl || meta;

    match key {
        Key::Character(c) if command && shift && (c == "z" || c == "Z") => {
            return HotkeyResult::Action(HotkeyAction::Redo);
        }
        Key::Character(c) if command && (c == "z" || c == "Z") => {
            return HotkeyResult::Action(HotkeyAction::Undo);
        }
        Key::Character(c) if !command && c == " " => {
            return HotkeyResult::Action(HotkeyAction::PlayPause);
        }
        Key::Character(c) if !command && (c == "v" || c == "V") => {
            return HotkeyResult::Action(HotkeyAction::SelectTool);
        }
        Key::Character(c) if !command && (c == "c" || c == "C") => {
            return HotkeyResult::Action(HotkeyAction::RazorTool);
        }
        _ => {}
    }

    if context.has_selection {
        match key {
            Key::Delete | Key::Backspace => {
                return HotkeyResult::Action(HotkeyAction::DeleteSelection);
            }
            Key::Character(c) if !command && (c == "s" || c == "S") => {
                return HotkeyResult::Action(HotkeyAction::SplitAtPlayhead);
            }
            _ => {}
        }
    }

    HotkeyResult::NoMatch
}
