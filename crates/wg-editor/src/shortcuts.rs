//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to the toolbar's actions so keyboard users
//! can drive the widget. `Enter` is meant for the word input; the other
//! bindings for the canvas, where typing `+`/`-` cannot collide with text
//! entry.
//!
//! No redo binding: `⌘⇧Z` resolves to nothing. `Escape` is unbound too;
//! a drag ends only when the pointer is released.

/// The toolbar intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    AddWord,
    Undo,
    GrowLast,
    ShrinkLast,
}

impl EditorAction {
    pub fn name(&self) -> &'static str {
        match self {
            EditorAction::AddWord => "addWord",
            EditorAction::Undo => "undo",
            EditorAction::GrowLast => "growLast",
            EditorAction::ShrinkLast => "shrinkLast",
        }
    }
}

/// Resolves key events into editor actions.
///
/// Platform-aware: `meta` (⌘) on macOS and `ctrl` elsewhere both count as
/// the command modifier.
pub struct ShortcutMap;

impl ShortcutMap {
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Enter"`).
    /// Returns `None` if the combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<EditorAction> {
        let cmd = ctrl || meta;

        match key {
            "Enter" if !cmd && !alt => Some(EditorAction::AddWord),
            "z" | "Z" if cmd && !shift && !alt => Some(EditorAction::Undo),
            "+" | "=" if !cmd && !alt => Some(EditorAction::GrowLast),
            "-" | "_" if !cmd && !alt => Some(EditorAction::ShrinkLast),
            _ => None,
        }
    }
}
