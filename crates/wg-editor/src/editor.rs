//! The word editor: tag board, undo history and drag state in one place.
//!
//! Every intent is a synchronous transition that returns whether anything
//! visible changed, so the host knows when to redraw. Invalid requests (an
//! empty word, undo with nothing to undo, resizing an empty board, moving
//! without a drag target) are silently ignored and report `false`.

use crate::config::{ConfigError, EditorConfig};
use crate::drag::{DragState, DragTool};
use crate::history::UndoHistory;
use crate::input::InputEvent;
use crate::mutation::{TagMutation, apply_mutation};
use crate::shortcuts::{EditorAction, ShortcutMap};
use wg_core::{TagBoard, TagId, WordTag};
use wg_render::Hit;

pub struct WordEditor {
    board: TagBoard,
    history: UndoHistory,
    drag: DragTool,
    config: EditorConfig,
}

impl Default for WordEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl WordEditor {
    pub fn new() -> Self {
        Self::build(EditorConfig::default())
    }

    /// Build an editor from `config`, rejecting configs that would let a
    /// tag shrink below the floor.
    pub fn with_config(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EditorConfig) -> Self {
        Self {
            board: TagBoard::new(),
            history: UndoHistory::new(config.history_limit),
            drag: DragTool::new(config.drag_anchor()),
            config,
        }
    }

    // ─── Read access ─────────────────────────────────────────────────────

    pub fn board(&self) -> &TagBoard {
        &self.board
    }

    pub fn tags(&self) -> &[WordTag] {
        self.board.tags()
    }

    pub fn history(&self) -> &[Vec<WordTag>] {
        self.history.snapshots()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // ─── Intents ─────────────────────────────────────────────────────────

    /// Trim `raw` and, if anything is left, append it as a new tag.
    ///
    /// The board as it was before the add is pushed onto the undo history.
    /// Returns the new tag's id; the host clears its input only then.
    pub fn add_word(&mut self, raw: &str) -> Option<TagId> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let tag = WordTag::new(
            text,
            self.config.initial_font_size,
            self.config.spawn_position(),
        );
        let id = tag.id;
        let before = self.board.snapshot();
        if !apply_mutation(&mut self.board, TagMutation::AddTag { tag: Box::new(tag) }) {
            return None;
        }
        self.history.push(before);
        log::debug!("added {text:?} as {id} ({} tags)", self.board.len());
        Some(id)
    }

    /// Grow the last-appended tag by one step.
    pub fn grow_last(&mut self) -> bool {
        let Some(last) = self.board.last() else {
            return false;
        };
        let id = last.id;
        let font_size = last.font_size.saturating_add(self.config.font_step);
        let changed = apply_mutation(&mut self.board, TagMutation::ResizeTag { id, font_size });
        if changed {
            log::debug!("grew {id} to {font_size}px");
        }
        changed
    }

    /// Shrink the last-appended tag by one step while it is above the floor.
    pub fn shrink_last(&mut self) -> bool {
        let Some(last) = self.board.last() else {
            return false;
        };
        if last.font_size <= self.config.min_font_size {
            return false;
        }
        let id = last.id;
        let font_size = last
            .font_size
            .saturating_sub(self.config.font_step)
            .max(self.config.min_font_size);
        let changed = apply_mutation(&mut self.board, TagMutation::ResizeTag { id, font_size });
        if changed {
            log::debug!("shrank {id} to {font_size}px");
        }
        changed
    }

    /// Bind `id` to pointer movement. Ids not on the board are ignored.
    pub fn begin_drag(&mut self, id: TagId) -> bool {
        if !self.board.contains(id) {
            return false;
        }
        self.drag.begin(id);
        true
    }

    /// Move the drag target so it sits at the pointer minus the anchor.
    pub fn update_drag(&mut self, x: f32, y: f32) -> bool {
        match self.drag.update(x, y) {
            Some(mutation) => apply_mutation(&mut self.board, mutation),
            None => false,
        }
    }

    /// Release the drag target. Returns whether one was held.
    pub fn end_drag(&mut self) -> bool {
        self.drag.end()
    }

    /// Restore the board to before the most recent add.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        apply_mutation(&mut self.board, TagMutation::Restore { tags: snapshot });
        log::debug!(
            "undo: {} tags, {} snapshots left",
            self.board.len(),
            self.history.len()
        );
        true
    }

    /// Remove the tag with `id`. Not recorded in the undo history.
    pub fn delete_word(&mut self, id: TagId) -> bool {
        let changed = apply_mutation(&mut self.board, TagMutation::RemoveTag { id });
        if changed {
            log::debug!("deleted {id}");
        }
        changed
    }

    // ─── Event routing ───────────────────────────────────────────────────

    /// Route a pointer event through the drag tool. `hit` is what the
    /// pointer is over, as resolved by the host's hit test.
    pub fn handle_input(&mut self, event: &InputEvent, hit: Option<Hit>) -> bool {
        // Drop hits on tags that are no longer on the board.
        let hit = hit.filter(|h| self.board.contains(h.id()));
        let before = self.drag.state();
        let mutations = self.drag.handle(event, hit);

        let mut changed = false;
        for mutation in mutations {
            if let TagMutation::RemoveTag { id } = mutation {
                changed |= self.delete_word(id);
            } else {
                changed |= apply_mutation(&mut self.board, mutation);
            }
        }
        // Grabbing, retargeting or releasing a tag moves the highlight.
        changed || before != self.drag.state()
    }

    /// Run an action. `pending_input` is the word input's current text,
    /// only read by `AddWord`.
    pub fn dispatch(&mut self, action: EditorAction, pending_input: &str) -> bool {
        match action {
            EditorAction::AddWord => self.add_word(pending_input).is_some(),
            EditorAction::Undo => self.undo(),
            EditorAction::GrowLast => self.grow_last(),
            EditorAction::ShrinkLast => self.shrink_last(),
        }
    }

    /// Resolve and run a key press. Returns the action taken, if any, and
    /// whether it changed anything.
    pub fn handle_key(
        &mut self,
        event: &InputEvent,
        pending_input: &str,
    ) -> (Option<EditorAction>, bool) {
        let InputEvent::Key {
            key,
            ctrl,
            shift,
            alt,
            meta,
        } = event
        else {
            return (None, false);
        };
        match ShortcutMap::resolve(key, *ctrl, *shift, *alt, *meta) {
            Some(action) => (Some(action), self.dispatch(action, pending_input)),
            None => (None, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wg_core::Position;

    #[test]
    fn add_word_uses_config_defaults() {
        let mut editor = WordEditor::new();
        let id = editor.add_word("  cat  ").unwrap();

        let tag = &editor.tags()[0];
        assert_eq!(tag.id, id);
        assert_eq!(tag.text, "cat");
        assert_eq!(tag.font_size, 16);
        assert_eq!(tag.position, Position::new(100.0, 100.0));
        assert_eq!(editor.history_len(), 1);
        assert!(editor.history()[0].is_empty());
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut editor = WordEditor::new();
        assert_eq!(editor.add_word(""), None);
        assert_eq!(editor.add_word(" \t\n "), None);
        assert!(editor.tags().is_empty());
        assert_eq!(editor.history_len(), 0);
    }

    #[test]
    fn grow_and_shrink_target_last_appended() {
        let mut editor = WordEditor::new();
        let first = editor.add_word("first").unwrap();
        editor.add_word("second").unwrap();

        assert!(editor.grow_last());
        assert_eq!(editor.tags()[1].font_size, 20);
        assert_eq!(editor.tags()[0].font_size, 16);

        // Dragging the first tag does not make it the "last" one.
        editor.begin_drag(first);
        editor.update_drag(400.0, 400.0);
        editor.end_drag();
        assert!(editor.shrink_last());
        assert_eq!(editor.tags()[1].font_size, 16);
        assert_eq!(editor.tags()[0].font_size, 16);
        assert_eq!(editor.history_len(), 2);
    }

    #[test]
    fn resize_on_empty_board_is_noop() {
        let mut editor = WordEditor::new();
        assert!(!editor.grow_last());
        assert!(!editor.shrink_last());
    }

    #[test]
    fn shrink_stops_at_floor() {
        let mut editor = WordEditor::new();
        editor.add_word("cat");
        assert!(editor.shrink_last()); // 12
        assert!(editor.shrink_last()); // 8
        assert!(editor.shrink_last()); // 4
        assert_eq!(editor.tags()[0].font_size, 4);
        assert!(!editor.shrink_last());
        assert_eq!(editor.tags()[0].font_size, 4);
    }

    #[test]
    fn with_config_rejects_off_grid_step() {
        let config = EditorConfig {
            font_step: 20,
            ..EditorConfig::default()
        };
        assert!(matches!(
            WordEditor::with_config(config),
            Err(ConfigError::MisalignedStep { .. })
        ));
    }

    #[test]
    fn shrink_clamps_off_grid_size_to_floor() {
        let mut editor = WordEditor::new();
        let id = editor.add_word("cat").unwrap();
        apply_mutation(&mut editor.board, TagMutation::ResizeTag { id, font_size: 6 });

        assert!(editor.shrink_last());
        assert_eq!(editor.tags()[0].font_size, 4);
        assert!(!editor.shrink_last());
    }

    #[test]
    fn begin_drag_ignores_unknown_ids() {
        let mut editor = WordEditor::new();
        assert!(!editor.begin_drag(TagId::new()));
        assert_eq!(editor.drag_state(), DragState::Idle);
    }

    #[test]
    fn update_drag_without_target_is_noop() {
        let mut editor = WordEditor::new();
        editor.add_word("cat");
        let before = editor.tags().to_vec();
        assert!(!editor.update_drag(10.0, 10.0));
        assert_eq!(editor.tags(), before.as_slice());
    }

    #[test]
    fn drag_applies_anchor_offset() {
        let mut editor = WordEditor::new();
        let id = editor.add_word("cat").unwrap();
        assert!(editor.begin_drag(id));
        assert!(editor.update_drag(300.0, 220.0));
        assert_eq!(editor.tags()[0].position, Position::new(250.0, 200.0));
        assert!(editor.end_drag());
        assert!(!editor.end_drag());
        assert!(!editor.update_drag(0.0, 0.0));
    }

    #[test]
    fn deleting_drag_target_mid_drag() {
        let mut editor = WordEditor::new();
        let id = editor.add_word("cat").unwrap();
        editor.begin_drag(id);
        assert!(editor.delete_word(id));
        assert!(!editor.update_drag(5.0, 5.0));
        assert_eq!(editor.drag_state(), DragState::Dragging(id));
        assert!(editor.end_drag());
    }

    #[test]
    fn delete_is_not_undoable() {
        let mut editor = WordEditor::new();
        let cat = editor.add_word("cat").unwrap();
        editor.add_word("dog");
        assert!(editor.delete_word(cat));
        assert_eq!(editor.history_len(), 2);

        // Undo reverts the "dog" add, restoring the board from before it,
        // which still had "cat".
        assert!(editor.undo());
        let texts: Vec<&str> = editor.tags().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["cat"]);
    }

    #[test]
    fn delete_unknown_is_noop() {
        let mut editor = WordEditor::new();
        editor.add_word("cat");
        assert!(!editor.delete_word(TagId::new()));
        assert_eq!(editor.tags().len(), 1);
    }

    #[test]
    fn undo_on_empty_history() {
        let mut editor = WordEditor::new();
        assert!(!editor.undo());
        assert!(!editor.can_undo());
    }

    #[test]
    fn history_limit_from_config() {
        let config = EditorConfig {
            history_limit: Some(1),
            ..EditorConfig::default()
        };
        let mut editor = WordEditor::with_config(config).unwrap();
        editor.add_word("a");
        editor.add_word("b");
        assert_eq!(editor.history_len(), 1);
        assert!(editor.undo());
        assert!(!editor.undo());
        assert_eq!(editor.tags().len(), 1);
    }

    #[test]
    fn dispatch_routes_actions() {
        let mut editor = WordEditor::new();
        assert!(editor.dispatch(EditorAction::AddWord, "cat"));
        assert!(!editor.dispatch(EditorAction::AddWord, "   "));
        assert!(editor.dispatch(EditorAction::GrowLast, ""));
        assert_eq!(editor.tags()[0].font_size, 20);
        assert!(editor.dispatch(EditorAction::ShrinkLast, ""));
        assert!(editor.dispatch(EditorAction::Undo, ""));
        assert!(editor.tags().is_empty());
    }

    #[test]
    fn handle_key_resolves_shortcuts() {
        let mut editor = WordEditor::new();
        let enter = InputEvent::Key {
            key: "Enter".into(),
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        };
        assert_eq!(
            editor.handle_key(&enter, "cat"),
            (Some(EditorAction::AddWord), true)
        );

        let unbound = InputEvent::Key {
            key: "q".into(),
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        };
        assert_eq!(editor.handle_key(&unbound, ""), (None, false));
        assert_eq!(
            editor.handle_key(&InputEvent::from_pointer_down(0.0, 0.0), ""),
            (None, false)
        );
    }
}
