//! Integration tests: snapshot undo across editor intents.
//!
//! Only adds record history; these tests pin down that asymmetry along
//! with the example walkthrough from the widget's documentation.

use pretty_assertions::assert_eq;
use wg_core::{Position, WordTag};
use wg_editor::WordEditor;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn texts(tags: &[WordTag]) -> Vec<&str> {
    tags.iter().map(|t| t.text.as_str()).collect()
}

// ─── Walkthrough ────────────────────────────────────────────────────────

#[test]
fn cat_dog_walkthrough() {
    init_logging();
    let mut editor = WordEditor::new();

    let cat = editor.add_word("cat").unwrap();
    assert_eq!(texts(editor.tags()), vec!["cat"]);
    assert_eq!(editor.tags()[0].font_size, 16);
    assert_eq!(editor.tags()[0].position, Position::new(100.0, 100.0));
    assert_eq!(editor.history().len(), 1);
    assert!(editor.history()[0].is_empty());

    editor.grow_last();
    assert_eq!(editor.tags()[0].font_size, 20);

    editor.add_word("dog").unwrap();
    assert_eq!(texts(editor.tags()), vec!["cat", "dog"]);
    assert_eq!(editor.tags()[0].font_size, 20);
    assert_eq!(editor.tags()[1].font_size, 16);
    assert_eq!(editor.tags()[1].position, Position::new(100.0, 100.0));
    assert_eq!(editor.history().len(), 2);
    assert!(editor.history()[0].is_empty());
    assert_eq!(texts(&editor.history()[1]), vec!["cat"]);
    assert_eq!(editor.history()[1][0].font_size, 20);

    assert!(editor.undo());
    assert_eq!(texts(editor.tags()), vec!["cat"]);
    assert_eq!(editor.tags()[0].font_size, 20);
    assert_eq!(editor.history().len(), 1);
    assert!(editor.history()[0].is_empty());

    assert!(editor.delete_word(cat));
    assert!(editor.tags().is_empty());
}

// ─── History bookkeeping ────────────────────────────────────────────────

#[test]
fn each_add_records_pre_add_board() {
    init_logging();
    let mut editor = WordEditor::new();
    let words = ["one", "two", "three", "four"];

    let mut expected: Vec<Vec<WordTag>> = Vec::new();
    for word in words {
        expected.push(editor.tags().to_vec());
        editor.add_word(word).unwrap();
    }

    assert_eq!(editor.history_len(), words.len());
    assert_eq!(editor.history(), expected.as_slice());
}

#[test]
fn undo_walks_back_one_add_at_a_time() {
    init_logging();
    let mut editor = WordEditor::new();
    for word in ["a", "b", "c"] {
        editor.add_word(word);
    }

    assert!(editor.undo());
    assert_eq!(texts(editor.tags()), vec!["a", "b"]);
    assert_eq!(editor.history_len(), 2);

    assert!(editor.undo());
    assert!(editor.undo());
    assert!(editor.tags().is_empty());
    assert_eq!(editor.history_len(), 0);

    // Nothing left: further undo changes nothing.
    assert!(!editor.undo());
    assert!(editor.tags().is_empty());
}

#[test]
fn blank_adds_leave_history_untouched() {
    init_logging();
    let mut editor = WordEditor::new();
    editor.add_word("cat");
    let before = editor.tags().to_vec();

    assert!(editor.add_word("   ").is_none());
    assert!(editor.add_word("").is_none());

    assert_eq!(editor.tags(), before.as_slice());
    assert_eq!(editor.history_len(), 1);
}

// ─── What undo does not revert ──────────────────────────────────────────

#[test]
fn resize_and_move_are_not_recorded() {
    init_logging();
    let mut editor = WordEditor::new();
    let id = editor.add_word("cat").unwrap();

    editor.grow_last();
    editor.grow_last();
    editor.begin_drag(id);
    editor.update_drag(500.0, 300.0);
    editor.end_drag();
    assert_eq!(editor.history_len(), 1);

    // Undo jumps straight past the resizes and the move to the empty board.
    assert!(editor.undo());
    assert!(editor.tags().is_empty());
}

#[test]
fn undo_discards_edits_made_after_the_add() {
    init_logging();
    let mut editor = WordEditor::new();
    editor.add_word("cat");
    let dog = editor.add_word("dog").unwrap();

    editor.grow_last(); // dog -> 20
    editor.begin_drag(dog);
    editor.update_drag(60.0, 30.0);
    editor.end_drag();

    assert!(editor.undo());
    assert_eq!(texts(editor.tags()), vec!["cat"]);
    assert_eq!(editor.tags()[0].font_size, 16);
}

#[test]
fn ids_survive_undo() {
    init_logging();
    let mut editor = WordEditor::new();
    let cat = editor.add_word("cat").unwrap();
    editor.add_word("dog");
    editor.undo();

    assert_eq!(editor.tags()[0].id, cat);
    assert!(editor.begin_drag(cat));
}
