//! Board mutations.
//!
//! Every change to the tag board goes through a `TagMutation`, so the
//! editor, the drag tool and the host bridge share one vocabulary for
//! "what happened".

use wg_core::{Position, TagBoard, TagId, WordTag};

#[derive(Debug, Clone, PartialEq)]
pub enum TagMutation {
    /// Append a tag at the end of the board.
    AddTag { tag: Box<WordTag> },
    /// Set a tag's font size.
    ResizeTag { id: TagId, font_size: u32 },
    /// Set a tag's position.
    MoveTag { id: TagId, position: Position },
    /// Remove a tag.
    RemoveTag { id: TagId },
    /// Replace the whole board (undo).
    Restore { tags: Vec<WordTag> },
}

/// Apply `mutation` to `board`. Returns `true` if the board changed.
///
/// Mutations naming an id that is not on the board are ignored.
pub fn apply_mutation(board: &mut TagBoard, mutation: TagMutation) -> bool {
    match mutation {
        TagMutation::AddTag { tag } => board.push(*tag),
        TagMutation::ResizeTag { id, font_size } => match board.get_by_id_mut(id) {
            Some(tag) if tag.font_size != font_size => {
                tag.font_size = font_size;
                true
            }
            _ => false,
        },
        TagMutation::MoveTag { id, position } => match board.get_by_id_mut(id) {
            Some(tag) => {
                tag.position = position;
                true
            }
            None => false,
        },
        TagMutation::RemoveTag { id } => board.remove(id).is_some(),
        TagMutation::Restore { tags } => {
            board.restore(tags);
            true
        }
    }
}
