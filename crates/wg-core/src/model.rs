//! Word tags and the board that holds them.
//!
//! The board is an ordered sequence: insertion order is paint order, so the
//! last tag is drawn on top and is the one grow/shrink act on.

use crate::id::TagId;
use serde::{Deserialize, Serialize};

/// Font size given to a freshly added tag.
pub const DEFAULT_FONT_SIZE: u32 = 16;
/// Amount grow/shrink change a tag's font size by.
pub const FONT_SIZE_STEP: u32 = 4;
/// Shrinking only happens while the size is strictly above this.
pub const MIN_FONT_SIZE: u32 = 4;
/// Where a freshly added tag appears.
pub const SPAWN_POSITION: Position = Position { x: 100.0, y: 100.0 };
/// Offset between the pointer and a dragged tag's top-left corner.
pub const DRAG_ANCHOR: Position = Position { x: 50.0, y: 20.0 };

/// A 2D canvas coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `self - other`, component-wise.
    pub fn offset_by(self, other: Position) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// One placed word on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordTag {
    pub id: TagId,
    /// Trimmed, non-empty. Never changes after creation.
    pub text: String,
    pub font_size: u32,
    pub position: Position,
}

impl WordTag {
    /// Build a tag with a fresh id.
    pub fn new(text: impl Into<String>, font_size: u32, position: Position) -> Self {
        Self {
            id: TagId::new(),
            text: text.into(),
            font_size,
            position,
        }
    }
}

/// The ordered collection of tags currently on the canvas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagBoard {
    tags: Vec<WordTag>,
}

impl TagBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> &[WordTag] {
        &self.tags
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordTag> {
        self.tags.iter()
    }

    pub fn get_by_id(&self, id: TagId) -> Option<&WordTag> {
        self.tags.iter().find(|t| t.id == id)
    }

    pub fn get_by_id_mut(&mut self, id: TagId) -> Option<&mut WordTag> {
        self.tags.iter_mut().find(|t| t.id == id)
    }

    pub fn index_of(&self, id: TagId) -> Option<usize> {
        self.tags.iter().position(|t| t.id == id)
    }

    pub fn contains(&self, id: TagId) -> bool {
        self.index_of(id).is_some()
    }

    /// The most recently appended tag (not the most recently modified).
    pub fn last(&self) -> Option<&WordTag> {
        self.tags.last()
    }

    /// Append a tag. Returns `false` without inserting if its id is taken.
    pub fn push(&mut self, tag: WordTag) -> bool {
        if self.contains(tag.id) {
            log::warn!("refusing duplicate tag id {}", tag.id);
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove the tag with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: TagId) -> Option<WordTag> {
        let idx = self.index_of(id)?;
        Some(self.tags.remove(idx))
    }

    /// Full copy of the current sequence.
    pub fn snapshot(&self) -> Vec<WordTag> {
        self.tags.clone()
    }

    /// Replace the whole sequence with `tags`.
    pub fn restore(&mut self, tags: Vec<WordTag>) {
        self.tags = tags;
    }
}

impl<'a> IntoIterator for &'a TagBoard {
    type Item = &'a WordTag;
    type IntoIter = std::slice::Iter<'a, WordTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
