//! Pointer dragging.
//!
//! One tag at a time follows the pointer. Pressing on a tag (its word or its
//! delete button) makes it the drag target; moves anywhere over the widget
//! reposition it; releasing anywhere ends the drag. Pressing on another tag
//! mid-drag simply retargets, leaving the previous tag where it was.
//!
//! A press and release on the same delete button is a click and removes
//! that tag.

use crate::input::InputEvent;
use crate::mutation::TagMutation;
use wg_core::{Position, TagId};
use wg_render::Hit;

/// Which tag, if any, is bound to pointer movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(TagId),
}

impl DragState {
    pub fn target(&self) -> Option<TagId> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(*id),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

pub struct DragTool {
    state: DragState,
    /// Pointer-to-corner offset kept while dragging.
    anchor: Position,
    /// Delete button pressed by the current gesture, awaiting release.
    pressed_delete: Option<TagId>,
}

impl DragTool {
    pub fn new(anchor: Position) -> Self {
        Self {
            state: DragState::Idle,
            anchor,
            pressed_delete: None,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn begin(&mut self, id: TagId) {
        if let DragState::Dragging(prev) = self.state
            && prev != id
        {
            log::debug!("drag retargeted from {prev} to {id}");
        }
        self.state = DragState::Dragging(id);
    }

    /// Position update for the current target, if any.
    pub fn update(&self, x: f32, y: f32) -> Option<TagMutation> {
        let id = self.state.target()?;
        let position = Position::new(x, y).offset_by(self.anchor);
        log::trace!("drag {id} to ({}, {})", position.x, position.y);
        Some(TagMutation::MoveTag { id, position })
    }

    /// Back to idle. Returns whether a drag was in progress.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.state.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }

    /// Translate a pointer event into board mutations.
    pub fn handle(&mut self, event: &InputEvent, hit: Option<Hit>) -> Vec<TagMutation> {
        match event {
            InputEvent::PointerDown { .. } => {
                self.pressed_delete = match hit {
                    Some(Hit::Delete(id)) => Some(id),
                    _ => None,
                };
                if let Some(hit) = hit {
                    self.begin(hit.id());
                }
                vec![]
            }
            InputEvent::PointerMove { x, y } => self.update(*x, *y).into_iter().collect(),
            InputEvent::PointerUp { .. } => {
                self.end();
                match (self.pressed_delete.take(), hit) {
                    (Some(pressed), Some(Hit::Delete(released))) if pressed == released => {
                        vec![TagMutation::RemoveTag { id: pressed }]
                    }
                    _ => vec![],
                }
            }
            InputEvent::Key { .. } => vec![],
        }
    }
}
