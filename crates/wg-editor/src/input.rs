//! Input abstraction layer.
//!
//! Normalizes mouse and pen pointer events plus key presses into a single
//! `InputEvent` enum. Coordinates are canvas-local px.

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed.
    PointerDown { x: f32, y: f32 },

    /// Pointer moved anywhere over the widget.
    PointerMove { x: f32, y: f32 },

    /// Pointer released anywhere over the widget.
    PointerUp { x: f32, y: f32 },

    /// Key press.
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    },
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                Some((*x, *y))
            }
            Self::Key { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_events_carry_position() {
        assert_eq!(InputEvent::from_pointer_down(1.0, 2.0).position(), Some((1.0, 2.0)));
        assert_eq!(InputEvent::from_pointer_move(3.0, 4.0).position(), Some((3.0, 4.0)));
        assert_eq!(InputEvent::from_pointer_up(5.0, 6.0).position(), Some((5.0, 6.0)));
    }

    #[test]
    fn key_has_no_position() {
        let key = InputEvent::Key {
            key: "z".into(),
            ctrl: true,
            shift: false,
            alt: false,
            meta: false,
        };
        assert_eq!(key.position(), None);
    }
}
