//! Hit testing: point → tag lookup.
//!
//! Walks the laid-out tags front-to-back (last painted = topmost) and
//! reports whether the pointer is over a tag's delete button or its body.

use crate::layout::TagLayout;
use kurbo::Point;
use wg_core::TagId;

/// What the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The word itself, or the gap before its button. Starts a drag.
    Tag(TagId),
    /// The tag's "X" button.
    Delete(TagId),
}

impl Hit {
    pub fn id(&self) -> TagId {
        match self {
            Hit::Tag(id) | Hit::Delete(id) => *id,
        }
    }
}

/// Find the topmost tag part at `(px, py)`.
/// Returns `None` over empty canvas.
pub fn hit_test(layouts: &[TagLayout], px: f64, py: f64) -> Option<Hit> {
    let p = Point::new(px, py);
    for layout in layouts.iter().rev() {
        if layout.delete.contains(p) {
            return Some(Hit::Delete(layout.id));
        }
        if layout.frame().contains(p) {
            return Some(Hit::Tag(layout.id));
        }
    }
    None
}
