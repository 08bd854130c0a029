//! Tag geometry.
//!
//! A tag renders as its text followed by a small "X" delete button, laid
//! out in a row the way a flex container would. The text box is anchored at
//! the tag's position; the button sits to its right, vertically centered.
//!
//! Text measurement is behind [`TextMeasure`] so the browser can plug in
//! `CanvasRenderingContext2d::measure_text` while native code and tests use
//! [`ApproxMeasure`].

use kurbo::{Point, Rect};
use wg_core::{TagBoard, TagId, WordTag};

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT: f64 = 1.5;
/// Horizontal gap between the text and the delete button.
pub const BUTTON_GAP: f64 = 8.0;
pub const BUTTON_PAD_X: f64 = 8.0;
pub const BUTTON_PAD_Y: f64 = 4.0;
/// Label drawn inside the delete button.
pub const DELETE_LABEL: &str = "X";

/// Measures the advance width of a run of text at a font size in px.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: f64) -> f64;
}

/// Fixed-advance estimate: every char is `advance * font_size` wide.
#[derive(Debug, Clone, Copy)]
pub struct ApproxMeasure {
    pub advance: f64,
}

impl Default for ApproxMeasure {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for ApproxMeasure {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * self.advance * font_size
    }
}

/// Resolved geometry of one tag.
#[derive(Debug, Clone, PartialEq)]
pub struct TagLayout {
    pub id: TagId,
    pub font_size: f64,
    /// Box occupied by the word itself.
    pub text: Rect,
    /// Box of the delete button.
    pub delete: Rect,
}

impl TagLayout {
    /// Everything the tag covers, including the gap before the button.
    pub fn frame(&self) -> Rect {
        self.text.union(self.delete)
    }

    /// Center of the delete button, where its label is drawn.
    pub fn delete_label_center(&self) -> Point {
        self.delete.center()
    }
}

pub fn layout_tag(tag: &WordTag, measure: &dyn TextMeasure) -> TagLayout {
    let font_size = f64::from(tag.font_size);
    let x = f64::from(tag.position.x);
    let y = f64::from(tag.position.y);
    let line = font_size * LINE_HEIGHT;

    let text_w = measure.text_width(&tag.text, font_size);
    let text = Rect::new(x, y, x + text_w, y + line);

    let label_w = measure.text_width(DELETE_LABEL, font_size);
    let button_w = label_w + 2.0 * BUTTON_PAD_X;
    let button_h = line + 2.0 * BUTTON_PAD_Y;
    let bx = text.x1 + BUTTON_GAP;
    let by = y + line / 2.0 - button_h / 2.0;
    let delete = Rect::new(bx, by, bx + button_w, by + button_h);

    TagLayout {
        id: tag.id,
        font_size,
        text,
        delete,
    }
}

/// Lay out every tag in board order (back to front).
pub fn layout_board(board: &TagBoard, measure: &dyn TextMeasure) -> Vec<TagLayout> {
    board.iter().map(|tag| layout_tag(tag, measure)).collect()
}
