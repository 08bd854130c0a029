//! Canvas2D renderer.
//!
//! Draws the laid-out tags in board order (last tag on top): the word, then
//! its red "X" button. The tag currently being dragged gets an outline.

use wg_core::TagBoard;
use wg_render::layout::{DELETE_LABEL, TextMeasure};
use wg_render::{ApproxMeasure, TagLayout, layout_board};
use web_sys::CanvasRenderingContext2d;

pub const FONT_FAMILY: &str = "Inter, system-ui, sans-serif";

/// Theme-dependent colors for the canvas renderer.
pub struct CanvasTheme {
    pub bg: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub button_bg: &'static str,
    pub button_text: &'static str,
    pub drag_outline: &'static str,
}

impl CanvasTheme {
    pub fn light() -> Self {
        Self {
            bg: "#F3F4F6",
            border: "#9CA3AF",
            text: "#111827",
            button_bg: "#EF4444",
            button_text: "#FFFFFF",
            drag_outline: "#4FC3F7",
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: "#1C1C1E",
            border: "#48484A",
            text: "#F2F2F7",
            button_bg: "#DC2626",
            button_text: "#FFFFFF",
            drag_outline: "#4FC3F7",
        }
    }
}

/// Measures text with the context's own font metrics.
pub struct CanvasMeasure<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasMeasure<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for CanvasMeasure<'_> {
    fn text_width(&self, text: &str, font_size: f64) -> f64 {
        self.ctx.set_font(&font_spec(font_size));
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(_) => ApproxMeasure::default().text_width(text, font_size),
        }
    }
}

pub fn font_spec(font_size: f64) -> String {
    format!("{font_size}px {FONT_FAMILY}")
}

/// Render the whole board.
pub fn render_board(
    ctx: &CanvasRenderingContext2d,
    board: &TagBoard,
    canvas_width: f64,
    canvas_height: f64,
    dragging: Option<wg_core::TagId>,
    theme: &CanvasTheme,
) {
    ctx.set_fill_style_str(theme.bg);
    ctx.fill_rect(0.0, 0.0, canvas_width, canvas_height);

    ctx.set_stroke_style_str(theme.border);
    ctx.set_line_width(2.0);
    rounded_rect_path(ctx, 1.0, 1.0, canvas_width - 2.0, canvas_height - 2.0, 8.0);
    ctx.stroke();

    let layouts = layout_board(board, &CanvasMeasure::new(ctx));
    for (tag, layout) in board.iter().zip(&layouts) {
        draw_tag(ctx, &tag.text, layout, theme);
        if dragging == Some(layout.id) {
            draw_drag_outline(ctx, layout, theme);
        }
    }
}

fn draw_tag(ctx: &CanvasRenderingContext2d, text: &str, layout: &TagLayout, theme: &CanvasTheme) {
    ctx.save();
    ctx.set_font(&font_spec(layout.font_size));
    ctx.set_text_baseline("middle");

    // Word
    ctx.set_fill_style_str(theme.text);
    ctx.set_text_align("left");
    let _ = ctx.fill_text(text, layout.text.x0, layout.text.center().y);

    // Delete button
    let b = layout.delete;
    ctx.set_fill_style_str(theme.button_bg);
    rounded_rect_path(ctx, b.x0, b.y0, b.width(), b.height(), 4.0);
    ctx.fill();

    let label = layout.delete_label_center();
    ctx.set_fill_style_str(theme.button_text);
    ctx.set_text_align("center");
    let _ = ctx.fill_text(DELETE_LABEL, label.x, label.y);

    ctx.restore();
}

fn draw_drag_outline(ctx: &CanvasRenderingContext2d, layout: &TagLayout, theme: &CanvasTheme) {
    let f = layout.frame().inflate(3.0, 3.0);
    ctx.save();
    ctx.set_stroke_style_str(theme.drag_outline);
    ctx.set_line_width(2.0);
    rounded_rect_path(ctx, f.x0, f.y0, f.width(), f.height(), 6.0);
    ctx.stroke();
    ctx.restore();
}

// ─── Helpers ─────────────────────────────────────────────────────────────

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.line_to(x + w - r, y);
    ctx.arc_to(x + w, y, x + w, y + r, r).unwrap_or(());
    ctx.line_to(x + w, y + h - r);
    ctx.arc_to(x + w, y + h, x + w - r, y + h, r).unwrap_or(());
    ctx.line_to(x + r, y + h);
    ctx.arc_to(x, y + h, x, y + h - r, r).unwrap_or(());
    ctx.line_to(x, y + r);
    ctx.arc_to(x, y, x + r, y, r).unwrap_or(());
    ctx.close_path();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_spec_uses_px() {
        assert_eq!(font_spec(16.0), format!("16px {FONT_FAMILY}"));
        assert_eq!(font_spec(20.0), format!("20px {FONT_FAMILY}"));
    }
}
