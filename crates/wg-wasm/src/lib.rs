//! WASM bridge for WordGene — exposes the word editor to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. Hosts either drive a
//! `WordGeneCanvas` themselves (forwarding pointer/key events and calling
//! `render`) or call `mount` to get the complete widget: toolbar, canvas
//! and event wiring.

mod logger;
mod mount;
mod render2d;

pub use logger::init_logging;
pub use mount::{WordGeneHandle, mount};

use wg_core::TagId;
use wg_editor::{EditorAction, EditorConfig, InputEvent, WordEditor};
use wg_render::{ApproxMeasure, Hit, TextMeasure, hit_test, layout_board};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The JS-facing widget controller.
///
/// Every mutating method returns `true` when the host should redraw.
#[wasm_bindgen]
pub struct WordGeneCanvas {
    editor: WordEditor,
    /// Context used for text measurement during hit testing.
    measure_ctx: Option<CanvasRenderingContext2d>,
    width: f64,
    height: f64,
    dark_mode: bool,
}

#[wasm_bindgen]
impl WordGeneCanvas {
    /// Create a controller with the stock configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        Self::from_editor(WordEditor::new(), width, height)
    }

    /// Create a controller from a JSON `EditorConfig`.
    pub fn with_config(
        config_json: &str,
        width: f64,
        height: f64,
    ) -> Result<WordGeneCanvas, JsValue> {
        let editor = EditorConfig::from_json(config_json)
            .and_then(WordEditor::with_config)
            .map_err(|e| {
                log::warn!("rejected editor config: {e}");
                JsValue::from(js_sys::Error::new(&e.to_string()))
            })?;
        Ok(Self::from_editor(editor, width, height))
    }

    /// Use `ctx` for text measurement so hit testing matches what is drawn.
    pub fn attach_context(&mut self, ctx: CanvasRenderingContext2d) {
        self.measure_ctx = Some(ctx);
    }

    /// Render the board to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let theme = if self.dark_mode {
            render2d::CanvasTheme::dark()
        } else {
            render2d::CanvasTheme::light()
        };
        render2d::render_board(
            ctx,
            self.editor.board(),
            self.width,
            self.height,
            self.editor.drag_state().target(),
            &theme,
        );
    }

    pub fn set_theme(&mut self, is_dark: bool) {
        self.dark_mode = is_dark;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    // ─── Toolbar ─────────────────────────────────────────────────────────

    /// Add the trimmed input as a new tag. The host clears its input
    /// control only when this returns `true`.
    pub fn add_word(&mut self, raw: &str) -> bool {
        self.editor.add_word(raw).is_some()
    }

    pub fn undo(&mut self) -> bool {
        self.editor.undo()
    }

    pub fn grow_last(&mut self) -> bool {
        self.editor.grow_last()
    }

    pub fn shrink_last(&mut self) -> bool {
        self.editor.shrink_last()
    }

    /// Delete a tag by id string. Unknown or malformed ids are ignored.
    pub fn delete_word(&mut self, id: &str) -> bool {
        match id.parse::<TagId>() {
            Ok(id) => self.editor.delete_word(id),
            Err(_) => false,
        }
    }

    // ─── Dragging ────────────────────────────────────────────────────────

    pub fn begin_drag(&mut self, id: &str) -> bool {
        match id.parse::<TagId>() {
            Ok(id) => self.editor.begin_drag(id),
            Err(_) => false,
        }
    }

    pub fn update_drag(&mut self, x: f32, y: f32) -> bool {
        self.editor.update_drag(x, y)
    }

    pub fn end_drag(&mut self) -> bool {
        self.editor.end_drag()
    }

    /// Pointer pressed at canvas-local `(x, y)`.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.pointer(InputEvent::from_pointer_down(x, y))
    }

    /// Pointer moved anywhere over the widget.
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.pointer(InputEvent::from_pointer_move(x, y))
    }

    /// Pointer released anywhere over the widget.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.pointer(InputEvent::from_pointer_up(x, y))
    }

    /// Handle a key press. `pending_input` is the word input's text.
    /// Returns JSON: `{"changed":bool,"action":"<name>"}`; `addWord` with
    /// `changed` means the host should clear its input.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
        pending_input: &str,
    ) -> String {
        let (action, changed) = self.key(key, ctrl, shift, alt, meta, pending_input);
        let name = action.map_or("none", |a| a.name());
        let c = if changed { "true" } else { "false" };
        format!(r#"{{"changed":{c},"action":"{name}"}}"#)
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// The board as JSON: `[{"id","text","fontSize","position":{"x","y"}}]`.
    pub fn tags_json(&self) -> String {
        serde_json::to_string(self.editor.board()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn tag_count(&self) -> usize {
        self.editor.tags().len()
    }

    pub fn history_len(&self) -> usize {
        self.editor.history_len()
    }

    pub fn can_undo(&self) -> bool {
        self.editor.can_undo()
    }

    pub fn is_dragging(&self) -> bool {
        self.editor.drag_state().is_dragging()
    }

    /// Id of the tag being dragged, or empty string.
    pub fn dragging_id(&self) -> String {
        self.editor
            .drag_state()
            .target()
            .map(|id| id.to_string())
            .unwrap_or_default()
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl WordGeneCanvas {
    fn from_editor(editor: WordEditor, width: f64, height: f64) -> Self {
        console_error_panic_hook_setup();
        Self {
            editor,
            measure_ctx: None,
            width,
            height,
            dark_mode: false,
        }
    }

    fn hit_test(&self, x: f32, y: f32) -> Option<Hit> {
        let measure: Box<dyn TextMeasure + '_> = match &self.measure_ctx {
            Some(ctx) => Box::new(render2d::CanvasMeasure::new(ctx)),
            None => Box::new(ApproxMeasure::default()),
        };
        let layouts = layout_board(self.editor.board(), measure.as_ref());
        hit_test(&layouts, f64::from(x), f64::from(y))
    }

    fn pointer(&mut self, event: InputEvent) -> bool {
        let hit = match event {
            InputEvent::PointerMove { .. } => None,
            _ => event.position().and_then(|(x, y)| self.hit_test(x, y)),
        };
        self.editor.handle_input(&event, hit)
    }

    pub(crate) fn key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
        pending_input: &str,
    ) -> (Option<EditorAction>, bool) {
        let event = InputEvent::Key {
            key: key.to_string(),
            ctrl,
            shift,
            alt,
            meta,
        };
        self.editor.handle_key(&event, pending_input)
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("WordGene WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
