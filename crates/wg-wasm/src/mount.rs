//! Full widget mounting.
//!
//! Builds the toolbar (word input, "Add Word", "Undo", "+", "-") and the
//! canvas inside a host element, wires DOM events to a shared
//! `WordGeneCanvas`, and redraws after every change. Pointer moves and
//! releases are tracked on the whole widget, not per tag, so a drag keeps
//! following the pointer even when it leaves the tag.

use crate::WordGeneCanvas;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wg_editor::EditorAction;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, Event, EventTarget, HtmlCanvasElement,
    HtmlInputElement, KeyboardEvent, MouseEvent,
};

const CANVAS_WIDTH: u32 = 960;
const CANVAS_HEIGHT: u32 = 640;

type Listener = Closure<dyn FnMut(Event)>;

/// Shared state behind every listener.
struct Widget {
    canvas: RefCell<WordGeneCanvas>,
    ctx: CanvasRenderingContext2d,
    canvas_el: HtmlCanvasElement,
    input: HtmlInputElement,
}

impl Widget {
    fn redraw_if(&self, changed: bool) {
        if changed {
            self.canvas.borrow().render(&self.ctx);
        }
    }

    /// Canvas-local coordinates of a mouse event.
    fn local(&self, event: &MouseEvent) -> (f32, f32) {
        let rect = self.canvas_el.get_bounding_client_rect();
        (
            (f64::from(event.client_x()) - rect.left()) as f32,
            (f64::from(event.client_y()) - rect.top()) as f32,
        )
    }

    fn add_from_input(&self) {
        let changed = self.canvas.borrow_mut().add_word(&self.input.value());
        if changed {
            self.input.set_value("");
        }
        self.redraw_if(changed);
    }

    fn key(&self, event: &KeyboardEvent) {
        let (action, changed) = self.canvas.borrow_mut().key(
            &event.key(),
            event.ctrl_key(),
            event.shift_key(),
            event.alt_key(),
            event.meta_key(),
            &self.input.value(),
        );
        if action.is_some() {
            event.prevent_default();
        }
        if action == Some(EditorAction::AddWord) && changed {
            self.input.set_value("");
        }
        self.redraw_if(changed);
    }
}

/// A mounted widget. Call `unmount` to detach listeners and remove its DOM.
#[wasm_bindgen]
pub struct WordGeneHandle {
    root: Element,
    widget: Rc<Widget>,
    listeners: Vec<(EventTarget, &'static str, Listener)>,
}

#[wasm_bindgen]
impl WordGeneHandle {
    /// Number of tags currently on the canvas.
    pub fn tag_count(&self) -> usize {
        self.widget.canvas.borrow().tag_count()
    }

    /// The board as JSON (see `WordGeneCanvas::tags_json`).
    pub fn tags_json(&self) -> String {
        self.widget.canvas.borrow().tags_json()
    }

    pub fn set_theme(&self, is_dark: bool) {
        self.widget.canvas.borrow_mut().set_theme(is_dark);
        self.widget.redraw_if(true);
    }

    /// Detach every listener and remove the widget's elements. The editor
    /// state is discarded with the handle.
    pub fn unmount(self) {
        for (target, kind, listener) in &self.listeners {
            let _ = target
                .remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref());
        }
        self.root.remove();
        log::debug!("word gene unmounted");
    }
}

/// Mount the widget into the element with id `container_id`.
#[wasm_bindgen]
pub fn mount(container_id: &str) -> Result<WordGeneHandle, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id {container_id:?}")))?;

    let root = document.create_element("div")?;
    root.set_class_name("wordgene");
    root.set_attribute(
        "style",
        "display:flex;flex-direction:column;align-items:center;gap:16px;padding:16px;",
    )?;

    let toolbar = document.create_element("div")?;
    toolbar.set_class_name("wordgene-toolbar");
    toolbar.set_attribute("style", "display:flex;gap:8px;justify-content:center;")?;

    let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("text");
    input.set_placeholder("Enter a word");
    toolbar.append_child(&input)?;

    let add = button(&document, "Add Word", "#3B82F6")?;
    let undo = button(&document, "Undo", "#EF4444")?;
    let grow = button(&document, "+", "#22C55E")?;
    let shrink = button(&document, "-", "#EAB308")?;
    for b in [&add, &undo, &grow, &shrink] {
        toolbar.append_child(b)?;
    }

    let canvas_el: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas_el.set_width(CANVAS_WIDTH);
    canvas_el.set_height(CANVAS_HEIGHT);
    canvas_el.set_tab_index(0);
    canvas_el.set_attribute("style", "cursor:move;")?;

    root.append_child(&toolbar)?;
    root.append_child(&canvas_el)?;
    container.append_child(&root)?;

    let ctx: CanvasRenderingContext2d = canvas_el
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas 2d context unavailable"))?
        .dyn_into()?;

    let mut controller = WordGeneCanvas::new(f64::from(CANVAS_WIDTH), f64::from(CANVAS_HEIGHT));
    controller.attach_context(ctx.clone());
    let widget = Rc::new(Widget {
        canvas: RefCell::new(controller),
        ctx,
        canvas_el: canvas_el.clone(),
        input: input.clone(),
    });

    let mut listeners = Vec::new();

    listen(&mut listeners, &add, "click", {
        let widget = widget.clone();
        move |_| widget.add_from_input()
    })?;
    listen(&mut listeners, &undo, "click", {
        let widget = widget.clone();
        move |_| {
            let changed = widget.canvas.borrow_mut().undo();
            widget.redraw_if(changed);
        }
    })?;
    listen(&mut listeners, &grow, "click", {
        let widget = widget.clone();
        move |_| {
            let changed = widget.canvas.borrow_mut().grow_last();
            widget.redraw_if(changed);
        }
    })?;
    listen(&mut listeners, &shrink, "click", {
        let widget = widget.clone();
        move |_| {
            let changed = widget.canvas.borrow_mut().shrink_last();
            widget.redraw_if(changed);
        }
    })?;

    // Only Enter is meaningful while typing; +/- must stay literal text.
    listen(&mut listeners, &input, "keydown", {
        let widget = widget.clone();
        move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>()
                && event.key() == "Enter"
            {
                widget.key(event);
            }
        }
    })?;
    listen(&mut listeners, &canvas_el, "keydown", {
        let widget = widget.clone();
        move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                widget.key(event);
            }
        }
    })?;

    listen(&mut listeners, &canvas_el, "mousedown", {
        let widget = widget.clone();
        move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            // Keep the browser from starting a text selection or native drag.
            event.prevent_default();
            let _ = widget.canvas_el.focus();
            let (x, y) = widget.local(event);
            let changed = widget.canvas.borrow_mut().handle_pointer_down(x, y);
            widget.redraw_if(changed);
        }
    })?;
    listen(&mut listeners, &root, "mousemove", {
        let widget = widget.clone();
        move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = widget.local(event);
            let changed = widget.canvas.borrow_mut().handle_pointer_move(x, y);
            widget.redraw_if(changed);
        }
    })?;
    listen(&mut listeners, &root, "mouseup", {
        let widget = widget.clone();
        move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = widget.local(event);
            let changed = widget.canvas.borrow_mut().handle_pointer_up(x, y);
            widget.redraw_if(changed);
        }
    })?;

    widget.redraw_if(true);
    log::debug!("word gene mounted into #{container_id}");

    Ok(WordGeneHandle {
        root,
        widget,
        listeners,
    })
}

fn button(document: &Document, label: &str, color: &str) -> Result<Element, JsValue> {
    let b = document.create_element("button")?;
    b.set_attribute("type", "button")?;
    b.set_text_content(Some(label));
    b.set_attribute(
        "style",
        &format!(
            "background:{color};color:#fff;border:none;border-radius:4px;\
             padding:8px 16px;cursor:pointer;"
        ),
    )?;
    Ok(b)
}

fn listen(
    listeners: &mut Vec<(EventTarget, &'static str, Listener)>,
    target: &EventTarget,
    kind: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    listeners.push((target.clone(), kind, closure));
    Ok(())
}
