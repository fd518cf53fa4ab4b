use crate::dom;
use morph_core::ProgressTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener, removed again when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut() + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &options,
        );
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Recompute progress from the section's current layout.
pub fn refresh_progress(section: &web::Element, progress: &Rc<RefCell<ProgressTracker>>) -> f32 {
    let rect = dom::section_rect(section);
    progress
        .borrow_mut()
        .update(rect, dom::viewport_height())
}

/// Scroll updates progress; resize resyncs the canvas backing store and
/// progress. Neither touches morph state directly.
pub fn wire_scroll_and_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    section: &web::Element,
    progress: &Rc<RefCell<ProgressTracker>>,
) -> Vec<EventListener> {
    let scroll_section = section.clone();
    let scroll_progress = progress.clone();
    let on_scroll = EventListener::new(window, "scroll", true, move || {
        refresh_progress(&scroll_section, &scroll_progress);
    });

    let resize_canvas = canvas.clone();
    let resize_section = section.clone();
    let resize_progress = progress.clone();
    let on_resize = EventListener::new(window, "resize", false, move || {
        dom::sync_canvas_backing_size(&resize_canvas);
        refresh_progress(&resize_section, &resize_progress);
    });

    vec![on_scroll, on_resize]
}
