//! Browser binding for the drag state machine
//!
//! Each dialog owns its own [`DragBinding`]. The element to move comes
//! straight from the render tree (`onmounted`), the pointer-down handler is
//! a regular Dioxus event, and only move/up are registered on `document`
//! so the box keeps following the pointer outside its own bounds.
//!
//! Document listeners are owned by [`DocumentListeners`] and removed when
//! it is dropped, which happens on re-activation, on dialog close and on
//! unmount. The binding is armed only while they are attached, so a
//! pointer-down without a listener for its pointer-up is ignored.

use dioxus::prelude::*;
use dioxus::web::WebEventExt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::utils::drag::{DragBinding, DragTarget, Point};
use crate::utils::errors::ModalError;

impl DragTarget for HtmlElement {
    fn origin(&self) -> Point {
        Point::new(self.offset_left() as f64, self.offset_top() as f64)
    }

    fn place(&mut self, at: Point) {
        let style = self.style();
        let left = format!("{}px", at.x);
        let top = format!("{}px", at.y);

        for (property, value) in [("left", left.as_str()), ("top", top.as_str()), ("position", "absolute")] {
            if let Err(e) = style.set_property(property, value) {
                log::warn!("Failed to set {} on dragged dialog: {:?}", property, e);
            }
        }
    }
}

/// `mousemove`/`mouseup` listeners registered on `document`
struct DocumentListeners {
    document: web_sys::Document,
    on_move: Closure<dyn FnMut(web_sys::MouseEvent)>,
    on_up: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl DocumentListeners {
    fn attach(
        mut binding: CopyValue<DragBinding<HtmlElement>>,
        mut grabbed: Signal<bool>,
    ) -> Result<Self, ModalError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ModalError::DomUnavailable)?;

        let on_move = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let at = Point::new(e.page_x() as f64, e.page_y() as f64);
            let placed = binding.write().session_mut().pointer_move(at);
            if let Some(placed) = placed {
                log::trace!("Dialog moved to ({}, {})", placed.x, placed.y);
            }

            let dragging = binding.read().session().is_dragging();
            if *grabbed.peek() != dragging {
                grabbed.set(dragging);
            }
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        let on_up = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            if binding.write().session_mut().end() {
                log::debug!("Drag ended");
            }
            if *grabbed.peek() {
                grabbed.set(false);
            }
        }) as Box<dyn FnMut(web_sys::MouseEvent)>);

        // Built before registering so a partial failure is undone by Drop
        let listeners = Self { document, on_move, on_up };

        listeners
            .document
            .add_event_listener_with_callback("mousemove", listeners.on_move.as_ref().unchecked_ref())
            .map_err(|e| ModalError::ListenerAttach(format!("mousemove: {:?}", e)))?;
        listeners
            .document
            .add_event_listener_with_callback("mouseup", listeners.on_up.as_ref().unchecked_ref())
            .map_err(|e| ModalError::ListenerAttach(format!("mouseup: {:?}", e)))?;

        Ok(listeners)
    }
}

impl Drop for DocumentListeners {
    fn drop(&mut self) {
        self.document
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref())
            .ok();
        self.document
            .remove_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref())
            .ok();
        log::debug!("Drag listeners released");
    }
}

/// Handle returned by [`use_draggable`]
#[derive(Clone, Copy)]
pub struct UseDraggable {
    binding: CopyValue<DragBinding<HtmlElement>>,
    element: CopyValue<Option<HtmlElement>>,
    listeners: CopyValue<Option<DocumentListeners>>,
    grabbed: Signal<bool>,
}

impl UseDraggable {
    /// Whether the box is being moved right now (for `aria-grabbed`)
    pub fn grabbed(&self) -> bool {
        *self.grabbed.read()
    }

    /// Capture the draggable node from its mount event
    pub fn on_mounted(&mut self, evt: MountedEvent) {
        match html_element(&evt) {
            Ok(element) => *self.element.write() = Some(element),
            Err(e) => log::error!("{}", e),
        }
    }

    /// Pointer-down on the draggable node starts a drag
    pub fn on_mouse_down(&mut self, evt: MouseEvent) {
        // Keeps the browser from starting a text selection or native drag
        evt.prevent_default();

        let Some(element) = self.element.read().clone() else {
            log::warn!("{}", ModalError::ElementUnavailable);
            return;
        };

        let mut binding = self.binding.write();
        match binding.press(element) {
            Ok(Some(previous)) => log::debug!("Drag of #{} abandoned", previous.id()),
            Ok(None) => {}
            Err(element) => {
                log::debug!("Pointer-down on #{} ignored, drag listeners not attached", element.id());
                return;
            }
        }
        let session = binding.session();
        let (pointer, offset) = (session.pointer(), session.grab_offset());
        log::debug!(
            "Drag started at ({}, {}), grab offset ({}, {})",
            pointer.x, pointer.y, offset.x, offset.y
        );
    }

    /// Start listening for pointer movement on the document.
    ///
    /// Called on every open, including a reopen during the close
    /// transition. Any drag left over from before starts again from Idle.
    pub fn activate(&mut self) {
        let previous = self.listeners.write().take();
        drop(previous);

        match DocumentListeners::attach(self.binding, self.grabbed) {
            Ok(listeners) => {
                *self.listeners.write() = Some(listeners);
                if self.binding.write().arm() {
                    log::debug!("Unfinished drag discarded");
                }
                log::debug!("Drag listeners attached");
            }
            Err(e) => {
                self.binding.write().disarm();
                if e.is_environmental() {
                    log::debug!("{}", e);
                } else {
                    log::error!("{}", e);
                }
            }
        }

        if *self.grabbed.peek() {
            self.grabbed.set(false);
        }
    }

    /// Stop listening and abort any drag in progress
    pub fn release(&mut self) {
        let previous = self.listeners.write().take();
        drop(previous);

        if self.binding.write().disarm() {
            log::debug!("Drag aborted by dialog close");
        }

        if *self.grabbed.peek() {
            self.grabbed.set(false);
        }
    }
}

fn html_element(evt: &MountedEvent) -> Result<HtmlElement, ModalError> {
    let element = evt
        .data
        .try_as_web_event()
        .ok_or(ModalError::ElementUnavailable)?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| ModalError::NotAnHtmlElement)
}

/// Per-dialog drag state and listener ownership
///
/// Listeners are released when the owning component unmounts, even if the
/// dialog never reported a close.
pub fn use_draggable() -> UseDraggable {
    let binding = use_hook(|| CopyValue::new(DragBinding::new()));
    let element = use_hook(|| CopyValue::new(None::<HtmlElement>));
    let mut listeners = use_hook(|| CopyValue::new(None::<DocumentListeners>));
    let grabbed = use_signal(|| false);

    use_drop(move || {
        let previous = listeners.write().take();
        drop(previous);
    });

    UseDraggable {
        binding,
        element,
        listeners,
        grabbed,
    }
}
