use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent as DomMouseEvent;
use window_types::{Bounds, Point};

use crate::error::InteropError;

/// Client coordinates of a mouse event.
pub fn mouse_point(e: &Event<MouseData>) -> Point {
    let point = e.data().client_coordinates();
    Point::new(point.x, point.y)
}

/// Bounds of a window element in the space its inline `left`/`top` apply to.
///
/// Offsets are relative to the offset parent's padding edge and include the
/// border, matching an absolutely positioned `border-box` window.
pub fn element_bounds(element: &web_sys::Element) -> Result<Bounds, InteropError> {
    let element = element
        .dyn_ref::<web_sys::HtmlElement>()
        .ok_or(InteropError::NoElement)?;

    Ok(Bounds::new(
        f64::from(element.offset_left()),
        f64::from(element.offset_top()),
        f64::from(element.offset_width()),
        f64::from(element.offset_height()),
    ))
}

/// Measure the `.retro-window` element enclosing the event target.
pub fn event_window_bounds(e: &Event<MouseData>) -> Result<Bounds, InteropError> {
    let window = e
        .data()
        .try_as_web_event()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".retro-window").ok().flatten())
        .ok_or(InteropError::NoElement)?;

    element_bounds(&window)
}

type MouseClosure = Closure<dyn FnMut(DomMouseEvent)>;

/// `mousemove`/`mouseup` listeners on the browser window.
///
/// Gestures keep tracking after the pointer leaves the widget because these
/// sit on the page, not on the widget. Both listeners are removed on drop.
pub struct PageListeners {
    target: web_sys::Window,
    on_move: MouseClosure,
    on_up: MouseClosure,
}

impl PageListeners {
    pub fn attach<M, U>(mut on_move: M, mut on_up: U) -> Result<Self, InteropError>
    where
        M: FnMut(Point) + 'static,
        U: FnMut() + 'static,
    {
        let target = web_sys::window().ok_or(InteropError::NoWindow)?;

        let on_move = Closure::wrap(Box::new(move |e: DomMouseEvent| {
            on_move(Point::new(f64::from(e.client_x()), f64::from(e.client_y())));
        }) as Box<dyn FnMut(DomMouseEvent)>);

        let on_up = Closure::wrap(Box::new(move |_e: DomMouseEvent| {
            on_up();
        }) as Box<dyn FnMut(DomMouseEvent)>);

        // Built before registering so a partial failure still unregisters on drop.
        let listeners = Self {
            target,
            on_move,
            on_up,
        };
        listeners.register("mousemove", &listeners.on_move)?;
        listeners.register("mouseup", &listeners.on_up)?;
        Ok(listeners)
    }

    fn register(&self, event: &'static str, closure: &MouseClosure) -> Result<(), InteropError> {
        self.target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| InteropError::Listener {
                event,
                message: format!("{e:?}"),
            })
    }
}

impl Drop for PageListeners {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            "mousemove",
            self.on_move.as_ref().unchecked_ref(),
        );
        let _ = self
            .target
            .remove_event_listener_with_callback("mouseup", self.on_up.as_ref().unchecked_ref());
    }
}
