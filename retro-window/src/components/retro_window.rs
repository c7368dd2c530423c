use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, info, trace, warn};
use window_types::Geometry;

use crate::components::styles::RETRO_WINDOW_STYLES;
use crate::config::window_config;
use crate::interop::{event_window_bounds, mouse_point, PageListeners};
use crate::window::{Transition, WindowEvent, WindowModel};

#[derive(Clone, Copy, Debug, PartialEq)]
enum GestureKind {
    Drag,
    Resize,
}

/// Desktop-style window with a titlebar, minimize/maximize/close controls,
/// a content slot and a corner resize handle.
///
/// `title` is read once on creation. A closed window renders nothing and
/// fires `on_close` so the owner can drop it as well.
#[component]
pub fn RetroWindow(
    title: Option<String>,
    geometry: Option<Geometry>,
    on_close: Option<Callback<()>>,
    children: Element,
) -> Element {
    let model = use_signal(move || {
        WindowModel::new(title, geometry.unwrap_or_default(), window_config())
    });

    let listeners = use_hook(move || {
        let mut model_for_move = model;
        let mut model_for_up = model;
        let attached = PageListeners::attach(
            move |pointer| {
                if !model_for_move.peek().has_gesture() {
                    return;
                }
                let transition = model_for_move.write().apply(WindowEvent::PointerMove(pointer));
                if transition != Transition::Unchanged {
                    trace!("window pointer move {:?}: {:?}", pointer, transition);
                }
            },
            move || {
                if !model_for_up.peek().has_gesture() {
                    return;
                }
                let transition = model_for_up.write().apply(WindowEvent::PointerUp);
                debug!("window '{}': {:?}", model_for_up.peek().title(), transition);
            },
        );

        match attached {
            Ok(listeners) => Rc::new(RefCell::new(Some(listeners))),
            Err(e) => {
                warn!("Window gestures disabled, page listeners unavailable: {}", e);
                Rc::new(RefCell::new(None::<PageListeners>))
            }
        }
    });

    {
        let listeners = listeners.clone();
        use_drop(move || {
            listeners.borrow_mut().take();
        });
    }

    let Some(view) = WindowView::of(&model.read()) else {
        return rsx! {};
    };

    rsx! {
        style { {RETRO_WINDOW_STYLES} }

        div {
            class: "retro-window",
            "data-layout": view.layout,
            style: "{view.style}",

            div {
                class: "titlebar",
                onmousedown: move |e| begin_gesture(e, model, GestureKind::Drag, on_close),

                div { class: "title", "{view.title}" }

                div {
                    class: "buttons",
                    button {
                        class: "minimize",
                        title: "Minimize",
                        onmousedown: move |e| e.stop_propagation(),
                        onclick: move |_| dispatch(model, WindowEvent::MinimizeClicked, on_close),
                        "−"
                    }
                    button {
                        class: "maximize",
                        title: view.maximize_label,
                        onmousedown: move |e| e.stop_propagation(),
                        onclick: move |_| dispatch(model, WindowEvent::MaximizeClicked, on_close),
                        {view.maximize_glyph}
                    }
                    button {
                        class: "close",
                        title: "Close",
                        onmousedown: move |e| e.stop_propagation(),
                        onclick: move |_| dispatch(model, WindowEvent::CloseClicked, on_close),
                        "×"
                    }
                }
            }

            div {
                class: "content",
                style: view.content_style,
                {children}
            }

            div {
                class: "resize-handle",
                style: view.handle_style,
                onmousedown: move |e| begin_gesture(e, model, GestureKind::Resize, on_close),
            }
        }
    }
}

const HIDDEN: &str = "display: none;";

/// What the chrome shows for one model state. `None` once closed.
#[derive(Debug, Clone, PartialEq)]
struct WindowView {
    title: String,
    style: String,
    layout: &'static str,
    content_style: &'static str,
    handle_style: &'static str,
    maximize_label: &'static str,
    maximize_glyph: &'static str,
}

impl WindowView {
    fn of(model: &WindowModel) -> Option<Self> {
        if model.is_closed() {
            return None;
        }

        let maximized = model.is_maximized();
        Some(Self {
            title: model.title().to_string(),
            style: model.geometry().to_style(),
            layout: model.layout_state().as_str(),
            content_style: if model.content_visible() { "" } else { HIDDEN },
            handle_style: if model.resize_handle_visible() { "" } else { HIDDEN },
            maximize_label: if maximized { "Restore" } else { "Maximize" },
            maximize_glyph: if maximized { "❐" } else { "□" },
        })
    }
}

fn begin_gesture(
    e: Event<MouseData>,
    model: Signal<WindowModel>,
    kind: GestureKind,
    on_close: Option<Callback<()>>,
) {
    e.prevent_default();

    let bounds = match event_window_bounds(&e) {
        Ok(bounds) => bounds,
        Err(err) => {
            warn!("Skipping window {:?}: {}", kind, err);
            return;
        }
    };
    let pointer = mouse_point(&e);

    let event = match kind {
        GestureKind::Drag => WindowEvent::TitlebarPointerDown { pointer, bounds },
        GestureKind::Resize => WindowEvent::ResizePointerDown { pointer, bounds },
    };
    dispatch(model, event, on_close);
}

fn dispatch(mut model: Signal<WindowModel>, event: WindowEvent, on_close: Option<Callback<()>>) {
    let transition = model.write().apply(event);
    let title = model.peek().title().to_string();

    match transition {
        Transition::Unchanged => {}
        Transition::Closed => {
            info!("window '{}' closed", title);
            if let Some(on_close) = on_close {
                on_close.call(());
            }
        }
        other => debug!("window '{}': {:?}", title, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WindowConfig;
    use window_types::Point;

    fn notepad() -> WindowModel {
        WindowModel::new(
            Some("Notepad".to_string()),
            Geometry::px(160.0, 120.0, 400.0, 300.0),
            &WindowConfig::default(),
        )
    }

    #[test]
    fn view_of_a_fresh_window() {
        let view = WindowView::of(&notepad()).expect("open window has a view");

        assert_eq!(view.title, "Notepad");
        assert_eq!(view.style, "left: 160px; top: 120px; width: 400px; height: 300px;");
        assert_eq!(view.layout, "normal");
        assert_eq!(view.content_style, "");
        assert_eq!(view.handle_style, "");
        assert_eq!(view.maximize_label, "Maximize");
        assert_eq!(view.maximize_glyph, "□");
    }

    #[test]
    fn minimize_hides_content_and_handle() {
        let mut model = notepad();
        model.apply(WindowEvent::MinimizeClicked);

        let view = WindowView::of(&model).expect("minimized window has a view");
        assert_eq!(view.content_style, HIDDEN);
        assert_eq!(view.handle_style, HIDDEN);
        assert!(view.style.contains("height: auto;"));

        model.apply(WindowEvent::MinimizeClicked);
        let view = WindowView::of(&model).expect("restored window has a view");
        assert_eq!(view.content_style, "");
        assert_eq!(view.handle_style, "");
    }

    #[test]
    fn maximize_switches_control_glyph() {
        let mut model = notepad();
        model.apply(WindowEvent::MaximizeClicked);

        let view = WindowView::of(&model).expect("maximized window has a view");
        assert_eq!(view.layout, "maximized");
        assert_eq!(view.maximize_label, "Restore");
        assert_eq!(view.maximize_glyph, "❐");
        assert_eq!(view.style, "left: 0px; top: 0px; width: 100vw; height: 100vh;");

        model.apply(WindowEvent::MaximizeClicked);
        let view = WindowView::of(&model).expect("restored window has a view");
        assert_eq!(view.maximize_glyph, "□");
        assert_eq!(view.style, "left: 160px; top: 120px; width: 400px; height: 300px;");
    }

    #[test]
    fn layout_follows_gesture() {
        let mut model = notepad();
        model.apply(WindowEvent::TitlebarPointerDown {
            pointer: Point::new(200.0, 130.0),
            bounds: window_types::Bounds::new(160.0, 120.0, 400.0, 300.0),
        });
        assert_eq!(WindowView::of(&model).map(|v| v.layout), Some("dragging"));

        model.apply(WindowEvent::PointerUp);
        assert_eq!(WindowView::of(&model).map(|v| v.layout), Some("normal"));
    }

    #[test]
    fn closed_window_has_no_view() {
        let mut model = notepad();
        assert_eq!(model.apply(WindowEvent::CloseClicked), Transition::Closed);
        assert_eq!(WindowView::of(&model), None);
    }
}
