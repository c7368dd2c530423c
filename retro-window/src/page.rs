//! Demo page: a handful of independent windows on one canvas.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use uuid::Uuid;
use window_types::{Geometry, Length};

use crate::components::RetroWindow;

#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow {
    pub id: String,
    pub title: String,
    pub geometry: Geometry,
    pub body: String,
}

impl PageWindow {
    pub fn new(title: &str, geometry: Geometry, body: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            geometry,
            body: body.to_string(),
        }
    }
}

pub fn default_windows() -> Vec<PageWindow> {
    vec![
        PageWindow::new(
            "Notepad",
            Geometry::UNSET,
            "Drag me by the titlebar, resize me from the corner.",
        ),
        PageWindow::new(
            "My Computer",
            Geometry::px(480.0, 80.0, 360.0, 240.0),
            "Minimize collapses me to my titlebar.",
        ),
        PageWindow::new(
            "Readme",
            Geometry {
                left: Some(Length::Px(160.0)),
                top: Some(Length::Px(360.0)),
                width: Some(Length::Vw(30.0)),
                height: None,
            },
            "Maximize fills the viewport; click again to get my old bounds back.",
        ),
    ]
}

pub fn remove_page_window(windows: &mut Vec<PageWindow>, window_id: &str) {
    windows.retain(|w| w.id != window_id);
}

#[component]
pub fn WindowPage() -> Element {
    let mut windows = use_signal(default_windows);

    let close_window = use_callback(move |window_id: String| {
        remove_page_window(&mut windows.write(), &window_id);
        info!("{} window(s) left on page", windows.peek().len());
    });

    rsx! {
        div {
            class: "retro-desktop",
            style: "position: fixed; inset: 0; overflow: hidden; background: #008080;",

            for window in windows() {
                PageWindowFrame {
                    key: "{window.id}",
                    window: window.clone(),
                    on_close: close_window,
                }
            }

            if windows.read().is_empty() {
                p {
                    style: "color: white; font-family: sans-serif; padding: 1rem;",
                    "All windows closed. Reload to bring them back."
                }
            }
        }
    }
}

#[component]
fn PageWindowFrame(window: PageWindow, on_close: Callback<String>) -> Element {
    let window_id = window.id.clone();

    rsx! {
        RetroWindow {
            title: window.title.clone(),
            geometry: window.geometry,
            on_close: Callback::new(move |_: ()| on_close.call(window_id.clone())),
            p { "{window.body}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_windows_have_distinct_ids() {
        let windows = default_windows();
        assert_eq!(windows.len(), 3);
        assert_ne!(windows[0].id, windows[1].id);
        assert_eq!(windows[0].title, "Notepad");
        assert_eq!(windows[0].geometry, Geometry::UNSET);
    }

    #[test]
    fn removing_a_window_leaves_the_others() {
        let mut windows = default_windows();
        let closed = windows[1].id.clone();
        remove_page_window(&mut windows, &closed);

        assert_eq!(windows.len(), 2);
        assert!(windows.iter().all(|w| w.id != closed));

        remove_page_window(&mut windows, "missing");
        assert_eq!(windows.len(), 2);
    }
}
