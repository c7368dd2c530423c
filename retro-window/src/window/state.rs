use window_types::{Bounds, Geometry, LayoutState, Length, Point};

use crate::config::WindowConfig;
use crate::window::gesture::{DragState, Gesture, ResizeState, SizeFloor};

/// Inputs that drive a window. Pointer moves and releases come from the
/// page-wide listeners, everything else from the window's own chrome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowEvent {
    TitlebarPointerDown { pointer: Point, bounds: Bounds },
    ResizePointerDown { pointer: Point, bounds: Bounds },
    PointerMove(Point),
    PointerUp,
    MinimizeClicked,
    MaximizeClicked,
    CloseClicked,
}

/// What an event did to the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    GestureStarted,
    GestureEnded,
    Moved,
    Resized,
    Maximized,
    Restored,
    Minimized,
    Unminimized,
    Closed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WindowModel {
    title: String,
    geometry: Geometry,
    /// Pre-maximize geometry. Present exactly while maximized.
    saved_geometry: Option<Geometry>,
    gesture: Option<Gesture>,
    content_visible: bool,
    closed: bool,
    restored_height: Length,
    floor: SizeFloor,
}

impl WindowModel {
    pub fn new(title: Option<String>, geometry: Geometry, config: &WindowConfig) -> Self {
        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| config.default_title.clone());

        Self {
            title,
            geometry,
            saved_geometry: None,
            gesture: None,
            content_visible: true,
            closed: false,
            restored_height: config.restored_height,
            floor: config.size_floor(),
        }
    }

    pub fn apply(&mut self, event: WindowEvent) -> Transition {
        if self.closed {
            return Transition::Unchanged;
        }

        match event {
            WindowEvent::TitlebarPointerDown { pointer, bounds } => {
                self.gesture = Some(Gesture::Drag(DragState::begin(pointer, bounds)));
                Transition::GestureStarted
            }
            WindowEvent::ResizePointerDown { pointer, bounds } => {
                self.gesture = Some(Gesture::Resize(ResizeState::begin(pointer, bounds)));
                Transition::GestureStarted
            }
            WindowEvent::PointerMove(pointer) => self.track_pointer(pointer),
            WindowEvent::PointerUp => match self.gesture.take() {
                Some(_) => Transition::GestureEnded,
                None => Transition::Unchanged,
            },
            WindowEvent::MinimizeClicked => self.toggle_minimize(),
            WindowEvent::MaximizeClicked => self.toggle_maximize(),
            WindowEvent::CloseClicked => {
                self.gesture = None;
                self.closed = true;
                Transition::Closed
            }
        }
    }

    fn track_pointer(&mut self, pointer: Point) -> Transition {
        if self.is_maximized() {
            return Transition::Unchanged;
        }

        match self.gesture {
            Some(Gesture::Drag(drag)) => {
                let (left, top) = drag.position(pointer);
                self.geometry.left = Some(Length::Px(left));
                self.geometry.top = Some(Length::Px(top));
                Transition::Moved
            }
            Some(Gesture::Resize(resize)) => {
                let (width, height) = resize.size(pointer, self.floor);
                self.geometry.width = Some(Length::Px(width));
                self.geometry.height = Some(Length::Px(height));
                Transition::Resized
            }
            None => Transition::Unchanged,
        }
    }

    fn toggle_maximize(&mut self) -> Transition {
        // Gesture anchors describe bounds that are about to change.
        self.gesture = None;

        match self.saved_geometry.take() {
            Some(saved) => {
                self.geometry = saved;
                Transition::Restored
            }
            None => {
                self.saved_geometry = Some(self.geometry);
                self.geometry = Geometry::full_viewport();
                Transition::Maximized
            }
        }
    }

    fn toggle_minimize(&mut self) -> Transition {
        self.content_visible = !self.content_visible;
        if self.content_visible {
            self.geometry.height = Some(self.restored_height);
            Transition::Unminimized
        } else {
            self.geometry.height = Some(Length::Auto);
            Transition::Minimized
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn saved_geometry(&self) -> Option<Geometry> {
        self.saved_geometry
    }

    pub fn is_maximized(&self) -> bool {
        self.saved_geometry.is_some()
    }

    pub fn is_minimized(&self) -> bool {
        !self.content_visible
    }

    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    pub fn resize_handle_visible(&self) -> bool {
        self.content_visible
    }

    pub fn gesture(&self) -> Option<Gesture> {
        self.gesture
    }

    pub fn has_gesture(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn layout_state(&self) -> LayoutState {
        if self.is_maximized() {
            return LayoutState::Maximized;
        }
        match self.gesture {
            Some(Gesture::Drag(_)) => LayoutState::Dragging,
            Some(Gesture::Resize(_)) => LayoutState::Resizing,
            None => LayoutState::Normal,
        }
    }
}
