use window_types::{Bounds, Point};

/// Pointer offset from the window's top-left, captured on titlebar pointer-down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub offset_x: f64,
    pub offset_y: f64,
}

impl DragState {
    pub fn begin(pointer: Point, bounds: Bounds) -> Self {
        Self {
            offset_x: pointer.x - bounds.left,
            offset_y: pointer.y - bounds.top,
        }
    }

    /// Top-left that keeps the grab point under the pointer.
    pub fn position(&self, pointer: Point) -> (f64, f64) {
        (pointer.x - self.offset_x, pointer.y - self.offset_y)
    }
}

/// Pointer position and window size captured on resize-handle pointer-down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeState {
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub anchor_width: f64,
    pub anchor_height: f64,
}

impl ResizeState {
    pub fn begin(pointer: Point, bounds: Bounds) -> Self {
        Self {
            anchor_x: pointer.x,
            anchor_y: pointer.y,
            anchor_width: bounds.width,
            anchor_height: bounds.height,
        }
    }

    /// Anchor size grown by the pointer delta, never below `floor`.
    pub fn size(&self, pointer: Point, floor: SizeFloor) -> (f64, f64) {
        let width = self.anchor_width + (pointer.x - self.anchor_x);
        let height = self.anchor_height + (pointer.y - self.anchor_y);
        (width.max(floor.min_width), height.max(floor.min_height))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeFloor {
    pub min_width: f64,
    pub min_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Drag(DragState),
    Resize(ResizeState),
}
