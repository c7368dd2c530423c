//! Window interaction state machine
//!
//! DOM-free: the component measures the page and feeds `WindowEvent`s in,
//! then renders whatever `WindowModel` reports back.

mod gesture;
mod state;

pub use gesture::{DragState, Gesture, ResizeState, SizeFloor};
pub use state::{Transition, WindowEvent, WindowModel};
