pub mod retro_window;
pub mod styles;

pub use retro_window::RetroWindow;
pub use styles::RETRO_WINDOW_STYLES;
