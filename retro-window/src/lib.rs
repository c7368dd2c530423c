pub mod components;
pub mod config;
pub mod error;
pub mod interop;
pub mod page;
pub mod window;

pub use components::*;
pub use config::*;
pub use error::*;
pub use interop::*;
pub use page::*;
pub use window::*;
