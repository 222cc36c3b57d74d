pub mod pointer;
pub mod window;

pub use pointer::wire_soundcheck;
pub use window::{resize, wire_window_handlers, WindowWiring};
