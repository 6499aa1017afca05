//! Handler modules for keyboard input, filters and replay files.

mod file_handler;
mod filter_handler;
mod input_handler;

pub use file_handler::FileHandler;
pub use filter_handler::FilterHandler;
pub use input_handler::InputHandler;
