//! Presentation layers around the engine: text input parsing, the console
//! renderer and interactive menu, and CSV batch processing.

pub mod console;
pub mod csv;
pub mod input;
