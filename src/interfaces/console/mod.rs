pub mod menu;
pub mod render;
