//! Single-screen snake on a wrap-around grid.

pub mod config;
pub mod font;
pub mod food;
pub mod grid;
pub mod input;
pub mod pacer;
pub mod render;
pub mod session;
pub mod snake;
