//! Core engine types shared by the HUD crates.
//!
//! This crate provides:
//! - The game clock driving display ticks
//! - Screen-space rectangles and interpolation

pub mod bounds;
pub mod time;

pub use bounds::*;
pub use time::*;

// Re-export commonly used types
pub use glam::Vec2;
