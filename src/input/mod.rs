//! Gesture controllers translating pointer movement into window geometry.

pub mod drag;
pub mod resize;

pub use drag::DragController;
pub use resize::{ResizeCompletion, ResizeController};
