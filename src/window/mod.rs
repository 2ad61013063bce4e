pub mod chrome;
pub mod handles;
pub mod manager;

pub use chrome::TrafficLight;
pub use handles::{ResizeHandle, hit_test, resize_handles_for};
pub use manager::{MouseOutcome, WindowDrawTask, WindowManager};
