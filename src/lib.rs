pub mod api;
pub mod apps;
pub mod component_context;
pub mod components;
pub mod config;
pub mod constants;
pub mod contact;
pub mod drivers;
pub mod event_loop;
pub mod geometry;
pub mod input;
pub mod keybindings;
pub mod shell;
pub mod state;
pub mod store;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
