//! Centralized theme colors so the chrome, shell and apps stay visually
//! consistent.

use ratatui::style::Color;

// Traffic lights, matching the classic close/minimize/maximize palette.
pub const TRAFFIC_CLOSE: Color = Color::Rgb(255, 97, 89);
pub const TRAFFIC_MINIMIZE: Color = Color::Rgb(255, 189, 46);
pub const TRAFFIC_MAXIMIZE: Color = Color::Rgb(40, 201, 65);
pub const TRAFFIC_UNFOCUSED: Color = Color::Rgb(142, 142, 147);

pub fn menu_bar_bg() -> Color {
    Color::Rgb(40, 40, 46)
}
pub fn menu_bar_fg() -> Color {
    Color::White
}

pub fn dock_bg() -> Color {
    Color::Rgb(32, 32, 38)
}
pub fn dock_fg() -> Color {
    Color::Gray
}
pub fn dock_hover_fg() -> Color {
    Color::White
}
pub fn dock_indicator() -> Color {
    Color::Rgb(120, 200, 255)
}

pub fn wallpaper_bg() -> Color {
    Color::Rgb(24, 34, 54)
}
pub fn wallpaper_fg() -> Color {
    Color::Rgb(44, 60, 88)
}

pub fn window_bg() -> Color {
    Color::Rgb(30, 30, 34)
}
pub fn border_focused() -> Color {
    Color::Rgb(110, 160, 255)
}
pub fn border_unfocused() -> Color {
    Color::DarkGray
}
pub fn title_focused_fg() -> Color {
    Color::White
}
pub fn title_unfocused_fg() -> Color {
    Color::Gray
}

pub fn accent() -> Color {
    Color::Rgb(110, 160, 255)
}
pub fn success_fg() -> Color {
    Color::Green
}
pub fn error_fg() -> Color {
    Color::Red
}
pub fn muted_fg() -> Color {
    Color::DarkGray
}
