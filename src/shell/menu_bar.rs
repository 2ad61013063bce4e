//! The single-row menu bar across the top of the desktop.

use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme;
use crate::ui::UiFrame;

pub struct MenuBar {
    user_host: String,
}

impl MenuBar {
    pub fn new() -> Self {
        let host = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "portfolio".to_string());
        Self {
            user_host: format!("guest@{host}"),
        }
    }

    /// Draw the bar: logo and focused window title on the left, cursor
    /// hint, user@host and clock on the right.
    pub fn render(
        &self,
        frame: &mut UiFrame<'_>,
        area: Rect,
        focused_title: Option<&str>,
        cursor_hint: Option<&str>,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let bar = Rect {
            height: 1,
            ..area
        };
        let base = Style::default().bg(theme::menu_bar_bg()).fg(theme::menu_bar_fg());
        for x in bar.x..bar.x + bar.width {
            frame.set_cell(x, bar.y, " ", base);
        }

        let mut left = String::from("  Jordan Hale");
        if let Some(title) = focused_title {
            left.push_str("  ·  ");
            left.push_str(title);
        }
        frame.set_string(bar.x, bar.y, &left, base.add_modifier(Modifier::BOLD));

        let clock = Local::now().format("%a %H:%M").to_string();
        let mut right = String::new();
        if let Some(hint) = cursor_hint {
            right.push_str(hint);
            right.push_str("  ");
        }
        right.push_str(&self.user_host);
        right.push_str("  ");
        right.push_str(&clock);
        right.push(' ');
        let len = right.chars().count() as u16;
        if len < bar.width {
            frame.set_string(bar.x + bar.width - len, bar.y, &right, base);
        }
    }
}

impl Default for MenuBar {
    fn default() -> Self {
        Self::new()
    }
}
