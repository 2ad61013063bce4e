//! Small-viewport notice: shown instead of the desktop when the terminal
//! is below the designed minimum, unless the user opted out.

use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::constants::{MIN_DESKTOP_COLS, MIN_DESKTOP_ROWS};
use crate::theme;
use crate::ui::UiFrame;

pub fn viewport_too_small(area: Rect) -> bool {
    area.width < MIN_DESKTOP_COLS || area.height < MIN_DESKTOP_ROWS
}

pub fn render(frame: &mut UiFrame<'_>, area: Rect) {
    let bg = Style::default().bg(theme::wallpaper_bg()).fg(theme::menu_bar_fg());
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            frame.set_cell(x, y, " ", bg);
        }
    }
    let lines: Vec<&str> = indoc! {"
        This desktop wants a little more room.

        Resize the terminal to at least 80x24,
        or press 'c' to continue anyway
        (remembered for next time).

        Press 'q' to quit.
    "}
    .lines()
    .collect();
    let top = area
        .y
        .saturating_add(area.height.saturating_sub(lines.len() as u16) / 2);
    for (i, line) in lines.iter().enumerate() {
        let y = top + i as u16;
        if y >= area.y + area.height {
            break;
        }
        let len = line.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(len) / 2;
        let style = if i == 0 {
            bg.add_modifier(Modifier::BOLD)
        } else {
            bg
        };
        frame.set_string(x, y, line, style);
    }
}
