//! Window chrome: border, title bar with traffic lights, and the resize
//! outline shown while a handle is hovered or dragged.
//!
//! All drawing happens on the clipped on-screen rect through `UiFrame`,
//! so a window hanging off the viewport edge never writes out of bounds.

use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};

use crate::theme;
use crate::ui::{UiFrame, truncate_to_width};

/// Columns of the three title-bar buttons, relative to the window's left
/// edge.
pub const TRAFFIC_LIGHT_OFFSETS: [u16; 3] = [2, 4, 6];

/// Rows of chrome above the content area: top border, title bar,
/// separator.
pub const CHROME_TOP_ROWS: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficLight {
    Close,
    Minimize,
    Maximize,
}

pub fn title_bar_row(rect: Rect) -> u16 {
    rect.y.saturating_add(1)
}

/// The region a drag may start from: the title bar row minus the traffic
/// lights.
pub fn title_bar_rect(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: title_bar_row(rect),
        width: rect.width.saturating_sub(2),
        height: 1,
    }
}

pub fn content_rect(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(CHROME_TOP_ROWS),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(CHROME_TOP_ROWS + 1),
    }
}

/// Which traffic light, if any, sits under the pointer.
pub fn traffic_light_at(rect: Rect, column: u16, row: u16) -> Option<TrafficLight> {
    if row != title_bar_row(rect) {
        return None;
    }
    let lights = [
        TrafficLight::Close,
        TrafficLight::Minimize,
        TrafficLight::Maximize,
    ];
    for (offset, light) in TRAFFIC_LIGHT_OFFSETS.iter().zip(lights) {
        if column == rect.x.saturating_add(*offset) {
            return Some(light);
        }
    }
    None
}

pub fn render_window(
    frame: &mut UiFrame<'_>,
    rect: Rect,
    title: &str,
    icon: char,
    focused: bool,
    maximized: bool,
) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let border_style = Style::default().fg(if focused {
        theme::border_focused()
    } else {
        theme::border_unfocused()
    });
    let body_style = Style::default().bg(theme::window_bg());
    let right = rect.x + rect.width - 1;
    let bottom = rect.y + rect.height - 1;

    // Body fill first so the chrome paints over a clean background.
    for y in rect.y..=bottom {
        for x in rect.x..=right {
            frame.set_cell(x, y, " ", body_style);
        }
    }

    // Borders.
    for x in rect.x + 1..right {
        frame.set_cell(x, rect.y, "─", border_style);
        frame.set_cell(x, bottom, "─", border_style);
    }
    for y in rect.y + 1..bottom {
        frame.set_cell(rect.x, y, "│", border_style);
        frame.set_cell(right, y, "│", border_style);
    }
    frame.set_cell(rect.x, rect.y, "╭", border_style);
    frame.set_cell(right, rect.y, "╮", border_style);
    frame.set_cell(rect.x, bottom, "╰", border_style);
    frame.set_cell(right, bottom, "╯", border_style);

    // Separator between the title bar and the content region.
    if rect.height > 3 {
        let sep_y = rect.y + 2;
        frame.set_cell(rect.x, sep_y, "├", border_style);
        frame.set_cell(right, sep_y, "┤", border_style);
        for x in rect.x + 1..right {
            frame.set_cell(x, sep_y, "─", border_style);
        }
    }

    render_title_bar(frame, rect, title, icon, focused, maximized);
}

fn render_title_bar(
    frame: &mut UiFrame<'_>,
    rect: Rect,
    title: &str,
    icon: char,
    focused: bool,
    maximized: bool,
) {
    let row = title_bar_row(rect);
    let right = rect.x + rect.width - 1;

    let light_style = |color| {
        if focused {
            Style::default().fg(color).bg(theme::window_bg())
        } else {
            Style::default()
                .fg(theme::TRAFFIC_UNFOCUSED)
                .bg(theme::window_bg())
        }
    };
    frame.set_cell(
        rect.x + TRAFFIC_LIGHT_OFFSETS[0],
        row,
        "●",
        light_style(theme::TRAFFIC_CLOSE),
    );
    frame.set_cell(
        rect.x + TRAFFIC_LIGHT_OFFSETS[1],
        row,
        "●",
        light_style(theme::TRAFFIC_MINIMIZE),
    );
    // The maximize button doubles as the restore button; swap its glyph
    // so the state is readable.
    frame.set_cell(
        rect.x + TRAFFIC_LIGHT_OFFSETS[2],
        row,
        if maximized { "◉" } else { "●" },
        light_style(theme::TRAFFIC_MAXIMIZE),
    );

    let title_style = Style::default()
        .fg(if focused {
            theme::title_focused_fg()
        } else {
            theme::title_unfocused_fg()
        })
        .bg(theme::window_bg())
        .add_modifier(if focused {
            Modifier::BOLD
        } else {
            Modifier::empty()
        });
    let label = format!("{} {}", icon, title);
    let usable = rect.width.saturating_sub(TRAFFIC_LIGHT_OFFSETS[2] + 4) as usize;
    if usable == 0 {
        return;
    }
    let label = truncate_to_width(&label, usable);
    let label_len = label.chars().count() as u16;
    let start = rect.x + (rect.width.saturating_sub(label_len)) / 2;
    let start = start.max(rect.x + TRAFFIC_LIGHT_OFFSETS[2] + 2);
    if start + label_len <= right {
        frame.set_string(start, row, &label, title_style);
    }
}

/// Highlight the window border while a resize handle is hovered or a
/// resize gesture is running.
pub fn render_resize_outline(frame: &mut UiFrame<'_>, rect: Rect) {
    if rect.width < 3 || rect.height < 3 {
        return;
    }
    let style = Style::default().fg(theme::accent());
    let right = rect.x + rect.width - 1;
    let bottom = rect.y + rect.height - 1;
    for x in rect.x + 1..right {
        frame.set_cell(x, rect.y, "═", style);
        frame.set_cell(x, bottom, "═", style);
    }
    for y in rect.y + 1..bottom {
        frame.set_cell(rect.x, y, "║", style);
        frame.set_cell(right, y, "║", style);
    }
    frame.set_cell(rect.x, rect.y, "╔", style);
    frame.set_cell(right, rect.y, "╗", style);
    frame.set_cell(rect.x, bottom, "╚", style);
    frame.set_cell(right, bottom, "╝", style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn rect() -> Rect {
        Rect {
            x: 4,
            y: 2,
            width: 30,
            height: 10,
        }
    }

    #[test]
    fn traffic_lights_sit_on_title_row() {
        let r = rect();
        assert_eq!(traffic_light_at(r, 6, 3), Some(TrafficLight::Close));
        assert_eq!(traffic_light_at(r, 8, 3), Some(TrafficLight::Minimize));
        assert_eq!(traffic_light_at(r, 10, 3), Some(TrafficLight::Maximize));
        assert_eq!(traffic_light_at(r, 7, 3), None);
        assert_eq!(traffic_light_at(r, 6, 4), None);
    }

    #[test]
    fn content_rect_is_inset_under_chrome() {
        let inner = content_rect(rect());
        assert_eq!(inner.x, 5);
        assert_eq!(inner.y, 5);
        assert_eq!(inner.width, 28);
        assert_eq!(inner.height, 6);
    }

    #[test]
    fn render_draws_border_and_lights() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 15,
        };
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        render_window(&mut frame, rect(), "Finder", '▣', true, false);
        assert_eq!(buf.cell((4, 2)).unwrap().symbol(), "╭");
        assert_eq!(buf.cell((33, 11)).unwrap().symbol(), "╯");
        assert_eq!(buf.cell((6, 3)).unwrap().symbol(), "●");
    }

    #[test]
    fn render_clips_offscreen_window() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 5,
        };
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        // Mostly outside the buffer; must not panic.
        render_window(
            &mut frame,
            Rect {
                x: 6,
                y: 2,
                width: 30,
                height: 12,
            },
            "Safari",
            '◎',
            false,
            false,
        );
        assert_eq!(buf.cell((6, 2)).unwrap().symbol(), "╭");
    }
}
