//! `UiFrame`: a thin wrapper around the frame buffer that clamps drawing
//! to the visible area.
//!
//! Window geometry is signed and windows may hang partially off-screen,
//! so chrome and content rectangles regularly drift outside the terminal
//! buffer. Writing out of bounds into the underlying `Buffer` can panic;
//! routing every draw through this wrapper keeps the window code focused
//! on layout instead of buffer-safety checks.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Set one cell if it falls inside the frame.
    pub fn set_cell(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if x < self.area.x
            || x >= self.area.x.saturating_add(self.area.width)
            || y < self.area.y
            || y >= self.area.y.saturating_add(self.area.height)
        {
            return;
        }
        if let Some(cell) = self.buffer.cell_mut((x, y)) {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }

    /// Write a string clipped to the frame, truncating at the right edge.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) {
        safe_set_string(self.buffer, self.area, x, y, text, style);
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_string_clips_at_right_edge() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 6,
            height: 1,
        };
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        frame.set_string(3, 0, "hello", Style::default());
        assert_eq!(buf.cell((3, 0)).unwrap().symbol(), "h");
        assert_eq!(buf.cell((5, 0)).unwrap().symbol(), "l");
    }

    #[test]
    fn set_string_outside_bounds_is_ignored() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 4,
            height: 2,
        };
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        frame.set_string(10, 10, "x", Style::default());
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(buf.cell((x, y)).unwrap().symbol(), " ");
            }
        }
    }

    #[test]
    fn set_cell_respects_bounds() {
        let area = Rect {
            x: 1,
            y: 1,
            width: 3,
            height: 3,
        };
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        frame.set_cell(0, 0, "#", Style::default());
        frame.set_cell(2, 2, "#", Style::default());
        assert_eq!(buf.cell((2, 2)).unwrap().symbol(), "#");
    }

    #[test]
    fn render_widget_clips_to_frame_area() {
        struct Fill;
        impl Widget for Fill {
            fn render(self, area: Rect, buf: &mut Buffer) {
                for y in area.y..area.y.saturating_add(area.height) {
                    for x in area.x..area.x.saturating_add(area.width) {
                        if let Some(cell) = buf.cell_mut((x, y)) {
                            cell.set_symbol("A");
                        }
                    }
                }
            }
        }
        let area = Rect {
            x: 0,
            y: 0,
            width: 5,
            height: 3,
        };
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        frame.render_widget(
            Fill,
            Rect {
                x: 3,
                y: 1,
                width: 5,
                height: 2,
            },
        );
        assert_eq!(buf.cell((3, 1)).unwrap().symbol(), "A");
        assert_eq!(buf.cell((2, 1)).unwrap().symbol(), " ");
    }

    #[test]
    fn truncate_to_width_short_and_long() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcdef", 3), "abc");
    }
}
