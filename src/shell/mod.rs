//! The desktop shell surfaces around the windows: wallpaper, menu bar,
//! dock and the small-viewport notice.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme;
use crate::ui::UiFrame;

pub mod dock;
pub mod menu_bar;
pub mod notice;

pub use dock::{Dock, DockAction};
pub use menu_bar::MenuBar;

/// Fill the whole terminal with the wallpaper before anything else
/// paints over it.
pub fn render_wallpaper(frame: &mut UiFrame<'_>, area: Rect) {
    let style = Style::default()
        .bg(theme::wallpaper_bg())
        .fg(theme::wallpaper_fg());
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            // Sparse dot pattern so the empty desktop is not a flat slab.
            let symbol = if (x / 4 + y / 2) % 7 == 0 { "·" } else { " " };
            frame.set_cell(x, y, symbol, style);
        }
    }
}
