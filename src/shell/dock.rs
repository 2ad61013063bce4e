//! The dock along the bottom edge: one tile per app, with running and
//! minimized indicators, a hover highlight and click-to-launch.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::apps::AppKind;
use crate::store::WindowStore;
use crate::theme;
use crate::ui::UiFrame;

const TILE_WIDTH: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockAction {
    Launch(AppKind),
}

#[derive(Debug, Default)]
pub struct Dock {
    hovered: Option<AppKind>,
}

impl Dock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The dock's rows at the bottom of the terminal.
    pub fn area(terminal: Rect) -> Rect {
        let height = crate::constants::DOCK_HEIGHT.min(terminal.height);
        Rect {
            x: terminal.x,
            y: terminal.y + terminal.height - height,
            width: terminal.width,
            height,
        }
    }

    fn tiles_origin(area: Rect) -> u16 {
        let total = TILE_WIDTH * AppKind::ALL.len() as u16;
        area.x + area.width.saturating_sub(total) / 2
    }

    /// Which app tile, if any, sits under the pointer.
    pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<AppKind> {
        if row < area.y || row >= area.y + area.height {
            return None;
        }
        let origin = Self::tiles_origin(area);
        if column < origin {
            return None;
        }
        let index = ((column - origin) / TILE_WIDTH) as usize;
        AppKind::ALL.get(index).copied()
    }

    pub fn set_hover(&mut self, hovered: Option<AppKind>) {
        self.hovered = hovered;
    }

    /// A press inside the dock area launches (or restores) the app.
    pub fn handle_press(&self, area: Rect, column: u16, row: u16) -> Option<DockAction> {
        Self::hit_test(area, column, row).map(DockAction::Launch)
    }

    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect, store: &WindowStore) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default().bg(theme::dock_bg()).fg(theme::dock_fg());
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                frame.set_cell(x, y, " ", base);
            }
        }

        let origin = Self::tiles_origin(area);
        let icon_row = area.y + area.height / 2;
        let hovered_index = self
            .hovered
            .and_then(|h| AppKind::ALL.iter().position(|k| *k == h));
        for (i, kind) in AppKind::ALL.iter().enumerate() {
            let tile_x = origin + i as u16 * TILE_WIDTH;
            let hovered = hovered_index == Some(i);
            // Tiles next to the hovered one get a lesser accent, the
            // falloff of the magnification effect.
            let neighbour = hovered_index.is_some_and(|h| h.abs_diff(i) == 1);
            let style = if hovered {
                Style::default()
                    .bg(theme::dock_bg())
                    .fg(theme::dock_hover_fg())
                    .add_modifier(Modifier::BOLD)
            } else if neighbour {
                Style::default()
                    .bg(theme::dock_bg())
                    .fg(theme::dock_hover_fg())
            } else {
                base
            };
            // Hovered tiles grow a label next to the icon, the terminal
            // stand-in for magnification.
            let label = if hovered {
                format!("{} {}", kind.icon(), kind.title())
            } else {
                format!("{}", kind.icon())
            };
            let label_len = label.chars().count() as u16;
            let label_x = tile_x + TILE_WIDTH.saturating_sub(label_len) / 2;
            frame.set_string(label_x, icon_row, &label, style);

            if let Some(window) = store.get_window(&kind.id())
                && icon_row + 1 < area.y + area.height
            {
                let indicator = if window.is_minimized { "○" } else { "●" };
                frame.set_string(
                    tile_x + TILE_WIDTH / 2,
                    icon_row + 1,
                    indicator,
                    Style::default()
                        .bg(theme::dock_bg())
                        .fg(theme::dock_indicator()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dock_area() -> Rect {
        Dock::area(Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        })
    }

    #[test]
    fn area_hugs_the_bottom() {
        let area = dock_area();
        assert_eq!(area.y, 37);
        assert_eq!(area.height, 3);
    }

    #[test]
    fn hit_test_maps_columns_to_apps() {
        let area = dock_area();
        // Four tiles of ten cells centered in 120 columns: origin 40.
        assert_eq!(Dock::hit_test(area, 41, 38), Some(AppKind::Finder));
        assert_eq!(Dock::hit_test(area, 55, 38), Some(AppKind::Safari));
        assert_eq!(Dock::hit_test(area, 79, 38), Some(AppKind::Mail));
        assert_eq!(Dock::hit_test(area, 10, 38), None);
        assert_eq!(Dock::hit_test(area, 41, 20), None);
    }

    #[test]
    fn hover_accents_the_tile_and_its_neighbours() {
        use ratatui::buffer::Buffer;

        let full = Rect {
            x: 0,
            y: 0,
            width: 120,
            height: 40,
        };
        let mut buf = Buffer::empty(full);
        let mut frame = UiFrame::from_parts(full, &mut buf);
        let mut dock = Dock::new();
        dock.set_hover(Some(AppKind::Safari));
        dock.render(&mut frame, dock_area(), &WindowStore::new());

        // Safari's widened label starts at column 51 on the icon row.
        let hovered = buf.cell((51, 38)).unwrap().style();
        assert!(hovered.add_modifier.contains(Modifier::BOLD));
        // Finder (icon at 44) sits next to Safari: accented, not bold.
        let neighbour = buf.cell((44, 38)).unwrap().style();
        assert_eq!(neighbour.fg, Some(theme::dock_hover_fg()));
        assert!(!neighbour.add_modifier.contains(Modifier::BOLD));
        // Mail (icon at 74) is two tiles away and stays plain.
        let far = buf.cell((74, 38)).unwrap().style();
        assert_eq!(far.fg, Some(theme::dock_fg()));
    }

    #[test]
    fn press_launches_the_hit_tile() {
        let dock = Dock::new();
        let area = dock_area();
        assert_eq!(
            dock.handle_press(area, 62, 38),
            Some(DockAction::Launch(AppKind::Terminal))
        );
        assert_eq!(dock.handle_press(area, 0, 38), None);
    }
}
