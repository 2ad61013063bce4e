//! Shared crate-wide constants.

use crate::geometry::{Position, Size};

/// Rows reserved at the top of the terminal for the menu bar.
pub const MENU_BAR_HEIGHT: u16 = 1;

/// Rows reserved at the bottom of the terminal for the dock.
pub const DOCK_HEIGHT: u16 = 3;

/// Cells of breathing room kept between windows and the viewport edges.
pub const WINDOW_PADDING: i32 = 1;

/// Minimum number of cells of a window's chrome that must stay inside the
/// viewport so the user can always grab it again.
pub const MIN_VISIBLE_MARGIN: i32 = 10;

/// Offset applied per existing window when staggering new windows so they
/// never open in a perfect overlap. Wraps after ten windows.
pub const STAGGER_STEP: i32 = 2;
pub const STAGGER_WRAP: i32 = 10;

pub const DEFAULT_MIN_SIZE: Size = Size {
    width: 24,
    height: 8,
};
pub const DEFAULT_INITIAL_SIZE: Size = Size {
    width: 72,
    height: 20,
};
pub const DEFAULT_INITIAL_POSITION: Position = Position { x: 6, y: 3 };

/// Smallest terminal the desktop is designed for. Below this the shell
/// shows the small-viewport notice unless the user opted out.
pub const MIN_DESKTOP_COLS: u16 = 80;
pub const MIN_DESKTOP_ROWS: u16 = 24;

/// Two presses on a title bar within this window count as a double click.
pub const DOUBLE_CLICK_MS: u64 = 400;
