//! Pure window geometry: viewport bounds, resize resolution and the
//! position/size clamps used by the gesture controllers.
//!
//! Everything in this module is deterministic and side-effect-free so the
//! resize math can be tested without a terminal. Coordinates are signed
//! logical cells; windows may hang partially off-screen as long as enough
//! chrome stays grabbable.

use ratatui::prelude::Rect;

use crate::constants::{
    DEFAULT_INITIAL_POSITION, DOCK_HEIGHT, MENU_BAR_HEIGHT, MIN_VISIBLE_MARGIN, STAGGER_STEP,
    STAGGER_WRAP, WINDOW_PADDING,
};

/// Rows of chrome (top border + title bar) that must stay reachable when
/// clamping a drag against the bottom of the viewport.
const TITLE_BAR_ROWS: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// One of the eight compass resize directions. Corner directions combine
/// two edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::North,
        ResizeDirection::NorthEast,
        ResizeDirection::East,
        ResizeDirection::SouthEast,
        ResizeDirection::South,
        ResizeDirection::SouthWest,
        ResizeDirection::West,
        ResizeDirection::NorthWest,
    ];

    pub fn affects_north(self) -> bool {
        matches!(
            self,
            ResizeDirection::North | ResizeDirection::NorthEast | ResizeDirection::NorthWest
        )
    }

    pub fn affects_south(self) -> bool {
        matches!(
            self,
            ResizeDirection::South | ResizeDirection::SouthEast | ResizeDirection::SouthWest
        )
    }

    pub fn affects_east(self) -> bool {
        matches!(
            self,
            ResizeDirection::East | ResizeDirection::NorthEast | ResizeDirection::SouthEast
        )
    }

    pub fn affects_west(self) -> bool {
        matches!(
            self,
            ResizeDirection::West | ResizeDirection::NorthWest | ResizeDirection::SouthWest
        )
    }

    /// Glyph shown in the menu bar while the pointer hovers a handle.
    pub fn cursor_hint(self) -> &'static str {
        match self {
            ResizeDirection::North | ResizeDirection::South => "↕",
            ResizeDirection::East | ResizeDirection::West => "↔",
            ResizeDirection::NorthEast | ResizeDirection::SouthWest => "⤢",
            ResizeDirection::NorthWest | ResizeDirection::SouthEast => "⤡",
        }
    }
}

/// The usable viewport: the terminal area minus the menu bar and dock
/// reservations plus a cell of padding on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
    pub width: i32,
    pub height: i32,
    pub usable_width: i32,
    pub usable_height: i32,
}

impl ViewportBounds {
    pub fn from_area(area: Rect) -> Self {
        Self::from_dimensions(area.width as i32, area.height as i32)
    }

    pub fn from_dimensions(width: i32, height: i32) -> Self {
        let menu = MENU_BAR_HEIGHT as i32;
        let dock = DOCK_HEIGHT as i32;
        Self {
            min_x: WINDOW_PADDING,
            max_x: width - WINDOW_PADDING,
            min_y: menu + WINDOW_PADDING,
            max_y: height - dock - WINDOW_PADDING,
            width,
            height,
            usable_width: width - WINDOW_PADDING * 2,
            usable_height: height - menu - dock - WINDOW_PADDING * 2,
        }
    }

    /// Full-screen geometry used for maximized windows: below the menu
    /// bar, above the dock, full width.
    pub fn maximized_geometry(&self) -> (Position, Size) {
        let menu = MENU_BAR_HEIGHT as i32;
        let dock = DOCK_HEIGHT as i32;
        (
            Position::new(0, menu),
            Size::new(self.width, self.height - menu - dock),
        )
    }
}

/// Resolve a resize gesture into the resulting position and size.
///
/// Edges growing away from the origin (`e`/`s`) only change the size;
/// edges at the origin (`n`/`w`) shift the position with the delta and,
/// once the minimum size is hit, pin the opposite edge in place. The
/// result is then clamped so the window cannot outgrow the usable
/// viewport or escape beyond the grabbable margin.
pub fn resolve_resize(
    direction: ResizeDirection,
    start_position: Position,
    start_size: Size,
    dx: i32,
    dy: i32,
    min_size: Size,
    bounds: ViewportBounds,
) -> (Position, Size) {
    let mut x = start_position.x;
    let mut y = start_position.y;
    let mut width = start_size.width;
    let mut height = start_size.height;

    if direction.affects_east() {
        width = (start_size.width + dx).max(min_size.width);
    }
    if direction.affects_west() {
        let candidate = start_size.width - dx;
        if candidate >= min_size.width {
            width = candidate;
            x = start_position.x + dx;
        } else {
            width = min_size.width;
            x = start_position.x + start_size.width - min_size.width;
        }
    }

    if direction.affects_south() {
        height = (start_size.height + dy).max(min_size.height);
    }
    if direction.affects_north() {
        let candidate = start_size.height - dy;
        if candidate >= min_size.height {
            height = candidate;
            y = start_position.y + dy;
        } else {
            height = min_size.height;
            y = start_position.y + start_size.height - min_size.height;
        }
    }

    width = width.min(bounds.usable_width);
    height = height.min(bounds.usable_height);
    x = x.clamp(
        bounds.min_x - width + MIN_VISIBLE_MARGIN,
        bounds.max_x - MIN_VISIBLE_MARGIN,
    );
    y = y.max(bounds.min_y);

    (Position::new(x, y), Size::new(width, height))
}

/// Clamp a dragged position so at least part of the window stays
/// grabbable. The size is fixed during a drag.
pub fn constrain_position(position: Position, size: Size, bounds: ViewportBounds) -> Position {
    Position {
        x: position.x.clamp(
            bounds.min_x - size.width + MIN_VISIBLE_MARGIN,
            bounds.max_x - MIN_VISIBLE_MARGIN,
        ),
        y: position
            .y
            .clamp(bounds.min_y, (bounds.max_y - TITLE_BAR_ROWS).max(bounds.min_y)),
    }
}

/// Clamp a size between the window's floor and either an explicit ceiling
/// or the usable viewport.
pub fn constrain_size(
    size: Size,
    min_size: Size,
    max_size: Option<Size>,
    bounds: ViewportBounds,
) -> Size {
    let max = max_size.unwrap_or(Size::new(bounds.usable_width, bounds.usable_height));
    Size {
        width: size.width.min(max.width).max(min_size.width),
        height: size.height.min(max.height).max(min_size.height),
    }
}

/// Default position for the nth new window, offset diagonally so freshly
/// opened windows never stack in a perfect overlap.
pub fn staggered_position(existing_count: usize) -> Position {
    let offset = (existing_count as i32 % STAGGER_WRAP) * STAGGER_STEP;
    Position {
        x: DEFAULT_INITIAL_POSITION.x + offset,
        y: DEFAULT_INITIAL_POSITION.y + offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big_bounds() -> ViewportBounds {
        ViewportBounds::from_dimensions(1920, 1080)
    }

    #[test]
    fn resize_east_grows_width_only() {
        let (pos, size) = resolve_resize(
            ResizeDirection::East,
            Position::new(100, 100),
            Size::new(800, 600),
            50,
            999,
            Size::new(400, 300),
            big_bounds(),
        );
        assert_eq!(pos, Position::new(100, 100));
        assert_eq!(size, Size::new(850, 600));
    }

    #[test]
    fn resize_west_shifts_origin() {
        let (pos, size) = resolve_resize(
            ResizeDirection::West,
            Position::new(100, 100),
            Size::new(800, 600),
            40,
            0,
            Size::new(400, 300),
            big_bounds(),
        );
        assert_eq!(pos, Position::new(140, 100));
        assert_eq!(size, Size::new(760, 600));
    }

    #[test]
    fn resize_nw_past_min_pins_opposite_corner() {
        let start_pos = Position::new(100, 100);
        let start_size = Size::new(800, 600);
        let (pos, size) = resolve_resize(
            ResizeDirection::NorthWest,
            start_pos,
            start_size,
            1000,
            1000,
            Size::new(400, 300),
            big_bounds(),
        );
        assert_eq!(size, Size::new(400, 300));
        // The bottom-right corner must not have moved.
        assert_eq!(pos.x + size.width, start_pos.x + start_size.width);
        assert_eq!(pos.y + size.height, start_pos.y + start_size.height);
    }

    #[test]
    fn resize_north_drag_down_shrinks_and_shifts() {
        let (pos, size) = resolve_resize(
            ResizeDirection::North,
            Position::new(50, 50),
            Size::new(500, 400),
            0,
            60,
            Size::new(100, 100),
            big_bounds(),
        );
        assert_eq!(pos.y, 110);
        assert_eq!(size.height, 340);
        assert_eq!(size.width, 500);
    }

    #[test]
    fn resize_clamps_to_usable_viewport() {
        let bounds = big_bounds();
        let (_, size) = resolve_resize(
            ResizeDirection::SouthEast,
            Position::new(10, 10),
            Size::new(800, 600),
            100_000,
            100_000,
            Size::new(400, 300),
            bounds,
        );
        assert_eq!(size.width, bounds.usable_width);
        assert_eq!(size.height, bounds.usable_height);
    }

    #[test]
    fn constrain_position_keeps_margin_grabbable() {
        let bounds = big_bounds();
        let size = Size::new(800, 600);
        let far_left = constrain_position(Position::new(-5000, 500), size, bounds);
        assert_eq!(far_left.x, bounds.min_x - size.width + MIN_VISIBLE_MARGIN);
        let far_right = constrain_position(Position::new(5000, 500), size, bounds);
        assert_eq!(far_right.x, bounds.max_x - MIN_VISIBLE_MARGIN);
        let above = constrain_position(Position::new(100, -50), size, bounds);
        assert_eq!(above.y, bounds.min_y);
    }

    #[test]
    fn constrain_size_respects_floor_and_viewport() {
        let bounds = big_bounds();
        let min = Size::new(400, 300);
        let tiny = constrain_size(Size::new(10, 10), min, None, bounds);
        assert_eq!(tiny, min);
        let huge = constrain_size(Size::new(10_000, 10_000), min, None, bounds);
        assert_eq!(huge, Size::new(bounds.usable_width, bounds.usable_height));
    }

    #[test]
    fn staggering_wraps_after_ten() {
        let first = staggered_position(0);
        assert_eq!(first, DEFAULT_INITIAL_POSITION);
        let third = staggered_position(3);
        assert_eq!(third.x, DEFAULT_INITIAL_POSITION.x + 3 * STAGGER_STEP);
        assert_eq!(staggered_position(10), first);
    }

    #[test]
    fn cursor_hints_cover_all_directions() {
        for dir in ResizeDirection::ALL {
            assert!(!dir.cursor_hint().is_empty());
        }
    }
}
