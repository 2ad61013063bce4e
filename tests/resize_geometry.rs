//! Resize math properties: minimum sizes hold for every direction and
//! delta, pinned edges stay pinned, and results stay inside the
//! grabbable region of the viewport.

use proptest::prelude::*;

use termfolio::constants::MIN_VISIBLE_MARGIN;
use termfolio::geometry::{
    Position, ResizeDirection, Size, ViewportBounds, constrain_position, resolve_resize,
};

fn direction_strategy() -> impl Strategy<Value = ResizeDirection> {
    (0usize..ResizeDirection::ALL.len()).prop_map(|i| ResizeDirection::ALL[i])
}

proptest! {
    #[test]
    fn resize_never_goes_below_min_size(
        direction in direction_strategy(),
        start_x in -50i32..1800,
        start_y in 2i32..1000,
        width in 100i32..900,
        height in 50i32..500,
        dx in -2000i32..2000,
        dy in -2000i32..2000,
    ) {
        let bounds = ViewportBounds::from_dimensions(1920, 1080);
        let min = Size::new(80, 40);
        let (_, size) = resolve_resize(
            direction,
            Position::new(start_x, start_y),
            Size::new(width, height),
            dx,
            dy,
            min,
            bounds,
        );
        prop_assert!(size.width >= min.width);
        prop_assert!(size.height >= min.height);
        prop_assert!(size.width <= bounds.usable_width);
        prop_assert!(size.height <= bounds.usable_height);
    }

    #[test]
    fn west_resize_at_min_pins_the_right_edge(
        start_x in 200i32..800,
        width in 200i32..600,
        dx in 0i32..5000,
    ) {
        let bounds = ViewportBounds::from_dimensions(1920, 1080);
        let min = Size::new(100, 50);
        let start = Position::new(start_x, 100);
        let (pos, size) = resolve_resize(
            ResizeDirection::West,
            start,
            Size::new(width, 200),
            dx,
            0,
            min,
            bounds,
        );
        // Dragging the west edge right: the east edge must never move.
        prop_assert_eq!(pos.x + size.width, start_x + width);
        if dx >= width - min.width {
            prop_assert_eq!(size.width, min.width);
        }
    }

    #[test]
    fn resize_result_stays_grabbable(
        direction in direction_strategy(),
        dx in -5000i32..5000,
        dy in -5000i32..5000,
    ) {
        let bounds = ViewportBounds::from_dimensions(1920, 1080);
        let (pos, size) = resolve_resize(
            direction,
            Position::new(400, 300),
            Size::new(600, 400),
            dx,
            dy,
            Size::new(100, 80),
            bounds,
        );
        prop_assert!(pos.x >= bounds.min_x - size.width + MIN_VISIBLE_MARGIN);
        prop_assert!(pos.x <= bounds.max_x - MIN_VISIBLE_MARGIN);
        prop_assert!(pos.y >= bounds.min_y);
    }

    #[test]
    fn constrained_positions_are_idempotent(
        x in -5000i32..5000,
        y in -5000i32..5000,
        width in 50i32..900,
        height in 20i32..500,
    ) {
        let bounds = ViewportBounds::from_dimensions(1920, 1080);
        let size = Size::new(width, height);
        let once = constrain_position(Position::new(x, y), size, bounds);
        let twice = constrain_position(once, size, bounds);
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn all_four_corners_behave_symmetrically() {
    let bounds = ViewportBounds::from_dimensions(1920, 1080);
    let start = Position::new(500, 400);
    let size = Size::new(400, 300);
    let min = Size::new(200, 150);

    // Shrinking by 50 from each corner moves only that corner's edges.
    let (pos, new) = resolve_resize(ResizeDirection::SouthEast, start, size, -50, -50, min, bounds);
    assert_eq!((pos, new), (start, Size::new(350, 250)));

    let (pos, new) = resolve_resize(ResizeDirection::NorthWest, start, size, 50, 50, min, bounds);
    assert_eq!(pos, Position::new(550, 450));
    assert_eq!(new, Size::new(350, 250));

    let (pos, new) = resolve_resize(ResizeDirection::NorthEast, start, size, -50, 50, min, bounds);
    assert_eq!(pos, Position::new(500, 450));
    assert_eq!(new, Size::new(350, 250));

    let (pos, new) = resolve_resize(ResizeDirection::SouthWest, start, size, 50, -50, min, bounds);
    assert_eq!(pos, Position::new(550, 400));
    assert_eq!(new, Size::new(350, 250));
}
