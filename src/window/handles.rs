//! Resize handle placement and hit testing.
//!
//! Eight handles per window: one-cell squares at the four corners and
//! edge strips covering the borders between them.

use ratatui::prelude::Rect;

use crate::geometry::ResizeDirection;

#[derive(Debug, Clone, Copy)]
pub struct ResizeHandle {
    pub rect: Rect,
    pub direction: ResizeDirection,
}

pub fn resize_handles_for(rect: Rect) -> Vec<ResizeHandle> {
    let mut handles = Vec::new();
    if rect.width == 0 || rect.height == 0 {
        return handles;
    }
    let right = rect.x.saturating_add(rect.width.saturating_sub(1));
    let bottom = rect.y.saturating_add(rect.height.saturating_sub(1));
    let cell = |x, y| Rect {
        x,
        y,
        width: 1,
        height: 1,
    };
    handles.push(ResizeHandle {
        rect: cell(rect.x, rect.y),
        direction: ResizeDirection::NorthWest,
    });
    handles.push(ResizeHandle {
        rect: cell(right, rect.y),
        direction: ResizeDirection::NorthEast,
    });
    handles.push(ResizeHandle {
        rect: cell(rect.x, bottom),
        direction: ResizeDirection::SouthWest,
    });
    handles.push(ResizeHandle {
        rect: cell(right, bottom),
        direction: ResizeDirection::SouthEast,
    });
    if rect.width > 2 {
        let strip = Rect {
            x: rect.x.saturating_add(1),
            y: rect.y,
            width: rect.width.saturating_sub(2),
            height: 1,
        };
        handles.push(ResizeHandle {
            rect: strip,
            direction: ResizeDirection::North,
        });
        handles.push(ResizeHandle {
            rect: Rect { y: bottom, ..strip },
            direction: ResizeDirection::South,
        });
    }
    if rect.height > 2 {
        let strip = Rect {
            x: rect.x,
            y: rect.y.saturating_add(1),
            width: 1,
            height: rect.height.saturating_sub(2),
        };
        handles.push(ResizeHandle {
            rect: strip,
            direction: ResizeDirection::West,
        });
        handles.push(ResizeHandle {
            rect: Rect { x: right, ..strip },
            direction: ResizeDirection::East,
        });
    }
    handles
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Which resize handle, if any, sits under the pointer.
pub fn hit_test(rect: Rect, column: u16, row: u16) -> Option<ResizeDirection> {
    resize_handles_for(rect)
        .iter()
        .find(|handle| rect_contains(handle.rect, column, row))
        .map(|handle| handle.direction)
}
