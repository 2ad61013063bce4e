//! Resize gesture: same machine shape as the drag controller, but since a
//! resize can move the origin and the size in the same motion the result
//! is written into the store every frame rather than deferred to a single
//! end-of-gesture commit (deferring would make the window snap).

use crate::geometry::{Position, ResizeDirection, Size, ViewportBounds, resolve_resize};
use crate::store::{WindowId, WindowPatch, WindowStore};

/// Final geometry handed to the completion callback on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeCompletion {
    pub position: Position,
    pub size: Size,
}

#[derive(Debug, Clone)]
struct ResizeGesture {
    id: WindowId,
    direction: ResizeDirection,
    start_column: u16,
    start_row: u16,
    start_position: Position,
    start_size: Size,
    min_size: Size,
}

#[derive(Default)]
pub struct ResizeController {
    gesture: Option<ResizeGesture>,
    on_complete: Option<Box<dyn FnMut(&WindowId, ResizeCompletion)>>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked with the final geometry when a resize
    /// gesture ends.
    pub fn on_complete(&mut self, callback: impl FnMut(&WindowId, ResizeCompletion) + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn active_id(&self) -> Option<&WindowId> {
        self.gesture.as_ref().map(|g| &g.id)
    }

    pub fn active_direction(&self) -> Option<ResizeDirection> {
        self.gesture.as_ref().map(|g| g.direction)
    }

    /// Start resizing along `direction`. Refused for unknown or maximized
    /// windows. Brings the window to front and snapshots its geometry.
    pub fn begin(
        &mut self,
        store: &mut WindowStore,
        id: &WindowId,
        direction: ResizeDirection,
        column: u16,
        row: u16,
    ) -> bool {
        let Some(window) = store.get_window(id) else {
            return false;
        };
        if window.is_maximized {
            return false;
        }
        let gesture = ResizeGesture {
            id: id.clone(),
            direction,
            start_column: column,
            start_row: row,
            start_position: window.position,
            start_size: window.size,
            min_size: window.min_size,
        };
        store.bring_to_front(id);
        tracing::debug!(window = %id, direction = ?direction, "resize started");
        self.gesture = Some(gesture);
        true
    }

    /// Resolve the pointer delta through the geometry module and write
    /// both position and size into the store.
    pub fn update(
        &mut self,
        store: &mut WindowStore,
        column: u16,
        row: u16,
        bounds: ViewportBounds,
    ) {
        let Some(gesture) = self.gesture.as_ref() else {
            return;
        };
        if !store.contains(&gesture.id) {
            return;
        }
        let dx = column as i32 - gesture.start_column as i32;
        let dy = row as i32 - gesture.start_row as i32;
        let (position, size) = resolve_resize(
            gesture.direction,
            gesture.start_position,
            gesture.start_size,
            dx,
            dy,
            gesture.min_size,
            bounds,
        );
        store.update_window(
            &gesture.id,
            WindowPatch {
                position: Some(position),
                size: Some(size),
            },
        );
    }

    /// End the gesture; the store already holds the final geometry, so
    /// this only clears state and fires the completion callback.
    pub fn finish(&mut self, store: &WindowStore) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        let Some(window) = store.get_window(&gesture.id) else {
            return;
        };
        if let Some(callback) = self.on_complete.as_mut() {
            callback(
                &gesture.id,
                ResizeCompletion {
                    position: window.position,
                    size: window.size,
                },
            );
        }
    }
}
