//! Title-bar drag gesture: Idle -> Dragging -> Idle.
//!
//! While a drag is live the clamped position is kept here, not in the
//! store; the renderer prefers it so the window tracks the pointer
//! without a store write per motion event. The final position is
//! committed exactly once on release. A window closed mid-gesture simply
//! orphans the gesture; every path tolerates the missing id.

use crate::geometry::{Position, ViewportBounds, constrain_position};
use crate::store::{WindowId, WindowStore};

#[derive(Debug, Clone)]
struct DragGesture {
    id: WindowId,
    start_column: u16,
    start_row: u16,
    start_position: Position,
    live_position: Position,
}

#[derive(Debug, Default)]
pub struct DragController {
    gesture: Option<DragGesture>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn active_id(&self) -> Option<&WindowId> {
        self.gesture.as_ref().map(|g| &g.id)
    }

    /// The in-gesture position for `id`, if it is being dragged. Views
    /// read this instead of the store while the gesture runs.
    pub fn live_position(&self, id: &WindowId) -> Option<Position> {
        self.gesture
            .as_ref()
            .filter(|g| &g.id == id)
            .map(|g| g.live_position)
    }

    /// Start dragging from a primary press on the title bar. Refused for
    /// unknown or maximized windows. Brings the window to front.
    pub fn begin(
        &mut self,
        store: &mut WindowStore,
        id: &WindowId,
        column: u16,
        row: u16,
    ) -> bool {
        let Some(window) = store.get_window(id) else {
            return false;
        };
        if window.is_maximized {
            return false;
        }
        let start_position = window.position;
        store.bring_to_front(id);
        tracing::debug!(window = %id, "drag started");
        self.gesture = Some(DragGesture {
            id: id.clone(),
            start_column: column,
            start_row: row,
            start_position,
            live_position: start_position,
        });
        true
    }

    /// Apply a pointer motion: candidate = start + delta, clamped so the
    /// chrome stays grabbable. No-op when idle or the window vanished.
    pub fn update(&mut self, store: &WindowStore, column: u16, row: u16, bounds: ViewportBounds) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        let Some(window) = store.get_window(&gesture.id) else {
            return;
        };
        let candidate = Position {
            x: gesture.start_position.x + (column as i32 - gesture.start_column as i32),
            y: gesture.start_position.y + (row as i32 - gesture.start_row as i32),
        };
        gesture.live_position = constrain_position(candidate, window.size, bounds);
    }

    /// End the gesture and commit the final position to the store once.
    pub fn finish(&mut self, store: &mut WindowStore) -> Option<Position> {
        let gesture = self.gesture.take()?;
        store.set_window_position(&gesture.id, gesture.live_position);
        tracing::debug!(window = %gesture.id, x = gesture.live_position.x, y = gesture.live_position.y, "drag committed");
        Some(gesture.live_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::AppKind;
    use crate::geometry::Size;
    use crate::store::WindowConfig;

    fn store_with(id: &str, position: Position) -> WindowStore {
        let mut store = WindowStore::new();
        store.add_window(WindowConfig {
            id: WindowId::from(id),
            title: id.to_string(),
            icon: '▣',
            content: AppKind::Finder,
            position: Some(position),
            size: Some(Size::new(40, 12)),
            min_size: None,
        });
        store
    }

    fn bounds() -> ViewportBounds {
        ViewportBounds::from_dimensions(200, 60)
    }

    #[test]
    fn drag_moves_live_position_and_commits_on_finish() {
        let id = WindowId::from("finder");
        let mut store = store_with("finder", Position::new(10, 5));
        let mut drag = DragController::new();
        assert!(drag.begin(&mut store, &id, 20, 6));
        drag.update(&store, 28, 9, bounds());
        assert_eq!(drag.live_position(&id), Some(Position::new(18, 8)));
        // Store still holds the gesture-start position until release.
        assert_eq!(
            store.get_window(&id).unwrap().position,
            Position::new(10, 5)
        );
        let committed = drag.finish(&mut store);
        assert_eq!(committed, Some(Position::new(18, 8)));
        assert_eq!(
            store.get_window(&id).unwrap().position,
            Position::new(18, 8)
        );
        assert!(!drag.is_active());
    }

    #[test]
    fn drag_begin_brings_to_front() {
        let id = WindowId::from("finder");
        let mut store = store_with("finder", Position::new(10, 5));
        store.add_window(WindowConfig {
            id: WindowId::from("mail"),
            title: "mail".into(),
            icon: '✉',
            content: AppKind::Mail,
            position: None,
            size: None,
            min_size: None,
        });
        let mut drag = DragController::new();
        drag.begin(&mut store, &id, 12, 6);
        assert_eq!(store.focused_id(), Some(&id));
        assert_eq!(store.get_window(&id).unwrap().z_index, store.highest_z());
    }

    #[test]
    fn drag_refused_for_maximized_window() {
        let id = WindowId::from("finder");
        let mut store = store_with("finder", Position::new(10, 5));
        store.toggle_maximize(&id, bounds());
        let mut drag = DragController::new();
        assert!(!drag.begin(&mut store, &id, 12, 6));
    }

    #[test]
    fn window_removed_mid_drag_is_tolerated() {
        let id = WindowId::from("finder");
        let mut store = store_with("finder", Position::new(10, 5));
        let mut drag = DragController::new();
        drag.begin(&mut store, &id, 12, 6);
        store.remove_window(&id);
        drag.update(&store, 30, 10, bounds());
        // Commit against the missing window is a silent no-op.
        let _ = drag.finish(&mut store);
        assert!(store.is_empty());
        assert!(!drag.is_active());
    }
}
