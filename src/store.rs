//! The window store: single source of truth for every open window, its
//! geometry, stacking order and focus.
//!
//! All shell surfaces (dock, menu bar, title bars, keyboard shortcuts)
//! call the operations here; none of them own window state themselves.
//! Operations on an unknown id are silent no-ops so a stale callback from
//! a just-closed window can never take the shell down.

use std::fmt;

use crate::apps::AppKind;
use crate::constants::{DEFAULT_INITIAL_SIZE, DEFAULT_MIN_SIZE};
use crate::geometry::{Position, Size, ViewportBounds, staggered_position};

/// Stable string identifier for a window; the join key between the store,
/// the gesture controllers and the views.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One open application window.
///
/// `content` is an opaque tag the store never inspects; the shell uses it
/// to dispatch rendering to the externally owned app component.
#[derive(Debug, Clone)]
pub struct Window {
    pub id: WindowId,
    pub title: String,
    pub icon: char,
    pub content: AppKind,
    pub position: Position,
    pub size: Size,
    pub min_size: Size,
    pub z_index: u32,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub is_focused: bool,
    pub prev_position: Option<Position>,
    pub prev_size: Option<Size>,
    default_position: Position,
    default_size: Size,
}

/// Creation-time description of a window. Geometry fields default when
/// unspecified: size/min-size to the crate defaults, position to the
/// staggered slot for the current window count.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub id: WindowId,
    pub title: String,
    pub icon: char,
    pub content: AppKind,
    pub position: Option<Position>,
    pub size: Option<Size>,
    pub min_size: Option<Size>,
}

/// Partial update applied by the gesture controllers; carries no focus or
/// z-order side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowPatch {
    pub position: Option<Position>,
    pub size: Option<Size>,
}

/// Notification published to subscribers after each completed transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(WindowId),
    Removed(WindowId),
    FocusChanged(Option<WindowId>),
    GeometryChanged(WindowId),
    Minimized(WindowId),
    Restored(WindowId),
    MaximizeToggled(WindowId),
    Cleared,
}

pub type SubscriberId = u64;

type Subscriber = Box<dyn FnMut(&StoreEvent)>;

/// Owned, observable window collection. Transitions compute the next
/// state from a single consistent snapshot and publish afterwards.
#[derive(Default)]
pub struct WindowStore {
    windows: Vec<Window>,
    focused_id: Option<WindowId>,
    highest_z: u32,
    subscribers: Vec<(SubscriberId, Subscriber)>,
    next_subscriber: SubscriberId,
}

impl WindowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_id(&self) -> Option<&WindowId> {
        self.focused_id.as_ref()
    }

    pub fn highest_z(&self) -> u32 {
        self.highest_z
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get_window(&self, id: &WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| &w.id == id)
    }

    /// Non-minimized windows in ascending z-order; the draw order and the
    /// stable enumeration used by focus cycling.
    pub fn visible_windows(&self) -> Vec<&Window> {
        let mut visible: Vec<&Window> = self.windows.iter().filter(|w| !w.is_minimized).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    pub fn minimized_windows(&self) -> Vec<&Window> {
        self.windows.iter().filter(|w| w.is_minimized).collect()
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.get_window(id).is_some()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent) + 'static) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    fn publish(&mut self, event: StoreEvent) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&event);
        }
    }

    /// Open a window. An existing non-minimized id is brought to front, a
    /// minimized one is restored; otherwise a new window is created on
    /// top of the stack and focused.
    pub fn add_window(&mut self, config: WindowConfig) {
        if let Some(existing) = self.get_window(&config.id) {
            if existing.is_minimized {
                self.restore_window(&config.id);
            } else {
                self.bring_to_front(&config.id);
            }
            return;
        }

        self.highest_z += 1;
        let position = config
            .position
            .unwrap_or_else(|| staggered_position(self.windows.len()));
        let size = config.size.unwrap_or(DEFAULT_INITIAL_SIZE);
        let window = Window {
            id: config.id.clone(),
            title: config.title,
            icon: config.icon,
            content: config.content,
            position,
            size,
            min_size: config.min_size.unwrap_or(DEFAULT_MIN_SIZE),
            z_index: self.highest_z,
            is_minimized: false,
            is_maximized: false,
            is_focused: true,
            prev_position: None,
            prev_size: None,
            default_position: position,
            default_size: size,
        };
        for w in &mut self.windows {
            w.is_focused = false;
        }
        tracing::debug!(window = %window.id, z = window.z_index, "opened window");
        self.focused_id = Some(window.id.clone());
        let id = window.id.clone();
        self.windows.push(window);
        self.publish(StoreEvent::Added(id));
    }

    /// Close a window. When it held focus, the highest remaining visible
    /// window takes over.
    pub fn remove_window(&mut self, id: &WindowId) {
        let before = self.windows.len();
        self.windows.retain(|w| &w.id != id);
        if self.windows.len() == before {
            return;
        }
        tracing::debug!(window = %id, "closed window");
        self.publish(StoreEvent::Removed(id.clone()));
        if self.focused_id.as_ref() == Some(id) {
            let next = self.top_visible_id();
            self.set_focus(next);
        }
    }

    /// Raise a window to the top of the stack and focus it. No-op when
    /// the window is unknown or minimized.
    pub fn bring_to_front(&mut self, id: &WindowId) {
        let Some(target) = self.get_window(id) else {
            return;
        };
        if target.is_minimized {
            return;
        }
        self.highest_z += 1;
        let z = self.highest_z;
        if let Some(w) = self.window_mut(id) {
            w.z_index = z;
        }
        self.set_focus(Some(id.clone()));
    }

    pub fn minimize_window(&mut self, id: &WindowId) {
        let Some(w) = self.window_mut(id) else {
            return;
        };
        w.is_minimized = true;
        w.is_focused = false;
        self.publish(StoreEvent::Minimized(id.clone()));
        if self.focused_id.as_ref() == Some(id) {
            let next = self.top_visible_id();
            self.set_focus(next);
        }
    }

    /// Bring a minimized window back: visible again, on top, focused.
    pub fn restore_window(&mut self, id: &WindowId) {
        if self.get_window(id).is_none() {
            return;
        }
        self.highest_z += 1;
        let z = self.highest_z;
        if let Some(w) = self.window_mut(id) {
            w.is_minimized = false;
            w.z_index = z;
        }
        self.publish(StoreEvent::Restored(id.clone()));
        self.set_focus(Some(id.clone()));
    }

    /// Toggle between maximized and normal state. Entering snapshots the
    /// current geometry; leaving consumes the snapshot (or falls back to
    /// the creation defaults if none survives).
    pub fn toggle_maximize(&mut self, id: &WindowId, bounds: ViewportBounds) {
        let Some(w) = self.window_mut(id) else {
            return;
        };
        if w.is_maximized {
            w.position = w.prev_position.take().unwrap_or(w.default_position);
            w.size = w.prev_size.take().unwrap_or(w.default_size);
            w.is_maximized = false;
        } else {
            w.prev_position = Some(w.position);
            w.prev_size = Some(w.size);
            let (position, size) = bounds.maximized_geometry();
            w.position = position;
            w.size = size;
            w.is_maximized = true;
        }
        self.publish(StoreEvent::MaximizeToggled(id.clone()));
    }

    /// Merge a partial geometry update; no focus or z-order side effects.
    pub fn update_window(&mut self, id: &WindowId, patch: WindowPatch) {
        let Some(w) = self.window_mut(id) else {
            return;
        };
        if let Some(position) = patch.position {
            w.position = position;
        }
        if let Some(size) = patch.size {
            w.size = Size {
                width: size.width.max(w.min_size.width),
                height: size.height.max(w.min_size.height),
            };
        }
        self.publish(StoreEvent::GeometryChanged(id.clone()));
    }

    pub fn set_window_position(&mut self, id: &WindowId, position: Position) {
        self.update_window(
            id,
            WindowPatch {
                position: Some(position),
                size: None,
            },
        );
    }

    pub fn set_window_size(&mut self, id: &WindowId, size: Size) {
        self.update_window(
            id,
            WindowPatch {
                position: None,
                size: Some(size),
            },
        );
    }

    /// Drop every window and reset the focus and z counter.
    pub fn close_all_windows(&mut self) {
        self.windows.clear();
        self.focused_id = None;
        self.highest_z = 0;
        self.publish(StoreEvent::Cleared);
    }

    fn window_mut(&mut self, id: &WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| &w.id == id)
    }

    fn top_visible_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| w.id.clone())
    }

    /// Focus exactly one window (or none); every other window is
    /// unfocused in the same transition so the invariant holds by
    /// construction.
    fn set_focus(&mut self, id: Option<WindowId>) {
        for w in &mut self.windows {
            w.is_focused = Some(&w.id) == id.as_ref();
        }
        self.focused_id = id;
        self.publish(StoreEvent::FocusChanged(self.focused_id.clone()));
    }
}
