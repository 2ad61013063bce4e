//! `WindowManager`: routes pointer input to the store and gesture
//! controllers and produces the per-frame draw plan.
//!
//! Pointer motion is coalesced: events only record the latest pointer
//! cell, and `begin_frame` applies it to the active gesture once per
//! rendered frame, so a burst of motion events costs one geometry update.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::Rect;

use crate::apps::AppKind;
use crate::constants::DOUBLE_CLICK_MS;
use crate::geometry::{Position, ResizeDirection, Size, ViewportBounds};
use crate::input::{DragController, ResizeController};
use crate::store::{WindowId, WindowStore};
use crate::window::chrome::{self, TrafficLight};
use crate::window::handles;

/// Everything the renderer needs to draw one window, bottom-most first.
#[derive(Debug, Clone)]
pub struct WindowDrawTask {
    pub id: WindowId,
    pub content: AppKind,
    /// On-screen rect of the whole window, clipped to the viewport.
    pub surface: Rect,
    /// On-screen rect of the content region inside the chrome.
    pub inner: Rect,
    pub title: String,
    pub icon: char,
    pub focused: bool,
    pub maximized: bool,
    /// Draw the resize outline over the border.
    pub outline: bool,
}

/// What a mouse event amounted to after routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MouseOutcome {
    /// Not over any window; the shell may route it to the dock or menu.
    Ignored,
    /// Consumed by chrome or a gesture.
    Handled,
    /// A press landed in a window's content region; forward to the app.
    ContentClick {
        id: WindowId,
        column: u16,
        row: u16,
    },
}

#[derive(Default)]
pub struct WindowManager {
    store: WindowStore,
    drag: DragController,
    resize: ResizeController,
    hover_handle: Option<(WindowId, ResizeDirection)>,
    last_title_click: Option<(WindowId, Instant)>,
    pending_pointer: Option<(u16, u16)>,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &WindowStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut WindowStore {
        &mut self.store
    }

    pub fn resize_mut(&mut self) -> &mut ResizeController {
        &mut self.resize
    }

    pub fn gesture_active(&self) -> bool {
        self.drag.is_active() || self.resize.is_active()
    }

    /// Cursor hint for the menu bar: the glyph of the resize direction
    /// being hovered or dragged, a move glyph during a drag.
    pub fn cursor_hint(&self) -> Option<&'static str> {
        if self.drag.is_active() {
            return Some("✥");
        }
        if let Some(direction) = self.resize.active_direction() {
            return Some(direction.cursor_hint());
        }
        self.hover_handle
            .as_ref()
            .map(|(_, direction)| direction.cursor_hint())
    }

    /// Apply the newest coalesced pointer position to the active gesture
    /// and re-fit maximized windows to the current terminal size. Called
    /// once per frame before drawing.
    pub fn begin_frame(&mut self, area: Rect) {
        let bounds = ViewportBounds::from_area(area);
        if let Some((column, row)) = self.pending_pointer.take() {
            if self.drag.is_active() {
                self.drag.update(&self.store, column, row, bounds);
            } else if self.resize.is_active() {
                self.resize.update(&mut self.store, column, row, bounds);
            }
        }
        self.refit_maximized(bounds);
    }

    fn refit_maximized(&mut self, bounds: ViewportBounds) {
        let (position, size) = bounds.maximized_geometry();
        let stale: Vec<WindowId> = self
            .store
            .visible_windows()
            .iter()
            .filter(|w| w.is_maximized && (w.position != position || w.size != size))
            .map(|w| w.id.clone())
            .collect();
        for id in stale {
            self.store.set_window_position(&id, position);
            self.store.set_window_size(&id, size);
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) -> MouseOutcome {
        let bounds = ViewportBounds::from_area(area);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_press(event.column, event.row, area, bounds)
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.gesture_active() {
                    self.pending_pointer = Some((event.column, event.row));
                    MouseOutcome::Handled
                } else {
                    MouseOutcome::Ignored
                }
            }
            MouseEventKind::Moved => {
                self.update_hover(event.column, event.row, area);
                MouseOutcome::Ignored
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // The release carries the final pointer cell; apply it
                // before committing so motion coalesced since the last
                // frame is not dropped.
                if self.drag.is_active() {
                    self.pending_pointer = None;
                    self.drag.update(&self.store, event.column, event.row, bounds);
                    self.drag.finish(&mut self.store);
                    MouseOutcome::Handled
                } else if self.resize.is_active() {
                    self.pending_pointer = None;
                    self.resize.update(&mut self.store, event.column, event.row, bounds);
                    self.resize.finish(&self.store);
                    MouseOutcome::Handled
                } else {
                    MouseOutcome::Ignored
                }
            }
            _ => MouseOutcome::Ignored,
        }
    }

    fn handle_press(
        &mut self,
        column: u16,
        row: u16,
        area: Rect,
        bounds: ViewportBounds,
    ) -> MouseOutcome {
        if self.gesture_active() {
            return MouseOutcome::Handled;
        }
        let Some((id, rect, maximized)) = self.window_at(column, row, area) else {
            self.last_title_click = None;
            return MouseOutcome::Ignored;
        };

        if let Some(light) = chrome::traffic_light_at(rect, column, row) {
            match light {
                TrafficLight::Close => self.store.remove_window(&id),
                TrafficLight::Minimize => self.store.minimize_window(&id),
                TrafficLight::Maximize => self.store.toggle_maximize(&id, bounds),
            }
            self.last_title_click = None;
            return MouseOutcome::Handled;
        }

        if !maximized && let Some(direction) = handles::hit_test(rect, column, row) {
            self.resize
                .begin(&mut self.store, &id, direction, column, row);
            return MouseOutcome::Handled;
        }

        if handles::rect_contains(chrome::title_bar_rect(rect), column, row) {
            if self.is_double_click(&id) {
                self.last_title_click = None;
                self.store.toggle_maximize(&id, bounds);
            } else {
                self.last_title_click = Some((id.clone(), Instant::now()));
                self.drag.begin(&mut self.store, &id, column, row);
            }
            return MouseOutcome::Handled;
        }

        self.last_title_click = None;
        self.store.bring_to_front(&id);
        if handles::rect_contains(chrome::content_rect(rect), column, row) {
            MouseOutcome::ContentClick { id, column, row }
        } else {
            MouseOutcome::Handled
        }
    }

    fn is_double_click(&self, id: &WindowId) -> bool {
        self.last_title_click
            .as_ref()
            .is_some_and(|(last_id, at)| {
                last_id == id && at.elapsed().as_millis() as u64 <= DOUBLE_CLICK_MS
            })
    }

    fn update_hover(&mut self, column: u16, row: u16, area: Rect) {
        if self.gesture_active() {
            return;
        }
        self.hover_handle = match self.window_at(column, row, area) {
            Some((id, rect, false)) => {
                handles::hit_test(rect, column, row).map(|direction| (id, direction))
            }
            _ => None,
        };
    }

    /// Topmost visible window under the pointer, with its on-screen rect.
    fn window_at(&self, column: u16, row: u16, area: Rect) -> Option<(WindowId, Rect, bool)> {
        let bounds = ViewportBounds::from_area(area);
        for window in self.store.visible_windows().into_iter().rev() {
            let (position, size) = self.effective_geometry(window.id.clone(), bounds);
            let Some(rect) = screen_rect(position, size, area) else {
                continue;
            };
            if handles::rect_contains(rect, column, row) {
                return Some((window.id.clone(), rect, window.is_maximized));
            }
        }
        None
    }

    fn effective_geometry(&self, id: WindowId, bounds: ViewportBounds) -> (Position, Size) {
        let Some(window) = self.store.get_window(&id) else {
            return (Position::default(), Size::new(0, 0));
        };
        if window.is_maximized {
            return bounds.maximized_geometry();
        }
        let position = self.drag.live_position(&id).unwrap_or(window.position);
        (position, window.size)
    }

    /// Windows to draw this frame, bottom-most first so later entries
    /// paint over earlier ones.
    pub fn draw_plan(&self, area: Rect) -> Vec<WindowDrawTask> {
        let bounds = ViewportBounds::from_area(area);
        self.store
            .visible_windows()
            .into_iter()
            .filter_map(|window| {
                let (position, size) = self.effective_geometry(window.id.clone(), bounds);
                let surface = screen_rect(position, size, area)?;
                let outline = !window.is_maximized
                    && (self.resize.active_id() == Some(&window.id)
                        || self
                            .hover_handle
                            .as_ref()
                            .is_some_and(|(id, _)| id == &window.id));
                Some(WindowDrawTask {
                    id: window.id.clone(),
                    content: window.content,
                    surface,
                    inner: chrome::content_rect(surface),
                    title: window.title.clone(),
                    icon: window.icon,
                    focused: window.is_focused,
                    maximized: window.is_maximized,
                    outline,
                })
            })
            .collect()
    }

    pub fn close_focused(&mut self) {
        if let Some(id) = self.store.focused_id().cloned() {
            self.store.remove_window(&id);
        }
    }

    pub fn minimize_focused(&mut self) {
        if let Some(id) = self.store.focused_id().cloned() {
            self.store.minimize_window(&id);
        }
    }

    /// Cycle focus through the non-minimized windows in stacking order.
    pub fn cycle_focus(&mut self, forward: bool) {
        let order: Vec<WindowId> = self
            .store
            .visible_windows()
            .iter()
            .map(|w| w.id.clone())
            .collect();
        if order.len() < 2 {
            return;
        }
        let current = self
            .store
            .focused_id()
            .and_then(|id| order.iter().position(|o| o == id));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % order.len(),
            (Some(i), false) => (i + order.len() - 1) % order.len(),
            (None, true) => 0,
            (None, false) => order.len() - 1,
        };
        self.store.bring_to_front(&order[next]);
    }
}

/// Clip a signed window rect to the terminal area. Returns `None` when
/// nothing of the window is on screen.
fn screen_rect(position: Position, size: Size, area: Rect) -> Option<Rect> {
    if size.width <= 0 || size.height <= 0 {
        return None;
    }
    let left = position.x.max(area.x as i32);
    let top = position.y.max(area.y as i32);
    let right = (position.x + size.width).min((area.x + area.width) as i32);
    let bottom = (position.y + size.height).min((area.y + area.height) as i32);
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect {
        x: left as u16,
        y: top as u16,
        width: (right - left) as u16,
        height: (bottom - top) as u16,
    })
}
