//! Top-level application state that sits outside the window store:
//! quit flag, persisted preferences and the small-viewport notice.

use std::path::PathBuf;

use ratatui::layout::Rect;

use crate::config::DevicePreferences;
use crate::shell::notice;

pub struct AppState {
    pub should_quit: bool,
    preferences: DevicePreferences,
    prefs_path: Option<PathBuf>,
    notice_dismissed: bool,
}

impl AppState {
    pub fn new(preferences: DevicePreferences, prefs_path: Option<PathBuf>) -> Self {
        Self {
            should_quit: false,
            preferences,
            prefs_path,
            notice_dismissed: false,
        }
    }

    /// Whether to show the small-viewport notice instead of the desktop.
    pub fn notice_active(&self, area: Rect) -> bool {
        notice::viewport_too_small(area) && !self.preferences.prefer_desktop && !self.notice_dismissed
    }

    /// Dismiss the notice and remember the choice for future launches.
    /// A failed save is logged, not fatal.
    pub fn dismiss_notice(&mut self) {
        self.notice_dismissed = true;
        self.preferences.prefer_desktop = true;
        if let Some(path) = &self.prefs_path
            && let Err(err) = self.preferences.save(path)
        {
            tracing::warn!(error = %err, "could not persist preferences");
        }
    }
}
