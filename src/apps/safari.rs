//! Safari: the project gallery. Arrow keys walk the cards, Enter opens
//! the selected project in the real system browser.

use crossterm::event::{Event, KeyCode};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::components::{Component, ComponentContext};
use crate::theme;
use crate::ui::UiFrame;

#[derive(Debug, Clone, Copy)]
struct Project {
    title: &'static str,
    url: &'static str,
    description: &'static str,
    tags: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Lead Pipeline",
        url: "https://automation.jordanhale.dev",
        description: "Workflow system for finding and contacting leads.",
        tags: "n8n · Python · AI",
    },
    Project {
        title: "Telegram Harvester",
        url: "https://tg.jordanhale.dev",
        description: "Group data extraction with live keyword filters.",
        tags: "Python · Telethon",
    },
    Project {
        title: "Portfolio Desktop",
        url: "https://jordanhale.dev",
        description: "This desktop: draggable windows, dock and all.",
        tags: "Rust · ratatui",
    },
    Project {
        title: "Flow Dashboard",
        url: "https://analytics.jordanhale.dev",
        description: "Pipeline throughput and error-rate visualizations.",
        tags: "Next.js · D3",
    },
];

pub struct SafariApp {
    selected: usize,
    last_error: Option<String>,
}

impl SafariApp {
    pub fn new() -> Self {
        Self {
            selected: 0,
            last_error: None,
        }
    }

    fn open_selected(&mut self) {
        let url = PROJECTS[self.selected].url;
        match webbrowser::open(url) {
            Ok(()) => {
                tracing::info!(url, "opened project in browser");
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "failed to open browser");
                self.last_error = Some(format!("Could not open browser: {err}"));
            }
        }
    }
}

impl Default for SafariApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SafariApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width < 10 || area.height < 3 {
            return;
        }
        let selected = PROJECTS[self.selected];
        // Address bar mimicking the real thing.
        let bar = format!("⌂ 🔒 {}", selected.url);
        frame.set_string(
            area.x + 1,
            area.y,
            &bar,
            Style::default().fg(theme::muted_fg()),
        );

        let mut y = area.y + 2;
        for (i, project) in PROJECTS.iter().enumerate() {
            if y + 2 >= area.y + area.height {
                break;
            }
            let selected = i == self.selected;
            let title_style = if selected {
                Style::default()
                    .fg(if ctx.focused() {
                        theme::accent()
                    } else {
                        theme::title_unfocused_fg()
                    })
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::title_focused_fg())
            };
            let marker = if selected { "› " } else { "  " };
            frame.set_string(area.x + 1, y, &format!("{marker}{}", project.title), title_style);
            frame.set_string(
                area.x + 3,
                y + 1,
                project.description,
                Style::default().fg(theme::dock_fg()),
            );
            frame.set_string(
                area.x + 3,
                y + 2,
                project.tags,
                Style::default().fg(theme::muted_fg()),
            );
            y += 4;
        }

        let footer_y = area.y + area.height - 1;
        match &self.last_error {
            Some(error) => frame.set_string(
                area.x + 1,
                footer_y,
                error,
                Style::default().fg(theme::error_fg()),
            ),
            None => frame.set_string(
                area.x + 1,
                footer_y,
                "↑/↓ select · Enter open in browser",
                Style::default().fg(theme::muted_fg()),
            ),
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(PROJECTS.len() - 1);
                true
            }
            KeyCode::Enter => {
                self.open_selected();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn selection_stays_in_range() {
        let mut safari = SafariApp::new();
        let ctx = ComponentContext::default();
        safari.handle_event(&key(KeyCode::Up), &ctx);
        assert_eq!(safari.selected, 0);
        for _ in 0..10 {
            safari.handle_event(&key(KeyCode::Down), &ctx);
        }
        assert_eq!(safari.selected, PROJECTS.len() - 1);
    }

    #[test]
    fn unhandled_keys_fall_through() {
        let mut safari = SafariApp::new();
        assert!(!safari.handle_event(&key(KeyCode::Tab), &ComponentContext::default()));
    }
}
