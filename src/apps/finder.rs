//! Finder: the about-me browser. A sidebar of sections on the left, the
//! selected section's content on the right.

use crossterm::event::{Event, KeyCode};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::components::{Component, ComponentContext};
use crate::theme;
use crate::ui::UiFrame;

const SIDEBAR_WIDTH: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    AboutMe,
    Projects,
    Downloads,
    Documents,
}

impl Section {
    const ALL: [Section; 4] = [
        Section::AboutMe,
        Section::Projects,
        Section::Downloads,
        Section::Documents,
    ];

    fn label(self) -> &'static str {
        match self {
            Section::AboutMe => "About Me",
            Section::Projects => "Projects",
            Section::Downloads => "Downloads",
            Section::Documents => "Documents",
        }
    }

    fn body(self) -> &'static [&'static str] {
        match self {
            Section::AboutMe => &[
                "Jordan Hale",
                "Systems engineer & automation tinkerer",
                "",
                "● Available for new projects",
                "",
                "Expertise",
                "  Building reliable backend services, automated",
                "  data workflows and the occasional terminal UI.",
                "",
                "Experience",
                "  A decade of shipping infrastructure tooling,",
                "  scrapers and dashboards on Linux.",
            ],
            Section::Projects => &[
                "Projects/",
                "",
                "  lead-pipeline/     workflow automation suite",
                "  tg-harvester/      telegram data extraction",
                "  portfolio/         this desktop",
                "  flow-dashboard/    pipeline visualization",
            ],
            Section::Downloads => &[
                "Downloads/",
                "",
                "  resume.pdf",
                "  talk-slides.pdf",
            ],
            Section::Documents => &[
                "Documents/",
                "",
                "  notes.md",
                "  ideas.md",
                "  reading-list.md",
            ],
        }
    }
}

pub struct FinderApp {
    selected: usize,
}

impl FinderApp {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    fn section(&self) -> Section {
        Section::ALL[self.selected]
    }
}

impl Default for FinderApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FinderApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width < 4 || area.height == 0 {
            return;
        }
        let sidebar_width = SIDEBAR_WIDTH.min(area.width / 3);
        let heading = Style::default()
            .fg(theme::muted_fg())
            .add_modifier(Modifier::BOLD);
        frame.set_string(area.x + 1, area.y, "FAVORITES", heading);
        for (i, section) in Section::ALL.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.y + area.height {
                break;
            }
            let style = if i == self.selected {
                Style::default()
                    .fg(if ctx.focused() {
                        theme::accent()
                    } else {
                        theme::title_unfocused_fg()
                    })
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::dock_fg())
            };
            let marker = if i == self.selected { "›" } else { " " };
            frame.set_string(area.x + 1, y, &format!("{marker} {}", section.label()), style);
        }
        for y in area.y..area.y + area.height {
            frame.set_cell(
                area.x + sidebar_width,
                y,
                "│",
                Style::default().fg(theme::border_unfocused()),
            );
        }

        let body_x = area.x + sidebar_width + 2;
        let body = Style::default().fg(theme::title_focused_fg());
        for (i, line) in self.section().body().iter().enumerate() {
            let y = area.y + i as u16;
            if y >= area.y + area.height {
                break;
            }
            frame.set_string(body_x, y, line, body);
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
                self.selected = (self.selected + 1).min(Section::ALL.len() - 1);
                true
            }
            _ => false,
        }
    }
}
