//! Terminal: a small command interpreter over the portfolio data. Not a
//! shell; just enough commands to poke around.

use chrono::Local;
use crossterm::event::{Event, KeyCode};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::components::{Component, ComponentContext};
use crate::keybindings::{Action, KeyBindings};
use crate::theme;
use crate::ui::UiFrame;

const SCROLLBACK_LIMIT: usize = 500;

pub struct TerminalApp {
    prompt: String,
    lines: Vec<String>,
    input: String,
    bindings: KeyBindings,
}

impl TerminalApp {
    pub fn new() -> Self {
        let host = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "portfolio".to_string());
        let prompt = format!("{host}:~ guest$ ");
        let mut terminal = Self {
            prompt,
            lines: Vec::new(),
            input: String::new(),
            bindings: KeyBindings::default(),
        };
        terminal.push_line(format!(
            "Last login: {} on ttys000",
            Local::now().format("%a %b %e %H:%M:%S")
        ));
        terminal.push_line("Type 'help' for available commands.".to_string());
        terminal
    }

    fn push_line(&mut self, line: String) {
        self.lines.push(line);
        if self.lines.len() > SCROLLBACK_LIMIT {
            let excess = self.lines.len() - SCROLLBACK_LIMIT;
            self.lines.drain(..excess);
        }
    }

    fn push_block(&mut self, block: &str) {
        for line in block.lines() {
            self.push_line(line.to_string());
        }
    }

    fn run_command(&mut self, raw: &str) {
        let command = raw.trim();
        let echoed = format!("{}{raw}", self.prompt);
        self.push_line(echoed);
        match command {
            "" => {}
            "help" => self.push_block(indoc! {"
                Available commands:
                  help      this list
                  about     who I am
                  projects  what I have built
                  skills    the toolbox
                  contact   how to reach me
                  whoami    current user
                  date      current date and time
                  shortcuts desktop key bindings
                  clear     wipe the screen
            "}),
            "about" => self.push_block(indoc! {"
                Jordan Hale
                Systems engineer building backend services, data
                pipelines and terminal UIs. Available for new projects.
            "}),
            "projects" => self.push_block(indoc! {"
                lead-pipeline     workflow automation suite
                tg-harvester      telegram data extraction
                portfolio         this desktop
                flow-dashboard    pipeline visualization
            "}),
            "skills" => self.push_block(indoc! {"
                Fetching skills database...
                ----------------------------------------
                 > Automation:     n8n, custom scripts
                 > Scraping:       Python, headless browsers
                 > Backend:        Rust, Node.js, Python
                 > Frontend:       React, Next.js
                 > OS:             Linux, macOS
                ----------------------------------------
                Done in 0.42s.
            "}),
            "contact" => self.push_block(indoc! {"
                Open the Mail app from the dock, or write to
                hello@jordanhale.dev
            "}),
            "shortcuts" => {
                self.push_line("Desktop shortcuts:".to_string());
                for action in [
                    Action::Quit,
                    Action::CloseWindow,
                    Action::MinimizeWindow,
                    Action::CycleNextWindow,
                    Action::CyclePrevWindow,
                ] {
                    let combos = self.bindings.combos_for(action).join(", ");
                    self.push_line(format!("  {combos:<32} {action}"));
                }
            }
            "whoami" => self.push_line("guest".to_string()),
            "date" => {
                let now = Local::now().format("%a %b %e %H:%M:%S %Y").to_string();
                self.push_line(now);
            }
            "clear" => self.lines.clear(),
            other => {
                let name = other.split_whitespace().next().unwrap_or(other);
                self.push_line(format!("command not found: {name}"));
            }
        }
    }
}

impl Default for TerminalApp {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TerminalApp {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let text = Style::default().fg(theme::success_fg());
        // The prompt line takes the last row; scrollback fills the rest,
        // newest lines pinned to the bottom.
        let visible_rows = area.height.saturating_sub(1) as usize;
        let start = self.lines.len().saturating_sub(visible_rows);
        for (row, line) in self.lines[start..].iter().enumerate() {
            frame.set_string(area.x, area.y + row as u16, line, text);
        }
        let cursor = if ctx.focused() { "█" } else { "" };
        let prompt_line = format!("{}{}{cursor}", self.prompt, self.input);
        frame.set_string(area.x, area.y + area.height - 1, &prompt_line, text);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                true
            }
            KeyCode::Backspace => {
                self.input.pop();
                true
            }
            KeyCode::Enter => {
                let raw = std::mem::take(&mut self.input);
                self.run_command(&raw);
                true
            }
            _ => false,
        }
    }
}
