//! The portfolio applications hosted in windows.
//!
//! `AppKind` is the tag stored on each window; the `Apps` registry owns
//! one long-lived component per kind so app state (terminal scrollback,
//! a half-written mail) survives the window being closed and reopened.

use crate::components::Component;
use crate::contact::ContactSubmitter;
use crate::geometry::Size;
use crate::store::{WindowConfig, WindowId};

pub mod finder;
pub mod mail;
pub mod safari;
pub mod terminal;

pub use finder::FinderApp;
pub use mail::MailApp;
pub use safari::SafariApp;
pub use terminal::TerminalApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppKind {
    Finder,
    Safari,
    Terminal,
    Mail,
}

impl AppKind {
    pub const ALL: [AppKind; 4] = [
        AppKind::Finder,
        AppKind::Safari,
        AppKind::Terminal,
        AppKind::Mail,
    ];

    pub fn id(self) -> WindowId {
        WindowId::new(match self {
            AppKind::Finder => "finder",
            AppKind::Safari => "safari",
            AppKind::Terminal => "terminal",
            AppKind::Mail => "mail",
        })
    }

    pub fn title(self) -> &'static str {
        match self {
            AppKind::Finder => "Finder",
            AppKind::Safari => "Safari",
            AppKind::Terminal => "Terminal",
            AppKind::Mail => "Mail",
        }
    }

    pub fn icon(self) -> char {
        match self {
            AppKind::Finder => '▣',
            AppKind::Safari => '◎',
            AppKind::Terminal => '▮',
            AppKind::Mail => '✉',
        }
    }

    /// The store config used when this app is launched from the dock.
    pub fn window_config(self) -> WindowConfig {
        WindowConfig {
            id: self.id(),
            title: self.title().to_string(),
            icon: self.icon(),
            content: self,
            position: None,
            size: Some(self.preferred_size()),
            min_size: None,
        }
    }

    fn preferred_size(self) -> Size {
        match self {
            AppKind::Finder => Size::new(76, 22),
            AppKind::Safari => Size::new(80, 24),
            AppKind::Terminal => Size::new(72, 20),
            AppKind::Mail => Size::new(64, 20),
        }
    }
}

/// Owns the app components and dispatches by kind.
pub struct Apps {
    finder: FinderApp,
    safari: SafariApp,
    terminal: TerminalApp,
    mail: MailApp,
}

impl Apps {
    pub fn new(submitter: Box<dyn ContactSubmitter>) -> Self {
        Self {
            finder: FinderApp::new(),
            safari: SafariApp::new(),
            terminal: TerminalApp::new(),
            mail: MailApp::new(submitter),
        }
    }

    pub fn component_mut(&mut self, kind: AppKind) -> &mut dyn Component {
        match kind {
            AppKind::Finder => &mut self.finder,
            AppKind::Safari => &mut self.safari,
            AppKind::Terminal => &mut self.terminal,
            AppKind::Mail => &mut self.mail,
        }
    }
}
