use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::prelude::Rect;

use termfolio::apps::{AppKind, Apps};
use termfolio::component_context::ComponentContext;
use termfolio::config::DevicePreferences;
use termfolio::contact::OutboxSubmitter;
use termfolio::drivers::{ConsoleInputDriver, ConsoleOutputDriver, InputDriver, OutputDriver};
use termfolio::event_loop::{ControlFlow, EventLoop};
use termfolio::keybindings::{Action, KeyBindings};
use termfolio::shell::{Dock, MenuBar, notice, render_wallpaper};
use termfolio::state::AppState;
use termfolio::store::WindowId;
use termfolio::tracing_sub;
use termfolio::window::{MouseOutcome, WindowManager, chrome};

#[derive(Parser, Debug)]
#[command(name = "termfolio", about = "A desktop portfolio in your terminal.")]
struct Cli {
    /// Append debug logs to this file.
    #[arg(long)]
    log: Option<PathBuf>,

    /// Skip the small-viewport notice even on tiny terminals.
    #[arg(long)]
    desktop: bool,

    /// Frame tick in milliseconds.
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init(cli.log.as_deref())?;

    let prefs_path = DevicePreferences::default_path().ok();
    let mut preferences = match &prefs_path {
        Some(path) => DevicePreferences::load(path).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not load preferences, using defaults");
            DevicePreferences::default()
        }),
        None => DevicePreferences::default(),
    };
    if cli.desktop {
        preferences.prefer_desktop = true;
    }
    let mut state = AppState::new(preferences, prefs_path);

    let outbox_path = dirs::data_dir()
        .map(|base| base.join("termfolio").join("outbox.jsonl"))
        .unwrap_or_else(|| PathBuf::from("termfolio-outbox.jsonl"));
    let mut apps = Apps::new(Box::new(OutboxSubmitter::new(outbox_path)));

    let mut manager = WindowManager::new();
    manager.resize_mut().on_complete(|id, done| {
        tracing::debug!(
            window = %id,
            x = done.position.x,
            y = done.position.y,
            width = done.size.width,
            height = done.size.height,
            "resize committed"
        );
    });
    manager.store_mut().add_window(AppKind::Finder.window_config());

    let bindings = KeyBindings::default();
    let menu_bar = MenuBar::new();
    let mut dock = Dock::new();

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut input = ConsoleInputDriver::new();
    input.set_mouse_capture(true)?;

    let mut last_area = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    let result = EventLoop::new(input, Duration::from_millis(cli.tick_ms)).run(|_, event| {
        match event {
            None => {
                output.draw(|mut frame| {
                    let area = frame.area();
                    last_area = area;
                    if state.notice_active(area) {
                        notice::render(&mut frame, area);
                        return;
                    }
                    manager.begin_frame(area);
                    render_wallpaper(&mut frame, area);
                    for task in manager.draw_plan(area) {
                        chrome::render_window(
                            &mut frame,
                            task.surface,
                            &task.title,
                            task.icon,
                            task.focused,
                            task.maximized,
                        );
                        let ctx = ComponentContext::new(task.focused);
                        apps.component_mut(task.content)
                            .render(&mut frame, task.inner, &ctx);
                        if task.outline {
                            chrome::render_resize_outline(&mut frame, task.surface);
                        }
                    }
                    let focused_title = manager
                        .store()
                        .focused_id()
                        .and_then(|id| manager.store().get_window(id))
                        .map(|w| w.title.clone());
                    menu_bar.render(
                        &mut frame,
                        area,
                        focused_title.as_deref(),
                        manager.cursor_hint(),
                    );
                    dock.render(&mut frame, Dock::area(area), manager.store());
                })?;
            }
            Some(event) => {
                if handle_event(
                    &event, &mut state, &mut manager, &mut apps, &mut dock, &bindings, last_area,
                ) {
                    state.should_quit = true;
                }
            }
        }
        if state.should_quit {
            Ok(ControlFlow::Quit)
        } else {
            Ok(ControlFlow::Continue)
        }
    });

    output.exit()?;
    result
}

/// Route one input event. Returns `true` when the app should quit.
fn handle_event(
    event: &Event,
    state: &mut AppState,
    manager: &mut WindowManager,
    apps: &mut Apps,
    dock: &mut Dock,
    bindings: &KeyBindings,
    area: Rect,
) -> bool {
    if state.notice_active(area) {
        if let Event::Key(key) = event
            && key.kind != KeyEventKind::Release
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Char('c') => state.dismiss_notice(),
                _ => {}
            }
        }
        return false;
    }

    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            match bindings.action_for_key(key) {
                Some(Action::Quit) => return true,
                Some(Action::CloseWindow) => manager.close_focused(),
                Some(Action::MinimizeWindow) => manager.minimize_focused(),
                Some(Action::CycleNextWindow) => manager.cycle_focus(true),
                Some(Action::CyclePrevWindow) => manager.cycle_focus(false),
                None => forward_to_focused_app(event, manager, apps),
            }
        }
        Event::Mouse(mouse) => {
            let dock_area = Dock::area(area);
            if mouse.kind == MouseEventKind::Moved {
                dock.set_hover(Dock::hit_test(dock_area, mouse.column, mouse.row));
            }
            // Gestures keep the pointer even when it crosses the dock.
            let over_dock = !manager.gesture_active() && mouse.row >= dock_area.y;
            if over_dock {
                if mouse.kind == MouseEventKind::Down(crossterm::event::MouseButton::Left)
                    && let Some(termfolio::shell::DockAction::Launch(kind)) =
                        dock.handle_press(dock_area, mouse.column, mouse.row)
                {
                    manager.store_mut().add_window(kind.window_config());
                }
                return false;
            }
            match manager.handle_mouse(*mouse, area) {
                MouseOutcome::ContentClick { id, .. } => {
                    forward_to_app(event, &id, manager, apps);
                }
                MouseOutcome::Handled | MouseOutcome::Ignored => {}
            }
        }
        _ => {}
    }
    false
}

fn forward_to_focused_app(event: &Event, manager: &mut WindowManager, apps: &mut Apps) {
    if let Some(id) = manager.store().focused_id().cloned() {
        forward_to_app(event, &id, manager, apps);
    }
}

fn forward_to_app(event: &Event, id: &WindowId, manager: &mut WindowManager, apps: &mut Apps) {
    let Some(window) = manager.store().get_window(id) else {
        return;
    };
    let ctx = ComponentContext::new(window.is_focused);
    apps.component_mut(window.content).handle_event(event, &ctx);
}
